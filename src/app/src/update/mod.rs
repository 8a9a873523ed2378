mod attack;
mod backend;
mod notification;
mod scan;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub use attack::{
    spoofed_network, ALERT_DELAY_MS, ATTACK_AFTER_SCAN_DELAY_MS, ATTACK_ENDPOINT,
    PULSE_DURATION_MS,
};
pub use backend::BACKEND_UNREACHABLE_MESSAGE;
pub use notification::{FADE_OUT_MS, NOTIFICATION_VISIBLE_MS};
pub use scan::{
    PROGRESS_STEP, RESET_MESSAGE, SCAN_ENDPOINT, STARTUP_SCAN_DELAY_MS, TICK_INTERVAL_MS,
};

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => scan::schedule_startup_scan(),
        Event::Scan(scan_event) => scan::handle(scan_event, model),
        Event::Attack(attack_event) => attack::handle(attack_event, model),
        Event::Notification(notification_event) => {
            notification::handle(notification_event, model)
        }
    }
}
