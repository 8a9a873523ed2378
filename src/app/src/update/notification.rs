use crux_core::{render::render, Command};

use crate::events::{Event, NotificationEvent};
use crate::model::Model;
use crate::types::Severity;
use crate::{Effect, TimerCmd};

/// How long a notification stays fully visible
pub const NOTIFICATION_VISIBLE_MS: u64 = 5000;
/// Duration of the fade-out before removal
pub const FADE_OUT_MS: u64 = 500;

/// Show a notification and schedule its fade-out.
///
/// Does not render on its own; callers render once after all state changes.
pub fn notify(
    model: &mut Model,
    message: impl Into<String>,
    severity: Severity,
) -> Command<Effect, Event> {
    let id = model.push_notification(message, severity);

    TimerCmd::after(NOTIFICATION_VISIBLE_MS)
        .build()
        .then_send(move |_| Event::Notification(NotificationEvent::Fade { id }))
}

/// Handle notification lifecycle events
pub fn handle(event: NotificationEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NotificationEvent::Fade { id } => {
            let Some(notification) = model.notifications.iter_mut().find(|n| n.id == id) else {
                return Command::done();
            };
            notification.fading = true;

            Command::all([
                render(),
                TimerCmd::after(FADE_OUT_MS)
                    .build()
                    .then_send(move |_| Event::Notification(NotificationEvent::Remove { id })),
            ])
        }

        NotificationEvent::Remove { id } => {
            let before = model.notifications.len();
            model.notifications.retain(|n| n.id != id);

            if model.notifications.len() == before {
                Command::done()
            } else {
                render()
            }
        }
    }
}
