use crux_core::{render::render, Command};
use log::{debug, info};

use crate::events::{AttackEvent, Event, ScanEvent};
use crate::model::Model;
use crate::types::{ScanState, Severity};
use crate::{Effect, TimerCmd};

use super::attack::ATTACK_AFTER_SCAN_DELAY_MS;
use super::backend::{fetch_networks, networks_or_fallback};
use super::notification::notify;

pub const SCAN_ENDPOINT: &str = "/api/scan";

/// Progress added per tick; 20 ticks from 0 to 100
pub const PROGRESS_STEP: u8 = 5;
pub const TICK_INTERVAL_MS: u64 = 100;
/// Delay before the automatic scan after startup
pub const STARTUP_SCAN_DELAY_MS: u64 = 1500;

pub const RESET_MESSAGE: &str = "Results cleared. Ready to scan again.";

/// Handle scan controller events
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::Start => start_scan(model),
        ScanEvent::Reset => reset(model),
        ScanEvent::Tick { epoch } => handle_tick(epoch, model),
        ScanEvent::Response { epoch, result } => {
            if !model.is_current(epoch) {
                debug!("dropping scan response from cancelled epoch {epoch}");
                return Command::done();
            }

            let (networks, fallback_cmd) = networks_or_fallback(SCAN_ENDPOINT, result, model);
            complete_scan(networks, fallback_cmd, model)
        }
    }
}

pub fn schedule_startup_scan() -> Command<Effect, Event> {
    TimerCmd::after(STARTUP_SCAN_DELAY_MS)
        .build()
        .then_send(|_| Event::Scan(ScanEvent::Start))
}

/// Begin the progress animation. Has no effect while a scan is running.
pub fn start_scan(model: &mut Model) -> Command<Effect, Event> {
    if model.scan_state.is_scanning() {
        debug!("scan already in progress, ignoring");
        return Command::done();
    }

    info!("starting scan");
    model.scan_state = ScanState::Scanning;
    model.progress = 0;

    Command::all([render(), schedule_tick(model.epoch)])
}

fn schedule_tick(epoch: u64) -> Command<Effect, Event> {
    TimerCmd::after(TICK_INTERVAL_MS)
        .build()
        .then_send(move |_| Event::Scan(ScanEvent::Tick { epoch }))
}

fn handle_tick(epoch: u64, model: &mut Model) -> Command<Effect, Event> {
    if !model.is_current(epoch) || !model.scan_state.is_scanning() {
        return Command::done();
    }

    model.progress = model.progress.saturating_add(PROGRESS_STEP).min(100);

    if model.progress < 100 {
        return Command::all([render(), schedule_tick(epoch)]);
    }

    // the fetch is only issued once the animation has finished
    Command::all([
        render(),
        fetch_networks(SCAN_ENDPOINT, move |result| {
            Event::Scan(ScanEvent::Response { epoch, result })
        }),
    ])
}

fn complete_scan(
    networks: Vec<crate::types::Network>,
    fallback_cmd: Command<Effect, Event>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.networks = networks;
    model.scan_state = ScanState::Idle;

    let count = model.networks.len();
    info!("scan completed with {count} networks");
    let notify_cmd = notify(
        model,
        format!("Network scan completed. Found {count} networks."),
        Severity::Success,
    );

    let attack_cmd = if model.attack_queued {
        model.attack_queued = false;
        let epoch = model.epoch;
        TimerCmd::after(ATTACK_AFTER_SCAN_DELAY_MS)
            .build()
            .then_send(move |_| Event::Attack(AttackEvent::Begin { epoch }))
    } else {
        Command::done()
    };

    Command::all([render(), fallback_cmd, notify_cmd, attack_cmd])
}

/// Clear all results and cancel every running scan or attack sequence
pub fn reset(model: &mut Model) -> Command<Effect, Event> {
    info!("resetting results");
    model.cancel_all();

    let notify_cmd = notify(model, RESET_MESSAGE, Severity::Success);
    Command::all([render(), notify_cmd])
}
