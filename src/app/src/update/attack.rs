use crux_core::{render::render, Command};
use log::{debug, info, warn};

use crate::events::{AttackEvent, Event};
use crate::model::Model;
use crate::types::{Network, NetworkStatus, Severity};
use crate::{Effect, TimerCmd};

use super::backend::{fetch_networks, networks_or_fallback};
use super::notification::notify;
use super::scan::start_scan;

pub const ATTACK_ENDPOINT: &str = "/api/simulate_attack";

/// Delay between a completed scan and a queued attack request
pub const ATTACK_AFTER_SCAN_DELAY_MS: u64 = 1200;
/// Delay between the attack results and the evil twin alert
pub const ALERT_DELAY_MS: u64 = 1000;
/// How long the "dangerous" counter pulses
pub const PULSE_DURATION_MS: u64 = 6000;

/// Handle evil twin simulation events
pub fn handle(event: AttackEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AttackEvent::Simulate => simulate_attack(model),

        AttackEvent::Begin { epoch } => {
            if !model.is_current(epoch) {
                return Command::done();
            }
            if model.scan_state.is_scanning() {
                return queue_behind_scan(model);
            }
            request_attack(model)
        }

        AttackEvent::Response { epoch, result } => {
            if !model.is_current(epoch) {
                debug!("dropping attack response from cancelled epoch {epoch}");
                return Command::done();
            }
            // the running scan would overwrite these results, ask again afterwards
            if model.scan_state.is_scanning() {
                return queue_behind_scan(model);
            }

            let (networks, fallback_cmd) = networks_or_fallback(ATTACK_ENDPOINT, result, model);
            model.networks = networks;

            Command::all([
                render(),
                fallback_cmd,
                TimerCmd::after(ALERT_DELAY_MS)
                    .build()
                    .then_send(move |_| Event::Attack(AttackEvent::Alert { epoch })),
            ])
        }

        AttackEvent::Alert { epoch } => {
            if !model.is_current(epoch) {
                return Command::done();
            }
            raise_alert(model)
        }

        AttackEvent::PulseEnded { pulse } => {
            if model.danger_pulse != Some(pulse) {
                return Command::done();
            }
            model.danger_pulse = None;
            render()
        }
    }
}

fn simulate_attack(model: &mut Model) -> Command<Effect, Event> {
    if model.networks.is_empty() || model.scan_state.is_scanning() {
        let queue_cmd = queue_behind_scan(model);
        return Command::all([queue_cmd, start_scan(model)]);
    }

    request_attack(model)
}

fn queue_behind_scan(model: &mut Model) -> Command<Effect, Event> {
    info!("attack simulation queued behind a scan");
    model.attack_queued = true;
    Command::done()
}

fn request_attack(model: &Model) -> Command<Effect, Event> {
    info!("requesting attack simulation");
    let epoch = model.epoch;
    fetch_networks(ATTACK_ENDPOINT, move |result| {
        Event::Attack(AttackEvent::Response { epoch, result })
    })
}

fn raise_alert(model: &mut Model) -> Command<Effect, Event> {
    let Some(ssid) = spoofed_network(&model.networks).map(|n| n.ssid.clone()) else {
        warn!("attack results contain no evil twin");
        return Command::done();
    };

    let notify_cmd = notify(
        model,
        format!("Evil Twin detected! Network \"{ssid}\" appears to be spoofed."),
        Severity::Danger,
    );

    let pulse = model.start_pulse();

    Command::all([
        render(),
        notify_cmd,
        TimerCmd::after(PULSE_DURATION_MS)
            .build()
            .then_send(move |_| Event::Attack(AttackEvent::PulseEnded { pulse })),
    ])
}

/// The network named in the evil twin alert: the first entry marked as danger
pub fn spoofed_network(networks: &[Network]) -> Option<&Network> {
    networks.iter().find(|n| n.status == NetworkStatus::Danger)
}
