use super::*;
use crate::events::{AttackEvent, NotificationEvent, ScanEvent};
use crate::update::*;
use crate::view::{view, EMPTY_LIST_MESSAGE};
use crux_http::protocol::HttpResponse;

fn run(event: Event, model: &mut Model) -> Vec<Effect> {
    let mut command = update::update(event, model);
    command.effects().collect()
}

fn timer_millis(effects: &[Effect]) -> Vec<u64> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Timer(request) => match request.operation {
                TimerOperation::After { millis } => Some(millis),
            },
            _ => None,
        })
        .collect()
}

fn http_urls(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request.operation.url.clone()),
            _ => None,
        })
        .collect()
}

fn renders(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| matches!(effect, Effect::Render(_)))
        .count()
}

/// Drive a started scan through all progress ticks up to the fetch
fn run_ticks(model: &mut Model) -> Vec<Effect> {
    let epoch = model.epoch;
    let mut last = Vec::new();
    for _ in 0..(100 / PROGRESS_STEP) {
        last = run(Event::Scan(ScanEvent::Tick { epoch }), model);
    }
    last
}

fn warning_network() -> Network {
    Network {
        ssid: "X".to_string(),
        mac: "00:00:00:00:00:00".to_string(),
        signal: 50,
        security: "Open".to_string(),
        vendor: "Acme".to_string(),
        status: NetworkStatus::Warning,
        channel: 3,
        reason: Some("dup SSID".to_string()),
    }
}

fn evil_twin() -> Network {
    Network {
        ssid: "Airport_Guest".to_string(),
        mac: "00:0C:42:1F:AB:39".to_string(),
        signal: 95,
        security: "Open".to_string(),
        vendor: "Unknown".to_string(),
        status: NetworkStatus::Danger,
        channel: 11,
        reason: Some("Duplicate SSID with different MAC".to_string()),
    }
}

fn count_severity(model: &Model, severity: Severity) -> usize {
    model
        .notifications
        .iter()
        .filter(|n| n.severity == severity)
        .count()
}

#[test]
fn test_initialize_schedules_startup_scan() {
    let mut model = Model::default();

    let effects = run(Event::Initialize, &mut model);

    assert_eq!(timer_millis(&effects), vec![STARTUP_SCAN_DELAY_MS]);
    assert_eq!(model.scan_state, ScanState::Idle);
}

#[test]
fn test_start_scan_schedules_first_tick() {
    let mut model = Model {
        progress: 100,
        ..Default::default()
    };

    let effects = run(Event::Scan(ScanEvent::Start), &mut model);

    assert_eq!(model.scan_state, ScanState::Scanning);
    assert_eq!(model.progress, 0);
    assert_eq!(renders(&effects), 1);
    assert_eq!(timer_millis(&effects), vec![TICK_INTERVAL_MS]);
    assert!(http_urls(&effects).is_empty());
}

#[test]
fn test_start_scan_while_scanning_has_no_effect() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);
    run(Event::Scan(ScanEvent::Tick { epoch: 0 }), &mut model);
    let before = model.clone();

    let effects = run(Event::Scan(ScanEvent::Start), &mut model);

    assert!(effects.is_empty());
    assert_eq!(model, before);
}

#[test]
fn test_progress_takes_twenty_ticks_before_fetch() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);

    for tick in 1..20u8 {
        let effects = run(Event::Scan(ScanEvent::Tick { epoch: 0 }), &mut model);
        assert_eq!(model.progress, tick * PROGRESS_STEP);
        assert_eq!(timer_millis(&effects), vec![TICK_INTERVAL_MS]);
        assert!(http_urls(&effects).is_empty());
    }

    let effects = run(Event::Scan(ScanEvent::Tick { epoch: 0 }), &mut model);

    assert_eq!(model.progress, 100);
    assert!(timer_millis(&effects).is_empty());
    assert_eq!(http_urls(&effects), vec![build_url(SCAN_ENDPOINT)]);
    assert!(model.scan_state.is_scanning());
}

#[test]
fn test_scan_end_to_end_renders_suspicious_card() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);
    run_ticks(&mut model);

    let effects = run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Ok(vec![warning_network()]),
        }),
        &mut model,
    );

    assert_eq!(model.scan_state, ScanState::Idle);
    assert!(renders(&effects) >= 1);
    assert_eq!(timer_millis(&effects), vec![NOTIFICATION_VISIBLE_MS]);

    let vm = view(&model);
    let NetworkList::Cards(cards) = &vm.network_list else {
        panic!("expected cards, got {:?}", vm.network_list);
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].signal_bars.iter().filter(|b| b.lit).count(), 3);
    assert_eq!(cards[0].badge.label, "SUSPICIOUS");
    assert_eq!(cards[0].reason.as_deref(), Some("dup SSID"));
    assert_eq!(
        vm.counters,
        Counters {
            total: 1,
            safe: 0,
            suspicious: 1,
            dangerous: 0,
        }
    );
    assert!(vm.scan_button.enabled);
    assert_eq!(vm.notifications.len(), 1);
    assert_eq!(
        vm.notifications[0].message,
        "Network scan completed. Found 1 networks."
    );
    assert_eq!(vm.notifications[0].severity, Severity::Success);
}

#[test]
fn test_backend_failure_substitutes_fallback() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);
    run_ticks(&mut model);

    run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Err("/api/scan failed: HTTP 500".to_string()),
        }),
        &mut model,
    );

    assert_eq!(model.networks, fallback_networks());
    assert_eq!(
        model
            .networks
            .iter()
            .map(|n| n.ssid.as_str())
            .collect::<Vec<_>>(),
        vec!["CafeFreeWiFi", "Airport_Guest", "Library_Public"]
    );
    assert_eq!(count_severity(&model, Severity::Danger), 1);
    assert!(model
        .notifications
        .iter()
        .any(|n| n.message == BACKEND_UNREACHABLE_MESSAGE));
    assert_eq!(model.scan_state, ScanState::Idle);
}

#[test]
fn test_reset_clears_everything() {
    let mut model = Model {
        networks: vec![warning_network(), evil_twin()],
        progress: 100,
        danger_pulse: Some(1),
        last_pulse: 1,
        ..Default::default()
    };

    let effects = run(Event::Scan(ScanEvent::Reset), &mut model);

    assert!(model.networks.is_empty());
    assert_eq!(model.progress, 0);
    assert_eq!(model.danger_pulse, None);
    assert_eq!(renders(&effects), 1);
    assert_eq!(model.notifications.len(), 1);
    assert_eq!(model.notifications[0].message, RESET_MESSAGE);
    assert_eq!(model.notifications[0].severity, Severity::Success);

    let vm = view(&model);
    assert_eq!(
        vm.network_list,
        NetworkList::Empty {
            message: EMPTY_LIST_MESSAGE.to_string()
        }
    );
    assert_eq!(vm.counters, Counters::default());
    assert_eq!(vm.progress_percent, 0);
}

#[test]
fn test_reset_cancels_running_scan() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);
    run(Event::Scan(ScanEvent::Tick { epoch: 0 }), &mut model);

    run(Event::Scan(ScanEvent::Reset), &mut model);

    assert_eq!(model.scan_state, ScanState::Idle);
    assert!(view(&model).scan_button.enabled);

    // timers of the cancelled scan still fire but change nothing
    let effects = run(Event::Scan(ScanEvent::Tick { epoch: 0 }), &mut model);
    assert!(effects.is_empty());
    assert_eq!(model.progress, 0);

    let effects = run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Ok(vec![warning_network()]),
        }),
        &mut model,
    );
    assert!(effects.is_empty());
    assert!(model.networks.is_empty());
    assert_eq!(model.notifications.len(), 1);
}

#[test]
fn test_scan_after_reset_uses_new_epoch() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Reset), &mut model);

    run(Event::Scan(ScanEvent::Start), &mut model);
    let effects = run_ticks(&mut model);

    assert_eq!(model.epoch, 1);
    assert_eq!(http_urls(&effects), vec![build_url(SCAN_ENDPOINT)]);
}

#[test]
fn test_attack_without_networks_runs_scan_first() {
    let mut model = Model::default();

    let effects = run(Event::Attack(AttackEvent::Simulate), &mut model);

    assert!(model.attack_queued);
    assert!(model.scan_state.is_scanning());
    assert_eq!(timer_millis(&effects), vec![TICK_INTERVAL_MS]);
    assert!(http_urls(&effects).is_empty());

    let effects = run_ticks(&mut model);
    assert_eq!(http_urls(&effects), vec![build_url(SCAN_ENDPOINT)]);

    let effects = run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Ok(fallback_networks()),
        }),
        &mut model,
    );
    assert!(!model.attack_queued);
    let timers = timer_millis(&effects);
    assert!(timers.contains(&ATTACK_AFTER_SCAN_DELAY_MS));

    let effects = run(Event::Attack(AttackEvent::Begin { epoch: 0 }), &mut model);
    assert_eq!(http_urls(&effects), vec![build_url(ATTACK_ENDPOINT)]);
}

#[test]
fn test_attack_with_networks_fetches_immediately() {
    let mut model = Model {
        networks: fallback_networks(),
        ..Default::default()
    };

    let effects = run(Event::Attack(AttackEvent::Simulate), &mut model);

    assert!(!model.attack_queued);
    assert!(!model.scan_state.is_scanning());
    assert_eq!(http_urls(&effects), vec![build_url(ATTACK_ENDPOINT)]);
}

#[test]
fn test_attack_during_scan_is_queued() {
    let mut model = Model {
        networks: fallback_networks(),
        ..Default::default()
    };
    run(Event::Scan(ScanEvent::Start), &mut model);

    let effects = run(Event::Attack(AttackEvent::Simulate), &mut model);

    assert!(effects.is_empty());
    assert!(model.attack_queued);
}

#[test]
fn test_attack_response_alerts_and_pulses() {
    let mut model = Model {
        networks: fallback_networks(),
        ..Default::default()
    };
    let mut attack_data = fallback_networks();
    attack_data.push(warning_network());
    attack_data.push(evil_twin());

    let effects = run(
        Event::Attack(AttackEvent::Response {
            epoch: 0,
            result: Ok(attack_data.clone()),
        }),
        &mut model,
    );
    assert_eq!(model.networks, attack_data);
    assert_eq!(timer_millis(&effects), vec![ALERT_DELAY_MS]);
    assert!(model.notifications.is_empty());

    let effects = run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);

    let timers = timer_millis(&effects);
    assert!(timers.contains(&PULSE_DURATION_MS));
    assert!(timers.contains(&NOTIFICATION_VISIBLE_MS));
    assert_eq!(model.notifications.len(), 1);
    assert_eq!(model.notifications[0].severity, Severity::Danger);
    assert_eq!(
        model.notifications[0].message,
        "Evil Twin detected! Network \"Airport_Guest\" appears to be spoofed."
    );

    let vm = view(&model);
    assert!(vm.danger_pulse);
    assert_eq!(vm.counters.dangerous, 1);
    assert_eq!(vm.counters.suspicious, 1);

    let pulse = model.danger_pulse.expect("pulse should be active");
    run(Event::Attack(AttackEvent::PulseEnded { pulse }), &mut model);
    assert!(!view(&model).danger_pulse);
}

#[test]
fn test_stale_pulse_end_keeps_newer_pulse() {
    let mut model = Model {
        networks: vec![evil_twin()],
        ..Default::default()
    };
    run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);
    let first = model.danger_pulse.expect("first pulse");
    run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);

    let effects = run(
        Event::Attack(AttackEvent::PulseEnded { pulse: first }),
        &mut model,
    );

    assert!(effects.is_empty());
    assert!(model.danger_pulse.is_some());
}

#[test]
fn test_alert_without_evil_twin_is_silent() {
    let mut model = Model {
        networks: fallback_networks(),
        ..Default::default()
    };

    let effects = run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);

    assert!(effects.is_empty());
    assert!(model.notifications.is_empty());
    assert_eq!(model.danger_pulse, None);
}

#[test]
fn test_attack_failure_uses_fallback_without_alert() {
    let mut model = Model {
        networks: vec![warning_network()],
        ..Default::default()
    };

    run(
        Event::Attack(AttackEvent::Response {
            epoch: 0,
            result: Err("connection refused".to_string()),
        }),
        &mut model,
    );
    run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);

    assert_eq!(model.networks, fallback_networks());
    assert_eq!(count_severity(&model, Severity::Danger), 1);
    assert_eq!(model.notifications[0].message, BACKEND_UNREACHABLE_MESSAGE);
    assert_eq!(model.danger_pulse, None);
}

#[test]
fn test_reset_cancels_pending_alert() {
    let mut model = Model::default();
    run(
        Event::Attack(AttackEvent::Response {
            epoch: 0,
            result: Ok(vec![evil_twin()]),
        }),
        &mut model,
    );

    run(Event::Scan(ScanEvent::Reset), &mut model);
    let effects = run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);

    assert!(effects.is_empty());
    assert_eq!(model.danger_pulse, None);
    assert_eq!(count_severity(&model, Severity::Danger), 0);
}

#[test]
fn test_notification_fades_then_disappears() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Reset), &mut model);
    let id = model.notifications[0].id;

    let effects = run(
        Event::Notification(NotificationEvent::Fade { id }),
        &mut model,
    );
    assert!(model.notifications[0].fading);
    assert!(view(&model).notifications[0].fading);
    assert_eq!(timer_millis(&effects), vec![FADE_OUT_MS]);

    run(
        Event::Notification(NotificationEvent::Remove { id }),
        &mut model,
    );
    assert!(model.notifications.is_empty());
}

#[test]
fn test_unknown_notification_is_ignored() {
    let mut model = Model::default();

    let effects = run(
        Event::Notification(NotificationEvent::Fade { id: 42 }),
        &mut model,
    );
    assert!(effects.is_empty());

    let effects = run(
        Event::Notification(NotificationEvent::Remove { id: 42 }),
        &mut model,
    );
    assert!(effects.is_empty());
}

#[test]
fn test_notifications_are_not_deduplicated() {
    let mut model = Model::default();

    run(Event::Scan(ScanEvent::Reset), &mut model);
    run(Event::Scan(ScanEvent::Reset), &mut model);

    assert_eq!(model.notifications.len(), 2);
    assert_ne!(model.notifications[0].id, model.notifications[1].id);
    assert_eq!(model.notifications[0].message, model.notifications[1].message);
}

#[test]
fn test_spoofed_network_picks_first_danger_entry() {
    let mut second = evil_twin();
    second.ssid = "CafeFreeWiFi".to_string();
    let networks = vec![warning_network(), evil_twin(), second];

    assert_eq!(
        spoofed_network(&networks).map(|n| n.ssid.as_str()),
        Some("Airport_Guest")
    );
    assert!(spoofed_network(&fallback_networks()).is_none());
}

/// Run the 20th progress tick and answer its scan request with `response`
fn resolve_scan_fetch(model: &mut Model, response: HttpResponse) -> Vec<Event> {
    let epoch = model.epoch;
    for _ in 1..(100 / PROGRESS_STEP) {
        run(Event::Scan(ScanEvent::Tick { epoch }), model);
    }

    let mut command = update::update(Event::Scan(ScanEvent::Tick { epoch }), model);
    let mut request = command
        .effects()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("last tick should fetch networks");
    assert_eq!(request.operation.url, build_url(SCAN_ENDPOINT));

    request
        .resolve(crux_http::protocol::HttpResult::Ok(response))
        .expect("failed to resolve http request");
    command.events().collect()
}

fn scan_error(events: &[Event]) -> String {
    match events {
        [Event::Scan(ScanEvent::Response {
            result: Err(message),
            ..
        })] => message.clone(),
        other => panic!("expected one failed scan response, got {other:?}"),
    }
}

#[test]
fn test_server_error_status_falls_back() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);

    let events = resolve_scan_fetch(&mut model, HttpResponse::status(500).build());
    assert!(scan_error(&events).starts_with(SCAN_ENDPOINT));

    for event in events {
        run(event, &mut model);
    }

    assert_eq!(model.networks, fallback_networks());
    assert_eq!(count_severity(&model, Severity::Danger), 1);
    assert_eq!(model.scan_state, ScanState::Idle);
}

#[test]
fn test_malformed_body_falls_back() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);

    let events = resolve_scan_fetch(&mut model, HttpResponse::ok().body("not json").build());
    assert!(scan_error(&events).contains("JSON parse error"));

    for event in events {
        run(event, &mut model);
    }

    assert_eq!(model.networks, fallback_networks());
    assert_eq!(count_severity(&model, Severity::Danger), 1);
}

#[test]
fn test_valid_body_is_decoded() {
    let mut model = Model::default();
    run(Event::Scan(ScanEvent::Start), &mut model);
    let body = serde_json::to_vec(&vec![warning_network()]).expect("serializable networks");

    let events = resolve_scan_fetch(&mut model, HttpResponse::ok().body(body).build());
    for event in events {
        run(event, &mut model);
    }

    assert_eq!(model.networks, vec![warning_network()]);
    assert_eq!(count_severity(&model, Severity::Danger), 0);
}

#[test]
fn test_scan_clicked_before_queued_attack_keeps_attack_results() {
    let mut model = Model::default();
    run(Event::Attack(AttackEvent::Simulate), &mut model);
    run_ticks(&mut model);
    run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Ok(fallback_networks()),
        }),
        &mut model,
    );

    // user starts another scan while the queued attack is still waiting
    run(Event::Scan(ScanEvent::Start), &mut model);
    let effects = run(Event::Attack(AttackEvent::Begin { epoch: 0 }), &mut model);
    assert!(http_urls(&effects).is_empty());
    assert!(model.attack_queued);

    let effects = run_ticks(&mut model);
    assert_eq!(http_urls(&effects), vec![build_url(SCAN_ENDPOINT)]);
    let effects = run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Ok(fallback_networks()),
        }),
        &mut model,
    );
    assert!(timer_millis(&effects).contains(&ATTACK_AFTER_SCAN_DELAY_MS));

    let effects = run(Event::Attack(AttackEvent::Begin { epoch: 0 }), &mut model);
    assert_eq!(http_urls(&effects), vec![build_url(ATTACK_ENDPOINT)]);
    run(
        Event::Attack(AttackEvent::Response {
            epoch: 0,
            result: Ok(vec![evil_twin()]),
        }),
        &mut model,
    );
    run(Event::Attack(AttackEvent::Alert { epoch: 0 }), &mut model);

    let vm = view(&model);
    assert_eq!(vm.counters.dangerous, 1);
    assert!(vm.danger_pulse);
}

#[test]
fn test_attack_response_during_scan_is_requested_again() {
    let mut model = Model {
        networks: fallback_networks(),
        ..Default::default()
    };
    let effects = run(Event::Attack(AttackEvent::Simulate), &mut model);
    assert_eq!(http_urls(&effects), vec![build_url(ATTACK_ENDPOINT)]);

    run(Event::Scan(ScanEvent::Start), &mut model);
    let effects = run(
        Event::Attack(AttackEvent::Response {
            epoch: 0,
            result: Ok(vec![evil_twin()]),
        }),
        &mut model,
    );

    assert!(effects.is_empty());
    assert!(model.attack_queued);
    assert_eq!(model.networks, fallback_networks());

    run_ticks(&mut model);
    let effects = run(
        Event::Scan(ScanEvent::Response {
            epoch: 0,
            result: Ok(fallback_networks()),
        }),
        &mut model,
    );
    assert!(timer_millis(&effects).contains(&ATTACK_AFTER_SCAN_DELAY_MS));
    assert!(!model.attack_queued);
}
