use crux_core::Command;
use log::error;

use crate::events::Event;
use crate::model::Model;
use crate::types::{fallback_networks, Network, Severity};
use crate::{build_url, process_json_response, Effect, HttpCmd};

use super::notification::notify;

pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Error connecting to the backend server. Using simulated data.";

/// Issue a single GET against `endpoint` and hand the decoded list to `to_event`.
///
/// Transport errors, non-2xx statuses and malformed bodies all arrive as `Err`.
pub fn fetch_networks<F>(endpoint: &'static str, to_event: F) -> Command<Effect, Event>
where
    F: FnOnce(Result<Vec<Network>, String>) -> Event + Send + 'static,
{
    HttpCmd::get(build_url(endpoint))
        .build()
        .then_send(move |result| to_event(process_json_response(endpoint, result)))
}

/// Resolve a fetch result into a network list.
///
/// Failures never propagate: the error is logged, one danger notification is
/// queued and the static fallback list is returned instead.
pub fn networks_or_fallback(
    endpoint: &str,
    result: Result<Vec<Network>, String>,
    model: &mut Model,
) -> (Vec<Network>, Command<Effect, Event>) {
    match result {
        Ok(networks) => (networks, Command::done()),
        Err(e) => {
            error!("fetching networks from {endpoint} failed: {e}");
            let cmd = notify(model, BACKEND_UNREACHABLE_MESSAGE, Severity::Danger);
            (fallback_networks(), cmd)
        }
    }
}
