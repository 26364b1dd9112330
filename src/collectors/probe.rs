//! Ordered fallback chains for a single fact

use super::host::Host;
use tracing::debug;

/// One source for a fact. Returns `None` when the source is unavailable
/// or produced nothing usable.
pub struct Probe<T> {
    pub name: &'static str,
    pub run: fn(&Host) -> Option<T>,
}

impl<T> Probe<T> {
    pub const fn new(name: &'static str, run: fn(&Host) -> Option<T>) -> Self {
        Self { name, run }
    }
}

/// Run probes in order; the first `Some` wins.
pub fn first_success<T>(fact: &str, host: &Host, probes: &[Probe<T>]) -> Option<T> {
    for probe in probes {
        match (probe.run)(host) {
            Some(value) => {
                debug!(fact, probe = probe.name, "probe answered");
                return Some(value);
            }
            None => debug!(fact, probe = probe.name, "probe missed"),
        }
    }
    debug!(fact, "no probe answered");
    None
}
