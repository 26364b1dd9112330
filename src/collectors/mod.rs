//! Information collection. Every fact is looked up independently through
//! its own probe chain; a failed lookup leaves the "Unknown" sentinel.

pub mod hardware;
pub mod host;
pub mod network;
pub mod packages;
pub mod probe;
pub mod system;
#[cfg(windows)]
mod windows;

use crate::config::ShowInfo;
use crate::data::SystemFacts;
use host::Host;

pub struct Collector {
    host: Host,
}

impl Collector {
    /// Opens the management connection once; it is reused by every lookup.
    pub fn new() -> Self {
        Self {
            host: Host::connect(),
        }
    }

    /// Collector restricted to generic sources
    pub fn with_host(host: Host) -> Self {
        Self { host }
    }

    /// Gather every fact
    pub fn collect(&self) -> SystemFacts {
        self.collect_visible(&ShowInfo::all())
    }

    /// Gather only the facts `show` marks visible; hidden ones keep their
    /// placeholder, so slow lookups (packages) are skipped entirely.
    pub fn collect_visible(&self, show: &ShowInfo) -> SystemFacts {
        let host = &self.host;
        let mut facts = SystemFacts::default();

        if show.user {
            facts.user = system::get_username();
        }
        if show.hostname {
            facts.hostname = system::get_hostname(host);
        }
        if show.os {
            facts.os = system::get_os(host);
        }
        if show.kernel {
            facts.kernel = system::get_kernel(host);
        }
        if show.uptime {
            facts.uptime = system::get_uptime(host);
        }
        if show.packages {
            facts.packages = packages::get_packages(host);
        }
        if show.shell {
            facts.shell = system::get_shell();
        }
        if show.terminal {
            facts.terminal = system::get_terminal();
        }
        if show.cpu {
            facts.cpu = hardware::get_cpu(host);
        }
        if show.memory {
            facts.memory = hardware::get_memory(host);
        }
        if show.gpu {
            facts.gpu = hardware::get_gpus(host);
        }
        if show.disk {
            facts.disk = hardware::get_disk(host);
        }
        if show.network {
            facts.network = network::get_network(host);
        }

        facts
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::UNKNOWN;

    #[test]
    fn collection_always_completes_with_text_in_every_field() {
        let facts = Collector::with_host(Host::detached()).collect();
        for value in [
            &facts.user,
            &facts.hostname,
            &facts.os,
            &facts.kernel,
            &facts.uptime,
            &facts.packages,
            &facts.shell,
            &facts.terminal,
            &facts.cpu,
            &facts.memory,
            &facts.disk,
        ] {
            assert!(!value.is_empty());
        }
        assert!(!facts.gpu.is_empty());
        assert!(facts.network.len() <= network::MAX_INTERFACES);
    }

    #[test]
    fn hidden_facts_are_not_looked_up() {
        let show = ShowInfo {
            cpu: false,
            gpu: false,
            network: false,
            packages: false,
            ..ShowInfo::all()
        };
        let facts = Collector::with_host(Host::detached()).collect_visible(&show);
        assert_eq!(facts.cpu, UNKNOWN);
        assert_eq!(facts.packages, UNKNOWN);
        assert_eq!(facts.gpu, vec![UNKNOWN.to_string()]);
        assert!(facts.network.is_empty());
    }
}
