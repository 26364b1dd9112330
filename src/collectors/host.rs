//! Handle to the host's system-management interface

/// Opened once per [`Collector`](super::Collector) and shared read-only by every probe.
///
/// On Windows this owns the WMI connection; elsewhere there is nothing to hold.
pub struct Host {
    #[cfg(windows)]
    pub(crate) wmi: Option<wmi::WMIConnection>,
}

impl Host {
    /// Connect to whatever management interface the platform offers.
    /// A failed connection only disables the probes that need it.
    pub fn connect() -> Self {
        #[cfg(windows)]
        {
            let wmi = wmi::COMLibrary::new()
                .and_then(wmi::WMIConnection::new)
                .map_err(|e| tracing::debug!(error = %e, "WMI unavailable"))
                .ok();
            Self { wmi }
        }
        #[cfg(not(windows))]
        {
            Self {}
        }
    }

    /// A handle with no management connection, so only generic probes answer
    pub fn detached() -> Self {
        Self {
            #[cfg(windows)]
            wmi: None,
        }
    }
}
