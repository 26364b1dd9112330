//! Collected host facts

/// Placeholder for any fact that could not be determined
pub const UNKNOWN: &str = "Unknown";

/// Everything winfetch knows about the host, gathered once per run.
///
/// Every field is best-effort: a lookup that fails leaves [`UNKNOWN`]
/// (or `["Unknown"]` for the GPU list) rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemFacts {
    pub user: String,
    pub hostname: String,
    pub os: String,
    pub kernel: String,
    pub uptime: String,
    pub packages: String,
    pub shell: String,
    pub terminal: String,
    pub cpu: String,
    pub memory: String,
    pub gpu: Vec<String>,
    pub disk: String,
    /// `"<interface>: <address>"` entries, at most three
    pub network: Vec<String>,
}

impl Default for SystemFacts {
    fn default() -> Self {
        Self {
            user: UNKNOWN.to_string(),
            hostname: UNKNOWN.to_string(),
            os: UNKNOWN.to_string(),
            kernel: UNKNOWN.to_string(),
            uptime: UNKNOWN.to_string(),
            packages: UNKNOWN.to_string(),
            shell: UNKNOWN.to_string(),
            terminal: UNKNOWN.to_string(),
            cpu: UNKNOWN.to_string(),
            memory: UNKNOWN.to_string(),
            gpu: vec![UNKNOWN.to_string()],
            disk: UNKNOWN.to_string(),
            network: Vec::new(),
        }
    }
}
