//! Used/total capacity readings (memory, disk)

use crate::utils::parsing::bytes_to_gib;
use std::fmt;

/// A used/total pair in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl Usage {
    pub fn new(used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            used_bytes: used_bytes.min(total_bytes),
            total_bytes,
        }
    }

    pub fn percent(&self) -> f64 {
        if self.total_bytes == 0 {
            0.0
        } else {
            self.used_bytes as f64 / self.total_bytes as f64 * 100.0
        }
    }
}

/// Renders as `{used:.1}GB / {total:.1}GB ({pct:.1}%)` in gibibytes
impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}GB / {:.1}GB ({:.1}%)",
            bytes_to_gib(self.used_bytes),
            bytes_to_gib(self.total_bytes),
            self.percent()
        )
    }
}
