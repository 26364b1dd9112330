//! String parsing utilities

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Value of a `KEY=value` line, with surrounding quotes stripped
pub fn extract_assignment<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let (name, value) = line.split_once('=')?;
    if name.trim() != key {
        return None;
    }
    Some(value.trim().trim_matches('"').trim_matches('\''))
}

/// Format uptime from seconds as `{d}d {h}h {m}m`, dropping leading zero units
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Bytes to gibibytes
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / 1_073_741_824.0 // 1024^3
}

/// Base name of a path, accepting both `/` and `\` separators
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(path)
}
