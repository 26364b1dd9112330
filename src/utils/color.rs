//! Palette color names to ANSI escape sequences

use tracing::warn;

pub const RESET: &str = "\x1b[0m";

/// Escape sequence for a palette color: an ANSI name or a `#RRGGBB` hex value.
/// Unknown colors fall back to the reset sequence.
pub fn to_ansi(color: &str) -> String {
    if let Some(code) = ansi_code(color) {
        return code.to_string();
    }

    if let Some(code) = hex_to_ansi(color) {
        return code;
    }

    warn!(
        "Unknown color '{}'. Use a name such as cyan, bright_blue or gray, or a hex value like #FF0000",
        color
    );
    RESET.to_string()
}

fn hex_to_ansi(color: &str) -> Option<String> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}

fn ansi_code(color_name: &str) -> Option<&'static str> {
    let code = match color_name.trim().to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => "\x1b[90m",
        "bright_red" | "orange" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        "bright_magenta" | "violet" => "\x1b[95m",
        "bright_cyan" => "\x1b[96m",
        "bright_white" => "\x1b[97m",

        "purple" => "\x1b[35m",
        "reset" | "default" => RESET,
        _ => return None,
    };
    Some(code)
}

/// Wrap `text` in `color`, resetting afterwards
pub fn paint(text: &str, color: &str) -> String {
    format!("{}{}{}", color, text, RESET)
}
