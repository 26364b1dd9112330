//! Side-by-side rendering of ASCII art and collected facts

use crate::config::{Config, Palette, ShowInfo};
use crate::data::{SystemFacts, UNKNOWN};
use crate::error::Result;
use crate::utils::color::{paint, to_ansi};
use std::io::{self, Write};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

/// Gap between the widest art line and the info column
pub const ART_PADDING: usize = 4;

/// Shown when the requested art cannot be loaded
pub const FALLBACK_ART: [&str; 8] = [
    "    ╔══════════════════════╗",
    "    ║      WINFETCH        ║",
    "    ║                      ║",
    "    ║    ██████████████    ║",
    "    ║    ██████████████    ║",
    "    ║    ██████████████    ║",
    "    ║                      ║",
    "    ╚══════════════════════╝",
];

/// Palette resolved to escape sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    pub header: String,
    pub info: String,
    pub accent: String,
}

impl Styles {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            header: to_ansi(&palette.header),
            info: to_ansi(&palette.info),
            accent: to_ansi(&palette.accent),
        }
    }
}

/// Labelled values in display order, skipping hidden facts
pub fn info_pairs(facts: &SystemFacts, show: &ShowInfo) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    let user = match (show.user, show.hostname) {
        (true, true) => Some(format!("{}@{}", facts.user, facts.hostname)),
        (true, false) => Some(facts.user.clone()),
        (false, true) => Some(facts.hostname.clone()),
        (false, false) => None,
    };
    if let Some(user) = user {
        pairs.push(("User".to_string(), user));
    }

    let gpu = if facts.gpu.is_empty() {
        UNKNOWN.to_string()
    } else {
        facts.gpu.join(", ")
    };

    let single = [
        (show.os, "OS", facts.os.clone()),
        (show.kernel, "Kernel", facts.kernel.clone()),
        (show.uptime, "Uptime", facts.uptime.clone()),
        (show.packages, "Packages", facts.packages.clone()),
        (show.shell, "Shell", facts.shell.clone()),
        (show.terminal, "Terminal", facts.terminal.clone()),
        (show.cpu, "CPU", facts.cpu.clone()),
        (show.gpu, "GPU", gpu),
        (show.memory, "Memory", facts.memory.clone()),
        (show.disk, "Disk", facts.disk.clone()),
    ];
    pairs.extend(
        single
            .into_iter()
            .filter(|(visible, _, _)| *visible)
            .map(|(_, label, value)| (label.to_string(), value)),
    );

    if show.network {
        for (idx, net) in facts.network.iter().enumerate() {
            pairs.push((format!("Net{}", idx + 1), net.clone()));
        }
    }

    pairs
}

/// `label: value` lines, with label and value colored separately
pub fn format_info_lines(pairs: &[(String, String)], styles: Option<&Styles>) -> Vec<String> {
    pairs
        .iter()
        .map(|(label, value)| match styles {
            Some(styles) => format!(
                "{}: {}",
                paint(label, &styles.header),
                paint(value, &styles.info)
            ),
            None => format!("{}: {}", label, value),
        })
        .collect()
}

/// Join art and info into rows. The art column is as wide as the widest
/// art line plus [`ART_PADDING`]; the shorter column is filled with blanks.
pub fn compose(art_lines: &[String], info_lines: &[String], accent: Option<&str>) -> Vec<String> {
    let left_width = art_lines
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0)
        + ART_PADDING;

    let rows = art_lines.len().max(info_lines.len());
    (0..rows)
        .map(|i| {
            let art = art_lines.get(i).map(String::as_str).unwrap_or("");
            let info = info_lines.get(i).map(String::as_str).unwrap_or("");
            // pad on the raw text so escapes don't count towards the width
            let padding = " ".repeat(left_width.saturating_sub(UnicodeWidthStr::width(art)));

            match accent {
                Some(accent) if !art.is_empty() => {
                    format!("{}{}{}", paint(art, accent), padding, info)
                }
                _ => format!("{}{}{}", art, padding, info),
            }
        })
        .collect()
}

/// Build the output lines. A failed art lookup falls back to [`FALLBACK_ART`].
pub fn render(
    facts: &SystemFacts,
    art: Result<String>,
    config: &Config,
    colors_enabled: bool,
) -> Vec<String> {
    let art_lines: Vec<String> = match art {
        Ok(text) => text.lines().map(String::from).collect(),
        Err(e) => {
            warn!("{}", e);
            FALLBACK_ART.iter().map(|line| line.to_string()).collect()
        }
    };

    let styles = colors_enabled.then(|| Styles::from_palette(&config.palette));
    let pairs = info_pairs(facts, &config.show_info);
    let info_lines = format_info_lines(&pairs, styles.as_ref());

    compose(
        &art_lines,
        &info_lines,
        styles.as_ref().map(|styles| styles.accent.as_str()),
    )
}

/// Write rendered lines to stdout
pub fn print(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WinfetchError;

    fn facts() -> SystemFacts {
        SystemFacts {
            user: "ada".to_string(),
            hostname: "engine".to_string(),
            os: "Windows 11 Pro (Build 22631)".to_string(),
            kernel: "10.0.22631".to_string(),
            uptime: "1h 1m".to_string(),
            packages: "42 (Win32_Product)".to_string(),
            shell: "pwsh.exe".to_string(),
            terminal: "Windows Terminal".to_string(),
            cpu: "Ryzen 7 (8C/16T)".to_string(),
            memory: "8.0GB / 16.0GB (50.0%)".to_string(),
            gpu: vec!["RTX 3080".to_string(), "Radeon iGPU".to_string()],
            disk: "100.0GB / 500.0GB (20.0%)".to_string(),
            network: vec!["eth0: 192.168.1.2".to_string(), "wlan0: 10.0.0.5".to_string()],
        }
    }

    fn labels(pairs: &[(String, String)]) -> Vec<&str> {
        pairs.iter().map(|(label, _)| label.as_str()).collect()
    }

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn pairs_follow_display_order() {
        let pairs = info_pairs(&facts(), &ShowInfo::all());
        assert_eq!(
            labels(&pairs),
            vec![
                "User", "OS", "Kernel", "Uptime", "Packages", "Shell", "Terminal", "CPU", "GPU",
                "Memory", "Disk", "Net1", "Net2"
            ]
        );
        assert_eq!(pairs[0].1, "ada@engine");
        assert_eq!(pairs[8].1, "RTX 3080, Radeon iGPU");
        assert_eq!(pairs[12].1, "wlan0: 10.0.0.5");
    }

    #[test]
    fn hidden_facts_produce_no_line() {
        let show = ShowInfo {
            user: false,
            cpu: false,
            network: false,
            ..ShowInfo::default()
        };
        let pairs = info_pairs(&facts(), &show);
        assert_eq!(pairs[0], ("User".to_string(), "engine".to_string()));
        assert!(!labels(&pairs).contains(&"CPU"));
        assert!(!labels(&pairs).contains(&"Packages"));
        assert!(!labels(&pairs).iter().any(|label| label.starts_with("Net")));

        let show = ShowInfo {
            user: false,
            hostname: false,
            ..ShowInfo::default()
        };
        assert_eq!(info_pairs(&facts(), &show)[0].0, "OS");
    }

    #[test]
    fn plain_and_colored_lines() {
        let pairs = vec![("OS".to_string(), "Linux".to_string())];
        assert_eq!(format_info_lines(&pairs, None), vec!["OS: Linux"]);

        let styles = Styles::from_palette(&Palette::default());
        assert_eq!(
            format_info_lines(&pairs, Some(&styles)),
            vec!["\x1b[36mOS\x1b[0m: \x1b[37mLinux\x1b[0m"]
        );
    }

    #[test]
    fn layout_pads_art_and_extends_rows() {
        let art = lines(&["0123456789", "#", "##", "###", "####"]);
        let info: Vec<String> = (1..=12).map(|i| format!("Line{}: v", i)).collect();

        let rows = compose(&art, &info, None);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0], "0123456789    Line1: v");
        assert_eq!(rows[1], format!("#{}Line2: v", " ".repeat(13)));
        for (i, row) in rows.iter().enumerate().skip(5) {
            assert_eq!(*row, format!("{}Line{}: v", " ".repeat(14), i + 1));
        }
    }

    #[test]
    fn longer_art_keeps_padding_without_info() {
        let rows = compose(&lines(&["ab", "abcd", "a"]), &lines(&["x"]), None);
        assert_eq!(rows, vec!["ab      x", "abcd    ", "a       "]);
    }

    #[test]
    fn padding_uses_display_width() {
        let rows = compose(&lines(&["日本", "ab"]), &lines(&["x", "y"]), None);
        assert_eq!(rows[0], "日本    x");
        assert_eq!(rows[1], "ab      y");
    }

    #[test]
    fn accent_wraps_art_but_not_padding() {
        let rows = compose(&lines(&["ab"]), &lines(&["x", "y"]), Some("\x1b[94m"));
        assert_eq!(rows[0], "\x1b[94mab\x1b[0m    x");
        assert_eq!(rows[1], "      y");
    }

    #[test]
    fn missing_art_uses_fallback() {
        let config = Config::default();
        let rows = render(
            &facts(),
            Err(WinfetchError::ArtNotFound("nope".to_string())),
            &config,
            false,
        );
        // 12 info lines with packages hidden by default
        assert_eq!(rows.len(), 12);
        for (row, art) in rows.iter().zip(FALLBACK_ART) {
            assert!(row.starts_with(art));
        }
        assert!(rows[0].ends_with("User: ada@engine"));
        assert!(rows[11].ends_with("Net2: wlan0: 10.0.0.5"));
    }

    #[test]
    fn render_without_color_has_no_escapes() {
        let config = Config::default();
        let rows = render(&facts(), Ok("/\\\n\\/\n".to_string()), &config, false);
        assert!(rows.iter().all(|row| !row.contains('\x1b')));
        assert_eq!(rows[0], "/\\    User: ada@engine");
    }

    #[test]
    fn render_with_color_uses_palette() {
        let mut config = Config::default();
        config.palette.header = "red".to_string();
        let rows = render(&facts(), Ok("A\n".to_string()), &config, true);
        assert!(rows[0].starts_with("\x1b[94mA\x1b[0m"));
        assert!(rows[0].contains("\x1b[31mUser\x1b[0m: \x1b[37mada@engine\x1b[0m"));
    }
}
