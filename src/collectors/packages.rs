//! Installed package counts. Best-effort and potentially slow, so only
//! queried when `show_info.packages` is enabled.

use super::host::Host;
use super::probe::{first_success, Probe};
use crate::data::UNKNOWN;

/// Collect installed package counts
pub fn get_packages(host: &Host) -> String {
    let probes: &[Probe<String>] = &[
        #[cfg(windows)]
        Probe::new("wmi", super::windows::installed_products),
        #[cfg(target_os = "linux")]
        Probe::new("package-manager", linux::package_summary),
    ];
    first_success("packages", host, probes).unwrap_or_else(|| UNKNOWN.to_string())
}

/// `"<n> (<source>)"` entries joined with ", ", skipping empty sources
pub fn format_counts(counts: &[(usize, &str)]) -> Option<String> {
    let parts: Vec<String> = counts
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, source)| format!("{} ({})", count, source))
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use super::format_counts;
    use crate::collectors::host::Host;
    use crate::error::Result;
    use crate::utils::command::{command_exists, run_command};
    use crate::utils::file::file_exists;
    use std::fs;

    /// Supported package managers for different Linux distributions
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PackageManager {
        Nix,     // NixOS
        Pacman,  // Arch Linux, Manjaro
        Xbps,    // Void Linux
        Dpkg,    // Debian, Ubuntu
        Rpm,     // Fedora, RHEL, openSUSE
        Portage, // Gentoo
    }

    impl PackageManager {
        pub fn label(self) -> &'static str {
            match self {
                PackageManager::Nix => "nix",
                PackageManager::Pacman => "pacman",
                PackageManager::Xbps => "xbps",
                PackageManager::Dpkg => "dpkg",
                PackageManager::Rpm => "rpm",
                PackageManager::Portage => "portage",
            }
        }

        fn count(self) -> Result<usize> {
            match self {
                PackageManager::Nix => get_nix_package_count(),
                PackageManager::Pacman => get_pacman_package_count(),
                PackageManager::Xbps => get_xbps_package_count(),
                PackageManager::Dpkg => get_dpkg_package_count(),
                PackageManager::Rpm => get_rpm_package_count(),
                PackageManager::Portage => get_portage_package_count(),
            }
        }
    }

    pub fn package_summary(_: &Host) -> Option<String> {
        let system = detect_package_manager()
            .and_then(|pm| pm.count().ok().map(|count| (count, pm.label())));
        let flatpak = get_flatpak_package_count();

        let mut counts = Vec::new();
        if let Some(system) = system {
            counts.push(system);
        }
        counts.push((flatpak, "flatpak"));
        format_counts(&counts)
    }

    fn detect_package_manager() -> Option<PackageManager> {
        // File-based indicators first; they are cheaper than PATH lookups
        if file_exists("/var/lib/pacman/local") {
            Some(PackageManager::Pacman)
        } else if file_exists("/var/lib/dpkg/status") {
            Some(PackageManager::Dpkg)
        } else if file_exists("/var/lib/rpm") {
            Some(PackageManager::Rpm)
        } else if file_exists("/var/db/xbps") {
            Some(PackageManager::Xbps)
        } else if file_exists("/var/db/pkg") {
            Some(PackageManager::Portage)
        } else if command_exists("nix-store") {
            Some(PackageManager::Nix)
        } else {
            None
        }
    }

    fn get_flatpak_package_count() -> usize {
        // Count only directories (apps), not files
        fs::read_dir("/var/lib/flatpak/app")
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.path().is_dir())
                    .count()
            })
            .unwrap_or(0)
    }

    fn get_nix_package_count() -> Result<usize> {
        let output = run_command(
            "nix-store",
            &["--query", "--requisites", "/run/current-system/sw"],
        )?;
        Ok(output.lines().count())
    }

    fn get_pacman_package_count() -> Result<usize> {
        Ok(fs::read_dir("/var/lib/pacman/local")?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .count())
    }

    fn get_xbps_package_count() -> Result<usize> {
        let output = run_command("xbps-query", &["-l"])?;
        Ok(output.lines().count())
    }

    fn get_dpkg_package_count() -> Result<usize> {
        let status = fs::read_to_string("/var/lib/dpkg/status")?;
        Ok(count_installed_dpkg(&status))
    }

    fn get_rpm_package_count() -> Result<usize> {
        let output = run_command("rpm", &["-qa"])?;
        Ok(output.lines().filter(|line| !line.is_empty()).count())
    }

    fn get_portage_package_count() -> Result<usize> {
        // /var/db/pkg/<category>/<package>
        let mut count = 0;
        for category in fs::read_dir("/var/db/pkg")?.flatten() {
            if category.path().is_dir() {
                if let Ok(packages) = fs::read_dir(category.path()) {
                    count += packages.count();
                }
            }
        }
        Ok(count)
    }

    /// Stanzas in the dpkg status database whose state is "install ok installed"
    pub fn count_installed_dpkg(status: &str) -> usize {
        status
            .lines()
            .filter(|line| line.starts_with("Status:") && line.ends_with(" installed"))
            .filter(|line| line.contains("install ok"))
            .count()
    }

}
