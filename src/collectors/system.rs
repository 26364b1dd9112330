//! System information collection (user, OS, kernel, uptime, shell, terminal)

use super::host::Host;
use super::probe::{first_success, Probe};
use crate::data::UNKNOWN;
use crate::utils::parsing::{base_name, format_uptime};
use std::env;
use sysinfo::System;

/// Generic terminal name when no environment signal matches
#[cfg(windows)]
pub const GENERIC_TERMINAL: &str = "Windows Console";
#[cfg(not(windows))]
pub const GENERIC_TERMINAL: &str = "Terminal";

fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Collect the current user name
pub fn get_username() -> String {
    username_from(env_lookup)
}

pub fn username_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("USER")
        .or_else(|| lookup("USERNAME"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Collect the host name
pub fn get_hostname(host: &Host) -> String {
    let probes = [
        #[cfg(target_os = "linux")]
        Probe::new("procfs", hostname_procfs),
        Probe::new("sysinfo", hostname_sysinfo),
    ];
    first_success("hostname", host, &probes).unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(target_os = "linux")]
fn hostname_procfs(_: &Host) -> Option<String> {
    crate::utils::file::read_first_line("/proc/sys/kernel/hostname")
        .ok()
        .filter(|h| !h.is_empty())
}

fn hostname_sysinfo(_: &Host) -> Option<String> {
    System::host_name().filter(|h| !h.is_empty())
}

/// Collect the OS name and version
pub fn get_os(host: &Host) -> String {
    let probes = [
        #[cfg(windows)]
        Probe::new("wmi", super::windows::os_caption),
        #[cfg(target_os = "linux")]
        Probe::new("os-release", os_release_pretty_name),
        Probe::new("sysinfo", os_generic),
    ];
    first_success("os", host, &probes).unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(target_os = "linux")]
fn os_release_pretty_name(_: &Host) -> Option<String> {
    use crate::utils::parsing::extract_assignment;

    let os_release = std::fs::read_to_string("/etc/os-release").ok()?;
    os_release
        .lines()
        .find_map(|line| extract_assignment(line, "PRETTY_NAME"))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// `<system> <release>`
fn os_generic(_: &Host) -> Option<String> {
    let system = System::name()?;
    match System::os_version() {
        Some(release) => Some(format!("{} {}", system, release)),
        None => Some(system),
    }
}

/// Collect the kernel version string
pub fn get_kernel(host: &Host) -> String {
    let probes = [
        #[cfg(windows)]
        Probe::new("wmi", super::windows::kernel_version),
        #[cfg(target_os = "linux")]
        Probe::new("procfs", kernel_procfs),
        Probe::new("sysinfo", kernel_sysinfo),
    ];
    first_success("kernel", host, &probes).unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(target_os = "linux")]
fn kernel_procfs(_: &Host) -> Option<String> {
    // /proc/version is a single line: "Linux version <release> ..."
    let version_info = crate::utils::file::read_first_line("/proc/version").ok()?;
    version_info.split_whitespace().nth(2).map(str::to_string)
}

fn kernel_sysinfo(_: &Host) -> Option<String> {
    System::kernel_version().filter(|k| !k.is_empty())
}

/// Collect time since boot
pub fn get_uptime(host: &Host) -> String {
    let probes = [
        #[cfg(target_os = "linux")]
        Probe::new("procfs", uptime_procfs),
        Probe::new("sysinfo", uptime_sysinfo),
    ];
    first_success("uptime", host, &probes)
        .map(format_uptime)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(target_os = "linux")]
fn uptime_procfs(_: &Host) -> Option<u64> {
    let uptime_str = crate::utils::file::read_first_line("/proc/uptime").ok()?;
    let secs: f64 = uptime_str.split_whitespace().next()?.parse().ok()?;
    Some(secs as u64)
}

fn uptime_sysinfo(_: &Host) -> Option<u64> {
    match System::uptime() {
        0 => None,
        secs => Some(secs),
    }
}

/// Collect the login shell
pub fn get_shell() -> String {
    shell_from(env_lookup)
}

/// Base name of `SHELL`, falling back to `ComSpec`
pub fn shell_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup("SHELL")
        .or_else(|| lookup("ComSpec"))
        .map(|shell| base_name(shell.trim()).to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Collect the terminal emulator
pub fn get_terminal() -> String {
    terminal_from(env_lookup)
}

/// Session markers win over generic program-name variables
pub fn terminal_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    if lookup("WT_SESSION").is_some() {
        return "Windows Terminal".to_string();
    }
    if lookup("ConEmuPID").is_some() {
        return "ConEmu".to_string();
    }
    if cfg!(windows)
        && lookup("PSModulePath")
            .map(|p| p.to_lowercase().contains("powershell"))
            .unwrap_or(false)
    {
        return "PowerShell".to_string();
    }
    if let Some(program) = lookup("TERM_PROGRAM") {
        return program;
    }
    if cfg!(unix) {
        if let Some(term) = lookup("TERM") {
            return term;
        }
    }
    GENERIC_TERMINAL.to_string()
}
