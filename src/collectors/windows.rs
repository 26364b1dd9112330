//! WMI-backed probes (Windows only)

use super::hardware::format_cpu;
use super::host::Host;
use serde::Deserialize;
use std::collections::HashMap;
use wmi::Variant;

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OperatingSystem {
    caption: String,
    build_number: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OperatingSystemVersion {
    version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Processor {
    name: String,
    number_of_cores: u32,
    number_of_logical_processors: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VideoController {
    name: Option<String>,
}

/// `<edition> (Build <build>)`
pub fn os_caption(host: &Host) -> Option<String> {
    let wmi = host.wmi.as_ref()?;
    let rows: Vec<OperatingSystem> = wmi
        .raw_query("SELECT Caption, BuildNumber FROM Win32_OperatingSystem")
        .ok()?;
    let os = rows.into_iter().next()?;
    Some(format!("{} (Build {})", os.caption.trim(), os.build_number))
}

/// `<major>.<minor>.<build>`, e.g. `10.0.22631`
pub fn kernel_version(host: &Host) -> Option<String> {
    let wmi = host.wmi.as_ref()?;
    let rows: Vec<OperatingSystemVersion> = wmi
        .raw_query("SELECT Version FROM Win32_OperatingSystem")
        .ok()?;
    let version = rows.into_iter().next()?.version;
    let version = version.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

pub fn cpu_with_counts(host: &Host) -> Option<String> {
    let wmi = host.wmi.as_ref()?;
    let rows: Vec<Processor> = wmi
        .raw_query("SELECT Name, NumberOfCores, NumberOfLogicalProcessors FROM Win32_Processor")
        .ok()?;
    let cpu = rows.into_iter().next()?;
    Some(format_cpu(
        &cpu.name,
        cpu.number_of_cores as usize,
        cpu.number_of_logical_processors as usize,
    ))
}

pub fn video_controllers(host: &Host) -> Option<Vec<String>> {
    let wmi = host.wmi.as_ref()?;
    let rows: Vec<VideoController> = wmi
        .raw_query("SELECT Name FROM Win32_VideoController")
        .ok()?;
    Some(rows.into_iter().filter_map(|gpu| gpu.name).collect())
}

/// Enumerating Win32_Product is slow; only called when packages are shown
pub fn installed_products(host: &Host) -> Option<String> {
    let wmi = host.wmi.as_ref()?;
    let rows: Vec<HashMap<String, Variant>> =
        wmi.raw_query("SELECT Name FROM Win32_Product").ok()?;
    Some(format!("{} (Win32_Product)", rows.len()))
}
