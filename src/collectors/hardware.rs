//! Hardware information collection (CPU, GPU, Memory, Disk)

use super::host::Host;
use super::probe::{first_success, Probe};
use crate::data::{Usage, UNKNOWN};
use sysinfo::{Disks, System};

/// Collect CPU model with core and thread counts
pub fn get_cpu(host: &Host) -> String {
    let probes = [
        #[cfg(windows)]
        Probe::new("wmi", super::windows::cpu_with_counts),
        Probe::new("sysinfo", cpu_with_counts),
        #[cfg(target_os = "linux")]
        Probe::new("cpuinfo", cpu_model_name),
    ];
    first_success("cpu", host, &probes).unwrap_or_else(|| UNKNOWN.to_string())
}

/// `<name> (<cores>C/<threads>T)`
pub fn format_cpu(name: &str, cores: usize, threads: usize) -> String {
    format!("{} ({}C/{}T)", name.trim(), cores, threads)
}

fn cpu_with_counts(_: &Host) -> Option<String> {
    let mut sys = System::new();
    sys.refresh_cpu_all();

    let cpus = sys.cpus();
    let name = cpus.first()?.brand().trim().to_string();
    if name.is_empty() {
        return None;
    }
    let threads = cpus.len();
    let cores = sys.physical_core_count()?;
    Some(format_cpu(&name, cores, threads))
}

#[cfg(target_os = "linux")]
fn cpu_model_name(_: &Host) -> Option<String> {
    use crate::utils::parsing::extract_after_colon;
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    // Stops after the first CPU entry
    let file = File::open("/proc/cpuinfo").ok()?;
    BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .find(|line| line.starts_with("model name"))
        .and_then(|line| extract_after_colon(&line))
}

/// Collect memory usage
pub fn get_memory(host: &Host) -> String {
    let probes = [
        #[cfg(target_os = "linux")]
        Probe::new("meminfo", memory_meminfo),
        Probe::new("sysinfo", memory_sysinfo),
    ];
    first_success("memory", host, &probes)
        .map(|usage| usage.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(target_os = "linux")]
fn memory_meminfo(_: &Host) -> Option<Usage> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    parse_meminfo(&meminfo)
}

/// Used = MemTotal - MemAvailable, both reported in kB
pub fn parse_meminfo(meminfo: &str) -> Option<Usage> {
    let field = |key: &str| -> Option<u64> {
        meminfo
            .lines()
            .find(|line| line.split(':').next() == Some(key))
            .and_then(|line| line.split_whitespace().nth(1))
            .and_then(|value| value.parse().ok())
    };

    let total_kb = field("MemTotal")?;
    let available_kb = field("MemAvailable")?;
    if total_kb == 0 {
        return None;
    }
    Some(Usage::new(
        total_kb.saturating_sub(available_kb) * 1024,
        total_kb * 1024,
    ))
}

fn memory_sysinfo(_: &Host) -> Option<Usage> {
    let mut sys = System::new();
    sys.refresh_memory();
    match sys.total_memory() {
        0 => None,
        total => Some(Usage::new(sys.used_memory(), total)),
    }
}

/// Collect GPU adapter names
pub fn get_gpus(host: &Host) -> Vec<String> {
    let probes: &[Probe<Vec<String>>] = &[
        #[cfg(windows)]
        Probe::new("wmi", super::windows::video_controllers),
        #[cfg(target_os = "linux")]
        Probe::new("sysfs", gpus_sysfs),
        #[cfg(target_os = "linux")]
        Probe::new("lspci", gpus_lspci),
    ];
    let gpus = first_success("gpu", host, probes)
        .map(without_software_adapters)
        .unwrap_or_default();

    if gpus.is_empty() {
        vec![UNKNOWN.to_string()]
    } else {
        gpus
    }
}

/// Drop the OS vendor's generic software adapters
/// (e.g. "Microsoft Basic Display Adapter")
pub fn without_software_adapters(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && !name.contains("Microsoft"))
        .collect()
}

#[cfg(target_os = "linux")]
fn gpus_sysfs(_: &Host) -> Option<Vec<String>> {
    let mut gpus = Vec::new();

    for entry in std::fs::read_dir("/sys/class/drm").ok()?.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with("card") || name.contains('-') {
            continue;
        }
        if let Ok(device_name) = std::fs::read_to_string(path.join("device/name")) {
            let device_name = device_name.trim();
            if !device_name.is_empty() {
                gpus.push(device_name.to_string());
            }
        }
    }

    if gpus.is_empty() {
        None
    } else {
        Some(gpus)
    }
}

#[cfg(target_os = "linux")]
fn gpus_lspci(_: &Host) -> Option<Vec<String>> {
    let output = crate::utils::command::run_command("lspci", &[]).ok()?;
    let gpus = gpus_from_lspci(&output);
    if gpus.is_empty() {
        None
    } else {
        Some(gpus)
    }
}

/// Display controllers from `lspci` output, reduced to model names
pub fn gpus_from_lspci(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| {
            line.contains("VGA compatible controller")
                || line.contains("3D controller")
                || line.contains("Display controller")
        })
        .filter_map(parse_gpu_from_lspci)
        .collect()
}

fn parse_gpu_from_lspci(line: &str) -> Option<String> {
    // "01:00.0 VGA compatible controller: <description> (rev a1)"
    let (_, gpu_part) = line.split_once(": ")?;
    let cleaned = gpu_part.split(" (rev ").next().unwrap_or(gpu_part).trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(extract_gpu_model_name(cleaned))
}

fn extract_gpu_model_name(description: &str) -> String {
    if description.contains("AMD") || description.contains("Advanced Micro Devices") {
        return parse_amd_gpu(description);
    }
    if description.contains("NVIDIA") || description.contains("GeForce") {
        return parse_nvidia_gpu(description);
    }
    if description.contains("Intel") {
        return parse_intel_gpu(description);
    }

    // Fall back to the last bracketed model, skipping vendor-only brackets like [AMD/ATI]
    last_bracket(description)
        .filter(|content| !content.contains('/') && content.len() > 3)
        .map(str::to_string)
        .unwrap_or_else(|| description.to_string())
}

fn last_bracket(description: &str) -> Option<&str> {
    let start = description.rfind('[')?;
    let end = description[start..].find(']')?;
    Some(&description[start + 1..start + end])
}

fn parse_amd_gpu(description: &str) -> String {
    if let Some(content) = last_bracket(description) {
        if content.contains("Radeon") {
            // "RX 7700 XT / 7800 XT" names a range; keep the higher-end model
            let model = content.rsplit(" / ").next().unwrap_or(content).trim();
            return if model.contains("Radeon") {
                format!("AMD {}", model)
            } else {
                format!("AMD Radeon {}", model)
            };
        }
        if !content.contains('/') && content.len() > 2 {
            return format!("AMD {}", content);
        }
    }

    if let Some(pos) = description.find("Radeon") {
        let radeon_part = description[pos..]
            .split(" [")
            .next()
            .and_then(|s| s.split(" (").next())
            .unwrap_or(&description[pos..]);
        return format!("AMD {}", radeon_part.trim());
    }

    "AMD GPU".to_string()
}

fn parse_nvidia_gpu(description: &str) -> String {
    if let Some(content) = last_bracket(description) {
        if content.contains("GeForce") || content.contains("RTX") || content.contains("GTX") {
            return format!("NVIDIA {}", content.trim());
        }
    }

    if let Some(pos) = description.find("GeForce") {
        let geforce_part = description[pos..]
            .split(" [")
            .next()
            .and_then(|s| s.split(" (").next())
            .unwrap_or(&description[pos..]);
        return format!("NVIDIA {}", geforce_part.trim().trim_end_matches(']'));
    }

    "NVIDIA GPU".to_string()
}

fn parse_intel_gpu(description: &str) -> String {
    let cleaned = description.replace("Intel Corporation ", "");
    let model = cleaned.split(" [").next().unwrap_or(&cleaned).trim();
    format!("Intel {}", model)
}

/// Collect usage of the system volume
pub fn get_disk(host: &Host) -> String {
    let probes = [
        #[cfg(unix)]
        Probe::new("statvfs", disk_statvfs),
        Probe::new("sysinfo", disk_sysinfo),
    ];
    first_success("disk", host, &probes)
        .map(|usage| usage.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Root of the primary system volume
fn system_volume() -> String {
    if cfg!(windows) {
        let drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
        format!("{}\\", drive)
    } else {
        "/".to_string()
    }
}

#[cfg(unix)]
fn disk_statvfs(_: &Host) -> Option<Usage> {
    use std::ffi::CString;

    let path = CString::new(system_volume()).ok()?;
    // SAFETY: statvfs only writes into the zeroed struct we own.
    let stat = unsafe {
        let mut stat: libc::statvfs = std::mem::zeroed();
        if libc::statvfs(path.as_ptr(), &mut stat) != 0 {
            return None;
        }
        stat
    };

    let fragment = stat.f_frsize as u64;
    let total_bytes = (stat.f_blocks as u64).saturating_mul(fragment);
    let free_bytes = (stat.f_bfree as u64).saturating_mul(fragment);
    if total_bytes == 0 {
        return None;
    }
    Some(Usage::new(total_bytes.saturating_sub(free_bytes), total_bytes))
}

fn disk_sysinfo(_: &Host) -> Option<Usage> {
    let volume = system_volume();
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point().as_os_str() == volume.as_str())?;

    let total = disk.total_space();
    if total == 0 {
        return None;
    }
    Some(Usage::new(total.saturating_sub(disk.available_space()), total))
}
