//! Network interface addresses

use super::host::Host;
use super::probe::{first_success, Probe};
use crate::data::UNKNOWN;
use std::net::IpAddr;
use sysinfo::Networks;

/// At most this many interfaces are reported
pub const MAX_INTERFACES: usize = 3;

/// One address bound to an interface, in OS-reported order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAddr {
    pub name: String,
    pub addr: IpAddr,
    pub loopback: bool,
}

impl InterfaceAddr {
    pub fn new(name: impl Into<String>, addr: IpAddr, loopback: bool) -> Self {
        Self {
            name: name.into(),
            addr,
            loopback,
        }
    }

    fn is_loopback(&self) -> bool {
        self.loopback || self.name.contains("Loopback") || self.addr.is_loopback()
    }
}

/// Collect interface addresses
pub fn get_network(host: &Host) -> Vec<String> {
    let probes = [
        #[cfg(unix)]
        Probe::new("getifaddrs", interfaces_getifaddrs),
        Probe::new("sysinfo", interfaces_sysinfo),
    ];
    match first_success("network", host, &probes) {
        Some(addrs) => format_interfaces(addrs),
        None => vec![UNKNOWN.to_string()],
    }
}

/// Non-loopback IPv4 addresses outside 169.254/16, as `"<interface>: <address>"`,
/// keeping the first [`MAX_INTERFACES`] in the order given
pub fn format_interfaces(addrs: impl IntoIterator<Item = InterfaceAddr>) -> Vec<String> {
    addrs
        .into_iter()
        .filter(|iface| !iface.is_loopback())
        .filter_map(|iface| match iface.addr {
            IpAddr::V4(v4) if !v4.is_link_local() => Some(format!("{}: {}", iface.name, v4)),
            _ => None,
        })
        .take(MAX_INTERFACES)
        .collect()
}

#[cfg(unix)]
fn interfaces_getifaddrs(_: &Host) -> Option<Vec<InterfaceAddr>> {
    use std::ffi::CStr;
    use std::net::Ipv4Addr;

    let mut head: *mut libc::ifaddrs = std::ptr::null_mut();
    // SAFETY: getifaddrs allocates the list; it is released with freeifaddrs below.
    if unsafe { libc::getifaddrs(&mut head) } != 0 {
        return None;
    }

    let mut addrs = Vec::new();
    let mut cursor = head;
    while !cursor.is_null() {
        // SAFETY: cursor is a live node of the list returned by getifaddrs.
        let entry = unsafe { &*cursor };
        cursor = entry.ifa_next;

        if entry.ifa_addr.is_null() || entry.ifa_name.is_null() {
            continue;
        }
        // SAFETY: ifa_addr is non-null and points at a sockaddr header.
        let family = unsafe { (*entry.ifa_addr).sa_family } as libc::c_int;
        if family != libc::AF_INET {
            continue;
        }

        // SAFETY: AF_INET entries carry a sockaddr_in; ifa_name is NUL-terminated.
        let (addr, name) = unsafe {
            let sin = &*(entry.ifa_addr as *const libc::sockaddr_in);
            (
                Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr)),
                CStr::from_ptr(entry.ifa_name).to_string_lossy().into_owned(),
            )
        };
        let loopback = entry.ifa_flags & (libc::IFF_LOOPBACK as libc::c_uint) != 0;
        addrs.push(InterfaceAddr::new(name, IpAddr::V4(addr), loopback));
    }

    // SAFETY: head came from a successful getifaddrs call and is freed once.
    unsafe { libc::freeifaddrs(head) };
    Some(addrs)
}

fn interfaces_sysinfo(_: &Host) -> Option<Vec<InterfaceAddr>> {
    let networks = Networks::new_with_refreshed_list();
    let addrs: Vec<InterfaceAddr> = networks
        .list()
        .iter()
        .flat_map(|(name, data)| {
            data.ip_networks()
                .iter()
                .map(move |net| InterfaceAddr::new(name.as_str(), net.addr, false))
        })
        .collect();

    if addrs.is_empty() {
        None
    } else {
        Some(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn v4(name: &str, a: u8, b: u8, c: u8, d: u8) -> InterfaceAddr {
        InterfaceAddr::new(name, IpAddr::V4(Ipv4Addr::new(a, b, c, d)), false)
    }

    #[test]
    fn loopback_interfaces_are_excluded() {
        let addrs = vec![
            InterfaceAddr::new("lo", IpAddr::V4(Ipv4Addr::LOCALHOST), true),
            v4("Loopback Pseudo-Interface 1", 10, 0, 0, 9),
            v4("weird0", 127, 0, 1, 1),
            v4("eth0", 192, 168, 1, 20),
        ];
        assert_eq!(format_interfaces(addrs), vec!["eth0: 192.168.1.20".to_string()]);
    }

    #[test]
    fn link_local_addresses_are_excluded() {
        let addrs = vec![v4("eth1", 169, 254, 3, 4), v4("wlan0", 10, 1, 2, 3)];
        assert_eq!(format_interfaces(addrs), vec!["wlan0: 10.1.2.3".to_string()]);
    }

    #[test]
    fn ipv6_addresses_are_ignored() {
        let addrs = vec![InterfaceAddr::new(
            "eth0",
            IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)),
            false,
        )];
        assert!(format_interfaces(addrs).is_empty());
    }

    #[test]
    fn result_is_capped_and_keeps_os_order() {
        let addrs: Vec<InterfaceAddr> = (1..=6).map(|i| v4(&format!("eth{}", i), 10, 0, 0, i)).collect();
        let formatted = format_interfaces(addrs);
        assert_eq!(formatted.len(), MAX_INTERFACES);
        assert_eq!(
            formatted,
            vec![
                "eth1: 10.0.0.1".to_string(),
                "eth2: 10.0.0.2".to_string(),
                "eth3: 10.0.0.3".to_string(),
            ]
        );
    }

    #[test]
    fn live_lookup_respects_the_cap() {
        let network = get_network(&Host::detached());
        assert!(network.len() <= MAX_INTERFACES);
        assert!(network.iter().all(|entry| !entry.contains("169.254")));
    }
}
