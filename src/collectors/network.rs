//! Default route, address and resolver discovery

use crate::data::NetworkSummary;
use crate::utils::command::run_command;
use crate::utils::file::read_file_safe;
use crate::utils::parsing::token_after;
use tracing::debug;

pub fn collect_network() -> NetworkSummary {
    let (interface, gateway) = match run_command("ip", &["route"]) {
        Ok(out) => parse_default_route(&out),
        Err(err) => {
            debug!(error = %err, "ip route failed");
            (None, None)
        }
    };
    let address = interface.as_deref().and_then(get_ipv4_address);

    NetworkSummary {
        interface,
        address,
        gateway,
        dns_servers: get_dns_servers(),
    }
}

/// (interface, gateway) of the first default route
pub fn parse_default_route(output: &str) -> (Option<String>, Option<String>) {
    match output.lines().find(|line| line.contains("default")) {
        Some(line) => (
            token_after(line, "dev").map(str::to_string),
            token_after(line, "via").map(str::to_string),
        ),
        None => (None, None),
    }
}

pub fn get_ipv4_address(interface: &str) -> Option<String> {
    match run_command("ip", &["-4", "addr", "show", interface]) {
        Ok(out) => parse_inet_address(&out),
        Err(err) => {
            debug!(interface, error = %err, "ip addr failed");
            None
        }
    }
}

/// First `inet` address of `ip -4 addr show`, CIDR suffix kept
pub fn parse_inet_address(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| token_after(line, "inet"))
        .map(str::to_string)
}

/// systemd-resolved servers, else nameservers from /etc/resolv.conf
pub fn get_dns_servers() -> Vec<String> {
    let from_resolved = match run_command("resolvectl", &["status"]) {
        Ok(out) => parse_resolvectl(&out),
        Err(err) => {
            debug!(error = %err, "resolvectl failed");
            Vec::new()
        }
    };
    if !from_resolved.is_empty() {
        return from_resolved;
    }

    match read_file_safe("/etc/resolv.conf") {
        Ok(content) => parse_resolv_conf(&content),
        Err(err) => {
            debug!(error = %err, "cannot read /etc/resolv.conf");
            Vec::new()
        }
    }
}

/// Servers on indented `DNS Servers:` rows
pub fn parse_resolvectl(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.starts_with(char::is_whitespace))
        .filter_map(|line| line.trim_start().strip_prefix("DNS Servers:"))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

pub fn parse_resolv_conf(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match fields.next() {
                Some("nameserver") => fields.next(),
                _ => None,
            }
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_fields() {
        let out = "default via 192.168.1.1 dev enp3s0 proto dhcp src 192.168.1.20 metric 100\n\
                   192.168.1.0/24 dev enp3s0 proto kernel scope link src 192.168.1.20\n";
        let (iface, gw) = parse_default_route(out);
        assert_eq!(iface.as_deref(), Some("enp3s0"));
        assert_eq!(gw.as_deref(), Some("192.168.1.1"));

        assert_eq!(parse_default_route("10.0.0.0/8 dev wg0"), (None, None));
    }

    #[test]
    fn default_route_without_gateway() {
        let (iface, gw) = parse_default_route("default dev wg0 scope link");
        assert_eq!(iface.as_deref(), Some("wg0"));
        assert_eq!(gw, None);
    }

    #[test]
    fn inet_address_with_prefix() {
        let out = "2: enp3s0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP\n\
                   \x20   inet 192.168.1.20/24 brd 192.168.1.255 scope global dynamic enp3s0\n\
                   \x20      valid_lft 86000sec preferred_lft 86000sec\n";
        assert_eq!(parse_inet_address(out).as_deref(), Some("192.168.1.20/24"));
        assert_eq!(parse_inet_address(""), None);
    }

    #[test]
    fn resolvectl_servers() {
        let out = "Global\n\
                   \x20      Protocols: +LLMNR +mDNS -DNSOverTLS\n\
                   \x20    DNS Servers: 1.1.1.1 9.9.9.9\n\
                   \n\
                   Link 2 (enp3s0)\n\
                   Current DNS Server: 192.168.1.1\n\
                   \x20      DNS Servers: 192.168.1.1\n";
        assert_eq!(parse_resolvectl(out), vec!["1.1.1.1", "9.9.9.9", "192.168.1.1"]);
        assert!(parse_resolvectl("DNS Servers: 8.8.8.8").is_empty());
    }

    #[test]
    fn resolv_conf_nameservers() {
        let content = "# generated\nsearch lan\nnameserver 127.0.0.53\nnameserver  ::1\noptions edns0\n";
        assert_eq!(parse_resolv_conf(content), vec!["127.0.0.53", "::1"]);
        assert!(parse_resolv_conf("# nameserver 1.1.1.1").is_empty());
    }
}
