//! Network helpers

use std::io;
use std::net::{IpAddr, Ipv4Addr, TcpListener, UdpSocket};
use std::time::Duration;
use tokio::net::TcpStream;

/// Hosts that bind every interface
const WILDCARD_HOSTS: &[&str] = &["+", "*", "0.0.0.0", "[::]"];

/// Address of the interface used for outbound traffic
///
/// Connecting a UDP socket selects a route without sending anything.
pub fn local_ip() -> io::Result<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect((Ipv4Addr::new(8, 8, 8, 8), 80))?;
    Ok(socket.local_addr()?.ip())
}

/// Local address, falling back to loopback when no route exists
pub fn local_ip_or_loopback() -> IpAddr {
    local_ip().unwrap_or_else(|err| {
        log::warn!("Cannot determine local address, using loopback: {}", err);
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    })
}

pub fn is_port_available(port: u16) -> bool {
    TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).is_ok()
}

/// First port in `range` that can be bound
pub fn find_free_port(range: std::ops::RangeInclusive<u16>) -> Option<u16> {
    range.into_iter().find(|port| is_port_available(*port))
}

/// Whether a TCP connection to `address` succeeds within `timeout`
pub async fn is_reachable(address: &str, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, TcpStream::connect(address)).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            log::debug!("{} not reachable: {}", address, err);
            false
        }
        Err(_) => {
            log::debug!("{} not reachable: timed out after {:?}", address, timeout);
            false
        }
    }
}

/// Replace a wildcard host (`+`, `*`, `0.0.0.0`) in `url` with `ip`
///
/// `http://+:5080/aas` becomes `http://192.168.0.10:5080/aas`. Other URLs
/// are returned unchanged.
pub fn replace_wildcard_host(url: &str, ip: IpAddr) -> String {
    let (scheme, rest) = match url.find("://") {
        Some(pos) => url.split_at(pos + 3),
        None => ("", url),
    };
    let host_end = if rest.starts_with('[') {
        rest.find(']').map(|pos| pos + 1).unwrap_or(rest.len())
    } else {
        rest.find([':', '/']).unwrap_or(rest.len())
    };
    let (host, tail) = rest.split_at(host_end);

    if !WILDCARD_HOSTS.contains(&host) {
        return url.to_string();
    }
    let host = match ip {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => format!("[{}]", v6),
    };
    format!("{}{}{}", scheme, host, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_replace_wildcard_host() {
        let ip = IpAddr::V4(Ipv4Addr::new(192, 168, 0, 10));
        assert_eq!(replace_wildcard_host("http://+:5080/aas", ip), "http://192.168.0.10:5080/aas");
        assert_eq!(replace_wildcard_host("http://*:5080", ip), "http://192.168.0.10:5080");
        assert_eq!(replace_wildcard_host("https://0.0.0.0", ip), "https://192.168.0.10");
        assert_eq!(replace_wildcard_host("http://[::]:80/", ip), "http://192.168.0.10:80/");
        assert_eq!(replace_wildcard_host("http://example.com:5080", ip), "http://example.com:5080");
        assert_eq!(
            replace_wildcard_host("http://+:1", IpAddr::V6(Ipv6Addr::LOCALHOST)),
            "http://[::1]:1"
        );
    }

    #[test]
    fn test_port_helpers() {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).unwrap();
        let taken = listener.local_addr().unwrap().port();
        assert!(!is_port_available(taken));
        assert_eq!(find_free_port(taken..=taken), None);
    }

    #[tokio::test]
    async fn test_is_reachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        assert!(is_reachable(&address, Duration::from_secs(1)).await);

        drop(listener);
        assert!(!is_reachable(&address, Duration::from_millis(200)).await);
    }
}
