use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use loginsvc_backend::store::{StoreError, UserStore};

/// Load the user store named by the configuration.
pub fn user_store_from_config(cfg: &loginsvc_config::Config) -> Result<UserStore, StoreError> {
    UserStore::load(&cfg.users.path)
}

/// Parse host:port into a SocketAddr, with fallback to 0.0.0.0.
pub fn parse_bind_address(host: &str, port: u16) -> SocketAddr {
    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .or_else(|_| host.parse::<SocketAddr>())
        .or_else(|_| {
            host.trim_start_matches('[')
                .trim_end_matches(']')
                .parse::<Ipv6Addr>()
                .map(|ip| SocketAddr::new(IpAddr::V6(ip), port))
        })
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], port)))
}
