//! Admin listener endpoint on the tailnet overlay.
//!
//! The overlay daemon running on the host gives this node its identity: an
//! address inside the tailnet ranges, a MagicDNS hostname resolving to that
//! address, and a TLS certificate for the hostname. The admin listener binds
//! only to such an address, so it is unreachable from outside the tailnet.

use anyhow::{Context, Result};
use axum_server::tls_rustls::RustlsConfig;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::config::AdminEndpoint;

/// Returns true if `ip` belongs to the tailnet address space
/// (`100.64.0.0/10` or `fd7a:115c:a1e0::/48`).
pub fn is_overlay_addr(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            let octets = v4.octets();
            octets[0] == 100 && (octets[1] & 0xc0) == 64
        }
        IpAddr::V6(v6) => {
            if let Some(v4) = v6.to_ipv4_mapped() {
                return is_overlay_addr(IpAddr::V4(v4));
            }
            let segments = v6.segments();
            segments[0] == 0xfd7a && segments[1] == 0x115c && segments[2] == 0xa1e0
        }
    }
}

/// Picks the address the admin listener binds to.
///
/// Uses `endpoint.listen` when set; otherwise resolves the node hostname and
/// takes the first overlay address among the results.
///
/// # Errors
///
/// Returns an error if resolution fails or the chosen address lies outside
/// the overlay network.
pub async fn resolve_bind_addr(endpoint: &AdminEndpoint) -> Result<SocketAddr> {
    let addr = match endpoint.listen {
        Some(ref listen) => listen
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid ADMIN_LISTEN '{listen}'"))?,
        None => {
            let candidates: Vec<SocketAddr> =
                tokio::net::lookup_host((endpoint.hostname.as_str(), endpoint.port))
                    .await
                    .with_context(|| format!("failed to resolve node '{}'", endpoint.hostname))?
                    .collect();

            candidates
                .iter()
                .copied()
                .find(|addr| is_overlay_addr(addr.ip()))
                .with_context(|| {
                    format!(
                        "node '{}' has no tailnet address (resolved to {:?})",
                        endpoint.hostname, candidates
                    )
                })?
        }
    };

    if !is_overlay_addr(addr.ip()) {
        anyhow::bail!("refusing to bind admin listener outside the tailnet: {addr}");
    }

    Ok(addr)
}

/// Loads the node certificate and key issued by the overlay network.
pub async fn load_tls_config(cert_path: &Path, key_path: &Path) -> Result<RustlsConfig> {
    if !cert_path.exists() {
        anyhow::bail!("certificate file not found: {}", cert_path.display());
    }
    if !key_path.exists() {
        anyhow::bail!("private key file not found: {}", key_path.display());
    }

    RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .with_context(|| format!("failed to load TLS material from {}", cert_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn endpoint(listen: Option<&str>) -> AdminEndpoint {
        AdminEndpoint {
            hostname: "tendsto".to_string(),
            port: 443,
            listen: listen.map(str::to_string),
            tls_cert: PathBuf::from("tendsto.crt"),
            tls_key: PathBuf::from("tendsto.key"),
        }
    }

    #[test]
    fn test_is_overlay_addr() {
        assert!(is_overlay_addr("100.64.0.1".parse().unwrap()));
        assert!(is_overlay_addr("100.101.102.103".parse().unwrap()));
        assert!(is_overlay_addr("100.127.255.255".parse().unwrap()));
        assert!(is_overlay_addr("fd7a:115c:a1e0::1".parse().unwrap()));
        assert!(is_overlay_addr("::ffff:100.100.1.1".parse().unwrap()));

        assert!(!is_overlay_addr("100.63.255.255".parse().unwrap()));
        assert!(!is_overlay_addr("100.128.0.0".parse().unwrap()));
        assert!(!is_overlay_addr("0.0.0.0".parse().unwrap()));
        assert!(!is_overlay_addr("127.0.0.1".parse().unwrap()));
        assert!(!is_overlay_addr("::".parse().unwrap()));
        assert!(!is_overlay_addr("fd7a:115c:a1e1::1".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_explicit_overlay_listen_is_used() {
        let addr = resolve_bind_addr(&endpoint(Some("100.64.0.7:443")))
            .await
            .unwrap();
        assert_eq!(addr, "100.64.0.7:443".parse::<SocketAddr>().unwrap());
    }

    #[tokio::test]
    async fn test_public_listen_is_refused() {
        assert!(resolve_bind_addr(&endpoint(Some("0.0.0.0:443"))).await.is_err());
        assert!(resolve_bind_addr(&endpoint(Some("127.0.0.1:443"))).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_certificate_is_an_error() {
        let err = load_tls_config(
            Path::new("/nonexistent/tendsto.crt"),
            Path::new("/nonexistent/tendsto.key"),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("certificate file not found"));
    }
}
