use crate::checkers::{is_ipv6_literal, is_reg_name, parse_port};
use crate::compat::ToString;
use crate::error::UrlParseError;
use crate::url_components::UrlComponents;

/// Split `[userinfo@]host[:port]` into `components`.
pub fn parse_authority(
    authority: &str,
    components: &mut UrlComponents,
) -> Result<(), UrlParseError> {
    let host_port = match authority.rfind('@') {
        Some(at) => {
            components.userinfo = Some(authority[..at].to_string());
            &authority[at + 1..]
        }
        None => authority,
    };

    let (host, port) = split_host_port(host_port)?;

    if host.starts_with('[') {
        if !is_ipv6_literal(host) {
            return Err(UrlParseError::InvalidHost);
        }
    } else if !is_reg_name(host) {
        return Err(UrlParseError::InvalidHost);
    }
    if host.is_empty() && components.scheme_type.requires_host() {
        return Err(UrlParseError::InvalidHost);
    }

    if let Some(port) = port {
        // "host:" keeps its empty port verbatim
        if !port.is_empty() && parse_port(port).is_none() {
            return Err(UrlParseError::InvalidPort);
        }
        components.port = Some(port.to_string());
    }

    components.host = Some(host.to_string());
    Ok(())
}

/// Parse host string into hostname and optional port parts.
fn split_host_port(host: &str) -> Result<(&str, Option<&str>), UrlParseError> {
    if host.starts_with('[') {
        // IPv6 address
        let bracket_end = host.find(']').ok_or(UrlParseError::InvalidHost)?;
        let ipv6_part = &host[..=bracket_end];
        let rest = &host[bracket_end + 1..];
        if rest.is_empty() {
            return Ok((ipv6_part, None));
        }
        return rest
            .strip_prefix(':')
            .map(|port| (ipv6_part, Some(port)))
            .ok_or(UrlParseError::InvalidHost);
    }

    // Regular host or IPv4
    Ok(match host.rfind(':') {
        Some(colon_pos) => (&host[..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    })
}
