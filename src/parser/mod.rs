mod authority;

use crate::checkers::is_valid_scheme;
use crate::compat::ToString;
use crate::error::UrlParseError;
use crate::helpers::{clean_tabs_and_newlines, find_component_end, prune_fragment, split_query};
use crate::query_params::QueryParams;
use crate::scheme::get_scheme_type;
use crate::url_components::UrlComponents;

use authority::parse_authority;

/// Split a URL string into its verbatim components and decoded query pairs.
///
/// Absolute URLs and relative references are accepted, including the empty
/// reference. Only a malformed scheme, host or port is an error; the query
/// itself is parsed leniently.
pub fn parse_url(input: &str) -> Result<(UrlComponents, QueryParams), UrlParseError> {
    let result = parse_url_inner(input);
    if let Err(err) = &result {
        tracing::debug!(input, error = %err, "rejected base URL");
    }
    result
}

fn parse_url_inner(input: &str) -> Result<(UrlComponents, QueryParams), UrlParseError> {
    let cleaned = clean_tabs_and_newlines(input);
    let input: &str = &cleaned;

    let (rest, fragment) = prune_fragment(input);
    let (rest, query) = split_query(rest);

    let mut components = UrlComponents::new();
    components.fragment = fragment.map(ToString::to_string);

    // A ':' before the first '/' delimits a scheme
    let head_end = find_component_end(rest).unwrap_or(rest.len());
    let rest = match rest[..head_end].find(':') {
        Some(colon) => {
            let scheme = &rest[..colon];
            if !is_valid_scheme(scheme) {
                return Err(UrlParseError::InvalidScheme);
            }
            components.scheme_type = get_scheme_type(scheme);
            components.scheme = Some(scheme.to_string());
            &rest[colon + 1..]
        }
        None => rest,
    };

    match rest.strip_prefix("//") {
        Some(after) => {
            let authority_end = find_component_end(after).unwrap_or(after.len());
            parse_authority(&after[..authority_end], &mut components)?;
            components.path = after[authority_end..].to_string();
        }
        None => {
            if components.scheme_type.requires_host() {
                return Err(UrlParseError::InvalidHost);
            }
            components.path = rest.to_string();
        }
    }

    let params = query.map(QueryParams::parse).unwrap_or_default();
    Ok((components, params))
}
