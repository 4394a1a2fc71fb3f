//! Query-string utilities — parameter lookup and removal.
//!
//! Both functions operate on a snapshot of a URL (or anything shaped like
//! one); neither touches browser history or any live location. Values are
//! percent-decoded and `+` is treated as a space.

use std::borrow::Cow;

/// Decode a single `key=value` group into its (key, value) pair.
///
/// A group without `=` is not a parameter and yields `None`: a bare key
/// can never match a lookup and survives removal untouched.
fn decode_group(group: &str) -> Option<(Cow<'_, str>, Cow<'_, str>)> {
    if !group.contains('=') {
        return None;
    }
    url::form_urlencoded::parse(group.as_bytes()).next()
}

/// Look up the first query parameter named `name` and return its decoded
/// value, or `None` when absent.
///
/// Only the part after the first `?` is scanned; a fragment (`#…`)
/// terminates the query string.
#[must_use]
pub fn get_uri_parameter_by_name(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    query
        .split('&')
        .filter_map(decode_group)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Return `url` with every `key=value` group whose key matches `name`
/// removed from the query string.
///
/// Groups may be separated by `&` or `;`; survivors keep their relative
/// order (re-joined with `&`) and the path is left untouched. A URL with
/// no query string is returned unchanged.
#[must_use]
pub fn remove_parameter_from_url(url: &str, name: &str) -> String {
    let Some((path, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let kept: Vec<&str> = query
        .split(['&', ';'])
        .filter(|&group| match decode_group(group) {
            Some((key, _)) => key != name,
            None => true,
        })
        .collect();

    format!("{path}?{}", kept.join("&"))
}
