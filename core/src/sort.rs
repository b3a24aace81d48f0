use std::fmt;

use url::Url;

pub const SORT_PARAM: &str = "sort";

/// Returns `href` with its `sort` query parameter set to `sort_key`.
///
/// Follows `URLSearchParams.set`: the first `sort` pair is replaced in place,
/// later duplicates are dropped, and the pair is appended when missing.
pub fn with_sort_param(href: &str, sort_key: &str) -> Result<String, SortUrlError> {
    let mut url = Url::parse(href).map_err(|err| SortUrlError::InvalidUrl(err.to_string()))?;
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, value) in url.query_pairs() {
        if key == SORT_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), sort_key.to_string()));
                replaced = true;
            }
            continue;
        }
        pairs.push((key.into_owned(), value.into_owned()));
    }
    if !replaced {
        pairs.push((SORT_PARAM.to_string(), sort_key.to_string()));
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
    Ok(url.into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortUrlError {
    InvalidUrl(String),
}

impl fmt::Display for SortUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortUrlError::InvalidUrl(message) => write!(f, "cannot parse page address: {message}"),
        }
    }
}

impl std::error::Error for SortUrlError {}
