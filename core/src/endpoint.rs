use crate::artwork_id::ArtworkId;

pub const LIKE_PATH_PREFIX: &str = "/artwork/";
pub const LIKE_PATH_SUFFIX: &str = "/like";
pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

pub fn like_path(artwork_id: &ArtworkId) -> String {
    format!("{LIKE_PATH_PREFIX}{artwork_id}{LIKE_PATH_SUFFIX}")
}

/// A like toggle as it goes over the wire. The request carries no body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeRequest {
    pub method: &'static str,
    pub path: String,
    pub headers: Vec<(&'static str, String)>,
}

impl LikeRequest {
    pub fn toggle(artwork_id: &ArtworkId, csrf_token: &str) -> Self {
        Self {
            method: "POST",
            path: like_path(artwork_id),
            headers: vec![
                (CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON.to_string()),
                (CSRF_HEADER, csrf_token.to_string()),
            ],
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
