use galeria_core::LikeError;

/// Supplies the token sent with mutating requests.
pub trait CsrfSource {
    fn csrf_token(&self) -> Result<String, LikeError>;
}

/// Reads the token from the page's meta element on every call.
#[derive(Clone, Debug)]
pub struct MetaCsrfToken {
    selector: String,
}

impl MetaCsrfToken {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
        }
    }
}

impl CsrfSource for MetaCsrfToken {
    fn csrf_token(&self) -> Result<String, LikeError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(LikeError::MissingCsrfToken)?;
        let meta = document
            .query_selector(&self.selector)
            .ok()
            .flatten()
            .ok_or(LikeError::MissingCsrfToken)?;
        Ok(meta.get_attribute("content").unwrap_or_default())
    }
}
