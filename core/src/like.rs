use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

pub const NOT_LIKED_CLASS: &str = "far";
pub const LIKED_CLASSES: [&str; 2] = ["fas", "text-danger"];

/// Body returned by the like endpoint.
///
/// Fields are kept as raw json values and read loosely: flags by truthiness,
/// the count by its display form. Error answers only carry `error`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub liked: Value,
    #[serde(default)]
    pub likes_count: Value,
    #[serde(default)]
    pub error: Value,
}

impl LikeResponse {
    pub fn from_json(raw: &str) -> Result<Self, LikeError> {
        serde_json::from_str(raw).map_err(|err| LikeError::Decode(err.to_string()))
    }

    pub fn into_update(self) -> Result<LikeUpdate, LikeError> {
        if !is_truthy(&self.success) {
            let message = match &self.error {
                Value::Null => None,
                other => Some(display_text(other)),
            };
            return Err(LikeError::Rejected { message });
        }
        Ok(LikeUpdate {
            liked: is_truthy(&self.liked),
            count_text: display_text(&self.likes_count),
        })
    }
}

/// Script truthiness: `null`, `false`, `0`, and `""` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text a value shows as when assigned to `textContent`. `null` clears it.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => {
            if let Some(whole) = number.as_i64() {
                whole.to_string()
            } else if let Some(whole) = number.as_u64() {
                whole.to_string()
            } else {
                number.as_f64().map(|n| n.to_string()).unwrap_or_default()
            }
        }
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// What a control shows after an accepted toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LikeUpdate {
    pub liked: bool,
    pub count_text: String,
}

impl LikeUpdate {
    pub fn icon_edit(&self) -> ClassEdit {
        icon_class_edit(self.liked)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassEdit {
    pub remove: &'static [&'static str],
    pub add: &'static [&'static str],
}

/// Something holding a class list, in memory or in the page.
pub trait ClassTarget {
    fn remove_class(&mut self, class: &str);
    fn add_class(&mut self, class: &str);
}

impl ClassTarget for BTreeSet<String> {
    fn remove_class(&mut self, class: &str) {
        self.remove(class);
    }

    fn add_class(&mut self, class: &str) {
        self.insert(class.to_string());
    }
}

impl ClassEdit {
    pub fn apply<T: ClassTarget + ?Sized>(&self, target: &mut T) {
        for class in self.remove {
            target.remove_class(class);
        }
        for class in self.add {
            target.add_class(class);
        }
    }
}

pub fn icon_class_edit(liked: bool) -> ClassEdit {
    if liked {
        ClassEdit {
            remove: &[NOT_LIKED_CLASS],
            add: &LIKED_CLASSES,
        }
    } else {
        ClassEdit {
            remove: &LIKED_CLASSES,
            add: &[NOT_LIKED_CLASS],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeError {
    MissingArtworkId,
    MissingCsrfToken,
    MissingElement(&'static str),
    Transport(String),
    Decode(String),
    Rejected { message: Option<String> },
}

impl fmt::Display for LikeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LikeError::MissingArtworkId => write!(f, "like control has no artwork id"),
            LikeError::MissingCsrfToken => write!(f, "csrf token meta element not found"),
            LikeError::MissingElement(what) => write!(f, "like control has no {what} element"),
            LikeError::Transport(message) => write!(f, "like request failed: {message}"),
            LikeError::Decode(message) => write!(f, "like response is not valid json: {message}"),
            LikeError::Rejected { message: Some(message) } => {
                write!(f, "like rejected by server: {message}")
            }
            LikeError::Rejected { message: None } => write!(f, "like rejected by server"),
        }
    }
}

impl std::error::Error for LikeError {}
