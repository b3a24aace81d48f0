use std::fmt;

/// Identifier of an artwork as rendered into a like control's data attribute.
///
/// The value is embedded into the like endpoint path as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtworkId(String);

impl ArtworkId {
    pub fn parse(value: &str) -> Result<Self, ArtworkIdError> {
        if value.is_empty() {
            return Err(ArtworkIdError::Empty);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ArtworkId {
    type Err = ArtworkIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtworkIdError {
    Empty,
}

impl fmt::Display for ArtworkIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtworkIdError::Empty => write!(f, "artwork id is empty"),
        }
    }
}

impl std::error::Error for ArtworkIdError {}
