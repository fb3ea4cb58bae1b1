#![forbid(unsafe_code)]

//! Error types shared by the core and the browser frontend.

use std::fmt;

/// Why a page feature could not be set up.
///
/// Every variant is local to one feature: the caller reports them and
/// carries on mounting the rest of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// A required element is absent from the markup.
    MissingElement {
        /// Selector or id that matched nothing.
        element: String,
    },
    /// A collection that must be non-empty matched no elements.
    EmptyCollection {
        /// Selector of the collection.
        collection: String,
    },
    /// The host rejected a platform API the feature depends on.
    Unsupported {
        /// Name of the API, e.g. `IntersectionObserver`.
        api: String,
    },
}

impl InitError {
    pub fn missing(element: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
        }
    }

    pub fn empty(collection: impl Into<String>) -> Self {
        Self::EmptyCollection {
            collection: collection.into(),
        }
    }

    pub fn unsupported(api: impl Into<String>) -> Self {
        Self::Unsupported { api: api.into() }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { element } => write!(f, "missing element: {element}"),
            Self::EmptyCollection { collection } => {
                write!(f, "empty collection: no elements match {collection}")
            }
            Self::Unsupported { api } => write!(f, "{api} is not available"),
        }
    }
}

impl std::error::Error for InitError {}

/// Page options could not be parsed.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid page options: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_element() {
        assert_eq!(
            InitError::missing("#productsCarousel").to_string(),
            "missing element: #productsCarousel"
        );
        assert_eq!(
            InitError::empty(".carousel-slide").to_string(),
            "empty collection: no elements match .carousel-slide"
        );
        assert_eq!(
            InitError::unsupported("IntersectionObserver").to_string(),
            "IntersectionObserver is not available"
        );
    }

    #[test]
    fn config_error_exposes_source() {
        use std::error::Error as _;
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid page options"));
    }
}
