use thiserror::Error;

/// Site context and translation errors
#[derive(Debug, Error)]
pub enum SiteError {
    /// Locale code outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Theme name outside the supported set
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// A translation resource could not be parsed
    #[error("Invalid translation resource for {locale}: {source}")]
    Resource {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// Writing to the clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A translation resource is valid JSON but not a nested object of strings
    #[error("Translation resource for {0} must be a JSON object")]
    ResourceShape(String),
}

/// Result type alias for site operations
pub type SiteResult<T> = Result<T, SiteError>;
