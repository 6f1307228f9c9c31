//! Error types
//!
//! Scoring code never fails; these cover the collaborators around it:
//! reading the crop database, validating user-entered numbers, the weather
//! API and the image classifier.

use thiserror::Error;

/// Failure to load the crop knowledge base
#[derive(Debug, Error)]
pub enum CropDataError {
    #[error("failed to read crop data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("crop data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected user input. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Campaign title must be at least 3 characters.")]
    TitleTooShort,

    #[error("Target amount must be a positive number.")]
    InvalidTargetAmount,

    #[error("Duration must be between 1 and 365 days.")]
    InvalidDuration,

    #[error("Investment amount must be a positive number.")]
    InvalidInvestmentAmount,

    #[error("Investor name is required.")]
    MissingInvestor,
}

/// Campaign ledger failure: bad input or an unknown campaign id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Campaign not found.")]
    NotFound,
}

/// Weather lookup failure. Surfaced to users as a generic "weather API error".
#[derive(Debug, Error)]
pub enum WeatherError {
    #[cfg(feature = "api")]
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("weather response missing field `{0}`")]
    MissingField(&'static str),
}

/// Image classification failure
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Please choose an image file.")]
    EmptyImage,

    #[error("Image is too large ({size} bytes, limit {limit}).")]
    ImageTooLarge { size: usize, limit: usize },

    #[cfg(feature = "api")]
    #[error("classifier request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("classifier returned {status}: {message}")]
    Api { status: u16, message: String },
}
