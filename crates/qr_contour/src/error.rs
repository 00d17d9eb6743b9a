//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! unsupported style names, grid construction and mutation failures, invalid configuration,
//! and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported style '{name}'")]
    UnsupportedStyle { name: String },

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn out_of_bounds_message_names_cell_and_grid() {
        let err = Error::OutOfBounds {
            x: 5,
            y: -1,
            width: 3,
            height: 4,
        };
        assert_eq!(err.to_string(), "cell (5, -1) is outside the 3x4 grid");
    }

    #[test]
    fn unsupported_style_message_quotes_name() {
        let err = Error::UnsupportedStyle {
            name: "sparkly".into(),
        };
        assert_eq!(err.to_string(), "unsupported style 'sparkly'");
    }
}
