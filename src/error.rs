// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Caption(crate::caption::CaptionError),
    Selection(crate::selection::SelectionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Caption(e) => write!(f, "Caption Error: {}", e),
            Error::Selection(e) => write!(f, "Selection Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<crate::caption::CaptionError> for Error {
    fn from(err: crate::caption::CaptionError) -> Self {
        Error::Caption(err)
    }
}

impl From<crate::selection::SelectionError> for Error {
    fn from(err: crate::selection::SelectionError) -> Self {
        Error::Selection(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
