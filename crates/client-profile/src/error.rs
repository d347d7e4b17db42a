// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Error types for the client profile store

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error: {context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("TLS error: {0}")]
    Tls(#[from] rustls::Error),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap an I/O error, translating a missing file into `NotFound`
    pub fn io_or_not_found(path: &Path, source: io::Error, what: &str) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound(format!("{} not found at {}", what, path.display()))
        } else {
            Error::io(path, source)
        }
    }

    pub fn serialization(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Error::Serialization {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
