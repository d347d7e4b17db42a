// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Credential store layout

use std::path::{Path, PathBuf};

use crate::config::{FILE_EXT_TLS_CERT, FILE_NAME_TLS_CERTS, SESSION_KEY_DIR};

/// Locations of a profile's TLS credentials under the profile directory
///
/// Layout: `<dir>/keys/<profile>/{<user>-x509.pem, <user>, certs.pem}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPaths {
    keys_dir: PathBuf,
    cert: PathBuf,
    key: PathBuf,
    ca_bundle: PathBuf,
}

impl CredentialPaths {
    pub fn new(profile_dir: impl AsRef<Path>, profile_name: &str, username: &str) -> Self {
        let keys_dir = profile_dir
            .as_ref()
            .join(SESSION_KEY_DIR)
            .join(profile_name);
        Self {
            cert: keys_dir.join(format!("{}{}", username, FILE_EXT_TLS_CERT)),
            key: keys_dir.join(username),
            ca_bundle: keys_dir.join(FILE_NAME_TLS_CERTS),
            keys_dir,
        }
    }

    pub fn keys_dir(&self) -> &Path {
        &self.keys_dir
    }

    /// Client certificate (PEM)
    pub fn cert(&self) -> &Path {
        &self.cert
    }

    /// Client private key (PEM)
    pub fn key(&self) -> &Path {
        &self.key
    }

    /// Trusted CA bundle (PEM)
    pub fn ca_bundle(&self) -> &Path {
        &self.ca_bundle
    }
}
