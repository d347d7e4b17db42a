// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Connection details handed to external database-client config writers

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;
use crate::Profile;

/// Everything a database client needs to reach a database through the proxy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectProfile {
    /// Name of the connection entry in the client's own configuration
    pub name: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub database: String,
    /// Skip server hostname verification
    pub insecure: bool,
    pub ca_path: PathBuf,
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl ConnectProfile {
    /// Build connection details from a profile's credential layout
    ///
    /// `user` and `database` are left empty for the caller to fill in.
    pub fn from_profile(profile: &Profile, name: &str, host: &str, port: u16) -> Self {
        let paths = profile.credential_paths();
        Self {
            name: name.to_string(),
            host: host.to_string(),
            port,
            ca_path: paths.ca_bundle().to_path_buf(),
            cert_path: paths.cert().to_path_buf(),
            key_path: paths.key().to_path_buf(),
            ..Default::default()
        }
    }
}

/// A writer that persists connection details in a client's own format
/// (for instance a MySQL option file)
pub trait ConnectProfileWriter {
    /// Add or replace the entry for `profile.name`
    fn upsert(&mut self, profile: &ConnectProfile) -> Result<()>;

    /// Environment variables selecting the entry called `name`
    fn env(&self, name: &str) -> Result<HashMap<String, String>>;

    fn delete(&mut self, name: &str) -> Result<()>;
}
