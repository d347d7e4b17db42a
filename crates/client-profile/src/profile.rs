// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Connection profile entity

use std::path::{Path, PathBuf};

use rustls::ClientConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::profile_file_name;
use crate::error::{Error, Result};
use crate::keys::CredentialPaths;
use crate::network::split_host_port;
use crate::profile_manager::{require_dir, set_current_profile_name, write_profile_file};
use crate::tls;

/// A saved connection profile
///
/// Stores the most frequently used client flags so they do not have to be
/// typed on every invocation. Fields left empty are omitted from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// `host:port` the web proxy can be accessed at
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub web_proxy_addr: String,

    /// `host:port` the SSH proxy can be accessed at
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_proxy_addr: String,

    /// `host:port` the Kubernetes proxy can be accessed at
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kube_proxy_addr: String,

    #[serde(rename = "user", default, skip_serializing_if = "String::is_empty")]
    pub username: String,

    /// Authentication connector type (e.g. "github")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auth_type: String,

    /// Cluster name
    #[serde(rename = "cluster", default, skip_serializing_if = "String::is_empty")]
    pub site_name: String,

    /// Static port forwards (`local:host:remote`)
    #[serde(rename = "forward_ports", default, skip_serializing_if = "Vec::is_empty")]
    pub forwarded_ports: Vec<String>,

    /// Dynamic (SOCKS5) port forwards
    #[serde(
        rename = "dynamic_forward_ports",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dynamic_forwarded_ports: Vec<String>,

    /// Directory this profile was loaded from
    #[serde(skip)]
    pub dir: PathBuf,
}

impl Profile {
    /// Profile name, derived from the web proxy host
    ///
    /// Falls back to the raw address when it is not a valid `host:port`.
    pub fn name(&self) -> String {
        match split_host_port(&self.web_proxy_addr) {
            Ok((host, _)) => host.to_string(),
            Err(_) => self.web_proxy_addr.clone(),
        }
    }

    /// Parse a profile from its YAML representation
    ///
    /// An empty document yields an empty profile. `dir` is left unset.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Self::parse(contents, "Failed to parse profile")
    }

    pub(crate) fn parse(contents: &str, context: impl Into<String>) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|e| Error::serialization(context, e))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| Error::serialization("Failed to serialize profile", e))
    }

    /// Save the profile to `path`, replacing any existing content
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_yaml()?;
        write_profile_file(path, contents.as_bytes())?;
        debug!("Saved profile '{}' to {}", self.name(), path.display());
        Ok(())
    }

    /// Save the profile as `<dir>/<name>.yaml`
    ///
    /// With `make_current`, the profile also becomes the current one. If
    /// updating the pointer fails, the profile stays saved and the error is
    /// returned.
    pub fn save_to_dir(&self, dir: impl AsRef<Path>, make_current: bool) -> Result<()> {
        let dir = require_dir(dir.as_ref(), "cannot save profile")?;
        let name = self.name();
        self.save_to_file(dir.join(profile_file_name(&name)))?;
        if make_current {
            set_current_profile_name(dir, &name)?;
        }
        Ok(())
    }

    /// Credential file locations for this profile
    pub fn credential_paths(&self) -> CredentialPaths {
        CredentialPaths::new(&self.dir, &self.name(), &self.username)
    }

    /// Build a TLS client configuration from this profile's stored credentials
    pub fn tls(&self) -> Result<ClientConfig> {
        tls::client_config(&self.credential_paths())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::profile_manager::{current_profile_name, profile_from_dir};

    fn create_test_profile() -> Profile {
        Profile {
            web_proxy_addr: "proxy.example.com:3080".to_string(),
            ssh_proxy_addr: "proxy.example.com:3023".to_string(),
            kube_proxy_addr: "proxy.example.com:3026".to_string(),
            username: "alice".to_string(),
            auth_type: "github".to_string(),
            site_name: "example".to_string(),
            forwarded_ports: vec!["8080:localhost:80".to_string()],
            dynamic_forwarded_ports: vec!["1080".to_string()],
            dir: PathBuf::new(),
        }
    }

    #[test]
    fn test_name_from_web_proxy_addr() {
        let profile = create_test_profile();
        assert_eq!(profile.name(), "proxy.example.com");

        let ipv6 = Profile {
            web_proxy_addr: "[::1]:3080".to_string(),
            ..Default::default()
        };
        assert_eq!(ipv6.name(), "::1");
    }

    #[test]
    fn test_name_falls_back_to_raw_addr() {
        let profile = Profile {
            web_proxy_addr: "proxy.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.name(), "proxy.example.com");

        let extra_port = Profile {
            web_proxy_addr: "[::1]:80:90".to_string(),
            ..Default::default()
        };
        assert_eq!(extra_port.name(), "[::1]:80:90");

        assert_eq!(Profile::default().name(), "");
    }

    #[test]
    fn test_yaml_round_trip() {
        let profile = create_test_profile();
        let yaml = profile.to_yaml().unwrap();

        assert!(yaml.contains("web_proxy_addr: proxy.example.com:3080"));
        assert!(yaml.contains("user: alice"));
        assert!(yaml.contains("cluster: example"));
        assert!(yaml.contains("forward_ports:"));
        assert!(yaml.contains("dynamic_forward_ports:"));

        let parsed = Profile::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_sparse_encoding() {
        let profile = Profile {
            web_proxy_addr: "proxy.example.com:443".to_string(),
            dir: PathBuf::from("/should/not/be/written"),
            ..Default::default()
        };
        let yaml = profile.to_yaml().unwrap();

        assert_eq!(yaml.trim(), "web_proxy_addr: proxy.example.com:443");
        assert!(!yaml.contains("dir"));

        let parsed = Profile::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.web_proxy_addr, "proxy.example.com:443");
        assert!(parsed.username.is_empty());
        assert!(parsed.forwarded_ports.is_empty());
        assert_eq!(parsed.dir, PathBuf::new());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed = Profile::from_yaml("user: bob\nsome_future_field: 1\n").unwrap();
        assert_eq!(parsed.username, "bob");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Profile::from_yaml("").unwrap(), Profile::default());
        assert_eq!(Profile::from_yaml("  \n").unwrap(), Profile::default());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Profile::from_yaml("user: [unterminated").unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn test_save_to_file_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.yaml");
        std::fs::write(&path, "a lot of old content that is longer than the profile\n").unwrap();

        let profile = Profile {
            web_proxy_addr: "p:1".to_string(),
            ..Default::default()
        };
        profile.save_to_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "web_proxy_addr: p:1");
    }

    #[test]
    fn test_save_to_file_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("profile.yaml");

        let err = create_test_profile().save_to_file(&path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_save_to_dir_make_current() {
        let temp_dir = TempDir::new().unwrap();
        let profile = Profile {
            web_proxy_addr: "proxy.example.com:443".to_string(),
            username: "alice".to_string(),
            ..Default::default()
        };

        profile.save_to_dir(temp_dir.path(), true).unwrap();

        assert!(temp_dir.path().join("proxy.example.com.yaml").is_file());
        assert_eq!(
            current_profile_name(temp_dir.path()).unwrap(),
            "proxy.example.com"
        );

        let loaded = profile_from_dir(temp_dir.path(), "").unwrap();
        assert_eq!(loaded.name(), "proxy.example.com");
        assert_eq!(loaded.username, "alice");
        assert_eq!(loaded.dir, temp_dir.path());
    }

    #[test]
    fn test_save_to_dir_without_make_current() {
        let temp_dir = TempDir::new().unwrap();
        create_test_profile().save_to_dir(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join("proxy.example.com.yaml").is_file());
        assert!(current_profile_name(temp_dir.path()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_save_to_dir_same_host_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let mut profile = create_test_profile();
        profile.save_to_dir(temp_dir.path(), false).unwrap();

        profile.web_proxy_addr = "proxy.example.com:443".to_string();
        profile.username = "bob".to_string();
        profile.save_to_dir(temp_dir.path(), false).unwrap();

        let loaded = profile_from_dir(temp_dir.path(), "proxy.example.com").unwrap();
        assert_eq!(loaded.username, "bob");
        assert_eq!(loaded.web_proxy_addr, "proxy.example.com:443");
    }

    #[test]
    fn test_save_to_dir_empty_dir() {
        let err = create_test_profile().save_to_dir("", true).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_credential_paths_use_loaded_dir() {
        let profile = Profile {
            dir: PathBuf::from("/home/alice/.tsh"),
            ..create_test_profile()
        };
        let paths = profile.credential_paths();
        assert_eq!(
            paths.cert(),
            Path::new("/home/alice/.tsh/keys/proxy.example.com/alice-x509.pem")
        );
    }
}
