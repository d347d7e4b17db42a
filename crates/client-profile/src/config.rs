// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// On-disk naming conventions and profile directory resolution

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Default profile directory name, relative to the user's home directory
pub const PROFILE_DIR: &str = ".tsh";

/// Suffix of profile files inside the profile directory
pub const PROFILE_FILE_EXT: &str = ".yaml";

/// File holding the name of the currently active profile
pub const CURRENT_PROFILE_FILENAME: &str = "current-profile";

/// Subdirectory of the profile directory holding per-profile credentials
pub const SESSION_KEY_DIR: &str = "keys";

/// Suffix appended to the username for the client TLS certificate
pub const FILE_EXT_TLS_CERT: &str = "-x509.pem";

/// CA bundle file name inside a profile's credential directory
pub const FILE_NAME_TLS_CERTS: &str = "certs.pem";

/// Mode for profile and pointer files
#[cfg(unix)]
pub const PROFILE_FILE_MODE: u32 = 0o660;

/// Get the full path to the profile directory
///
/// A non-empty `dir` is returned unmodified. Otherwise the default
/// `~/.tsh` is used, falling back to the temp directory when the home
/// directory cannot be determined.
pub fn full_profile_path(dir: impl AsRef<Path>) -> PathBuf {
    let dir = dir.as_ref();
    if !dir.as_os_str().is_empty() {
        return dir.to_path_buf();
    }
    default_profile_path()
}

fn default_profile_path() -> PathBuf {
    let base = match dirs::home_dir() {
        Some(home) => home,
        None => {
            let tmp = std::env::temp_dir();
            warn!(
                "Could not determine home directory, using {} for profiles",
                tmp.display()
            );
            tmp
        }
    };
    let path = base.join(PROFILE_DIR);
    debug!("Default profile directory: {}", path.display());
    path
}

/// File name of the profile called `name`
pub fn profile_file_name(name: &str) -> String {
    format!("{}{}", name, PROFILE_FILE_EXT)
}
