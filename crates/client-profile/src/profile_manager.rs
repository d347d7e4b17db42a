// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Client Profile - Profile Manager Module
// Profile directory operations: listing, loading and the current-profile pointer

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{profile_file_name, CURRENT_PROFILE_FILENAME, PROFILE_FILE_EXT};
use crate::error::{Error, Result};
use crate::Profile;

pub use crate::config::full_profile_path;

pub(crate) fn require_dir<'a>(dir: &'a Path, action: &str) -> Result<&'a Path> {
    if dir.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(format!("{}: missing dir", action)));
    }
    Ok(dir)
}

/// Write a profile or pointer file, replacing any existing content
pub(crate) fn write_profile_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(crate::config::PROFILE_FILE_MODE);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(contents))
        .map_err(|e| Error::io(path, e))
}

/// Set the name of the current profile
pub fn set_current_profile_name(dir: impl AsRef<Path>, name: &str) -> Result<()> {
    let dir = require_dir(dir.as_ref(), "cannot set current profile")?;
    let path = dir.join(CURRENT_PROFILE_FILENAME);
    let name = name.trim();

    write_profile_file(&path, format!("{}\n", name).as_bytes())?;

    debug!("Set current profile to '{}' in {}", name, dir.display());
    Ok(())
}

/// Get the name of the current profile
///
/// A missing pointer file and a blank one both return `NotFound`.
pub fn current_profile_name(dir: impl AsRef<Path>) -> Result<String> {
    let dir = require_dir(dir.as_ref(), "cannot get current profile")?;
    let path = dir.join(CURRENT_PROFILE_FILENAME);

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(format!(
                "{} is not set",
                CURRENT_PROFILE_FILENAME
            )));
        }
        Err(e) => return Err(Error::io(&path, e)),
    };

    let name = contents.trim();
    if name.is_empty() {
        return Err(Error::NotFound(format!(
            "{} is not set",
            CURRENT_PROFILE_FILENAME
        )));
    }
    Ok(name.to_string())
}

/// List the names of all profiles in `dir`
///
/// Subdirectories, symlinks and files without the profile suffix are
/// skipped, as are file names that are not valid UTF-8: such a name could
/// not be passed back to `profile_from_dir`. Names are returned in
/// directory order.
pub fn list_profile_names(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = require_dir(dir.as_ref(), "cannot list profiles")?;
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| Error::io(&entry.path(), e))?;

        if file_type.is_dir() || file_type.is_symlink() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 entry: {}", entry.path().display());
            continue;
        };

        if let Some(name) = file_name.strip_suffix(PROFILE_FILE_EXT) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Resolve a profile name, falling back to the current profile when empty
pub fn resolve_profile_name(dir: impl AsRef<Path>, name: &str) -> Result<String> {
    if !name.is_empty() {
        return Ok(name.to_string());
    }
    current_profile_name(dir)
}

/// Path of the profile file for `name` (or the current profile when empty)
pub fn profile_path(dir: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
    let dir = require_dir(dir.as_ref(), "cannot resolve profile")?;
    let name = resolve_profile_name(dir, name)?;
    Ok(dir.join(profile_file_name(&name)))
}

/// Load a profile from `dir`
///
/// An empty `name` loads the current profile. The returned profile has its
/// `dir` set to `dir`.
pub fn profile_from_dir(dir: impl AsRef<Path>, name: &str) -> Result<Profile> {
    let dir = require_dir(dir.as_ref(), "cannot load profile")?;
    let path = profile_path(dir, name)?;

    let mut profile = load_profile(&path)?;
    profile.dir = dir.to_path_buf();

    debug!("Loaded profile '{}' from {}", profile.name(), path.display());
    Ok(profile)
}

/// Load a single profile from a file path
pub fn load_profile(path: &Path) -> Result<Profile> {
    let contents =
        fs::read_to_string(path).map_err(|e| Error::io_or_not_found(path, e, "profile"))?;

    Profile::parse(&contents, format!("Failed to parse {}", path.display()))
}
