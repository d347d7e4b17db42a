// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Profile store abstraction over a storage backend

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::config::profile_file_name;
use crate::error::{Error, Result};
use crate::profile_manager::{self, require_dir};
use crate::Profile;

/// Storage for named profiles and the current-profile pointer
///
/// Backends implement the primitive operations; name resolution and
/// "save and make current" are shared.
pub trait ProfileStore {
    /// Name of the current profile, `NotFound` when unset
    fn current_profile_name(&self) -> Result<String>;

    fn set_current_profile_name(&self, name: &str) -> Result<()>;

    /// Names of all stored profiles, in no particular order
    fn profile_names(&self) -> Result<Vec<String>>;

    /// Read the profile stored under `name`, `NotFound` when absent
    fn read_profile(&self, name: &str) -> Result<Profile>;

    /// Store `profile` under its derived name, replacing any previous one
    fn write_profile(&self, profile: &Profile) -> Result<()>;

    fn resolve_profile_name(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            self.current_profile_name()
        } else {
            Ok(name.to_string())
        }
    }

    /// Load a profile by name, or the current profile when `name` is empty
    fn load_profile(&self, name: &str) -> Result<Profile> {
        let name = self.resolve_profile_name(name)?;
        self.read_profile(&name)
    }

    /// Save a profile, optionally making it the current one
    ///
    /// A pointer failure after a successful write is returned as is; the
    /// profile stays saved.
    fn save_profile(&self, profile: &Profile, make_current: bool) -> Result<()> {
        self.write_profile(profile)?;
        if make_current {
            self.set_current_profile_name(&profile.name())?;
        }
        Ok(())
    }
}

/// Profiles stored as `<name>.yaml` files in a directory
#[derive(Debug, Clone)]
pub struct FsProfileStore {
    dir: PathBuf,
}

impl FsProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        require_dir(&dir, "cannot open profile store")?;
        Ok(Self { dir })
    }

    /// Store at `dir`, or at the default profile directory when `dir` is empty
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: profile_manager::full_profile_path(dir),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.dir.join(profile_file_name(name))
    }
}

impl ProfileStore for FsProfileStore {
    fn current_profile_name(&self) -> Result<String> {
        profile_manager::current_profile_name(&self.dir)
    }

    fn set_current_profile_name(&self, name: &str) -> Result<()> {
        profile_manager::set_current_profile_name(&self.dir, name)
    }

    fn profile_names(&self) -> Result<Vec<String>> {
        profile_manager::list_profile_names(&self.dir)
    }

    fn read_profile(&self, name: &str) -> Result<Profile> {
        let mut profile = profile_manager::load_profile(&self.profile_path(name))?;
        profile.dir = self.dir.clone();
        Ok(profile)
    }

    fn write_profile(&self, profile: &Profile) -> Result<()> {
        profile.save_to_file(self.profile_path(&profile.name()))
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    profiles: BTreeMap<String, Profile>,
    current: Option<String>,
}

/// In-memory profile store
///
/// Loaded profiles get `dir` set to the store's nominal directory so that
/// credential paths resolve the same way they would on disk.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    dir: PathBuf,
    state: RwLock<MemoryState>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            state: RwLock::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ProfileStore for MemoryProfileStore {
    fn current_profile_name(&self) -> Result<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .current
            .clone()
            .ok_or_else(|| Error::NotFound("current profile is not set".to_string()))
    }

    fn set_current_profile_name(&self, name: &str) -> Result<()> {
        let name = name.trim();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.current = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        Ok(())
    }

    fn profile_names(&self) -> Result<Vec<String>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.profiles.keys().cloned().collect())
    }

    fn read_profile(&self, name: &str) -> Result<Profile> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let mut profile = state
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("profile '{}' not found", name)))?;
        profile.dir = self.dir.clone();
        Ok(profile)
    }

    fn write_profile(&self, profile: &Profile) -> Result<()> {
        let mut stored = profile.clone();
        stored.dir = PathBuf::new();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.profiles.insert(profile.name(), stored);
        Ok(())
    }
}
