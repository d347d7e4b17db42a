// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Client Profile Library
// Locally persisted connection profiles, the current-profile pointer and
// TLS client credentials derived from them

pub mod config;
pub mod connect;
pub mod error;
pub mod keys;
pub mod network;
pub mod profile;
pub mod profile_manager;
pub mod store;
pub mod tls;

pub use config::{full_profile_path, CURRENT_PROFILE_FILENAME, PROFILE_DIR, PROFILE_FILE_EXT};
pub use connect::{ConnectProfile, ConnectProfileWriter};
pub use error::{Error, Result};
pub use keys::CredentialPaths;
pub use network::{split_host_port, AddrError};
pub use profile::Profile;
pub use profile_manager::{
    current_profile_name, list_profile_names, load_profile, profile_from_dir, profile_path,
    resolve_profile_name, set_current_profile_name,
};
pub use store::{FsProfileStore, MemoryProfileStore, ProfileStore};

// Re-export commonly used external types
pub use rustls::ClientConfig;
