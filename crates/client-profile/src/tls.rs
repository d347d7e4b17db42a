// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Client Profile Contributors

// Client Profile - TLS Module
// Assembles a client TLS configuration from a profile's stored credentials

use std::fs;
use std::io::BufReader;
use std::path::Path;

use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ClientConfig, RootCertStore};
use rustls_pemfile::{certs, private_key};
use tracing::debug;

use crate::error::{Error, Result};
use crate::keys::CredentialPaths;

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Parse every PEM certificate in `pem`, skipping other sections
fn parse_certs(pem: &[u8], path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let mut reader = BufReader::new(pem);
    certs(&mut reader)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::io(path, e))
}

/// Load a client certificate chain and its private key
pub fn load_cert_and_key(
    cert_path: &Path,
    key_path: &Path,
) -> Result<(Vec<CertificateDer<'static>>, PrivateKeyDer<'static>)> {
    let cert_pem = read_file(cert_path)?;
    let key_pem = read_file(key_path)?;

    let chain = parse_certs(&cert_pem, cert_path)?;
    if chain.is_empty() {
        return Err(Error::Validation(format!(
            "invalid client certificate data in {}",
            cert_path.display()
        )));
    }

    let mut key_reader = BufReader::new(key_pem.as_slice());
    let key = private_key(&mut key_reader)
        .map_err(|e| Error::io(key_path, e))?
        .ok_or_else(|| {
            Error::Validation(format!("no private key found in {}", key_path.display()))
        })?;

    Ok((chain, key))
}

/// Build a trust pool from a PEM CA bundle
///
/// Fails unless at least one certificate is accepted as a trust anchor.
pub fn load_root_store(ca_path: &Path) -> Result<RootCertStore> {
    let ca_pem = read_file(ca_path)?;

    let ca_certs = parse_certs(&ca_pem, ca_path)
        .map_err(|_| Error::Validation("invalid CA certificate data".to_string()))?;

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(ca_certs);
    if ignored > 0 {
        debug!(
            "Ignored {} unparsable certificates in {}",
            ignored,
            ca_path.display()
        );
    }
    if added == 0 {
        return Err(Error::Validation("invalid CA certificate data".to_string()));
    }

    Ok(roots)
}

/// Create a rustls ClientConfig presenting the stored client certificate
/// and trusting only the stored CA bundle
pub fn client_config(paths: &CredentialPaths) -> Result<ClientConfig> {
    // Install default crypto provider if not already set
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let (chain, key) = load_cert_and_key(paths.cert(), paths.key())?;
    let roots = load_root_store(paths.ca_bundle())?;

    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_client_auth_cert(chain, key)?;

    debug!(
        "Loaded TLS credentials from {}",
        paths.keys_dir().display()
    );

    Ok(config)
}
