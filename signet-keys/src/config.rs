//! Storage configuration for the key store manager
// Copyright 2025 Francisco F. Pinochet
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use std::env;
use std::path::{Path, PathBuf};

/// File name of the store document inside the keys directory.
const STORE_FILE: &str = "keystore.json";

/// Where key material lives on disk.
///
/// Passed explicitly into [`KeyStoreManager`](crate::store::KeyStoreManager)
/// at construction so tests can point a manager at an isolated temporary
/// directory without touching process-wide state.
#[derive(Debug, Clone)]
pub struct KeyStoreConfig {
    /// Directory holding `keystore.json` and the per-version PEM files.
    pub keys_dir: PathBuf,
}

impl KeyStoreConfig {
    pub fn new<P: AsRef<Path>>(keys_dir: P) -> Self {
        Self {
            keys_dir: keys_dir.as_ref().to_path_buf(),
        }
    }

    /// Build from the environment: `SIGNET_KEYS_DIR`, defaulting to `./keys`.
    /// Loads a `.env` file first when one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let dir = env::var("SIGNET_KEYS_DIR").unwrap_or_else(|_| "./keys".to_string());
        Self::new(dir)
    }

    /// Path of the persisted store document.
    pub fn store_path(&self) -> PathBuf {
        self.keys_dir.join(STORE_FILE)
    }

    /// Temporary path the store document is staged at before the atomic
    /// rename into place.
    pub fn store_tmp_path(&self) -> PathBuf {
        self.keys_dir.join(format!("{}.tmp", STORE_FILE))
    }

    /// Path of the private key PEM for a given version.
    pub fn private_key_path(&self, version: u32) -> PathBuf {
        self.keys_dir.join(format!("private-v{}.pem", version))
    }

    /// Path of the public key PEM for a given version.
    pub fn public_key_path(&self, version: u32) -> PathBuf {
        self.keys_dir.join(format!("public-v{}.pem", version))
    }
}

impl Default for KeyStoreConfig {
    fn default() -> Self {
        Self::new("./keys")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_derived_from_keys_dir() {
        let config = KeyStoreConfig::new("/var/lib/signet/keys");
        assert_eq!(
            config.store_path(),
            PathBuf::from("/var/lib/signet/keys/keystore.json")
        );
        assert_eq!(
            config.private_key_path(3),
            PathBuf::from("/var/lib/signet/keys/private-v3.pem")
        );
        assert_eq!(
            config.public_key_path(12),
            PathBuf::from("/var/lib/signet/keys/public-v12.pem")
        );
    }
}
