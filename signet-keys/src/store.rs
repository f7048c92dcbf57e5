//! Versioned on-disk store for Ed25519 signing keys
//!
//! The manager is the authoritative owner of the store document and the
//! per-version PEM files; all mutations go through it. It assumes a single
//! writer: rotation is an operator-driven, low-frequency operation and there
//! is no file lock, so two concurrent rotations against the same directory
//! can lose one of the appended entries.
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


use crate::config::KeyStoreConfig;
use crate::error::{KeyError, KeyResult};
use crate::key_types::{GeneratedKeyPair, KeyListing, KeyPair, KeyStore};
use crate::pem::{self, PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL};
use chrono::Utc;
use ed25519_dalek::pkcs8::{EncodePrivateKey, EncodePublicKey};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use tokio::fs;
use tracing::{debug, info, warn};

/// Manager for one key-store directory.
pub struct KeyStoreManager {
    config: KeyStoreConfig,
}

impl KeyStoreManager {
    pub fn new(config: KeyStoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyStoreConfig {
        &self.config
    }

    /// Load the persisted store, or an empty one.
    ///
    /// A missing file is the normal first-run state. An unreadable or
    /// unparsable file is logged as a warning and treated as absent; the
    /// per-version PEM files on disk are not touched, so any data loss is
    /// visible to the operator rather than silent.
    pub async fn load_store(&self) -> KeyStore {
        let path = self.config.store_path();

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No key store file, starting with an empty store");
                return KeyStore::empty();
            }
            Err(e) => {
                let err = KeyError::StoreRead(e.to_string());
                warn!(path = %path.display(), error = %err, "Key store file unreadable, treating as empty");
                return KeyStore::empty();
            }
        };

        match serde_json::from_str::<KeyStore>(&contents) {
            Ok(store) => {
                debug!(
                    path = %path.display(),
                    current_version = store.current_version,
                    total_keys = store.keys.len(),
                    "Loaded key store"
                );
                store
            }
            Err(e) => {
                let err = KeyError::StoreRead(e.to_string());
                warn!(path = %path.display(), error = %err, "Key store file corrupt, treating as empty");
                KeyStore::empty()
            }
        }
    }

    /// Persist the store document, pretty-printed for human diffability.
    ///
    /// Writes to a temporary path and renames into place so a concurrent
    /// reader never observes a truncated document.
    pub async fn save_store(&self, store: &KeyStore) -> KeyResult<()> {
        let mut json = serde_json::to_string_pretty(store)?;
        json.push('\n');

        let tmp = self.config.store_tmp_path();
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, self.config.store_path()).await?;
        Ok(())
    }

    /// Generate a fresh Ed25519 key pair from the OS CSPRNG and encode the
    /// private half as PKCS#8 PEM, the public half as SPKI PEM.
    ///
    /// CPU-bound and synchronous; does not touch the store.
    pub fn generate_key_pair(&self) -> KeyResult<GeneratedKeyPair> {
        let signing_key = SigningKey::generate(&mut OsRng);

        let pkcs8 = signing_key
            .to_pkcs8_der()
            .map_err(|e| KeyError::KeyGeneration(format!("PKCS#8 export failed: {}", e)))?;
        let spki = signing_key
            .verifying_key()
            .to_public_key_der()
            .map_err(|e| KeyError::KeyGeneration(format!("SPKI export failed: {}", e)))?;

        Ok(GeneratedKeyPair {
            private_key: pem::encode(pkcs8.as_bytes(), PRIVATE_KEY_LABEL),
            public_key: pem::encode(spki.as_bytes(), PUBLIC_KEY_LABEL),
        })
    }

    /// Generate a key pair, write its per-version PEM files, append it to the
    /// store, and advance `current_version`. The only operation that does so.
    ///
    /// Directory-creation and write failures propagate: proceeding past them
    /// would either lose fresh private key material or leave the store
    /// document disagreeing with the PEM files next to it.
    pub async fn create_new_key_pair(&self) -> KeyResult<KeyStore> {
        fs::create_dir_all(&self.config.keys_dir).await?;

        let mut store = self.load_store().await;
        let new_version = store.current_version + 1;

        info!(version = new_version, "Generating Ed25519 key pair");
        let generated = self.generate_key_pair()?;

        // Per-version PEM files are write-once; only the store document is
        // ever rewritten.
        fs::write(
            self.config.private_key_path(new_version),
            &generated.private_key,
        )
        .await?;
        fs::write(
            self.config.public_key_path(new_version),
            &generated.public_key,
        )
        .await?;

        store.keys.push(KeyPair {
            private_key: generated.private_key,
            public_key: generated.public_key,
            created_at: Utc::now(),
            version: new_version,
        });
        store.current_version = new_version;

        self.save_store(&store).await?;
        info!(
            current_version = store.current_version,
            total_keys = store.keys.len(),
            "Key store updated"
        );
        Ok(store)
    }

    /// Promote a new key to current while retaining all history.
    ///
    /// On an empty store this is first-time creation, not an error; either
    /// way exactly one entry is appended and no prior entry is altered.
    pub async fn rotate(&self) -> KeyResult<KeyStore> {
        let store = self.load_store().await;
        if store.is_empty() {
            info!("Key store is empty, creating the initial key pair");
        } else {
            info!(current_version = store.current_version, "Rotating signing key");
        }
        self.create_new_key_pair().await
    }

    /// Enumerate stored key versions oldest-first. Read-only and idempotent.
    pub async fn list_keys(&self) -> Vec<KeyListing> {
        let store = self.load_store().await;
        store
            .keys
            .iter()
            .map(|k| KeyListing {
                version: k.version,
                created_at: k.created_at,
                is_current: k.version == store.current_version,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::pkcs8::{DecodePrivateKey, DecodePublicKey};
    use ed25519_dalek::VerifyingKey;
    use tempfile::TempDir;

    fn test_manager() -> (KeyStoreManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let manager = KeyStoreManager::new(KeyStoreConfig::new(temp_dir.path()));
        (manager, temp_dir)
    }

    #[test]
    fn test_generated_keys_parse_back() {
        let (manager, _temp_dir) = test_manager();
        let generated = manager.generate_key_pair().unwrap();

        let pkcs8 = pem::decode(&generated.private_key, PRIVATE_KEY_LABEL).unwrap();
        let signing_key = SigningKey::from_pkcs8_der(&pkcs8).unwrap();

        let spki = pem::decode(&generated.public_key, PUBLIC_KEY_LABEL).unwrap();
        let verifying_key = VerifyingKey::from_public_key_der(&spki).unwrap();

        assert_eq!(signing_key.verifying_key(), verifying_key);
    }

    #[test]
    fn test_generated_key_pairs_differ() {
        let (manager, _temp_dir) = test_manager();
        let a = manager.generate_key_pair().unwrap();
        let b = manager.generate_key_pair().unwrap();
        assert_ne!(a.private_key, b.private_key);
        assert_ne!(a.public_key, b.public_key);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let (manager, _temp_dir) = test_manager();
        let store = manager.create_new_key_pair().await.unwrap();

        let loaded = manager.load_store().await;
        assert_eq!(loaded.current_version, store.current_version);
        assert_eq!(loaded.keys.len(), 1);
        assert_eq!(loaded.keys[0].private_key, store.keys[0].private_key);
        assert_eq!(loaded.keys[0].created_at, store.keys[0].created_at);
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let (manager, _temp_dir) = test_manager();
        manager.create_new_key_pair().await.unwrap();
        assert!(manager.config().store_path().exists());
        assert!(!manager.config().store_tmp_path().exists());
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        // A plain file where the keys directory should be makes
        // create_dir_all fail.
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("keys");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let manager = KeyStoreManager::new(KeyStoreConfig::new(&blocker));
        let err = manager.create_new_key_pair().await.unwrap_err();
        assert!(matches!(err, KeyError::Persistence(_)));
    }
}
