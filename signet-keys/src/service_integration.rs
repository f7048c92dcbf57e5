//! Helpers for services embedding the key store
//!
//! The HTTP layer verifies tokens with public keys only: the current one for
//! freshly issued tokens and historical ones, by version, for tokens issued
//! before a rotation. The current private key is the only material that
//! should ever reach a signing operation.
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
use crate::store::KeyStoreManager;
use std::sync::Arc;
use tracing::info;

/// Initialize a key store manager for a service.
///
/// Resolution order for the keys directory: explicit argument, then the
/// `SIGNET_KEYS_DIR` environment variable, then `./keys`.
pub fn init_key_manager(keys_dir: Option<&str>) -> Arc<KeyStoreManager> {
    let config = match keys_dir {
        Some(dir) => KeyStoreConfig::new(dir),
        None => KeyStoreConfig::from_env(),
    };

    info!(keys_dir = %config.keys_dir.display(), "Initializing key store manager");
    Arc::new(KeyStoreManager::new(config))
}

/// Public key PEM of the current signing key, or `None` before the first
/// rotation.
pub async fn current_public_key_pem(manager: &KeyStoreManager) -> Option<String> {
    let store = manager.load_store().await;
    store.current_key().map(|k| k.public_key.clone())
}

/// Public key PEM for a specific version, current or retired. Retired keys
/// stay available so tokens signed before a rotation remain verifiable.
pub async fn public_key_pem_for_version(
    manager: &KeyStoreManager,
    version: u32,
) -> Option<String> {
    let store = manager.load_store().await;
    store.key_for_version(version).map(|k| k.public_key.clone())
}

/// Private key PEM of the current signing key. Hand this to a signing
/// operation and nothing else; retired private keys are deliberately not
/// exposed here.
pub async fn current_private_key_pem(manager: &KeyStoreManager) -> Option<String> {
    let store = manager.load_store().await;
    store.current_key().map(|k| k.private_key.clone())
}
