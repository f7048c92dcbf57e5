//! Ed25519 signing-key lifecycle management for Signet
//!
//! Generates versioned Ed25519 key pairs, persists them as PEM files plus a
//! JSON store document, and rotates the current signing key while keeping
//! every historical key pair available for verification.
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


pub mod config;
pub mod error;
pub mod key_types;
pub mod pem;
pub mod service_integration;
pub mod store;

pub use config::KeyStoreConfig;
pub use error::{KeyError, KeyResult};
pub use key_types::{GeneratedKeyPair, KeyListing, KeyPair, KeyStore};
pub use service_integration::*;
pub use store::KeyStoreManager;
