//! Error types for signing-key lifecycle management
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


use thiserror::Error;

/// Signing-key lifecycle errors
#[derive(Error, Debug)]
pub enum KeyError {
    /// Store file exists but could not be read or parsed. Recovered inside
    /// `load_store` by substituting an empty store; never reaches callers.
    #[error("Failed to read key store: {0}")]
    StoreRead(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// Directory creation or file write failed. Fatal: the store must not be
    /// left half-written, so this is never retried here.
    #[error("Persistence error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed PEM: {0}")]
    MalformedPem(String),
}

/// Result type for key lifecycle operations
pub type KeyResult<T> = Result<T, KeyError>;
