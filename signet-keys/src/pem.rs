//! PEM framing for DER-encoded key material
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


use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{KeyError, KeyResult};

/// Base64 body line width per RFC 7468.
const LINE_WIDTH: usize = 64;

/// PEM label for PKCS#8 private key material.
pub const PRIVATE_KEY_LABEL: &str = "PRIVATE KEY";

/// PEM label for SPKI public key material.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Wrap a DER buffer in a PEM block with the given label.
///
/// Output is deterministic: standard-alphabet base64, 64-character lines,
/// `-----BEGIN {label}-----` / `-----END {label}-----` delimiters, and a
/// trailing newline.
pub fn encode(der: &[u8], label: &str) -> String {
    let body = STANDARD.encode(der);

    let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + label.len() * 2 + 32);
    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");

    let mut rest = body.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }

    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Invert [`encode`]: strip the delimiters, join the body lines, and
/// base64-decode them back to the original DER buffer.
pub fn decode(pem: &str, label: &str) -> KeyResult<Vec<u8>> {
    let begin = format!("-----BEGIN {}-----", label);
    let end = format!("-----END {}-----", label);

    let mut lines = pem.trim().lines();
    if lines.next() != Some(begin.as_str()) {
        return Err(KeyError::MalformedPem(format!(
            "missing '{}' delimiter",
            begin
        )));
    }

    let mut body = String::new();
    let mut saw_end = false;
    for line in lines {
        if line == end {
            saw_end = true;
            break;
        }
        body.push_str(line.trim());
    }
    if !saw_end {
        return Err(KeyError::MalformedPem(format!("missing '{}' delimiter", end)));
    }

    STANDARD
        .decode(body.as_bytes())
        .map_err(|e| KeyError::MalformedPem(format!("invalid base64 body: {}", e)))
}
