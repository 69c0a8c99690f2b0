// Copyright 2025 Talos Config Contributors.
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

//! PEM-encoded certificate and key records
//!
//! Certificates and keys travel through the configuration documents as
//! base64-encoded PEM blobs. Nothing here parses or validates the material;
//! these records only carry it.

use serde::{Deserialize, Serialize};

/// A certificate paired with its private key, as carried by machine and
/// cluster CA fields. The key is optional: worker cluster configs embed the
/// certificate alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PemCertificateAndKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl PemCertificateAndKey {
    pub fn new(crt: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            crt: Some(crt.into()),
            key: Some(key.into()),
        }
    }

    /// Copy of this record with the private key dropped.
    pub fn certificate_only(&self) -> Self {
        Self {
            crt: self.crt.clone(),
            key: None,
        }
    }
}

/// A bare certificate, e.g. an additional accepted CA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PemCertificate {
    pub crt: String,
}

impl PemCertificate {
    pub fn new(crt: impl Into<String>) -> Self {
        Self { crt: crt.into() }
    }
}

/// A bare private key, e.g. the cluster service-account signing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PemKey {
    pub key: String,
}

impl PemKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
