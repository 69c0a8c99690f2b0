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

//! Cluster-side configuration records

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

use crate::machinery::pki::{PemCertificateAndKey, PemKey};

/// Cluster-wide settings: identity, secrets, control-plane service configs,
/// networking and bootstrap manifests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub id: String,
    pub secret: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane: Option<ControlPlaneConfig>,
    pub cluster_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<ClusterNetworkConfig>,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secretbox_encryption_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<PemCertificateAndKey>,
    #[serde(rename = "aggregatorCA", default, skip_serializing_if = "Option::is_none")]
    pub aggregator_ca: Option<PemCertificateAndKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<PemKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_server: Option<ApiServerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_manager: Option<ControllerManagerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<SchedulerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etcd: Option<EtcdConfig>,
    #[serde(default)]
    pub extra_manifests: Vec<String>,
    #[serde(default)]
    pub extra_manifest_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub inline_manifests: Vec<ClusterInlineManifest>,
}

/// The cluster endpoint nodes join through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPlaneConfig {
    pub endpoint: Url,
}

/// API server settings, including admission control plugins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiServerConfig {
    pub image: String,
    #[serde(rename = "certSANs", default)]
    pub cert_sans: Vec<String>,
    #[serde(default)]
    pub extra_args: BTreeMap<String, String>,
    #[serde(default)]
    pub admission_control: Vec<AdmissionPluginConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_pod_security_policy: Option<bool>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub audit_policy: Value,
}

/// One admission plugin and its unstructured configuration body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdmissionPluginConfig {
    pub name: String,
    pub configuration: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerManagerConfig {
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtcdConfig {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<PemCertificateAndKey>,
}

/// Pod/service subnets, cluster DNS domain and the optional CNI block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetworkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cni: Option<CniConfig>,
    pub dns_domain: String,
    #[serde(default)]
    pub pod_subnets: Vec<String>,
    #[serde(default)]
    pub service_subnets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CniConfig {
    pub name: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// A manifest applied verbatim during cluster bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInlineManifest {
    pub name: String,
    pub contents: String,
}
