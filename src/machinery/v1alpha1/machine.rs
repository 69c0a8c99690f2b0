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

//! Machine-side configuration records
//!
//! Field names serialize to the `v1alpha1` document wire names. Optional
//! sub-records are omitted when unset; collections always serialize, even
//! when empty, so a built document carries explicit empty mappings and
//! sequences rather than absent keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::machinery::pki::{PemCertificate, PemCertificateAndKey};

/// Per-node machine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineConfig {
    #[serde(rename = "type")]
    pub machine_type: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca: Option<PemCertificateAndKey>,
    #[serde(rename = "acceptedCAs", default)]
    pub accepted_cas: Vec<PemCertificate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubelet: Option<KubeletConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<super::network::NetworkConfig>,
    #[serde(default)]
    pub disks: Vec<MachineDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<InstallConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane: Option<MachineControlPlaneConfig>,
    #[serde(default)]
    pub files: Vec<MachineFile>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<KernelConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udev: Option<UdevConfig>,
    #[serde(default)]
    pub registries: RegistriesConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disk_encryption: Option<SystemDiskEncryptionConfig>,
    #[serde(default)]
    pub node_annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub node_taints: BTreeMap<String, String>,
}

/// Machine-level toggles for control-plane components scheduled on this node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineControlPlaneConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_manager: Option<MachineControllerManagerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<MachineSchedulerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineControllerManagerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSchedulerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Kubelet settings. `extra_config` is an unstructured block merged into the
/// kubelet configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubeletConfig {
    pub image: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub extra_config: Value,
}

/// A disk and its partition layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDisk {
    pub device: String,
    #[serde(default)]
    pub partitions: Vec<DiskPartition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskPartition {
    /// Partition size in bytes.
    pub size: u64,
    pub mountpoint: String,
}

/// Installer settings for writing the OS image to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    pub disk: String,
    #[serde(default)]
    pub extra_kernel_args: Vec<String>,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wipe: Option<bool>,
    #[serde(rename = "legacyBIOSSupport", default, skip_serializing_if = "Option::is_none")]
    pub legacy_bios_support: Option<bool>,
}

/// A file laid down on the host filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineFile {
    pub content: String,
    pub permissions: u32,
    pub path: String,
    pub op: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default)]
    pub modules: Vec<KernelModuleConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelModuleConfig {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdevConfig {
    #[serde(default)]
    pub rules: Vec<String>,
}

/// Per-registry overrides, keyed by registry hostname.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistriesConfig {
    #[serde(default)]
    pub config: BTreeMap<String, RegistryConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<RegistryTlsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<RegistryAuthConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryTlsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure_skip_verify: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryAuthConfig {
    pub username: String,
    pub password: String,
}

/// System-disk encryption settings for the state and ephemeral partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDiskEncryptionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<EncryptionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<EncryptionConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionConfig {
    pub provider: String,
}
