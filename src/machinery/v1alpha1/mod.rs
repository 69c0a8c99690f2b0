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

//! `v1alpha1` configuration document schema
//!
//! Record types mirroring the Talos `v1alpha1` machine configuration
//! document. The schema is defined here so documents can be assembled and
//! marshaled without the upstream machinery; validation of the assembled
//! values stays with the node that eventually applies the document.

pub mod cluster;
pub mod machine;
pub mod network;

use serde::{Deserialize, Serialize};

use crate::shared::error::Result;

pub use self::cluster::{
    AdmissionPluginConfig, ApiServerConfig, ClusterConfig, ClusterInlineManifest,
    ClusterNetworkConfig, CniConfig, ControlPlaneConfig, ControllerManagerConfig, EtcdConfig,
    ProxyConfig, SchedulerConfig,
};
pub use self::machine::{
    DiskPartition, EncryptionConfig, InstallConfig, KernelConfig, KernelModuleConfig,
    KubeletConfig, MachineConfig, MachineControlPlaneConfig, MachineControllerManagerConfig,
    MachineDisk, MachineFile, MachineSchedulerConfig, RegistriesConfig, RegistryAuthConfig,
    RegistryConfig, RegistryTlsConfig, SystemDiskEncryptionConfig, TimeConfig, UdevConfig,
};
pub use self::network::{
    Device, DeviceVipConfig, ExtraHost, NetworkConfig, NetworkKubeSpan,
};

/// The top-level node configuration document: one machine section and one
/// cluster section under a fixed schema version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    pub machine: MachineConfig,
    pub cluster: ClusterConfig,
}

impl Config {
    /// Marshal the document to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Unmarshal a document from YAML.
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}
