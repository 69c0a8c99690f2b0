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

// Core modules
pub mod builders;
pub mod machinery;
pub mod shared;

// Re-export commonly used types
pub use machinery::pki::{PemCertificate, PemCertificateAndKey, PemKey};
pub use machinery::v1alpha1::Config;
pub use shared::{ConfigError, Result};

// Re-export the builder surface
pub use builders::{
    new_api_server_config, new_cluster_config_control_plane, new_cluster_config_worker,
    new_cluster_network_config, new_cluster_network_config_with_cni, new_cni_calico,
    new_cni_custom, new_cni_none, new_controller_manager_config, new_disk_encryption_config,
    new_etcd_config, new_install_config, new_kube_proxy_config, new_kubelet_config,
    new_machine_config, new_machine_disk, new_network_config, new_nic_fixed_ip, new_nic_vip,
    new_node_config, new_registry_basic_auth, new_scheduler_config, EncryptionProvider,
    MachineType,
};
