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

//! Factory functions for configuration records
//!
//! Each function is a pure mapping from explicit parameters to one
//! fully-initialized record. Nothing here validates cross-parameter
//! consistency; the node applying the finished document does that.

pub mod cluster;
pub mod machine;
pub mod network;

pub use self::cluster::{
    new_cluster_config_control_plane, new_cluster_config_worker, new_cluster_network_config,
    new_cluster_network_config_with_cni, new_cni_calico, new_cni_custom, new_cni_none,
    new_api_server_config, new_controller_manager_config, new_etcd_config, new_kube_proxy_config,
    new_scheduler_config,
};
pub use self::machine::{
    new_disk_encryption_config, new_install_config, new_kubelet_config, new_machine_config,
    new_machine_disk, new_node_config, new_registry_basic_auth, EncryptionProvider, MachineType,
};
pub use self::network::{new_network_config, new_nic_fixed_ip, new_nic_vip};

/// Container image reference as `image:tag`. No validation of either part.
pub(crate) fn image_ref(image: &str, tag: &str) -> String {
    format!("{}:{}", image, tag)
}
