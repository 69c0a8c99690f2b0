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

//! Machine-side builders: the node document, machine section, disks,
//! installer, registries, kubelet and disk encryption.

use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::machinery::pki::{PemCertificate, PemCertificateAndKey};
use crate::machinery::v1alpha1::{
    ClusterConfig, Config, DiskPartition, EncryptionConfig, InstallConfig, KernelConfig,
    KernelModuleConfig, KubeletConfig, MachineConfig, MachineControlPlaneConfig,
    MachineControllerManagerConfig, MachineDisk, MachineSchedulerConfig, NetworkConfig,
    RegistriesConfig, RegistryAuthConfig, RegistryConfig, RegistryTlsConfig,
    SystemDiskEncryptionConfig, TimeConfig, UdevConfig,
};
use crate::shared::constants::{
    CONFIG_VERSION, ENCRYPTION_PROVIDER_LUKS2, FEATURE_GATE_USER_NAMESPACES,
    FEATURE_GATE_USER_NAMESPACES_PSS, MACHINE_TYPE_CONTROL_PLANE, MACHINE_TYPE_WORKER,
};
use crate::shared::error::ConfigError;

/// Role a node plays in the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineType {
    Worker,
    ControlPlane,
}

impl MachineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MachineType::Worker => MACHINE_TYPE_WORKER,
            MachineType::ControlPlane => MACHINE_TYPE_CONTROL_PLANE,
        }
    }
}

impl std::str::FromStr for MachineType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MACHINE_TYPE_WORKER => Ok(MachineType::Worker),
            MACHINE_TYPE_CONTROL_PLANE => Ok(MachineType::ControlPlane),
            _ => Err(ConfigError::InvalidValue(format!(
                "Invalid machine type: {}",
                s
            ))),
        }
    }
}

/// System-disk encryption provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionProvider {
    Luks2,
}

impl EncryptionProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionProvider::Luks2 => ENCRYPTION_PROVIDER_LUKS2,
        }
    }
}

impl std::str::FromStr for EncryptionProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ENCRYPTION_PROVIDER_LUKS2 => Ok(EncryptionProvider::Luks2),
            _ => Err(ConfigError::InvalidValue(format!(
                "Invalid encryption provider: {}",
                s
            ))),
        }
    }
}

/// Combine a machine section and a cluster section into one node document.
/// Schema version is fixed and debug output is off.
pub fn new_node_config(machine: MachineConfig, cluster: ClusterConfig) -> Config {
    Config {
        version: CONFIG_VERSION.to_string(),
        debug: Some(false),
        machine,
        cluster,
    }
}

/// Assemble the machine section of a node document.
///
/// The controller-manager, scheduler and time-sync flag fields are explicitly
/// initialized rather than left absent, and annotation/taint/env mappings are
/// present but empty. Registries are wired in verbatim.
///
/// `_hostname`, `_endpoint` and `_port` are accepted for call-surface
/// compatibility but are not wired into the record; the hostname travels in
/// the network config instead. No consistency checking between the role and
/// the remaining parameters happens here.
#[allow(clippy::too_many_arguments)]
pub fn new_machine_config(
    machine_type: MachineType,
    token: &str,
    _hostname: &str,
    disks: Vec<MachineDisk>,
    network: NetworkConfig,
    install: InstallConfig,
    kubelet: KubeletConfig,
    registries: BTreeMap<String, RegistryConfig>,
    _endpoint: &str,
    _port: u16,
    kernel_modules: Vec<KernelModuleConfig>,
    udev_rules: Vec<String>,
    ca: PemCertificateAndKey,
    additional_cas: Vec<PemCertificate>,
) -> MachineConfig {
    debug!(
        machine_type = machine_type.as_str(),
        disks = disks.len(),
        registries = registries.len(),
        "assembling machine config"
    );

    MachineConfig {
        machine_type: machine_type.as_str().to_string(),
        token: token.to_string(),
        ca: Some(ca),
        accepted_cas: additional_cas,
        kubelet: Some(kubelet),
        network: Some(network),
        disks,
        install: Some(install),
        control_plane: Some(MachineControlPlaneConfig {
            controller_manager: Some(MachineControllerManagerConfig {
                disabled: Some(false),
            }),
            scheduler: Some(MachineSchedulerConfig {
                disabled: Some(false),
            }),
        }),
        files: Vec::new(),
        env: BTreeMap::new(),
        time: Some(TimeConfig {
            disabled: Some(false),
        }),
        kernel: Some(KernelConfig {
            modules: kernel_modules,
        }),
        udev: Some(UdevConfig { rules: udev_rules }),
        registries: RegistriesConfig {
            config: registries,
        },
        system_disk_encryption: Some(SystemDiskEncryptionConfig::default()),
        node_annotations: BTreeMap::new(),
        node_taints: BTreeMap::new(),
    }
}

/// Disk layout from a (size in bytes → mountpoint) mapping. One partition
/// per entry; the output order follows map iteration and is unspecified.
pub fn new_machine_disk(device: &str, partitions: HashMap<u64, String>) -> MachineDisk {
    let partitions = partitions
        .into_iter()
        .map(|(size, mountpoint)| DiskPartition { size, mountpoint })
        .collect();

    MachineDisk {
        device: device.to_string(),
        partitions,
    }
}

/// Installer settings. The install image is `image:tag`; legacy BIOS support
/// is always off.
pub fn new_install_config(
    image: &str,
    tag: &str,
    install_disk: &str,
    kernel_args: Vec<String>,
    wipe: bool,
) -> InstallConfig {
    InstallConfig {
        disk: install_disk.to_string(),
        extra_kernel_args: kernel_args,
        image: super::image_ref(image, tag),
        wipe: Some(wipe),
        legacy_bios_support: Some(false),
    }
}

/// Registry override with basic-auth credentials and an optional TLS
/// verification skip.
pub fn new_registry_basic_auth(
    username: &str,
    password: &str,
    tls_skip_verify: bool,
) -> RegistryConfig {
    RegistryConfig {
        tls: Some(RegistryTlsConfig {
            insecure_skip_verify: Some(tls_skip_verify),
        }),
        auth: Some(RegistryAuthConfig {
            username: username.to_string(),
            password: password.to_string(),
        }),
    }
}

/// Encryption settings naming the given provider.
pub fn new_disk_encryption_config(provider: EncryptionProvider) -> EncryptionConfig {
    EncryptionConfig {
        provider: provider.as_str().to_string(),
    }
}

/// Kubelet settings. The extra-config block enables the user-namespace
/// feature gates.
pub fn new_kubelet_config(image: &str, tag: &str) -> KubeletConfig {
    KubeletConfig {
        image: super::image_ref(image, tag),
        extra_config: json!({
            "featureGates": {
                (FEATURE_GATE_USER_NAMESPACES): true,
                (FEATURE_GATE_USER_NAMESPACES_PSS): true,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_machine_config() -> MachineConfig {
        let mut registries = BTreeMap::new();
        registries.insert(
            "registry.example.com".to_string(),
            new_registry_basic_auth("admin", "hunter2", false),
        );

        new_machine_config(
            MachineType::ControlPlane,
            "abcdef.0123456789abcdef",
            "node-0",
            vec![new_machine_disk(
                "/dev/sdb",
                HashMap::from([(512 * 1024 * 1024, "/var/lib/extra".to_string())]),
            )],
            NetworkConfig::default(),
            new_install_config("ghcr.io/siderolabs/installer", "v1.8.0", "/dev/sda", vec![], true),
            new_kubelet_config("ghcr.io/siderolabs/kubelet", "v1.31.0"),
            registries,
            "https://cluster.example.com",
            6443,
            vec![],
            vec!["SUBSYSTEM==\"block\", ENV{ID_FS_TYPE}=\"\"".to_string()],
            PemCertificateAndKey::new("Y3J0", "a2V5"),
            vec![PemCertificate::new("ZXh0cmE=")],
        )
    }

    #[test]
    fn test_machine_type_round_trips_through_str() {
        assert_eq!(MachineType::Worker.as_str(), "worker");
        assert_eq!(MachineType::ControlPlane.as_str(), "controlplane");
        assert_eq!("worker".parse::<MachineType>().unwrap(), MachineType::Worker);
        assert!("master".parse::<MachineType>().is_err());
    }

    #[test]
    fn test_encryption_provider_luks2() {
        let encryption = new_disk_encryption_config(EncryptionProvider::Luks2);
        assert_eq!(encryption.provider, "luks2");
        assert_eq!(
            "luks2".parse::<EncryptionProvider>().unwrap(),
            EncryptionProvider::Luks2
        );
        assert!("aes-xts".parse::<EncryptionProvider>().is_err());
    }

    #[test]
    fn test_node_config_has_fixed_version_and_debug_off() {
        let config = new_node_config(MachineConfig::default(), ClusterConfig::default());
        assert_eq!(config.version, "v1alpha1");
        assert_eq!(config.debug, Some(false));
    }

    #[test]
    fn test_machine_config_initializes_control_plane_flags() {
        let machine = sample_machine_config();

        let control_plane = machine.control_plane.unwrap();
        assert_eq!(
            control_plane.controller_manager.unwrap().disabled,
            Some(false)
        );
        assert_eq!(control_plane.scheduler.unwrap().disabled, Some(false));
        assert_eq!(machine.time.unwrap().disabled, Some(false));
    }

    #[test]
    fn test_machine_config_empty_collections_are_present() {
        let machine = sample_machine_config();

        assert!(machine.files.is_empty());
        assert!(machine.env.is_empty());
        assert!(machine.node_annotations.is_empty());
        assert!(machine.node_taints.is_empty());
        assert_eq!(
            machine.system_disk_encryption,
            Some(SystemDiskEncryptionConfig::default())
        );
    }

    #[test]
    fn test_machine_config_wires_registries_verbatim() {
        let machine = sample_machine_config();

        let registry = &machine.registries.config["registry.example.com"];
        let auth = registry.auth.as_ref().unwrap();
        assert_eq!(auth.username, "admin");
        assert_eq!(auth.password, "hunter2");
        assert_eq!(
            registry.tls.as_ref().unwrap().insecure_skip_verify,
            Some(false)
        );
    }

    #[test]
    fn test_machine_disk_maps_every_partition_entry() {
        let partitions = HashMap::from([
            (1024_u64, "/var/lib/a".to_string()),
            (2048_u64, "/var/lib/b".to_string()),
            (4096_u64, "/var/lib/c".to_string()),
        ]);

        let disk = new_machine_disk("/dev/sdb", partitions.clone());

        assert_eq!(disk.device, "/dev/sdb");
        assert_eq!(disk.partitions.len(), partitions.len());
        for (size, mountpoint) in partitions {
            let matches = disk
                .partitions
                .iter()
                .filter(|p| p.size == size && p.mountpoint == mountpoint)
                .count();
            assert_eq!(matches, 1, "expected exactly one partition of size {}", size);
        }
    }

    #[test]
    fn test_install_config_forces_legacy_bios_off() {
        let install = new_install_config(
            "ghcr.io/siderolabs/installer",
            "v1.8.0",
            "/dev/sda",
            vec!["console=ttyS0".to_string()],
            true,
        );

        assert_eq!(install.image, "ghcr.io/siderolabs/installer:v1.8.0");
        assert_eq!(install.disk, "/dev/sda");
        assert_eq!(install.wipe, Some(true));
        assert_eq!(install.legacy_bios_support, Some(false));
        assert_eq!(install.extra_kernel_args, vec!["console=ttyS0".to_string()]);
    }

    #[test]
    fn test_kubelet_config_enables_user_namespace_gates() {
        let kubelet = new_kubelet_config("ghcr.io/siderolabs/kubelet", "v1.31.0");

        assert_eq!(kubelet.image, "ghcr.io/siderolabs/kubelet:v1.31.0");
        let gates = &kubelet.extra_config["featureGates"];
        assert_eq!(gates["UserNamespacesSupport"], true);
        assert_eq!(gates["UserNamespacesPodSecurityStandards"], true);
    }
}
