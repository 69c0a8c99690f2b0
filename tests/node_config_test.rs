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

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::net::IpAddr;
    use talos_config::machinery::v1alpha1::Config;
    use talos_config::*;
    use url::Url;

    fn endpoint() -> Url {
        Url::parse("https://cluster.example.com:6443").unwrap()
    }

    fn build_control_plane_node() -> Config {
        let addresses: Vec<IpAddr> = vec!["10.0.0.5".parse().unwrap()];
        let network = new_network_config(
            "cp-0",
            vec![
                new_nic_fixed_ip("eth0", &addresses, 1500),
                new_nic_vip("eth0", "10.0.0.100".parse().unwrap(), 1500),
            ],
            vec!["1.1.1.1".to_string()],
            vec!["cluster.local".to_string()],
        );

        let mut registries = BTreeMap::new();
        registries.insert(
            "registry.example.com".to_string(),
            new_registry_basic_auth("admin", "hunter2", true),
        );

        let machine = new_machine_config(
            MachineType::ControlPlane,
            "node-token",
            "cp-0",
            vec![new_machine_disk(
                "/dev/sdb",
                HashMap::from([(1073741824_u64, "/var/lib/extra".to_string())]),
            )],
            network,
            new_install_config(
                "ghcr.io/siderolabs/installer",
                "v1.8.0",
                "/dev/sda",
                vec![],
                true,
            ),
            new_kubelet_config("ghcr.io/siderolabs/kubelet", "v1.31.0"),
            registries,
            "https://cluster.example.com",
            6443,
            vec![],
            vec![],
            PemCertificateAndKey::new("bWFjaGluZS1jcnQ=", "bWFjaGluZS1rZXk="),
            vec![],
        );

        let cluster = new_cluster_config_control_plane(
            &endpoint(),
            "prod",
            "cluster-id",
            "cluster-secret",
            "abcdef.0123456789abcdef",
            "secretbox-key",
            new_cluster_network_config_with_cni(
                new_cni_calico(),
                "cluster.local",
                vec!["10.244.0.0/16".to_string()],
                vec!["10.96.0.0/12".to_string()],
            ),
            new_api_server_config("registry.k8s.io/kube-apiserver", "v1.31.0", &endpoint()),
            new_kube_proxy_config("registry.k8s.io/kube-proxy", "v1.31.0"),
            new_controller_manager_config("registry.k8s.io/kube-controller-manager", "v1.31.0"),
            new_scheduler_config("registry.k8s.io/kube-scheduler", "v1.31.0"),
            new_etcd_config(
                "gcr.io/etcd-development/etcd",
                "v3.5.16",
                PemCertificateAndKey::new("ZXRjZC1jcnQ=", "ZXRjZC1rZXk="),
            ),
            PemCertificateAndKey::new("Y2x1c3Rlci1jcnQ=", "Y2x1c3Rlci1rZXk="),
            PemCertificateAndKey::new("YWdnLWNydA==", "YWdnLWtleQ=="),
            PemKey::new("c3ZjLWFjY3Q="),
        );

        new_node_config(machine, cluster)
    }

    #[test]
    fn test_node_document_serializes_wire_field_names() {
        let config = build_control_plane_node();
        let value = serde_yaml::to_value(&config).unwrap();

        assert_eq!(value["version"], "v1alpha1");
        assert_eq!(value["debug"].as_bool(), Some(false));
        assert_eq!(value["machine"]["type"], "controlplane");
        assert_eq!(
            value["machine"]["install"]["legacyBIOSSupport"].as_bool(),
            Some(false)
        );
        assert_eq!(
            value["machine"]["disks"][0]["partitions"][0]["mountpoint"],
            "/var/lib/extra"
        );
        assert_eq!(
            value["machine"]["registries"]["config"]["registry.example.com"]["tls"]
                ["insecureSkipVerify"]
                .as_bool(),
            Some(true)
        );
        assert_eq!(
            value["machine"]["network"]["kubespan"]["enabled"].as_bool(),
            Some(false)
        );
        assert_eq!(value["machine"]["network"]["interfaces"][1]["vip"]["ip"], "10.0.0.100");
        assert_eq!(value["cluster"]["clusterName"], "prod");
        assert_eq!(
            value["cluster"]["secretboxEncryptionSecret"],
            "secretbox-key"
        );
        assert_eq!(
            value["cluster"]["apiServer"]["certSANs"][0],
            "cluster.example.com"
        );
        assert_eq!(
            value["cluster"]["apiServer"]["admissionControl"][0]["name"],
            "PodSecurity"
        );
        assert_eq!(value["cluster"]["aggregatorCA"]["crt"], "YWdnLWNydA==");
        assert_eq!(
            value["cluster"]["network"]["cni"]["name"],
            "custom"
        );
    }

    #[test]
    fn test_empty_collections_serialize_as_empty_not_absent() {
        let config = build_control_plane_node();
        let value = serde_yaml::to_value(&config).unwrap();

        assert!(value["cluster"]["extraManifests"].as_sequence().unwrap().is_empty());
        assert!(value["cluster"]["extraManifestHeaders"].as_mapping().unwrap().is_empty());
        assert!(value["cluster"]["inlineManifests"].as_sequence().unwrap().is_empty());
        assert!(value["machine"]["files"].as_sequence().unwrap().is_empty());
        assert!(value["machine"]["nodeAnnotations"].as_mapping().unwrap().is_empty());
        assert!(value["machine"]["nodeTaints"].as_mapping().unwrap().is_empty());
        assert!(value["machine"]["network"]["extraHostEntries"]
            .as_sequence()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_node_document_yaml_round_trip() {
        let config = build_control_plane_node();

        let yaml = config.to_yaml().unwrap();
        let decoded = Config::from_yaml(&yaml).unwrap();

        assert_eq!(decoded, config);
    }

    #[test]
    fn test_worker_document_omits_control_plane_material() {
        let cluster_ca = PemCertificateAndKey::new("Y2x1c3Rlci1jcnQ=", "Y2x1c3Rlci1rZXk=");
        let cluster = new_cluster_config_worker(
            &endpoint(),
            "prod",
            "cluster-id",
            "cluster-secret",
            "abcdef.0123456789abcdef",
            new_cluster_network_config(
                "cluster.local",
                vec!["10.244.0.0/16".to_string()],
                vec!["10.96.0.0/12".to_string()],
            ),
            &cluster_ca,
        );

        let value = serde_yaml::to_value(&cluster).unwrap();

        assert_eq!(value["ca"]["crt"], "Y2x1c3Rlci1jcnQ=");
        assert!(value["ca"]["key"].is_null());
        assert!(value["apiServer"].is_null());
        assert!(value["etcd"].is_null());
        assert!(value["serviceAccount"].is_null());
    }
}
