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

//! Cluster-side builders: cluster sections for both node roles, the
//! control-plane service configs and the CNI variants.

use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

use crate::machinery::pki::{PemCertificateAndKey, PemKey};
use crate::machinery::v1alpha1::{
    AdmissionPluginConfig, ApiServerConfig, ClusterConfig, ClusterNetworkConfig, CniConfig,
    ControlPlaneConfig, ControllerManagerConfig, EtcdConfig, ProxyConfig, SchedulerConfig,
};
use crate::shared::constants::{
    ADMISSION_PLUGIN_POD_SECURITY, API_SERVER_FEATURE_GATES, CALICO_MANIFEST_URL,
    CNI_NAME_CUSTOM, CNI_NAME_NONE, POD_SECURITY_API_VERSION, POD_SECURITY_EXEMPT_NAMESPACE,
    POD_SECURITY_KIND,
};

/// Assemble the cluster section for a control-plane node: full identity,
/// secrets, service configs and signing material.
#[allow(clippy::too_many_arguments)]
pub fn new_cluster_config_control_plane(
    endpoint: &Url,
    name: &str,
    id: &str,
    secret: &str,
    bootstrap_token: &str,
    secretbox_key: &str,
    network: ClusterNetworkConfig,
    api_server: ApiServerConfig,
    proxy: ProxyConfig,
    controller_manager: ControllerManagerConfig,
    scheduler: SchedulerConfig,
    etcd: EtcdConfig,
    cluster_ca: PemCertificateAndKey,
    aggregator_ca: PemCertificateAndKey,
    service_account: PemKey,
) -> ClusterConfig {
    debug!(cluster = name, endpoint = %endpoint, "assembling control-plane cluster config");

    ClusterConfig {
        cluster_name: name.to_string(),
        id: id.to_string(),
        token: bootstrap_token.to_string(),
        secret: secret.to_string(),
        secretbox_encryption_secret: Some(secretbox_key.to_string()),
        ca: Some(cluster_ca),
        aggregator_ca: Some(aggregator_ca),
        network: Some(network),
        service_account: Some(service_account),
        control_plane: Some(ControlPlaneConfig {
            endpoint: endpoint.clone(),
        }),
        api_server: Some(api_server),
        proxy: Some(proxy),
        controller_manager: Some(controller_manager),
        scheduler: Some(scheduler),
        etcd: Some(etcd),
        extra_manifests: Vec::new(),
        extra_manifest_headers: BTreeMap::new(),
        inline_manifests: Vec::new(),
    }
}

/// Assemble the cluster section for a worker node. The supplied cluster CA
/// is narrowed to its certificate: workers never receive signing keys.
pub fn new_cluster_config_worker(
    endpoint: &Url,
    name: &str,
    id: &str,
    secret: &str,
    bootstrap_token: &str,
    network: ClusterNetworkConfig,
    cluster_ca: &PemCertificateAndKey,
) -> ClusterConfig {
    debug!(cluster = name, endpoint = %endpoint, "assembling worker cluster config");

    ClusterConfig {
        cluster_name: name.to_string(),
        id: id.to_string(),
        token: bootstrap_token.to_string(),
        secret: secret.to_string(),
        ca: Some(cluster_ca.certificate_only()),
        network: Some(network),
        control_plane: Some(ControlPlaneConfig {
            endpoint: endpoint.clone(),
        }),
        extra_manifests: Vec::new(),
        extra_manifest_headers: BTreeMap::new(),
        inline_manifests: Vec::new(),
        ..ClusterConfig::default()
    }
}

/// API server settings: one certificate SAN derived from the endpoint
/// hostname, the user-namespace feature gates, and a PodSecurity admission
/// plugin enforcing baseline with restricted audit/warn. The `kube-system`
/// namespace is exempted. PodSecurityPolicy admission is disabled and the
/// audit policy is left unset.
pub fn new_api_server_config(image: &str, tag: &str, endpoint: &Url) -> ApiServerConfig {
    let mut extra_args = BTreeMap::new();
    extra_args.insert(
        "feature-gates".to_string(),
        API_SERVER_FEATURE_GATES.to_string(),
    );

    ApiServerConfig {
        image: super::image_ref(image, tag),
        cert_sans: vec![endpoint.host_str().unwrap_or_default().to_string()],
        extra_args,
        admission_control: vec![AdmissionPluginConfig {
            name: ADMISSION_PLUGIN_POD_SECURITY.to_string(),
            configuration: json!({
                "apiVersion": POD_SECURITY_API_VERSION,
                "kind": POD_SECURITY_KIND,
                "defaults": {
                    "audit": "restricted",
                    "audit-version": "latest",
                    "enforce": "baseline",
                    "enforce-version": "latest",
                    "warn": "restricted",
                    "warn-version": "latest",
                },
                "exemptions": {
                    "namespaces": [POD_SECURITY_EXEMPT_NAMESPACE],
                    "runtimeClasses": [],
                    "usernames": [],
                },
            }),
        }],
        disable_pod_security_policy: Some(true),
        audit_policy: Value::Null,
    }
}

pub fn new_kube_proxy_config(image: &str, tag: &str) -> ProxyConfig {
    ProxyConfig {
        image: super::image_ref(image, tag),
    }
}

pub fn new_controller_manager_config(image: &str, tag: &str) -> ControllerManagerConfig {
    ControllerManagerConfig {
        image: super::image_ref(image, tag),
    }
}

pub fn new_scheduler_config(image: &str, tag: &str) -> SchedulerConfig {
    SchedulerConfig {
        image: super::image_ref(image, tag),
    }
}

pub fn new_etcd_config(image: &str, tag: &str, root_ca: PemCertificateAndKey) -> EtcdConfig {
    EtcdConfig {
        image: super::image_ref(image, tag),
        ca: Some(root_ca),
    }
}

/// Cluster networking without a CNI block.
pub fn new_cluster_network_config(
    dns_domain: &str,
    pod_subnets: Vec<String>,
    service_subnets: Vec<String>,
) -> ClusterNetworkConfig {
    ClusterNetworkConfig {
        cni: None,
        dns_domain: dns_domain.to_string(),
        pod_subnets,
        service_subnets,
    }
}

/// Cluster networking with an explicit CNI block.
pub fn new_cluster_network_config_with_cni(
    cni: CniConfig,
    dns_domain: &str,
    pod_subnets: Vec<String>,
    service_subnets: Vec<String>,
) -> ClusterNetworkConfig {
    ClusterNetworkConfig {
        cni: Some(cni),
        dns_domain: dns_domain.to_string(),
        pod_subnets,
        service_subnets,
    }
}

/// CNI deployed from caller-supplied manifest URLs.
pub fn new_cni_custom(manifest_urls: Vec<String>) -> CniConfig {
    CniConfig {
        name: CNI_NAME_CUSTOM.to_string(),
        urls: manifest_urls,
    }
}

/// No managed CNI; the cluster operator installs pod networking themselves.
pub fn new_cni_none() -> CniConfig {
    CniConfig {
        name: CNI_NAME_NONE.to_string(),
        urls: Vec::new(),
    }
}

/// Calico from its pinned release manifest. Sugar over [`new_cni_custom`],
/// so the record keeps the `custom` name rather than a Calico-specific one.
pub fn new_cni_calico() -> CniConfig {
    new_cni_custom(vec![CALICO_MANIFEST_URL.to_string()])
}
