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

/// Document schema version
pub const CONFIG_VERSION: &str = "v1alpha1";

/// Machine roles
pub const MACHINE_TYPE_WORKER: &str = "worker";
pub const MACHINE_TYPE_CONTROL_PLANE: &str = "controlplane";

/// Disk encryption providers
pub const ENCRYPTION_PROVIDER_LUKS2: &str = "luks2";

/// CNI plugin names
pub const CNI_NAME_CUSTOM: &str = "custom";
pub const CNI_NAME_NONE: &str = "none";

/// Calico manifest, pinned to a released version tag
pub const CALICO_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/projectcalico/calico/v3.29.2/manifests/calico.yaml";

/// Feature gates enabled on the API server and the kubelet
pub const FEATURE_GATE_USER_NAMESPACES: &str = "UserNamespacesSupport";
pub const FEATURE_GATE_USER_NAMESPACES_PSS: &str = "UserNamespacesPodSecurityStandards";
pub const API_SERVER_FEATURE_GATES: &str =
    "UserNamespacesSupport=true,UserNamespacesPodSecurityStandards=true";

/// Pod security admission
pub const ADMISSION_PLUGIN_POD_SECURITY: &str = "PodSecurity";
pub const POD_SECURITY_API_VERSION: &str = "pod-security.admission.config.k8s.io/v1alpha1";
pub const POD_SECURITY_KIND: &str = "PodSecurityConfiguration";
pub const POD_SECURITY_EXEMPT_NAMESPACE: &str = "kube-system";
