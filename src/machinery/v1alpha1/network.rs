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

//! Machine network configuration records

use serde::{Deserialize, Serialize};

/// Host networking settings: hostname, interfaces, resolvers and the
/// KubeSpan mesh toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub hostname: String,
    #[serde(default)]
    pub interfaces: Vec<Device>,
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(default)]
    pub search_domains: Vec<String>,
    #[serde(default)]
    pub extra_host_entries: Vec<ExtraHost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubespan: Option<NetworkKubeSpan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_search_domain: Option<bool>,
}

/// A network interface. Addresses are textual CIDRs or plain IPs; a VIP
/// sub-record marks the interface as carrying a shared virtual IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub interface: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    pub mtu: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip: Option<DeviceVipConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceVipConfig {
    pub ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraHost {
    pub ip: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkKubeSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
