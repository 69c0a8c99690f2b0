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

//! Host network builders: the network section and interface records.

use std::net::IpAddr;

use crate::machinery::v1alpha1::{
    Device, DeviceVipConfig, NetworkConfig, NetworkKubeSpan,
};

/// Assemble the machine network section. KubeSpan mesh networking is
/// explicitly disabled and the extra-host list starts empty.
pub fn new_network_config(
    hostname: &str,
    devices: Vec<Device>,
    nameservers: Vec<String>,
    search_domains: Vec<String>,
) -> NetworkConfig {
    NetworkConfig {
        hostname: hostname.to_string(),
        interfaces: devices,
        nameservers,
        search_domains,
        extra_host_entries: Vec::new(),
        kubespan: Some(NetworkKubeSpan {
            enabled: Some(false),
        }),
        disable_search_domain: Some(false),
    }
}

/// Interface with a fixed set of addresses, stringified in input order.
pub fn new_nic_fixed_ip(interface: &str, addresses: &[IpAddr], mtu: u32) -> Device {
    Device {
        interface: interface.to_string(),
        addresses: addresses.iter().map(|ip| ip.to_string()).collect(),
        mtu,
        vip: None,
    }
}

/// Interface carrying a shared virtual IP.
pub fn new_nic_vip(interface: &str, shared_ip: IpAddr, mtu: u32) -> Device {
    Device {
        interface: interface.to_string(),
        addresses: Vec::new(),
        mtu,
        vip: Some(DeviceVipConfig {
            ip: shared_ip.to_string(),
        }),
    }
}
