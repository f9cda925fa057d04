//! Endpoint descriptors: what hardware exposes and what applications see

use crate::definition::ClusterDefinition;
use serde::{Deserialize, Serialize};

/// A device endpoint as presented to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Endpoint ID (1-240, 242 for Green Power)
    pub id: u8,
    /// Profile ID (e.g., 0x0104 for Home Automation)
    pub profile_id: u16,
    /// Device ID within the profile
    pub device_id: u16,
    /// Input (server) clusters
    pub in_clusters: Vec<u16>,
    /// Output (client) clusters
    pub out_clusters: Vec<u16>,
}

impl Endpoint {
    /// Check if endpoint has a specific cluster
    #[must_use]
    pub fn has_cluster(&self, cluster_id: u16) -> bool {
        self.in_clusters.contains(&cluster_id) || self.out_clusters.contains(&cluster_id)
    }
}

/// Endpoint layout reported by the real hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointSignature {
    pub id: u8,
    pub profile_id: u16,
    pub device_type: u16,
    pub input_clusters: &'static [u16],
    pub output_clusters: &'static [u16],
}

impl EndpointSignature {
    #[must_use]
    pub fn to_endpoint(&self) -> Endpoint {
        Endpoint {
            id: self.id,
            profile_id: self.profile_id,
            device_id: self.device_type,
            in_clusters: self.input_clusters.to_vec(),
            out_clusters: self.output_clusters.to_vec(),
        }
    }
}

/// A cluster in a replacement endpoint: either the stock cluster or a custom one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterSlot {
    Standard(u16),
    Custom(&'static ClusterDefinition),
}

impl ClusterSlot {
    #[must_use]
    pub fn cluster_id(&self) -> u16 {
        match self {
            ClusterSlot::Standard(id) => *id,
            ClusterSlot::Custom(def) => def.cluster_id,
        }
    }

    #[must_use]
    pub fn custom(&self) -> Option<&'static ClusterDefinition> {
        match self {
            ClusterSlot::Standard(_) => None,
            ClusterSlot::Custom(def) => Some(*def),
        }
    }
}

/// Endpoint layout presented to applications in place of the signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplacementEndpoint {
    pub id: u8,
    pub profile_id: u16,
    pub device_type: u16,
    pub input_clusters: &'static [ClusterSlot],
    pub output_clusters: &'static [ClusterSlot],
}

impl ReplacementEndpoint {
    #[must_use]
    pub fn to_endpoint(&self) -> Endpoint {
        Endpoint {
            id: self.id,
            profile_id: self.profile_id,
            device_id: self.device_type,
            in_clusters: self.input_clusters.iter().map(ClusterSlot::cluster_id).collect(),
            out_clusters: self.output_clusters.iter().map(ClusterSlot::cluster_id).collect(),
        }
    }

    /// Custom cluster definitions installed on this endpoint, without duplicates
    #[must_use]
    pub fn custom_clusters(&self) -> Vec<&'static ClusterDefinition> {
        let mut defs: Vec<&'static ClusterDefinition> = Vec::new();
        for def in self
            .input_clusters
            .iter()
            .chain(self.output_clusters)
            .filter_map(ClusterSlot::custom)
        {
            if !defs.iter().any(|d| d.cluster_id == def.cluster_id) {
                defs.push(def);
            }
        }
        defs
    }
}
