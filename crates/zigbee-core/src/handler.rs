//! Generic cluster request handling

use crate::cluster::is_manufacturer_specific;
use thiserror::Error;
use zcl_protocol::{Addressing, Status, Value, ZclError, ZclHeader};

/// Cluster handling errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Unsupported command {command_id:#04x} on cluster {cluster_id:#06x}")]
    UnsupportedCommand { cluster_id: u16, command_id: u8 },

    #[error("ZCL error: {0}")]
    Zcl(#[from] ZclError),
}

impl ClusterError {
    /// ZCL status to report back in a default response
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            ClusterError::UnsupportedCommand { cluster_id, .. } => {
                if is_manufacturer_specific(*cluster_id) {
                    Status::UnsupManufClusterCommand
                } else {
                    Status::UnsupClusterCommand
                }
            }
            ClusterError::Zcl(_) => Status::InvalidField,
        }
    }
}

/// Handling of cluster-specific requests delivered by the host dispatcher
pub trait ClusterRequestHandler: Send + Sync {
    #[allow(clippy::missing_errors_doc)]
    fn handle_cluster_request(
        &self,
        hdr: &ZclHeader,
        args: &[Value],
        dst_addressing: Option<&Addressing>,
    ) -> Result<(), ClusterError>;
}

/// Default cluster behaviour: no cluster-specific command is understood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseCluster {
    pub cluster_id: u16,
}

impl BaseCluster {
    #[must_use]
    pub fn new(cluster_id: u16) -> Self {
        Self { cluster_id }
    }
}

impl ClusterRequestHandler for BaseCluster {
    fn handle_cluster_request(
        &self,
        hdr: &ZclHeader,
        _args: &[Value],
        dst_addressing: Option<&Addressing>,
    ) -> Result<(), ClusterError> {
        tracing::debug!(
            "Cluster {:#06x}: no handler for command {:#04x} (tsn={}, dst={:?})",
            self.cluster_id,
            hdr.command_id,
            hdr.tsn,
            dst_addressing
        );
        Err(ClusterError::UnsupportedCommand {
            cluster_id: self.cluster_id,
            command_id: hdr.command_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cluster_rejects_commands() {
        let base = BaseCluster::new(0xFE00);
        let hdr = ZclHeader::cluster_command(1, 0x05);
        let err = base.handle_cluster_request(&hdr, &[], None).unwrap_err();
        assert_eq!(
            err,
            ClusterError::UnsupportedCommand {
                cluster_id: 0xFE00,
                command_id: 0x05,
            }
        );
        assert_eq!(err.status(), Status::UnsupManufClusterCommand);
    }

    #[test]
    fn test_standard_cluster_status() {
        let err = ClusterError::UnsupportedCommand {
            cluster_id: 0x0006,
            command_id: 0x40,
        };
        assert_eq!(err.status(), Status::UnsupClusterCommand);
        assert_eq!(
            err.to_string(),
            "Unsupported command 0x40 on cluster 0x0006"
        );
    }
}
