//! Static definitions of custom (quirk-provided) clusters

use serde::Serialize;
use zcl_protocol::{decode_report_attributes, DataType, Value, ZclError};

/// Entry of a cluster's command-code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDef {
    /// Command identifier within the cluster
    pub id: u8,
    /// Name used for emitted events
    pub name: &'static str,
    /// Argument shape
    pub schema: &'static [DataType],
    /// Whether the command is mandatory for the cluster
    pub mandatory: bool,
}

/// Entry of a cluster's attribute table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeDef {
    pub id: u16,
    pub name: &'static str,
    pub data_type: DataType,
    pub mandatory: bool,
}

/// A cluster definition supplied by a quirk in place of the stock cluster
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ClusterDefinition {
    pub cluster_id: u16,
    pub name: &'static str,
    /// Attribute name the cluster is exposed under on its endpoint
    pub ep_attribute: &'static str,
    pub attributes: &'static [AttributeDef],
    /// Commands the device sends to us (client side)
    pub manufacturer_client_commands: &'static [CommandDef],
}

impl ClusterDefinition {
    /// Look up a client command by identifier
    #[must_use]
    pub fn client_command(&self, command_id: u8) -> Option<&CommandDef> {
        self.manufacturer_client_commands
            .iter()
            .find(|c| c.id == command_id)
    }

    #[must_use]
    pub fn attribute(&self, attribute_id: u16) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.id == attribute_id)
    }

    #[must_use]
    pub fn attribute_by_name(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Check if this cluster translates any client commands into events
    #[must_use]
    pub fn is_eventable(&self) -> bool {
        !self.manufacturer_client_commands.is_empty()
    }

    /// Decode a Report Attributes payload into named values.
    ///
    /// Attributes missing from the table are named by their hex ID.
    #[allow(clippy::missing_errors_doc)]
    pub fn decode_attribute_report(
        &self,
        payload: &[u8],
    ) -> Result<Vec<(String, Value)>, ZclError> {
        let reports = decode_report_attributes(payload)?;

        Ok(reports
            .into_iter()
            .map(|report| {
                let name = match self.attribute(report.attribute_id) {
                    Some(attr) => {
                        if attr.data_type != report.value.data_type() {
                            tracing::debug!(
                                "{}: attribute {} reported as {:?}, expected {:?}",
                                self.name,
                                attr.name,
                                report.value.data_type(),
                                attr.data_type
                            );
                        }
                        attr.name.to_string()
                    }
                    None => format!("{:#06x}", report.attribute_id),
                };
                (name, report.value)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_CLUSTER: ClusterDefinition = ClusterDefinition {
        cluster_id: 0xFC10,
        name: "TestCluster",
        ep_attribute: "test_cluster",
        attributes: &[AttributeDef {
            id: 0x0001,
            name: "led_on",
            data_type: DataType::Bool,
            mandatory: true,
        }],
        manufacturer_client_commands: &[CommandDef {
            id: 0x03,
            name: "scene",
            schema: &[DataType::Uint8],
            mandatory: false,
        }],
    };

    #[test]
    fn test_lookups() {
        assert_eq!(TEST_CLUSTER.client_command(0x03).map(|c| c.name), Some("scene"));
        assert!(TEST_CLUSTER.client_command(0x04).is_none());
        assert_eq!(TEST_CLUSTER.attribute_by_name("led_on").map(|a| a.id), Some(0x0001));
        assert!(TEST_CLUSTER.is_eventable());
    }

    #[test]
    fn test_decode_attribute_report_names() {
        let payload = [0x01, 0x00, 0x10, 0x00, 0x99, 0x00, 0x20, 0x05];
        let values = TEST_CLUSTER.decode_attribute_report(&payload).unwrap();
        assert_eq!(
            values,
            vec![
                ("led_on".to_string(), Value::Bool(false)),
                ("0x0099".to_string(), Value::Uint8(5)),
            ]
        );
    }
}
