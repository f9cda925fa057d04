//! Quirk model: signature, replacement and trigger table of one device variant

use serde::Serialize;
use zigbee_core::{
    ClusterDefinition, ClusterEvent, Endpoint, EndpointSignature, EventableCluster,
    ReplacementEndpoint,
};

/// Endpoints and models the real hardware reports
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Signature {
    /// (manufacturer, model) pairs, compared verbatim
    pub models_info: &'static [(&'static str, &'static str)],
    pub endpoints: &'static [EndpointSignature],
}

/// Endpoints presented to applications instead
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Replacement {
    pub endpoints: &'static [ReplacementEndpoint],
}

/// A physical button/gesture and the Zigbee command it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceTrigger {
    pub gesture: &'static str,
    pub subtype: &'static str,
    pub command: &'static str,
    pub cluster_id: u16,
    pub endpoint_id: u8,
    pub args: &'static [u16],
}

/// A device quirk
#[derive(Debug, Serialize)]
pub struct Quirk {
    pub name: &'static str,
    pub description: &'static str,
    pub signature: Signature,
    pub replacement: Replacement,
    pub triggers: &'static [DeviceTrigger],
}

impl Quirk {
    #[must_use]
    pub fn matches_model(&self, manufacturer: &str, model: &str) -> bool {
        self.signature
            .models_info
            .iter()
            .any(|(m, md)| *m == manufacturer && *md == model)
    }

    /// Endpoints as the host should present them
    #[must_use]
    pub fn replacement_endpoints(&self) -> Vec<Endpoint> {
        self.replacement
            .endpoints
            .iter()
            .map(ReplacementEndpoint::to_endpoint)
            .collect()
    }

    /// Endpoints as the hardware reports them
    #[must_use]
    pub fn signature_endpoints(&self) -> Vec<Endpoint> {
        self.signature
            .endpoints
            .iter()
            .map(EndpointSignature::to_endpoint)
            .collect()
    }

    /// Custom cluster definitions across all replacement endpoints
    #[must_use]
    pub fn custom_clusters(&self) -> Vec<&'static ClusterDefinition> {
        let mut defs: Vec<&'static ClusterDefinition> = Vec::new();
        for def in self
            .replacement
            .endpoints
            .iter()
            .flat_map(ReplacementEndpoint::custom_clusters)
        {
            if !defs.iter().any(|d| d.cluster_id == def.cluster_id) {
                defs.push(def);
            }
        }
        defs
    }

    /// Event translators for every custom cluster that fires events, keyed by endpoint
    #[must_use]
    pub fn eventable_clusters(&self) -> Vec<(u8, EventableCluster)> {
        self.replacement
            .endpoints
            .iter()
            .flat_map(|ep| {
                ep.custom_clusters()
                    .into_iter()
                    .filter(|def| def.is_eventable())
                    .map(move |def| (ep.id, EventableCluster::new(def)))
            })
            .collect()
    }

    #[must_use]
    pub fn trigger(&self, gesture: &str, subtype: &str) -> Option<&DeviceTrigger> {
        self.triggers
            .iter()
            .find(|t| t.gesture == gesture && t.subtype == subtype)
    }

    /// Find the trigger an event fired on `endpoint_id` corresponds to
    #[must_use]
    pub fn trigger_for_event(&self, endpoint_id: u8, event: &ClusterEvent) -> Option<&DeviceTrigger> {
        self.triggers.iter().find(|t| {
            t.endpoint_id == endpoint_id
                && t.cluster_id == event.cluster_id
                && t.command == event.name
                && t.args.len() == event.args.len()
                && t
                    .args
                    .iter()
                    .zip(&event.args)
                    .all(|(expected, value)| value.as_u64() == Some(u64::from(*expected)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zcl_protocol::{DataType, Value};
    use zigbee_core::cluster::{device_type, id, profile};
    use zigbee_core::{ClusterSlot, CommandDef, EventKind};

    const SCENE_CLUSTER: ClusterDefinition = ClusterDefinition {
        cluster_id: 0xFC20,
        name: "SceneCluster",
        ep_attribute: "scene_cluster",
        attributes: &[],
        manufacturer_client_commands: &[CommandDef {
            id: 0x01,
            name: "scene",
            schema: &[DataType::Uint8],
            mandatory: false,
        }],
    };

    static TEST_QUIRK: Quirk = Quirk {
        name: "TestRemote",
        description: "Two-endpoint test remote",
        signature: Signature {
            models_info: &[("Acme", "R1")],
            endpoints: &[EndpointSignature {
                id: 1,
                profile_id: profile::HOME_AUTOMATION,
                device_type: device_type::COLOR_CONTROLLER,
                input_clusters: &[id::BASIC],
                output_clusters: &[id::ON_OFF],
            }],
        },
        replacement: Replacement {
            endpoints: &[
                ReplacementEndpoint {
                    id: 1,
                    profile_id: profile::HOME_AUTOMATION,
                    device_type: device_type::COLOR_CONTROLLER,
                    input_clusters: &[ClusterSlot::Standard(id::BASIC)],
                    output_clusters: &[
                        ClusterSlot::Standard(id::ON_OFF),
                        ClusterSlot::Custom(&SCENE_CLUSTER),
                    ],
                },
                ReplacementEndpoint {
                    id: 2,
                    profile_id: profile::HOME_AUTOMATION,
                    device_type: device_type::COLOR_CONTROLLER,
                    input_clusters: &[],
                    output_clusters: &[ClusterSlot::Custom(&SCENE_CLUSTER)],
                },
            ],
        },
        triggers: &[DeviceTrigger {
            gesture: "remote_button_short_press",
            subtype: "button_1",
            command: "scene",
            cluster_id: 0xFC20,
            endpoint_id: 2,
            args: &[3],
        }],
    };

    #[test]
    fn test_custom_clusters_across_endpoints() {
        assert_eq!(TEST_QUIRK.custom_clusters().len(), 1);
        let eventable = TEST_QUIRK.eventable_clusters();
        assert_eq!(eventable.len(), 2);
        assert_eq!(eventable[1].0, 2);
        assert_eq!(eventable[1].1.cluster_id(), 0xFC20);
    }

    #[test]
    fn test_trigger_for_event_checks_endpoint() {
        let event = ClusterEvent {
            kind: EventKind::ZhaSendEvent,
            cluster_id: 0xFC20,
            name: "scene".to_string(),
            args: vec![Value::Uint8(3)],
        };
        assert_eq!(
            TEST_QUIRK.trigger_for_event(2, &event).map(|t| t.subtype),
            Some("button_1")
        );
        assert!(TEST_QUIRK.trigger_for_event(1, &event).is_none());
    }

    #[test]
    fn test_matches_model_is_exact() {
        assert!(TEST_QUIRK.matches_model("Acme", "R1"));
        assert!(!TEST_QUIRK.matches_model("acme", "R1"));
        assert!(!TEST_QUIRK.matches_model("Acme", " R1"));
    }
}
