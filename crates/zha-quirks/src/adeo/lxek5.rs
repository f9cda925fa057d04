//! ADEO LXEK-5 (HR-C99C-Z-C045) remote

use super::ADEO;
use crate::names::{
    BUTTON_1, BUTTON_2, BUTTON_3, BUTTON_4, COMMAND_OFF, COMMAND_ON, COMMAND_STEP,
    COMMAND_STEP_COLOR_TEMP, COMMAND_STEP_HUE, COMMAND_STEP_SATURATION, DIM_DOWN, DIM_UP,
    SHORT_PRESS, TURN_OFF, TURN_ON,
};
use crate::quirk::{DeviceTrigger, Quirk, Replacement, Signature};
use zcl_protocol::DataType;
use zigbee_core::cluster::{device_type, id, profile};
use zigbee_core::{ClusterDefinition, ClusterSlot, CommandDef, EndpointSignature, ReplacementEndpoint};

pub const COLOR_UP: &str = "color_up";
pub const COLOR_DOWN: &str = "color_down";
pub const SATURATION_UP: &str = "saturation_up";
pub const SATURATION_DOWN: &str = "saturation_down";
pub const HUE_LEFT: &str = "hue_left";
pub const HUE_RIGHT: &str = "hue_right";

/// Preset buttons 1-4 (65024)
pub const MANUFACTURER_SPECIFIC_CLUSTER_ID_PRESET: u16 = 0xFE00;

/// Unidentified manufacturer cluster the remote reports (64769)
pub const UNKNOWN_CLUSTER_ID: u16 = 0xFD01;

/// Custom cluster for preset buttons 1-4
pub const ADEO_PRESET_CLUSTER: ClusterDefinition = ClusterDefinition {
    cluster_id: MANUFACTURER_SPECIFIC_CLUSTER_ID_PRESET,
    name: "AdeoPresetCluster",
    ep_attribute: "adeo_preset_cluster",
    attributes: &[],
    manufacturer_client_commands: &[CommandDef {
        id: 0x00,
        name: "preset",
        schema: &[DataType::Uint8, DataType::Uint8],
        mandatory: false,
    }],
};

// <SimpleDescriptor endpoint=1 profile=260 device_type=2048
//  input_clusters=[0, 1, 3, 2821, 4096, 64769]
//  output_clusters=[3, 4, 6, 8, 25, 768, 4096]>
const INPUT_CLUSTERS: &[u16] = &[
    id::BASIC,
    id::POWER_CONFIG,
    id::IDENTIFY,
    id::DIAGNOSTIC,
    id::LIGHT_LINK,
    UNKNOWN_CLUSTER_ID,
];

const OUTPUT_CLUSTERS: &[u16] = &[
    id::IDENTIFY,
    id::GROUPS,
    id::ON_OFF,
    id::LEVEL_CONTROL,
    id::OTA,
    id::COLOR_CONTROL,
    id::LIGHT_LINK,
];

const fn trigger(
    subtype: &'static str,
    command: &'static str,
    cluster_id: u16,
    args: &'static [u16],
) -> DeviceTrigger {
    DeviceTrigger {
        gesture: SHORT_PRESS,
        subtype,
        command,
        cluster_id,
        endpoint_id: 1,
        args,
    }
}

pub static ADEO_LXEK5: Quirk = Quirk {
    name: "AdeoLxek5",
    description: "ADEO LXEK-5 remote",
    signature: Signature {
        models_info: &[(ADEO, "LXEK-5")],
        endpoints: &[EndpointSignature {
            id: 1,
            profile_id: profile::HOME_AUTOMATION,
            device_type: device_type::COLOR_CONTROLLER,
            input_clusters: INPUT_CLUSTERS,
            output_clusters: OUTPUT_CLUSTERS,
        }],
    },
    replacement: Replacement {
        endpoints: &[ReplacementEndpoint {
            id: 1,
            profile_id: profile::HOME_AUTOMATION,
            device_type: device_type::COLOR_CONTROLLER,
            input_clusters: &[
                ClusterSlot::Standard(id::BASIC),
                ClusterSlot::Standard(id::POWER_CONFIG),
                ClusterSlot::Standard(id::IDENTIFY),
                ClusterSlot::Standard(id::DIAGNOSTIC),
                ClusterSlot::Standard(id::LIGHT_LINK),
                ClusterSlot::Standard(UNKNOWN_CLUSTER_ID),
            ],
            output_clusters: &[
                ClusterSlot::Standard(id::IDENTIFY),
                ClusterSlot::Standard(id::GROUPS),
                ClusterSlot::Standard(id::ON_OFF),
                ClusterSlot::Standard(id::LEVEL_CONTROL),
                ClusterSlot::Standard(id::OTA),
                ClusterSlot::Standard(id::COLOR_CONTROL),
                ClusterSlot::Standard(id::LIGHT_LINK),
                ClusterSlot::Custom(&ADEO_PRESET_CLUSTER),
            ],
        }],
    },
    triggers: &[
        trigger(TURN_ON, COMMAND_ON, id::ON_OFF, &[]),
        trigger(TURN_OFF, COMMAND_OFF, id::ON_OFF, &[]),
        trigger(DIM_UP, COMMAND_STEP, id::LEVEL_CONTROL, &[0, 26, 5]),
        trigger(DIM_DOWN, COMMAND_STEP, id::LEVEL_CONTROL, &[1, 26, 5]),
        trigger(COLOR_UP, COMMAND_STEP_COLOR_TEMP, id::COLOR_CONTROL, &[3, 22, 5, 153, 370]),
        trigger(COLOR_DOWN, COMMAND_STEP_COLOR_TEMP, id::COLOR_CONTROL, &[1, 22, 5, 153, 370]),
        trigger(SATURATION_UP, COMMAND_STEP_SATURATION, id::COLOR_CONTROL, &[1, 26, 5]),
        trigger(SATURATION_DOWN, COMMAND_STEP_SATURATION, id::COLOR_CONTROL, &[3, 26, 5]),
        trigger(HUE_LEFT, COMMAND_STEP_HUE, id::COLOR_CONTROL, &[3, 22, 5]),
        trigger(HUE_RIGHT, COMMAND_STEP_HUE, id::COLOR_CONTROL, &[1, 22, 5]),
        trigger(BUTTON_1, "preset", MANUFACTURER_SPECIFIC_CLUSTER_ID_PRESET, &[10, 1]),
        trigger(BUTTON_2, "preset", MANUFACTURER_SPECIFIC_CLUSTER_ID_PRESET, &[11, 1]),
        trigger(BUTTON_3, "preset", MANUFACTURER_SPECIFIC_CLUSTER_ID_PRESET, &[12, 1]),
        trigger(BUTTON_4, "preset", MANUFACTURER_SPECIFIC_CLUSTER_ID_PRESET, &[13, 1]),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use zcl_protocol::{Value, ZclHeader};
    use zigbee_core::{ClusterError, ClusterEvent, ClusterListener, ClusterRequestHandler};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<ClusterEvent>>);

    impl ClusterListener for Recorder {
        fn cluster_event(&self, event: &ClusterEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_replacement_adds_preset_cluster() {
        let sig = &ADEO_LXEK5.signature_endpoints()[0];
        let ep = &ADEO_LXEK5.replacement_endpoints()[0];
        assert!(!sig.has_cluster(0xFE00));
        assert!(ep.has_cluster(0xFE00));
        assert_eq!(ep.out_clusters.len(), sig.out_clusters.len() + 1);
        assert_eq!(ep.in_clusters, sig.in_clusters);
    }

    #[test]
    fn test_preset_event_maps_to_button() {
        let mut clusters = ADEO_LXEK5.eventable_clusters();
        assert_eq!(clusters.len(), 1);
        let (endpoint_id, cluster) = clusters.remove(0);
        let recorder = Arc::new(Recorder::default());
        cluster.add_listener(recorder.clone());

        let hdr = ZclHeader::cluster_command(1, 0x00);
        cluster
            .handle_cluster_request(&hdr, &[Value::Uint8(10), Value::Uint8(1)], None)
            .unwrap();

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "preset");
        assert_eq!(events[0].args, vec![Value::Uint8(10), Value::Uint8(1)]);

        let trigger = ADEO_LXEK5.trigger_for_event(endpoint_id, &events[0]).unwrap();
        assert_eq!((trigger.gesture, trigger.subtype), (SHORT_PRESS, BUTTON_1));
    }

    #[test]
    fn test_unmapped_command_is_unsupported() {
        let cluster = ADEO_LXEK5.eventable_clusters().remove(0).1;
        let hdr = ZclHeader::cluster_command(1, 0xFF);
        assert_eq!(
            cluster.handle_cluster_request(&hdr, &[], None),
            Err(ClusterError::UnsupportedCommand {
                cluster_id: 0xFE00,
                command_id: 0xFF,
            })
        );
    }

    #[test]
    fn test_raw_preset_frame() {
        let cluster = ADEO_LXEK5.eventable_clusters().remove(0).1;
        let recorder = Arc::new(Recorder::default());
        cluster.add_listener(recorder.clone());

        cluster
            .handle_message(&[0x09, 0x10, 0x00, 0x0C, 0x01], None)
            .unwrap();

        let events = recorder.0.lock().unwrap();
        let trigger = ADEO_LXEK5.trigger_for_event(1, &events[0]).unwrap();
        assert_eq!(trigger.subtype, BUTTON_3);
    }

    #[test]
    fn test_trigger_table() {
        assert_eq!(ADEO_LXEK5.triggers.len(), 14);
        let color_up = ADEO_LXEK5.trigger(SHORT_PRESS, COLOR_UP).unwrap();
        assert_eq!(color_up.command, COMMAND_STEP_COLOR_TEMP);
        assert_eq!(color_up.cluster_id, 768);
        assert_eq!(color_up.args, &[3, 22, 5, 153, 370]);
        assert!(ADEO_LXEK5.trigger(SHORT_PRESS, "button_5").is_none());
    }

    #[test]
    fn test_models_info() {
        assert!(ADEO_LXEK5.matches_model("ADEO", "LXEK-5"));
        assert!(!ADEO_LXEK5.matches_model("ADEO", "LXEK-4"));
    }
}
