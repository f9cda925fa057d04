//! Legrand dimmer switches, with and without neutral

use super::LEGRAND;
use crate::quirk::{Quirk, Replacement, Signature};
use zcl_protocol::DataType;
use zigbee_core::cluster::{device_type, id, profile};
use zigbee_core::{AttributeDef, ClusterDefinition, ClusterSlot, EndpointSignature, ReplacementEndpoint};

/// 64513
pub const MANUFACTURER_SPECIFIC_CLUSTER_ID: u16 = 0xFC01;

pub const DIMMER_WITHOUT_NEUTRAL_MODEL: &str = " Dimmer switch w/o neutral";
pub const DIMMER_WITH_NEUTRAL_MODEL: &str = " Dimmer switch with neutral";

pub const LEGRAND_CLUSTER: ClusterDefinition = ClusterDefinition {
    cluster_id: MANUFACTURER_SPECIFIC_CLUSTER_ID,
    name: "LegrandCluster",
    ep_attribute: "legrand_cluster",
    attributes: &[
        AttributeDef {
            id: 0x0000,
            name: "dimmer",
            data_type: DataType::Data16,
            mandatory: true,
        },
        AttributeDef {
            id: 0x0001,
            name: "led_dark",
            data_type: DataType::Bool,
            mandatory: true,
        },
        AttributeDef {
            id: 0x0002,
            name: "led_on",
            data_type: DataType::Bool,
            mandatory: true,
        },
    ],
    manufacturer_client_commands: &[],
};

// <SimpleDescriptor endpoint=1 profile=260 device_type=256
//  input_clusters=[0, 3, 4, 8, 6, 5, 15, 64513]
//  output_clusters=[0, 64513, 25]>
const INPUT_CLUSTERS: &[u16] = &[
    id::BASIC,
    id::IDENTIFY,
    id::GROUPS,
    id::ON_OFF,
    id::LEVEL_CONTROL,
    id::SCENES,
    id::BINARY_INPUT,
    MANUFACTURER_SPECIFIC_CLUSTER_ID,
];

const OUTPUT_CLUSTERS: &[u16] = &[id::BASIC, MANUFACTURER_SPECIFIC_CLUSTER_ID, id::OTA];

const SIGNATURE_EP1: EndpointSignature = EndpointSignature {
    id: 1,
    profile_id: profile::HOME_AUTOMATION,
    device_type: device_type::ON_OFF_LIGHT,
    input_clusters: INPUT_CLUSTERS,
    output_clusters: OUTPUT_CLUSTERS,
};

// Firmware 0x2e and above also report OnOff and Scenes as outputs
const OUTPUT_CLUSTERS_FW2E: &[u16] = &[
    id::BASIC,
    MANUFACTURER_SPECIFIC_CLUSTER_ID,
    id::OTA,
    id::ON_OFF,
    id::SCENES,
];

const SIGNATURE_EP1_FW2E: EndpointSignature = EndpointSignature {
    output_clusters: OUTPUT_CLUSTERS_FW2E,
    ..SIGNATURE_EP1
};

const SIGNATURE_EP1_BALLAST: EndpointSignature = EndpointSignature {
    input_clusters: &[
        id::BASIC,
        id::IDENTIFY,
        id::GROUPS,
        id::ON_OFF,
        id::LEVEL_CONTROL,
        id::SCENES,
        id::BINARY_INPUT,
        id::BALLAST_CONFIG,
        MANUFACTURER_SPECIFIC_CLUSTER_ID,
    ],
    ..SIGNATURE_EP1_FW2E
};

const SIGNATURE_GP_PROXY_BASIC: EndpointSignature = EndpointSignature {
    id: 242,
    profile_id: profile::GREEN_POWER,
    device_type: device_type::GP_PROXY_BASIC,
    input_clusters: &[],
    output_clusters: &[id::GREEN_POWER_PROXY],
};

const SIGNATURE_GP_COMBO: EndpointSignature = EndpointSignature {
    id: 242,
    profile_id: profile::GREEN_POWER,
    device_type: device_type::GP_COMBO_MINIMUM,
    input_clusters: &[id::GREEN_POWER_PROXY],
    output_clusters: &[id::GREEN_POWER_PROXY],
};

const REPLACEMENT_EP1: ReplacementEndpoint = ReplacementEndpoint {
    id: 1,
    profile_id: profile::HOME_AUTOMATION,
    device_type: device_type::ON_OFF_LIGHT,
    input_clusters: &[
        ClusterSlot::Standard(id::BASIC),
        ClusterSlot::Standard(id::IDENTIFY),
        ClusterSlot::Standard(id::GROUPS),
        ClusterSlot::Standard(id::ON_OFF),
        ClusterSlot::Standard(id::LEVEL_CONTROL),
        ClusterSlot::Standard(id::SCENES),
        ClusterSlot::Standard(id::BINARY_INPUT),
        ClusterSlot::Custom(&LEGRAND_CLUSTER),
    ],
    output_clusters: &[
        ClusterSlot::Standard(id::BASIC),
        ClusterSlot::Custom(&LEGRAND_CLUSTER),
        ClusterSlot::Standard(id::OTA),
    ],
};

// Ballast is added even when the device does not report it; it works either way
const REPLACEMENT_EP1_BALLAST: ReplacementEndpoint = ReplacementEndpoint {
    input_clusters: &[
        ClusterSlot::Standard(id::BASIC),
        ClusterSlot::Standard(id::IDENTIFY),
        ClusterSlot::Standard(id::GROUPS),
        ClusterSlot::Standard(id::ON_OFF),
        ClusterSlot::Standard(id::LEVEL_CONTROL),
        ClusterSlot::Standard(id::SCENES),
        ClusterSlot::Standard(id::BINARY_INPUT),
        ClusterSlot::Standard(id::BALLAST_CONFIG),
        ClusterSlot::Custom(&LEGRAND_CLUSTER),
    ],
    output_clusters: &[
        ClusterSlot::Standard(id::BASIC),
        ClusterSlot::Custom(&LEGRAND_CLUSTER),
        ClusterSlot::Standard(id::OTA),
        ClusterSlot::Standard(id::ON_OFF),
        ClusterSlot::Standard(id::SCENES),
    ],
    ..REPLACEMENT_EP1
};

const REPLACEMENT_GP: ReplacementEndpoint = ReplacementEndpoint {
    id: 242,
    profile_id: profile::GREEN_POWER,
    device_type: device_type::GP_COMBO_MINIMUM,
    input_clusters: &[ClusterSlot::Standard(id::GREEN_POWER_PROXY)],
    output_clusters: &[ClusterSlot::Standard(id::GREEN_POWER_PROXY)],
};

const WITHOUT_NEUTRAL_MODELS: &[(&str, &str)] = &[(LEGRAND, DIMMER_WITHOUT_NEUTRAL_MODEL)];

const REPLACEMENT: Replacement = Replacement {
    endpoints: &[REPLACEMENT_EP1],
};

const REPLACEMENT_WITH_GP: Replacement = Replacement {
    endpoints: &[REPLACEMENT_EP1_BALLAST, REPLACEMENT_GP],
};

pub static DIMMER_WITHOUT_NEUTRAL: Quirk = Quirk {
    name: "DimmerWithoutNeutral",
    description: "Dimmer switch w/o neutral",
    signature: Signature {
        models_info: WITHOUT_NEUTRAL_MODELS,
        endpoints: &[SIGNATURE_EP1],
    },
    replacement: REPLACEMENT,
    triggers: &[],
};

/// Reports a Green Power proxy endpoint, which is not exposed
pub static DIMMER_WITHOUT_NEUTRAL_2: Quirk = Quirk {
    name: "DimmerWithoutNeutral2",
    description: "Dimmer switch w/o neutral 2",
    signature: Signature {
        models_info: WITHOUT_NEUTRAL_MODELS,
        endpoints: &[SIGNATURE_EP1, SIGNATURE_GP_PROXY_BASIC],
    },
    replacement: REPLACEMENT,
    triggers: &[],
};

pub static DIMMER_WITHOUT_NEUTRAL_3: Quirk = Quirk {
    name: "DimmerWithoutNeutral3",
    description: "Dimmer switch w/o neutral (at least for firmware 0x2e and above)",
    signature: Signature {
        models_info: WITHOUT_NEUTRAL_MODELS,
        endpoints: &[SIGNATURE_EP1_FW2E, SIGNATURE_GP_COMBO],
    },
    replacement: REPLACEMENT_WITH_GP,
    triggers: &[],
};

pub static DIMMER_WITHOUT_NEUTRAL_AND_BALLAST: Quirk = Quirk {
    name: "DimmerWithoutNeutralAndBallast",
    description: "Dimmer switch w/o neutral (at least for firmware 0x39)",
    signature: Signature {
        models_info: WITHOUT_NEUTRAL_MODELS,
        endpoints: &[SIGNATURE_EP1_BALLAST, SIGNATURE_GP_COMBO],
    },
    replacement: REPLACEMENT_WITH_GP,
    triggers: &[],
};

pub static DIMMER_WITH_NEUTRAL: Quirk = Quirk {
    name: "DimmerWithNeutral",
    description: "Dimmer switch with neutral",
    signature: Signature {
        models_info: &[(LEGRAND, DIMMER_WITH_NEUTRAL_MODEL)],
        endpoints: &[SIGNATURE_EP1, SIGNATURE_GP_COMBO],
    },
    replacement: REPLACEMENT,
    triggers: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use zcl_protocol::Value;

    #[test]
    fn test_replacement_swaps_in_legrand_cluster() {
        let sig = DIMMER_WITHOUT_NEUTRAL.signature_endpoints();
        let replaced = DIMMER_WITHOUT_NEUTRAL.replacement_endpoints();
        // Same cluster IDs, the custom cluster takes the raw ID's place
        assert_eq!(sig, replaced);
        let custom = DIMMER_WITHOUT_NEUTRAL.custom_clusters();
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].ep_attribute, "legrand_cluster");
        assert!(DIMMER_WITHOUT_NEUTRAL.eventable_clusters().is_empty());
    }

    #[test]
    fn test_gp_proxy_endpoint_dropped() {
        assert_eq!(DIMMER_WITHOUT_NEUTRAL_2.signature.endpoints.len(), 2);
        let replaced = DIMMER_WITHOUT_NEUTRAL_2.replacement_endpoints();
        assert_eq!(replaced.len(), 1);
        assert_eq!(replaced[0].id, 1);
    }

    #[test]
    fn test_firmware_2e_adds_ballast_and_gp() {
        let replaced = DIMMER_WITHOUT_NEUTRAL_3.replacement_endpoints();
        assert_eq!(replaced.len(), 2);
        assert!(replaced[0].in_clusters.contains(&id::BALLAST_CONFIG));
        assert_eq!(replaced[0].out_clusters, OUTPUT_CLUSTERS_FW2E.to_vec());
        assert_eq!(replaced[1].profile_id, 0xA1E0);
        assert_eq!(replaced[1].device_id, 0x0066);
        assert_eq!(replaced[1].in_clusters, vec![0x0021]);
    }

    #[test]
    fn test_ballast_variant_signature() {
        let sig = DIMMER_WITHOUT_NEUTRAL_AND_BALLAST.signature_endpoints();
        assert_eq!(sig[0].in_clusters.len(), 9);
        assert_eq!(sig[0].in_clusters[7], id::BALLAST_CONFIG);
        assert_eq!(
            DIMMER_WITHOUT_NEUTRAL_AND_BALLAST.replacement_endpoints(),
            DIMMER_WITHOUT_NEUTRAL_3.replacement_endpoints()
        );
    }

    #[test]
    fn test_with_neutral_model() {
        assert!(DIMMER_WITH_NEUTRAL.matches_model(" Legrand", " Dimmer switch with neutral"));
        assert!(!DIMMER_WITH_NEUTRAL.matches_model("Legrand", "Dimmer switch with neutral"));
        assert_eq!(DIMMER_WITH_NEUTRAL.replacement_endpoints().len(), 1);
    }

    #[test]
    fn test_legrand_attribute_report() {
        // led_dark = false, dimmer = 0x0101
        let payload = [0x01, 0x00, 0x10, 0x00, 0x00, 0x00, 0x09, 0x01, 0x01];
        let values = LEGRAND_CLUSTER.decode_attribute_report(&payload).unwrap();
        assert_eq!(
            values,
            vec![
                ("led_dark".to_string(), Value::Bool(false)),
                ("dimmer".to_string(), Value::Data16(0x0101)),
            ]
        );
    }
}
