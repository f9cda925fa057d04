//! ZCL (Zigbee Cluster Library) identifiers

/// Common ZCL cluster IDs
pub mod id {
    // General Clusters
    pub const BASIC: u16 = 0x0000;
    pub const POWER_CONFIG: u16 = 0x0001;
    pub const DEVICE_TEMP: u16 = 0x0002;
    pub const IDENTIFY: u16 = 0x0003;
    pub const GROUPS: u16 = 0x0004;
    pub const SCENES: u16 = 0x0005;
    pub const ON_OFF: u16 = 0x0006;
    pub const ON_OFF_SWITCH_CONFIG: u16 = 0x0007;
    pub const LEVEL_CONTROL: u16 = 0x0008;
    pub const ALARMS: u16 = 0x0009;
    pub const TIME: u16 = 0x000A;
    pub const BINARY_INPUT: u16 = 0x000F;
    pub const OTA: u16 = 0x0019;
    pub const GREEN_POWER_PROXY: u16 = 0x0021;

    // Lighting Clusters
    pub const COLOR_CONTROL: u16 = 0x0300;
    pub const BALLAST_CONFIG: u16 = 0x0301;

    // Measurement Clusters
    pub const ILLUMINANCE_MEASUREMENT: u16 = 0x0400;
    pub const TEMPERATURE_MEASUREMENT: u16 = 0x0402;
    pub const HUMIDITY_MEASUREMENT: u16 = 0x0405;
    pub const OCCUPANCY_SENSING: u16 = 0x0406;

    // Home Automation
    pub const ELECTRICAL_MEASUREMENT: u16 = 0x0B04;
    pub const DIAGNOSTIC: u16 = 0x0B05;

    // ZLL
    pub const LIGHT_LINK: u16 = 0x1000;
}

/// Start of the manufacturer-specific cluster ID range
pub const MANUFACTURER_SPECIFIC_MIN: u16 = 0xFC00;

/// Check whether a cluster ID lies in the manufacturer-specific range
#[must_use]
pub fn is_manufacturer_specific(cluster_id: u16) -> bool {
    cluster_id >= MANUFACTURER_SPECIFIC_MIN
}

/// Application profile IDs
pub mod profile {
    /// Zigbee Home Automation (260)
    pub const HOME_AUTOMATION: u16 = 0x0104;
    /// Zigbee Green Power (41440)
    pub const GREEN_POWER: u16 = 0xA1E0;
}

/// Device IDs within a profile
pub mod device_type {
    // Home Automation
    pub const ON_OFF_SWITCH: u16 = 0x0000;
    pub const ON_OFF_LIGHT: u16 = 0x0100;
    pub const DIMMABLE_LIGHT: u16 = 0x0101;
    pub const COLOR_CONTROLLER: u16 = 0x0800;

    // Green Power
    pub const GP_PROXY_BASIC: u16 = 0x0061;
    pub const GP_COMBO_MINIMUM: u16 = 0x0066;
}
