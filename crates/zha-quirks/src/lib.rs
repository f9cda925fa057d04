//! Device quirks for Zigbee remotes and dimmers
//!
//! Each quirk describes the endpoints a device really exposes, the
//! endpoints applications should see instead, and which button presses
//! map to which Zigbee commands.

pub mod adeo;
pub mod legrand;
pub mod names;
pub mod persistence;
pub mod quirk;
pub mod registry;

pub use quirk::{DeviceTrigger, Quirk, Replacement, Signature};
pub use registry::{ModelInfo, QuirkRegistry, QuirkSummary, RegistryError};

static BUILTIN_QUIRKS: [&Quirk; 6] = [
    &adeo::lxek5::ADEO_LXEK5,
    &legrand::dimmer::DIMMER_WITHOUT_NEUTRAL,
    &legrand::dimmer::DIMMER_WITHOUT_NEUTRAL_2,
    &legrand::dimmer::DIMMER_WITHOUT_NEUTRAL_3,
    &legrand::dimmer::DIMMER_WITHOUT_NEUTRAL_AND_BALLAST,
    &legrand::dimmer::DIMMER_WITH_NEUTRAL,
];

/// All quirks shipped with this crate
#[must_use]
pub fn builtin_quirks() -> &'static [&'static Quirk] {
    &BUILTIN_QUIRKS
}
