//! Legrand devices

pub mod dimmer;

/// Manufacturer name as the devices report it, leading space included
pub const LEGRAND: &str = " Legrand";
