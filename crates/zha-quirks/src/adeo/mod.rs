//! ADEO (Leroy Merlin) devices

pub mod lxek5;

pub const ADEO: &str = "ADEO";
