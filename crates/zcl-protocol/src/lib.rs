//! Zigbee Cluster Library wire types
//!
//! This crate implements the parts of the ZCL frame format needed to decode
//! incoming cluster commands and attribute reports.

pub mod commands;
pub mod frame;
pub mod report;
pub mod types;

pub use commands::{GlobalCommand, Status};
pub use frame::{Direction, FrameControl, FrameType, ZclHeader};
pub use report::{decode_report_attributes, AttributeReport};
pub use types::*;
