//! Zigbee device abstraction layer
//!
//! This crate provides the cluster and endpoint model that device quirks
//! are expressed in, on top of the ZCL wire types.

pub mod cluster;
pub mod definition;
pub mod device;
pub mod eventable;
pub mod handler;
pub mod listener;

pub use definition::{AttributeDef, ClusterDefinition, CommandDef};
pub use device::{ClusterSlot, Endpoint, EndpointSignature, ReplacementEndpoint};
pub use eventable::EventableCluster;
pub use handler::{BaseCluster, ClusterError, ClusterRequestHandler};
pub use listener::{BroadcastListener, ClusterEvent, ClusterListener, EventKind, Listeners};
