//! Clusters that turn manufacturer-specific commands into events

use crate::definition::ClusterDefinition;
use crate::handler::{BaseCluster, ClusterError, ClusterRequestHandler};
use crate::listener::{ClusterListener, EventKind, Listeners};
use std::sync::Arc;
use zcl_protocol::{decode_args, Addressing, GlobalCommand, Value, ZclError, ZclHeader};

/// A custom cluster that fires an event for every known client command.
///
/// Commands missing from the definition's command table are passed,
/// unchanged, to the fallback handler `B`.
#[derive(Debug)]
pub struct EventableCluster<B = BaseCluster> {
    definition: &'static ClusterDefinition,
    listeners: Listeners,
    fallback: B,
}

impl EventableCluster<BaseCluster> {
    #[must_use]
    pub fn new(definition: &'static ClusterDefinition) -> Self {
        Self::with_fallback(definition, BaseCluster::new(definition.cluster_id))
    }
}

impl<B: ClusterRequestHandler> EventableCluster<B> {
    #[must_use]
    pub fn with_fallback(definition: &'static ClusterDefinition, fallback: B) -> Self {
        Self {
            definition,
            listeners: Listeners::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn definition(&self) -> &'static ClusterDefinition {
        self.definition
    }

    #[must_use]
    pub fn cluster_id(&self) -> u16 {
        self.definition.cluster_id
    }

    pub fn add_listener(&self, listener: Arc<dyn ClusterListener>) -> usize {
        self.listeners.add_listener(listener)
    }

    pub fn remove_listener(&self, id: usize) -> bool {
        self.listeners.remove_listener(id)
    }

    /// Decode a raw ZCL frame and handle it as a cluster request.
    ///
    /// Arguments of known commands are decoded against the command schema.
    /// For unknown commands a non-empty payload is passed on as a single
    /// octet string. Global frames never reach the command table: they go
    /// straight to the fallback handler.
    #[allow(clippy::missing_errors_doc)]
    pub fn handle_message(
        &self,
        data: &[u8],
        dst_addressing: Option<&Addressing>,
    ) -> Result<(), ClusterError> {
        let (hdr, payload) = ZclHeader::parse(data)?;

        if !hdr.is_cluster_specific() {
            let Some(command) = GlobalCommand::from_u8(hdr.command_id) else {
                return Err(ZclError::UnknownCommand(hdr.command_id).into());
            };
            tracing::debug!(
                "{}: global {:?} is not translated",
                self.definition.name,
                command
            );
            return self
                .fallback
                .handle_cluster_request(&hdr, &raw_args(payload), dst_addressing);
        }

        let args = match self.definition.client_command(hdr.command_id) {
            Some(command) => decode_args(command.schema, payload)?,
            None => raw_args(payload),
        };

        self.handle_cluster_request(&hdr, &args, dst_addressing)
    }
}

fn raw_args(payload: &[u8]) -> Vec<Value> {
    if payload.is_empty() {
        Vec::new()
    } else {
        vec![Value::OctetString(payload.to_vec())]
    }
}

impl<B: ClusterRequestHandler> ClusterRequestHandler for EventableCluster<B> {
    fn handle_cluster_request(
        &self,
        hdr: &ZclHeader,
        args: &[Value],
        dst_addressing: Option<&Addressing>,
    ) -> Result<(), ClusterError> {
        if let Some(command) = self.definition.client_command(hdr.command_id) {
            self.listeners.listener_event(
                EventKind::ZhaSendEvent,
                self.definition.cluster_id,
                command.name,
                args,
            );
            tracing::debug!(
                "{}: fire event {{action={}, args={:?}}}",
                self.definition.name,
                command.name,
                args
            );
            Ok(())
        } else {
            tracing::debug!("{}: no event fired", self.definition.name);
            self.fallback.handle_cluster_request(hdr, args, dst_addressing)
        }
    }
}
