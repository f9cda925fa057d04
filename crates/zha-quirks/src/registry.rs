//! Registry of known quirks, indexed by the models they apply to

use crate::quirk::Quirk;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zigbee_core::Endpoint;

/// Registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Quirk already registered: {0}")]
    DuplicateQuirk(String),

    #[error("Quirk has no models: {0}")]
    NoModels(String),
}

/// A (manufacturer, model) pair as reported by the Basic cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelInfo {
    pub manufacturer: String,
    pub model: String,
}

/// Serializable overview of a quirk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuirkSummary {
    pub name: String,
    pub description: String,
    pub models: Vec<ModelInfo>,
    /// Replacement endpoints as applications see them
    pub endpoints: Vec<Endpoint>,
    pub custom_clusters: Vec<String>,
    pub trigger_count: usize,
}

impl QuirkSummary {
    #[must_use]
    pub fn from_quirk(quirk: &Quirk) -> Self {
        Self {
            name: quirk.name.to_string(),
            description: quirk.description.to_string(),
            models: quirk
                .signature
                .models_info
                .iter()
                .map(|(manufacturer, model)| ModelInfo {
                    manufacturer: (*manufacturer).to_string(),
                    model: (*model).to_string(),
                })
                .collect(),
            endpoints: quirk.replacement_endpoints(),
            custom_clusters: quirk
                .custom_clusters()
                .iter()
                .map(|def| def.name.to_string())
                .collect(),
            trigger_count: quirk.triggers.len(),
        }
    }
}

/// Quirk registry
#[derive(Default)]
pub struct QuirkRegistry {
    /// Quirks keyed by name
    quirks: DashMap<&'static str, &'static Quirk>,
    /// Candidate quirks per reported model, in registration order
    by_model: DashMap<(String, String), Vec<&'static Quirk>>,
}

impl QuirkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in quirk
    #[must_use]
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        for quirk in crate::builtin_quirks().iter().copied() {
            if let Err(e) = registry.register(quirk) {
                tracing::warn!("Skipping built-in quirk {}: {}", quirk.name, e);
            }
        }
        registry
    }

    /// Register a quirk under each of its models
    #[allow(clippy::missing_errors_doc)]
    pub fn register(&self, quirk: &'static Quirk) -> Result<(), RegistryError> {
        if quirk.signature.models_info.is_empty() {
            return Err(RegistryError::NoModels(quirk.name.to_string()));
        }
        if self.quirks.contains_key(quirk.name) {
            return Err(RegistryError::DuplicateQuirk(quirk.name.to_string()));
        }

        self.quirks.insert(quirk.name, quirk);
        for (manufacturer, model) in quirk.signature.models_info {
            self.by_model
                .entry(((*manufacturer).to_string(), (*model).to_string()))
                .or_default()
                .push(quirk);
        }

        tracing::debug!(
            "Registered quirk {} for {} model(s)",
            quirk.name,
            quirk.signature.models_info.len()
        );
        Ok(())
    }

    /// Quirks registered for a reported manufacturer and model
    #[must_use]
    pub fn candidates(&self, manufacturer: &str, model: &str) -> Vec<&'static Quirk> {
        self.by_model
            .get(&(manufacturer.to_string(), model.to_string()))
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Quirk> {
        self.quirks.get(name).map(|r| *r.value())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quirks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quirks.is_empty()
    }

    /// Summaries of all registered quirks, sorted by name
    #[must_use]
    pub fn summaries(&self) -> Vec<QuirkSummary> {
        let mut summaries: Vec<QuirkSummary> = self
            .quirks
            .iter()
            .map(|r| QuirkSummary::from_quirk(r.value()))
            .collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}
