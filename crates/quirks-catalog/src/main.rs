//! Quirks Catalog - lists the built-in device quirks and writes them as JSON

use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zha_quirks::persistence;
use zha_quirks::{QuirkRegistry, QuirkSummary};

/// Runtime configuration, read from the environment
struct Config {
    /// Catalog output file
    catalog_path: PathBuf,
}

impl Config {
    fn from_env() -> Self {
        let data_dir = std::env::var("QUIRKS_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        Self {
            catalog_path: PathBuf::from(data_dir).join("quirks.json"),
        }
    }
}

fn names(summaries: &[QuirkSummary]) -> BTreeSet<&str> {
    summaries.iter().map(|s| s.name.as_str()).collect()
}

fn log_summary(summary: &QuirkSummary) {
    let models = summary
        .models
        .iter()
        .map(|m| format!("{:?}/{:?}", m.manufacturer, m.model))
        .collect::<Vec<_>>()
        .join(", ");
    tracing::info!(
        "{}: {} [{}], {} endpoint(s), custom clusters {:?}, {} trigger(s)",
        summary.name,
        summary.description,
        models,
        summary.endpoints.len(),
        summary.custom_clusters,
        summary.trigger_count
    );
    for ep in &summary.endpoints {
        tracing::debug!(
            "  EP{}: profile={:#06x} device={:#06x} in={:04x?} out={:04x?}",
            ep.id,
            ep.profile_id,
            ep.device_id,
            ep.in_clusters,
            ep.out_clusters
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quirks_catalog=debug,zha_quirks=debug,info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Building quirk catalog at {:?}", config.catalog_path);

    let registry = QuirkRegistry::with_builtin();
    let summaries = registry.summaries();
    for summary in &summaries {
        log_summary(summary);
    }

    let previous = persistence::load_catalog(&config.catalog_path).await;
    if !previous.is_empty() {
        let (old, new) = (names(&previous), names(&summaries));
        for added in new.difference(&old) {
            tracing::info!("New quirk: {}", added);
        }
        for removed in old.difference(&new) {
            tracing::warn!("Quirk no longer provided: {}", removed);
        }
        if previous == summaries {
            tracing::info!("Catalog unchanged");
        }
    }

    persistence::save_catalog(&config.catalog_path, &summaries).await?;
    tracing::info!(
        "Wrote {} quirks to {:?}",
        summaries.len(),
        config.catalog_path
    );

    Ok(())
}
