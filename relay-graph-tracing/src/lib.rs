#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

use serde::{Deserialize, Serialize};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing::*;

const DEFAULT_FILTER: &str = "info,relay_graph=debug,relay_graph_server=debug";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingConfig {
    pub service_name: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "relay-graph-dev".to_string(),
            json: default_json(),
        }
    }
}

fn default_json() -> bool {
    true
}

pub fn init_tracer(config: TracingConfig) -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    let registry = tracing_subscriber::registry().with(filter_layer);
    if config.json {
        registry.with(fmt::layer().json()).try_init()?;
    } else {
        registry.with(fmt::layer()).try_init()?;
    }
    tracing::info!(service_name = %config.service_name, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_fill_missing_fields() -> anyhow::Result<()> {
        let config: TracingConfig = serde_yaml::from_str("service_name: relay")?;
        assert_eq!(config.service_name, "relay");
        assert!(config.json);
        assert!(TracingConfig::default().json);
        Ok(())
    }

    #[test]
    fn plain_output_can_be_selected() -> anyhow::Result<()> {
        let config: TracingConfig = serde_yaml::from_str("service_name: relay\njson: false")?;
        assert!(!config.json);
        Ok(())
    }
}
