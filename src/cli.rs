use clap::Parser;
use serde::Deserialize;
use std::fs;

use crate::error::Result;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to the tailscale executable, overrides the configured path
    #[arg(short, long)]
    pub tool_path: Option<String>,

    /// Log level for stderr diagnostics
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,

    #[serde(default)]
    pub fields: FieldMap,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: ToolConfig::default(),
            fields: FieldMap::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToolConfig {
    #[serde(default = "default_tool_path")]
    pub path: String,

    #[serde(default = "default_tool_args")]
    pub args: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            path: default_tool_path(),
            args: default_tool_args(),
        }
    }
}

fn default_tool_path() -> String {
    "tailscale".to_string()
}

fn default_tool_args() -> Vec<String> {
    vec!["metrics".to_string()]
}

/// Metric key names recognized in the tool output. The upstream names are
/// version-dependent, so each snapshot field carries a list of aliases that
/// can be extended or replaced from the configuration file.
#[derive(Debug, Deserialize, Clone)]
pub struct FieldMap {
    #[serde(default = "default_rx_bytes")]
    pub rx_bytes: Vec<String>,

    #[serde(default = "default_tx_bytes")]
    pub tx_bytes: Vec<String>,

    #[serde(default = "default_advertised_routes")]
    pub advertised_routes: Vec<String>,

    #[serde(default = "default_approved_routes")]
    pub approved_routes: Vec<String>,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            rx_bytes: default_rx_bytes(),
            tx_bytes: default_tx_bytes(),
            advertised_routes: default_advertised_routes(),
            approved_routes: default_approved_routes(),
        }
    }
}

fn default_rx_bytes() -> Vec<String> {
    vec![
        "tailscaled_inbound_bytes_total".to_string(),
        "RxBytes".to_string(),
    ]
}

fn default_tx_bytes() -> Vec<String> {
    vec![
        "tailscaled_outbound_bytes_total".to_string(),
        "TxBytes".to_string(),
    ]
}

fn default_advertised_routes() -> Vec<String> {
    vec![
        "tailscaled_advertised_routes".to_string(),
        "AdvertisedRoutes".to_string(),
    ]
}

fn default_approved_routes() -> Vec<String> {
    vec![
        "tailscaled_approved_routes".to_string(),
        "ApprovedRoutes".to_string(),
    ]
}
