use std::process::Command;

use log::debug;

use crate::cli::ToolConfig;
use crate::error::{Result, SensorError};

/// Wrapper around the local status tool. Runs it synchronously and hands the
/// captured stdout to the parser.
pub struct MetricsSource {
    path: String,
    args: Vec<String>,
}

impl MetricsSource {
    pub fn new(config: &ToolConfig, path_override: Option<&str>) -> Self {
        Self {
            path: path_override.unwrap_or(&config.path).to_string(),
            args: config.args.clone(),
        }
    }

    /// Invoke the tool and return its raw text output.
    pub fn collect(&self) -> Result<String> {
        debug!("invoking {} {}", self.path, self.args.join(" "));

        let output = Command::new(&self.path).args(&self.args).output().map_err(|e| {
            SensorError::ToolInvocation(format!("failed to launch {}: {}", self.path, e))
        })?;

        if !output.status.success() {
            return Err(SensorError::ToolInvocation(format!(
                "{} exited with {}: {}",
                self.path,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
