//! Configuration loading for the investor service.
//!
//! TOML files with `${VAR}` environment-variable substitution and
//! `INVESTOR_`-prefixed overrides. The fee receiver is validated here, at
//! startup; a missing or malformed value never becomes a per-call failure.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	/// Startup-only fatal error: the platform cannot collect fees.
	#[error("fee receiver is not configured: {0}")]
	FeeConfigurationMissing(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Top-level configuration file shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorConfig {
	pub investor: InvestorSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorSection {
	pub name: String,

	#[serde(default = "default_log_level")]
	pub log_level: String,

	#[serde(default = "default_http_port")]
	pub http_port: u16,

	/// Account collecting the platform's cut of every investment. Required.
	pub fee_receiver: Option<String>,

	#[serde(default = "default_fee_rate")]
	pub fee_rate_bps: u64,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_http_port() -> u16 {
	8080
}

fn default_fee_rate() -> u64 {
	5
}

impl InvestorConfig {
	/// The parsed fee receiver address.
	pub fn fee_receiver(&self) -> Result<Address, ConfigError> {
		let raw = self.investor.fee_receiver.as_deref().ok_or_else(|| {
			ConfigError::FeeConfigurationMissing("investor.fee_receiver is not set".to_string())
		})?;
		raw.parse().map_err(|e| {
			ConfigError::FeeConfigurationMissing(format!(
				"investor.fee_receiver is invalid: {e}"
			))
		})
	}
}

/// Configuration loader with environment variable substitution.
#[derive(Default)]
pub struct ConfigLoader {
	file_path: Option<String>,
	env_prefix: String,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "INVESTOR_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_string_lossy().to_string());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<InvestorConfig, ConfigError> {
		let mut config = if let Some(file_path) = &self.file_path {
			self.load_from_file(file_path).await?
		} else {
			return Err(ConfigError::FileNotFound(
				"No configuration file specified".to_string(),
			));
		};

		self.apply_env_overrides(&mut config)?;
		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &str) -> Result<InvestorConfig, ConfigError> {
		let content = tokio::fs::read_to_string(file_path).await?;
		let substituted = self.substitute_env_vars(&content)?;
		let config: InvestorConfig =
			toml::from_str(&substituted).map_err(|e| ConfigError::ParseError(e.to_string()))?;
		Ok(config)
	}

	fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
		let mut result = content.to_string();

		// Find and replace ${VAR_NAME} patterns
		let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

		for cap in re.captures_iter(content) {
			let full_match = &cap[0];
			let var_name = &cap[1];

			let env_value =
				env::var(var_name).map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

			result = result.replace(full_match, &env_value);
		}

		Ok(result)
	}

	fn apply_env_overrides(&self, config: &mut InvestorConfig) -> Result<(), ConfigError> {
		if let Ok(log_level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
			config.investor.log_level = log_level;
		}

		if let Ok(http_port) = env::var(format!("{}HTTP_PORT", self.env_prefix)) {
			config.investor.http_port = http_port
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid HTTP port: {}", e)))?;
		}

		if let Ok(fee_receiver) = env::var(format!("{}FEE_RECEIVER", self.env_prefix)) {
			config.investor.fee_receiver = Some(fee_receiver);
		}

		Ok(())
	}

	fn validate_config(&self, config: &InvestorConfig) -> Result<(), ConfigError> {
		// Resolving the receiver is the validation.
		config.fee_receiver()?;

		if config.investor.fee_rate_bps >= 1000 {
			return Err(ConfigError::ValidationError(
				"investor.fee_rate_bps must be below 1000".to_string(),
			));
		}

		Ok(())
	}
}
