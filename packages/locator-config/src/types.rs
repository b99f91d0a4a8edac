use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub security: Security,
	pub search: SearchProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	/// Refuse to start when `service.http_bind` is not a loopback address.
	#[serde(default = "default_true")]
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: true }
	}
}

/// Connection settings for the external semantic search service.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchProviderConfig {
	pub api_base: String,
	#[serde(default = "default_search_path")]
	pub path: String,
	/// Sent as a bearer token. Blank values are normalized to `None`.
	#[serde(default)]
	pub api_key: Option<String>,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_true() -> bool {
	true
}

fn default_search_path() -> String {
	"/v1/search".to_string()
}

fn default_timeout_ms() -> u64 {
	5_000
}
