mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, SearchProviderConfig, Security, Service};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	if raw.trim().is_empty() {
		return Err(Error::EmptyConfig { path: path.to_path_buf() });
	}

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address such as 127.0.0.1:8080."
				.to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	let search = &cfg.search;

	if search.api_base.is_empty() {
		return Err(Error::Validation { message: "search.api_base must be non-empty.".to_string() });
	}
	if !(search.api_base.starts_with("http://") || search.api_base.starts_with("https://")) {
		return Err(Error::Validation {
			message: "search.api_base must start with http:// or https://.".to_string(),
		});
	}
	if !search.path.starts_with('/') {
		return Err(Error::Validation { message: "search.path must start with /.".to_string() });
	}
	if search.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "search.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &search.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("search.default_headers.{key} must be a string."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.search.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.search.api_key = None;
	}

	let trimmed = cfg.search.api_base.trim().trim_end_matches('/');

	if trimmed.len() != cfg.search.api_base.len() {
		cfg.search.api_base = trimmed.to_string();
	}
}
