pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read locator config at {path:?}.")]
	ReadConfig { path: std::path::PathBuf, source: std::io::Error },
	#[error("Locator config at {path:?} is not valid TOML: {source}")]
	ParseConfig { path: std::path::PathBuf, source: toml::de::Error },
	/// The file exists but holds no settings; usually a truncated deploy.
	#[error("Locator config at {path:?} is empty.")]
	EmptyConfig { path: std::path::PathBuf },
	#[error("{message}")]
	Validation { message: String },
}
