use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use locator_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let table = root
		.as_table_mut()
		.expect("Sample config must be a table.")
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Sample config must include the requested section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("locator_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn load_payload(payload: String) -> locator_config::Result<Config> {
	let path = write_temp_config(payload);
	let result = locator_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	result
}

fn expect_validation(payload: String, expected: &str) {
	let err = load_payload(payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(matches!(err, Error::Validation { .. }), "Unexpected error kind: {err:?}");
	assert!(message.contains(expected), "Unexpected error message: {message}");
}

#[test]
fn loads_and_normalizes_sample_config() {
	let cfg = load_payload(SAMPLE_CONFIG_TOML.to_string()).expect("Sample config must load.");

	assert_eq!(cfg.service.http_bind, "127.0.0.1:8080");
	assert_eq!(cfg.search.api_base, "http://127.0.0.1:9000");
	assert_eq!(cfg.search.api_key, None);
	assert_eq!(cfg.search.timeout_ms, 5_000);
	assert_eq!(cfg.search.default_headers["X-Locator-Client"], "web");
	assert!(cfg.security.bind_localhost_only);
}

#[test]
fn optional_sections_take_defaults() {
	let payload = r#"
[service]
http_bind = "127.0.0.1:8080"

[search]
api_base = "https://search.internal"
"#;
	let cfg = load_payload(payload.to_string()).expect("Minimal config must load.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.search.path, "/v1/search");
	assert_eq!(cfg.search.timeout_ms, 5_000);
	assert!(cfg.search.default_headers.is_empty());
	assert!(cfg.security.bind_localhost_only);
}

#[test]
fn http_bind_must_be_socket_address() {
	expect_validation(
		sample_with("service", "http_bind", Value::String("localhost".to_string())),
		"service.http_bind must be a socket address",
	);
}

#[test]
fn api_base_must_be_http_url() {
	expect_validation(
		sample_with("search", "api_base", Value::String("ftp://search".to_string())),
		"search.api_base must start with http:// or https://.",
	);
	expect_validation(
		sample_with("search", "api_base", Value::String("   ".to_string())),
		"search.api_base must be non-empty.",
	);
}

#[test]
fn path_must_be_absolute() {
	expect_validation(
		sample_with("search", "path", Value::String("v1/search".to_string())),
		"search.path must start with /.",
	);
}

#[test]
fn timeout_must_be_positive() {
	expect_validation(
		sample_with("search", "timeout_ms", Value::Integer(0)),
		"search.timeout_ms must be greater than zero.",
	);
}

#[test]
fn default_headers_must_be_strings() {
	let mut headers = toml::map::Map::new();

	headers.insert("X-Retries".to_string(), Value::Integer(3));

	expect_validation(
		sample_with("search", "default_headers", Value::Table(headers)),
		"search.default_headers.X-Retries must be a string.",
	);
}

#[test]
fn missing_file_reports_read_error() {
	let err = locator_config::load(&PathBuf::from("/nonexistent/locator.toml"))
		.expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }));
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = load_payload("[service\nhttp_bind = 1".to_string()).expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }));
}

#[test]
fn blank_file_reports_empty_config() {
	let err = load_payload(" \n\t\n".to_string()).expect_err("Expected empty config error.");

	assert!(matches!(err, Error::EmptyConfig { .. }));
	assert!(err.to_string().contains("is empty."), "Unexpected error message: {err}");
}
