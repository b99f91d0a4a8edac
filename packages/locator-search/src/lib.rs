pub mod remote;

mod error;

pub use error::{Error, Result};
pub use remote::RemoteSearcher;

use std::{future::Future, pin::Pin};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName};
use serde_json::{Map, Value};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Number of results requested per search.
pub const DEFAULT_K: u32 = 12;
/// Minimum relevance score a result must reach.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.8;
/// Ask the backend to collapse near-duplicate results.
pub const DEFAULT_DEDUPE: bool = true;

/// One semantic search invocation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
	pub k: u32,
	pub score_threshold: f32,
	pub dedupe: bool,
}
impl SearchRequest {
	/// Builds a request with the fixed locator parameters.
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			k: DEFAULT_K,
			score_threshold: DEFAULT_SCORE_THRESHOLD,
			dedupe: DEFAULT_DEDUPE,
		}
	}
}

/// A single result as returned by the search backend.
///
/// The shape is owned by the backend; hits are carried through untouched.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SearchHit(pub Value);
impl SearchHit {
	pub fn as_value(&self) -> &Value {
		&self.0
	}

	/// First non-blank string among `names`, when the hit is an object.
	pub fn text_field(&self, names: &[&str]) -> Option<&str> {
		let object = self.0.as_object()?;

		names
			.iter()
			.filter_map(|name| object.get(*name).and_then(Value::as_str))
			.find(|value| !value.trim().is_empty())
	}

	pub fn score(&self) -> Option<f64> {
		self.0.get("score").and_then(Value::as_f64)
	}
}
impl From<Value> for SearchHit {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

/// The semantic search capability consumed by the locator.
///
/// Implementations are shared by every request for the life of the process and must tolerate
/// concurrent calls.
pub trait Searcher
where
	Self: Send + Sync,
{
	fn search<'a>(&'a self, request: &'a SearchRequest) -> BoxFuture<'a, Result<Vec<SearchHit>>>;
}

pub fn auth_headers(api_key: Option<&str>, default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	if let Some(key) = api_key {
		headers.insert(AUTHORIZATION, format!("Bearer {key}").parse()?);
	}

	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: format!("Default header {key} must be a string."),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(headers)
}
