use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use locator_config::SearchProviderConfig;

use crate::{BoxFuture, Error, Result, SearchHit, SearchRequest, Searcher};

/// Searcher backed by an HTTP semantic search service.
///
/// Holds one pooled client, built at startup, for every request.
#[derive(Debug, Clone)]
pub struct RemoteSearcher {
	client: Client,
	url: String,
}
impl RemoteSearcher {
	pub fn new(cfg: &SearchProviderConfig) -> Result<Self> {
		let headers = crate::auth_headers(cfg.api_key.as_deref(), &cfg.default_headers)?;
		let client = Client::builder()
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.default_headers(headers)
			.build()?;

		Ok(Self { client, url: format!("{}{}", cfg.api_base, cfg.path) })
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	async fn post(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
		let res = self.client.post(&self.url).json(request).send().await?;
		let status = res.status();

		if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
			return Err(Error::Unavailable { message: format!("{} returned {status}.", self.url) });
		}

		let json: Value = res.error_for_status()?.json().await?;
		let hits = parse_search_response(json)?;

		tracing::debug!(url = %self.url, hits = hits.len(), "Search backend responded.");

		Ok(hits)
	}
}
impl Searcher for RemoteSearcher {
	fn search<'a>(&'a self, request: &'a SearchRequest) -> BoxFuture<'a, Result<Vec<SearchHit>>> {
		Box::pin(self.post(request))
	}
}

fn parse_search_response(json: Value) -> Result<Vec<SearchHit>> {
	let items = match json {
		Value::Array(items) => items,
		Value::Object(mut object) => match object.remove("results").or_else(|| object.remove("data")) {
			Some(Value::Array(items)) => items,
			_ =>
				return Err(Error::InvalidResponse {
					message: "Search response is missing results array.".to_string(),
				}),
		},
		_ =>
			return Err(Error::InvalidResponse {
				message: "Search response must be an object or an array.".to_string(),
			}),
	};

	Ok(items.into_iter().map(SearchHit).collect())
}
