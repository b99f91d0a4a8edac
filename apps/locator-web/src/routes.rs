use axum::{
	Form, Router,
	extract::{State, rejection::FormRejection},
	http::StatusCode,
	response::Html,
	routing::get,
};
use uuid::Uuid;

use locator_search::{SearchRequest, Searcher};

use crate::{
	state::AppState,
	view::{self, Notice, ViewState},
};

pub const SEARCH_UNAVAILABLE: &str = "Search is temporarily unavailable.";

const QUERY_FIELD: &str = "query";

/// Value of the first `query` field in a submitted form, or an empty string.
///
/// Repeated fields are legal in urlencoded bodies; later values are ignored.
pub fn first_query(fields: &[(String, String)]) -> &str {
	fields
		.iter()
		.find(|(name, _)| name == QUERY_FIELD)
		.map(|(_, value)| value.as_str())
		.unwrap_or_default()
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(index).post(search))
		.route("/health", get(health))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn index() -> Html<String> {
	Html(view::render(&ViewState::default()))
}

async fn search(
	State(state): State<AppState>,
	form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
	let fields = match form {
		Ok(Form(fields)) => fields,
		Err(rejection) => {
			tracing::debug!(%rejection, "Unreadable search form; treating as an empty query.");

			Vec::new()
		},
	};
	let view_state = resolve(state.searcher.as_ref(), first_query(&fields)).await;

	Html(view::render(&view_state))
}

/// Runs one form submission against `searcher` and returns what the page should show.
///
/// Blank queries never reach the searcher. Search failures are logged and degrade to an empty
/// result list with a notice.
pub async fn resolve(searcher: &dyn Searcher, raw_query: &str) -> ViewState {
	let query = raw_query.trim();

	if query.is_empty() {
		return ViewState::default();
	}

	let request = SearchRequest::new(query);

	match searcher.search(&request).await {
		Ok(results) => {
			tracing::info!(query_chars = query.chars().count(), hits = results.len(), "Search completed.");

			ViewState { query: request.query, results, notice: None }
		},
		Err(err) => {
			let reference = Uuid::new_v4();

			tracing::error!(%reference, error = %err, "Search failed.");

			ViewState {
				query: request.query,
				results: Vec::new(),
				notice: Some(Notice { message: SEARCH_UNAVAILABLE.to_string(), reference }),
			}
		},
	}
}
