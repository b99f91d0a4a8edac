use std::sync::Arc;

use locator_search::{RemoteSearcher, Searcher};

/// Process-wide state shared by every request.
///
/// Built once before the listener binds and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
	pub searcher: Arc<dyn Searcher>,
}
impl AppState {
	pub fn new(config: &locator_config::Config) -> color_eyre::Result<Self> {
		let searcher = RemoteSearcher::new(&config.search)?;

		tracing::info!(url = searcher.url(), "Search backend configured.");

		Ok(Self::with_searcher(Arc::new(searcher)))
	}

	pub fn with_searcher(searcher: Arc<dyn Searcher>) -> Self {
		Self { searcher }
	}
}
