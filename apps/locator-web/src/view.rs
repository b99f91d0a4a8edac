use serde_json::Value;
use uuid::Uuid;

use locator_search::SearchHit;

const TITLE_FIELDS: &[&str] = &["title", "name"];
const BODY_FIELDS: &[&str] = &["text", "snippet", "description"];
const LOCATION_FIELDS: &[&str] = &["location"];

/// What a single page render shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
	pub query: String,
	pub results: Vec<SearchHit>,
	pub notice: Option<Notice>,
}

/// User-facing error banner. `reference` matches the id in the server log.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
	pub message: String,
	pub reference: Uuid,
}

pub fn render(state: &ViewState) -> String {
	let mut body = String::new();

	if let Some(notice) = &state.notice {
		body.push_str(&format!(
			r#"<p class="notice" role="alert">{} (reference {})</p>"#,
			escape(&notice.message),
			notice.reference
		));
	}

	if !state.query.is_empty() && state.notice.is_none() {
		if state.results.is_empty() {
			body.push_str(r#"<p class="empty">No results.</p>"#);
		} else {
			body.push_str(&format!(
				r#"<p class="count">{} result{}</p><ol class="results">"#,
				state.results.len(),
				if state.results.len() == 1 { "" } else { "s" }
			));

			for hit in &state.results {
				body.push_str(&render_hit(hit));
			}

			body.push_str("</ol>");
		}
	}

	format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
	<meta charset="utf-8">
	<title>Semantic Lab Locator</title>
	<style>
		body {{ font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
		form {{ display: flex; gap: 0.5rem; }}
		input[name=query] {{ flex: 1; padding: 0.4rem; }}
		.notice {{ color: #b3261e; }}
		.score, .location {{ color: #555; font-size: 0.9em; }}
	</style>
</head>
<body>
	<h1>Semantic Lab Locator</h1>
	<form method="post" action="/">
		<input type="text" name="query" value="{query}" placeholder="What are you looking for?" autofocus>
		<button type="submit">Search</button>
	</form>
	{body}
</body>
</html>
"#,
		query = escape(&state.query),
	)
}

fn render_hit(hit: &SearchHit) -> String {
	let title = hit.text_field(TITLE_FIELDS);
	let text = hit.text_field(BODY_FIELDS);
	let mut item = String::from("<li>");

	match (title, text) {
		(None, None) => {
			let raw = match hit.as_value() {
				Value::String(raw) => raw.clone(),
				other => other.to_string(),
			};

			item.push_str(&format!("<code>{}</code>", escape(&raw)));
		},
		_ => {
			if let Some(title) = title {
				item.push_str(&format!("<strong>{}</strong>", escape(title)));
			}
			if let Some(text) = text {
				item.push_str(&format!("<p>{}</p>", escape(text)));
			}
		},
	}

	if let Some(location) = hit.text_field(LOCATION_FIELDS) {
		item.push_str(&format!(r#"<span class="location">{}</span> "#, escape(location)));
	}
	if let Some(score) = hit.score() {
		item.push_str(&format!(r#"<span class="score">score {score:.2}</span>"#));
	}

	item.push_str("</li>");

	item
}

fn escape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());

	for ch in raw.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}

	out
}
