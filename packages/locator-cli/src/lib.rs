use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};

/// One-line description shown at the top of `--help`.
pub const ABOUT: &str =
	"Search form for the semantic lab locator; forwards queries to the configured search backend.";

/// `<package version>-<git sha>-<target triple>`, shown by `--version`.
pub const VERSION: &str = concat!(
	env!("CARGO_PKG_VERSION"),
	"-",
	env!("VERGEN_GIT_SHA"),
	"-",
	env!("VERGEN_CARGO_TARGET_TRIPLE"),
);

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default() | Effects::BOLD)
		.usage(AnsiColor::Green.on_default() | Effects::BOLD)
		.literal(AnsiColor::Magenta.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Cyan.on_default())
}
