//! Address-bar search dispatch.
//!
//! Builds `{base}/search?q={query}` URLs for the indexing server and maps
//! the address-bar disposition to a navigation action. URL building and
//! the disposition mapping are both pure; actually opening the URL is the
//! host's job.

use anyhow::{bail, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::config::Config;

/// Query escaping compatible with `encodeURIComponent`: everything but
/// ASCII alphanumerics and `-_.!~*'()` is percent-encoded. Notably space
/// becomes `%20`, not `+`.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the search URL for `query` against the server at `base_url`.
pub fn build_search_url(base_url: &str, query: &str) -> String {
    let escaped = percent_encoding::utf8_percent_encode(query, QUERY_ESCAPE);
    format!("{}/search?q={}", base_url.trim_end_matches('/'), escaped)
}

/// How the address-bar result should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    CurrentTab,
    NewForegroundTab,
    NewBackgroundTab,
}

impl Disposition {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "current" => Ok(Disposition::CurrentTab),
            "foreground" => Ok(Disposition::NewForegroundTab),
            "background" => Ok(Disposition::NewBackgroundTab),
            other => bail!(
                "Unknown disposition: '{}'. Must be current, foreground, or background.",
                other
            ),
        }
    }
}

/// Navigation the host should perform with a built search URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Replace the current tab's document.
    ReplaceCurrent(String),
    /// Open a new tab and focus it.
    OpenFocused(String),
    /// Open a new tab without stealing focus.
    OpenUnfocused(String),
}

impl NavigationAction {
    pub fn label(&self) -> &'static str {
        match self {
            NavigationAction::ReplaceCurrent(_) => "replace-current",
            NavigationAction::OpenFocused(_) => "open-focused",
            NavigationAction::OpenUnfocused(_) => "open-unfocused",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            NavigationAction::ReplaceCurrent(url)
            | NavigationAction::OpenFocused(url)
            | NavigationAction::OpenUnfocused(url) => url,
        }
    }
}

/// Pure mapping from disposition to navigation action.
pub fn navigation_action(disposition: Disposition, url: String) -> NavigationAction {
    match disposition {
        Disposition::CurrentTab => NavigationAction::ReplaceCurrent(url),
        Disposition::NewForegroundTab => NavigationAction::OpenFocused(url),
        Disposition::NewBackgroundTab => NavigationAction::OpenUnfocused(url),
    }
}

/// CLI entry point — builds the URL and prints the dispatch decision.
pub fn run_search(config: &Config, query: &str, disposition: &str) -> Result<()> {
    let disposition = Disposition::parse(disposition)?;
    let url = build_search_url(&config.server.base_url, query);
    let action = navigation_action(disposition, url);

    println!("search {}", query);
    println!("  url: {}", action.url());
    println!("  action: {}", action.label());
    println!("ok");

    Ok(())
}
