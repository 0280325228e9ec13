//! Navigation outcome tracking.
//!
//! Records the last-observed HTTP status code of completed top-level
//! navigations, keyed by URL. The admission gate consults this table to
//! decide whether a captured page may be submitted to the indexing server.
//!
//! The table is transient: it lives for the process lifetime and is never
//! persisted. URLs are opaque keys — no normalization is applied, so
//! `http://a/` and `http://a` are distinct entries.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Deserialize;

/// Sentinel tab id for requests not attached to any tab (background
/// fetches, service workers).
pub const TAB_ID_NONE: i64 = -1;

/// Kind of frame a completed request loaded into.
///
/// Wire names follow the webRequest `type` values, so `"main_frame"` and
/// `"sub_frame"` deserialize directly from event streams. Anything else
/// (images, scripts, XHR, unknown future kinds) maps to [`FrameKind::Other`]
/// and is never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    MainFrame,
    SubFrame,
    #[serde(other)]
    Other,
}

/// Last-observed HTTP status per URL.
///
/// Constructed once at startup and shared by reference with the gate and
/// the capture sources. Interior mutability keeps recording a `&self`
/// operation, matching the event-handler call sites.
pub struct NavigationTracker {
    codes: RwLock<HashMap<String, u16>>,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self {
            codes: RwLock::new(HashMap::new()),
        }
    }

    /// Record a completed navigation.
    ///
    /// Only top-level, tab-attached loads represent a page the user is
    /// looking at; sub-resource loads and tabless contexts may share a URL
    /// with a main-frame load but carry unrelated status semantics, so they
    /// are silently ignored. Never fails.
    pub fn record_completion(&self, url: &str, status_code: u16, frame: FrameKind, tab_id: i64) {
        if frame != FrameKind::MainFrame || tab_id == TAB_ID_NONE {
            return;
        }
        let mut codes = self.codes.write().unwrap();
        codes.insert(url.to_string(), status_code);
    }

    /// Most recent status recorded for `url`, if any.
    pub fn lookup_status(&self, url: &str) -> Option<u16> {
        let codes = self.codes.read().unwrap();
        codes.get(url).copied()
    }
}

impl Default for NavigationTracker {
    fn default() -> Self {
        Self::new()
    }
}
