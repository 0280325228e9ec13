//! # Page Courier
//!
//! A forwarding pipeline between a browser and a local page-indexing
//! server: it tracks the HTTP outcome of top-level navigations, submits
//! successfully loaded pages (URL + content) to the server's `/index`
//! endpoint, builds address-bar search URLs against `/search`, and fetches
//! computed answers from `/answer/{uuid}`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    ┌────────────┐    ┌──────────────┐
//! │   Capture    │───▶│  Admission │───▶│   Indexing   │──▶ POST /index
//! │ fetch/file/  │    │    gate    │    │    client    │
//! │ event stream │    └─────┬──────┘    └──────┬───────┘
//! └──────┬───────┘          │                  │
//!        │            ┌─────▼──────┐    ┌──────▼───────┐
//!        └───────────▶│ Navigation │    │ Notification │
//!          (status)   │  tracker   │    │     sink     │
//!                     └────────────┘    └──────────────┘
//! ```
//!
//! A page is submitted if and only if the tracker holds a status below 300
//! for its URL. Submission is best-effort: transport and parse failures
//! are logged and dropped, never retried, and never surfaced as errors.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration and the settings write contract |
//! | [`models`] | Candidates, wire requests and responses |
//! | [`tracker`] | Last-observed status per navigated URL |
//! | [`gate`] | Admission decision |
//! | [`client`] | JSON POST to the index endpoint |
//! | [`capture`] | Submission sources (page fetch, downloaded file) |
//! | [`pipeline`] | Record → gate → submit → notify orchestration |
//! | [`pipe`] | Persistent NDJSON event-stream delivery |
//! | [`search`] | Search URL building and disposition dispatch |
//! | [`answer`] | Answer polling and rendering |
//! | [`notify`] | Fire-and-forget notification sinks |

pub mod answer;
pub mod capture;
pub mod client;
pub mod config;
pub mod gate;
pub mod models;
pub mod notify;
pub mod pipe;
pub mod pipeline;
pub mod search;
pub mod tracker;
