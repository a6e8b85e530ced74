//! valuator - house price prediction client library.
//!
//! This library provides the core functionality used by the `valuator` binary:
//! - a generic table view engine (search, sort, paging) over history records
//! - a blocking HTTP client for the prediction service
//! - an interactive TUI and plain-text reports

pub mod client;
pub mod fmt;
pub mod model;
pub mod provider;
pub mod report;
pub mod table;
pub mod tui;
pub mod view;
