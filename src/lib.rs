//! Emitab - a fast, terminal-based emissions data table.
//!
//! Emitab renders a fixed dataset of company emissions records as an
//! interactive terminal table: free-text filters match on word starts
//! (case- and accent-insensitive), a numeric range narrows by emissions,
//! and every column sorts with a stable, locale-aware comparison.
//!
//! # Features
//!
//! - Word-start filtering with diacritic stripping
//! - Numeric range filter with input sanitization
//! - Stable column sorting with natural number ordering
//! - Vim-style keyboard navigation
//! - Gruvbox color themes
//! - Clipboard export of the visible rows
//!
//! # Example
//!
//! ```
//! use emitab::data::DATASET;
//! use emitab::filter::{self, FilterCriteria};
//! use emitab::sort::{self, SortState};
//!
//! let criteria = FilterCriteria::from_inputs("deutsch", "", "100", "300");
//! let rows = sort::sort_rows(filter::apply(DATASET, &criteria), &SortState::new());
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].company, "EcoCorp");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod filter;
pub mod form;
pub mod locale;
pub mod sort;
pub mod text;
pub mod ui;

pub use error::{Result, TableError};
