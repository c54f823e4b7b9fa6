//! # GDP per Capita Dashboard
//!
//! Core of a single-page dashboard for exploring per-country GDP per capita
//! over time.
//!
//! ## Pipeline
//!
//! ```text
//! CSV file -> RawTable -> normalize -> CanonicalTable (shared, read-only)
//!                                           |
//!      (CountrySelection, YearRange) -> select -> melt -> render -> ChartSpec
//! ```
//!
//! The canonical table is built once and passed by `Arc` to the
//! [`Dashboard`](dashboard::Dashboard). Each control change runs one
//! synchronous recompute and fully replaces the displayed chart. Widget
//! rendering, event dispatch and chart drawing belong to the host.
//!
//! ## Modules
//!
//! - **types**: raw, canonical, selected and tidy tables
//! - **data**: CSV parsing, normalization, selection, reshaping, chart specs
//! - **default_selection**: random initial selection behind [`RandomSource`](default_selection::RandomSource)
//! - **dashboard**: controls, layout and the host callback contract
//! - **settings**: JSON settings file

pub mod constants;
pub mod dashboard;
pub mod data;
pub mod default_selection;
pub mod settings;
pub mod types;
