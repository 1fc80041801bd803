//! depindocs: a terminal documentation-site browser.
//!
//! Markdown pages render into a scrollable article column flanked by a
//! sidebar navigation map and an "On this page" outline whose highlight
//! follows the reader's scroll position. Leaderboard pages additionally
//! carry demo data tables. The active-section computation lives in
//! [`tracker`] as a pure function over resolved heading positions.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod input;
pub mod layout;
pub mod markdown;
pub mod nav;
pub mod page;
pub mod table;
pub mod theme;
pub mod toc;
pub mod tracker;
pub mod ui;
