//! Window Finder Test Suite
//!
//! End-to-end finds against the in-memory store through the public
//! `docwindow` API.
//!
//! ## Modules
//!
//! - `paging`: window bounds, clamping, sort and skip combinations
//! - `limits`: result-set cap and configuration loaded from TOML
//! - `invariants`: properties that hold for every window
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test finder
//! cargo test --test finder paging::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod invariants;
mod limits;
mod paging;
