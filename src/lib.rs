// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # goal
//!
//! Helps you achieve your goals by using strategy and tactics.
//!
//! A goal lives in its own YAML file: a description, a strategy, and a list of
//! tactics. Each tactic records when it was last done and how often it
//! recurs. The report shows, per goal, which tactics are still outstanding.
//!
//! ## Architecture
//!
//! - **Completion dates** (`done`): never / unknown / a calendar day
//! - **Recurrence** (`interval`): once, daily, weekly, monthly
//! - **Model** (`goal`): tactics, goals, satisfaction and recency order
//! - **Loading** (`loader`): directory scan with per-file error collection
//! - **Reporting** (`report`): terse or verbose text output
//!
//! ## Library usage
//!
//! ```no_run
//! use goal::loader::load_goals;
//! use goal::report::render;
//!
//! let outcome = load_goals(std::path::Path::new("/home/me/goal")).unwrap();
//! let now = chrono::Local::now().naive_local();
//! render(&outcome.goals, false, now, &mut std::io::stdout()).unwrap();
//! ```

pub mod config;
pub mod done;
pub mod error;
pub mod example;
pub mod goal;
pub mod interval;
pub mod loader;
pub mod report;
