//! github-activity - Fetch and display recent GitHub user activity.
//!
//! This crate fetches a user's public events from the GitHub REST API and
//! renders each supported event as a one-line summary:
//! - Event decoding and per-type formatting
//! - Fetching with classified HTTP and transport failures
//! - Bounded console display

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod feed;
pub mod logging;
