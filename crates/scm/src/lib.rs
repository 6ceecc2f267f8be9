//! GitHub implementation of the labeler's SCM gateway.
//!
//! Provides a REST client for the three operations the reconciler
//! needs: fetching a repository's label rule file, listing a pull
//! request's current labels, and replacing them.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Remote API calls can fail for many reasons

pub mod client;

pub use client::GitHubClient;
