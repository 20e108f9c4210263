// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kickplan Rust SDK.
//!
//! This crate provides a client library for evaluating feature flags and
//! reporting metrics against the Kickplan API, with an in-memory adapter for
//! testing and offline use.
//!
//! # Features
//!
//! - **Typed Evaluation**: Methods for boolean, string, int64, and raw object
//!   values, with the caller's default as the universal fallback
//! - **Metrics**: Absolute set, increment, and decrement counters
//! - **Pluggable Backends**: The [`Adapter`] trait with remote and in-memory
//!   implementations; call sites never know which one is active
//! - **Environment Wiring**: `KICKPLAN_*` variables select and configure the
//!   remote adapter
//!
//! # Example
//!
//! ```ignore
//! use kickplan::{Client, EvaluationContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Remote when KICKPLAN_ACCESS_TOKEN is set, in-memory otherwise.
//!     let client = Client::new();
//!
//!     let ctx = EvaluationContext::new()
//!         .with_attribute("account_id", "acme");
//!
//!     let enabled = client.get_bool("checkout.new_flow", false, &ctx).await?;
//!     let theme = client.get_string("ui.theme", "light", &ctx).await?;
//!
//!     client.inc_metric("api.requests", 1, &ctx).await?;
//!
//!     Ok(())
//! }
//! ```

mod adapter;
mod client;
mod config;
mod error;
mod inmemory;
mod remote;
mod transport;

pub use adapter::Adapter;
pub use client::{Client, ClientBuilder};
pub use config::{
	RemoteConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ENV_ACCESS_TOKEN,
	ENV_ENDPOINT, ENV_TIMEOUT, ENV_USER_AGENT,
};
pub use error::{AdapterError, Result};
pub use inmemory::InMemoryAdapter;
pub use remote::RemoteAdapter;
pub use transport::Transport;

// Re-export core types for convenience
pub use kickplan_core::{resolve, EvaluationContext, FlagValue, FromFlagValue, TypeMismatchError};
