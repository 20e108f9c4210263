// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Kickplan SDK.
//!
//! This crate provides the types shared by every flag backend: the
//! dynamically-typed [`FlagValue`], the [`resolve`] coercion point that turns
//! it back into the caller's expected type, and the [`EvaluationContext`]
//! forwarded with each evaluation and metric call. It performs no I/O.
//!
//! # Example
//!
//! ```
//! use kickplan_core::{resolve, EvaluationContext, FlagValue};
//!
//! let ctx = EvaluationContext::new()
//!     .with_attribute("account_id", "acme")
//!     .with_attribute("plan", serde_json::json!("enterprise"));
//!
//! // A stored boolean resolves against a boolean default.
//! let stored = FlagValue::Boolean(true);
//! assert_eq!(resolve(Some(&stored), false), Ok(true));
//!
//! // An absent value falls back to the default with no error.
//! assert_eq!(resolve::<bool>(None, true), Ok(true));
//! ```

pub mod context;
pub mod value;

pub use context::EvaluationContext;
pub use value::{resolve, FlagValue, FromFlagValue, TypeMismatchError};
