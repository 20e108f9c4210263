// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Kickplan SDK.

use kickplan_core::TypeMismatchError;
use thiserror::Error;

/// Errors returned by adapter operations.
///
/// Operation-level failures never panic. Evaluation callers keep the default
/// value they supplied, so any of these can be handled by proceeding
/// degraded (`unwrap_or(default)`).
#[derive(Debug, Error)]
pub enum AdapterError {
	/// The service reported that the flag does not exist.
	///
	/// Distinguishable so callers can treat "not configured" differently
	/// from a service failure.
	#[error("FLAG_NOT_FOUND")]
	FlagNotFound,

	/// A flag value did not match the type the caller asked for.
	#[error(transparent)]
	TypeMismatch(#[from] TypeMismatchError),

	/// HTTP request failed: connection error, timeout, or cancellation.
	/// Never retried by the adapter.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The service answered with a status code outside the operation's
	/// contract.
	#[error("unexpected status code: {0}")]
	UnexpectedStatus(u16),

	/// The configured endpoint produced an unusable request URL.
	#[error("invalid request URL: {0}")]
	InvalidUrl(String),

	/// Request body could not be encoded.
	#[error("failed to encode request body: {0}")]
	Encode(String),

	/// Response body could not be decompressed or decoded.
	#[error("failed to decode response: {0}")]
	Decode(String),

	/// The service reported an error code other than the flag-not-found
	/// sentinel.
	#[error("{0}")]
	ErrorCode(String),

	/// The operation is not supported by this adapter. Permanent; retrying
	/// cannot succeed.
	#[error("not implemented")]
	NotImplemented,
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
