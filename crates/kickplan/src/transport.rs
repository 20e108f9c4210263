// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Minimal HTTP transport seam for the remote adapter.

use async_trait::async_trait;

/// Sends one HTTP request and returns one response.
///
/// The remote adapter depends only on this capability, so the transport can
/// be substituted (for example in tests) without touching adapter logic. The
/// production implementation is a [`reqwest::Client`], which also owns the
/// request timeout; dropping the returned future aborts the in-flight
/// request.
#[async_trait]
pub trait Transport: Send + Sync {
	/// Executes one request.
	async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
	async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response> {
		reqwest::Client::execute(self, request).await
	}
}
