// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote adapter configuration and environment wiring.

use std::env;
use std::fmt;
use std::time::Duration;

use tracing::warn;

/// Default endpoint for the Kickplan API.
pub const DEFAULT_ENDPOINT: &str = "https://api.kickplan.io";

/// Default user agent for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = "Kickplan Rust SDK v0.1.0";

/// Default timeout for HTTP requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variables read by [`RemoteConfig::from_env`].
pub const ENV_ENDPOINT: &str = "KICKPLAN_ENDPOINT";
pub const ENV_ACCESS_TOKEN: &str = "KICKPLAN_ACCESS_TOKEN";
pub const ENV_USER_AGENT: &str = "KICKPLAN_USER_AGENT";
pub const ENV_TIMEOUT: &str = "KICKPLAN_TIMEOUT";

/// Configuration for [`RemoteAdapter`](crate::RemoteAdapter) construction.
///
/// Resolved once at construction; only the access token is required,
/// everything else has a default.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use kickplan::RemoteConfig;
///
/// let config = RemoteConfig::new("kp_live_...")
///     .with_endpoint("https://flags.internal.example.com")
///     .with_timeout(Duration::from_secs(2));
/// ```
#[derive(Clone)]
pub struct RemoteConfig {
	/// Base URL of the flag service, without a trailing slash.
	pub endpoint: String,
	/// Static bearer token sent in the `Authorization` header.
	pub token: String,
	/// Value of the `User-Agent` header.
	pub user_agent: String,
	/// Per-request timeout.
	pub timeout: Duration,
}

impl RemoteConfig {
	/// Creates a configuration with defaults for everything but the token.
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			token: token.into(),
			user_agent: DEFAULT_USER_AGENT.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Overrides the service endpoint.
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	/// Overrides the user agent string.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();
		self
	}

	/// Overrides the request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Sets the timeout from a human-readable duration string (`"5s"`,
	/// `"250ms"`).
	///
	/// A malformed value keeps the configured timeout and logs a warning; a
	/// bad timeout never prevents construction.
	pub fn with_timeout_str(mut self, timeout: &str) -> Self {
		match humantime::parse_duration(timeout) {
			Ok(parsed) => self.timeout = parsed,
			Err(e) => {
				warn!(timeout, error = %e, "failed to parse timeout duration, keeping default");
			}
		}
		self
	}

	/// Builds a configuration from the `KICKPLAN_*` environment variables.
	///
	/// Returns `None` unless [`ENV_ACCESS_TOKEN`] is set and non-empty. The
	/// remaining variables fall back to the crate defaults when unset or
	/// empty. Adapters never read the environment themselves; this is the
	/// only place the SDK touches it.
	pub fn from_env() -> Option<Self> {
		let token = non_empty_var(ENV_ACCESS_TOKEN)?;
		let mut config = Self::new(token);
		if let Some(endpoint) = non_empty_var(ENV_ENDPOINT) {
			config.endpoint = endpoint;
		}
		if let Some(user_agent) = non_empty_var(ENV_USER_AGENT) {
			config.user_agent = user_agent;
		}
		if let Some(timeout) = non_empty_var(ENV_TIMEOUT) {
			config = config.with_timeout_str(&timeout);
		}
		Some(config)
	}
}

impl fmt::Debug for RemoteConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RemoteConfig")
			.field("endpoint", &self.endpoint)
			.field("token", &"<redacted>")
			.field("user_agent", &self.user_agent)
			.field("timeout", &self.timeout)
			.finish()
	}
}

fn non_empty_var(name: &str) -> Option<String> {
	env::var(name).ok().filter(|value| !value.is_empty())
}
