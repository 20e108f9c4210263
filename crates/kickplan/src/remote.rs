// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote adapter backed by the Kickplan API.
//!
//! Each adapter operation is exactly one HTTP request/response exchange.
//! Responses may arrive gzip-compressed and are decompressed transparently
//! before decoding. Service-level error codes are mapped onto
//! [`AdapterError`]; nothing is retried here, retry policy belongs to the
//! caller.

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use kickplan_core::{resolve, EvaluationContext, FlagValue};
use reqwest::header::{
	HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE,
	USER_AGENT,
};
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::Adapter;
use crate::config::{RemoteConfig, DEFAULT_USER_AGENT};
use crate::error::{AdapterError, Result};
use crate::transport::Transport;

/// Encodings advertised on every request, by preference.
const ACCEPT_ENCODINGS: &str = "gzip;q=1.0,deflate;q=0.6,identity;q=0.3";

/// Error code the service uses to signal an unknown flag.
const FLAG_NOT_FOUND_CODE: &str = "FLAG_NOT_FOUND";

/// Request body for the feature resolution endpoint.
#[derive(Debug, Serialize)]
struct FeatureResolutionRequest<'a> {
	context: &'a EvaluationContext,
	detailed: bool,
}

/// Response body from the feature resolution endpoint.
#[derive(Debug, Deserialize)]
struct FeatureResolutionResponse {
	#[serde(default)]
	error_code: String,
	#[serde(default)]
	key: String,
	#[serde(default)]
	value: Option<FlagValue>,
}

/// Request body for the metric update endpoints.
#[derive(Debug, Serialize)]
struct MetricUpdateRequest<'a> {
	context: &'a EvaluationContext,
	value: i64,
}

/// A plan assignment inside [`CreateAccountRequest`].
#[derive(Debug, Serialize)]
struct AccountPlan<'a> {
	plan_key: &'a str,
}

/// Request body for the accounts endpoint.
#[derive(Debug, Serialize)]
struct CreateAccountRequest<'a> {
	key: &'a str,
	name: &'a str,
	account_plans: Vec<AccountPlan<'a>>,
}

/// An adapter that evaluates flags and reports metrics against the Kickplan
/// API.
///
/// Holds no flag state: every evaluation is a fresh round trip bounded by the
/// configured timeout. Flag writes are not supported; [`Adapter::set_boolean`]
/// always fails with [`AdapterError::NotImplemented`].
pub struct RemoteAdapter {
	transport: Arc<dyn Transport>,
	endpoint: String,
	token: String,
	user_agent: String,
}

impl RemoteAdapter {
	/// Creates a remote adapter with a reqwest transport built from `config`.
	pub fn new(config: RemoteConfig) -> Self {
		let client = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()
			.expect("failed to build HTTP client");
		Self::with_transport(config, Arc::new(client))
	}

	/// Creates a remote adapter on a caller-supplied transport.
	///
	/// The transport owns timeout behavior; `config.timeout` is not applied
	/// here.
	pub fn with_transport(config: RemoteConfig, transport: Arc<dyn Transport>) -> Self {
		Self {
			transport,
			endpoint: config.endpoint,
			token: config.token,
			user_agent: config.user_agent,
		}
	}

	/// Resolves a flag from the feature resolution endpoint.
	///
	/// `Ok(None)` means the service answered with a null value; the caller
	/// falls back to its default.
	async fn resolve_feature(
		&self,
		flag: &str,
		ctx: &EvaluationContext,
	) -> Result<Option<FlagValue>> {
		let url = format!("{}/features/{}", self.endpoint, flag);
		let body = FeatureResolutionRequest {
			context: ctx,
			detailed: true,
		};

		let response = self.send(&url, &body).await?;
		let status = response.status();
		if status != StatusCode::OK {
			return Err(AdapterError::UnexpectedStatus(status.as_u16()));
		}

		let raw = read_body(response).await?;
		let decoded: FeatureResolutionResponse =
			serde_json::from_slice(&raw).map_err(|e| AdapterError::Decode(e.to_string()))?;

		if !decoded.error_code.is_empty() {
			if decoded.error_code == FLAG_NOT_FOUND_CODE {
				return Err(AdapterError::FlagNotFound);
			}
			return Err(AdapterError::ErrorCode(decoded.error_code));
		}

		debug!(flag, key = %decoded.key, "resolved feature");
		Ok(decoded.value)
	}

	/// Posts one metric update and expects `202 Accepted`.
	async fn update_metric(
		&self,
		metric: &str,
		action: &str,
		value: i64,
		ctx: &EvaluationContext,
	) -> Result<()> {
		let url = format!("{}/metrics/{}/{}", self.endpoint, metric, action);
		let body = MetricUpdateRequest {
			context: ctx,
			value,
		};

		let response = self.send(&url, &body).await?;
		expect_accepted(response.status())
	}

	async fn send(&self, url: &str, body: &impl Serialize) -> Result<reqwest::Response> {
		let url = Url::parse(url).map_err(|e| AdapterError::InvalidUrl(e.to_string()))?;
		let payload = serde_json::to_vec(body).map_err(|e| AdapterError::Encode(e.to_string()))?;

		let mut request = reqwest::Request::new(Method::POST, url);
		*request.headers_mut() = self.headers();
		*request.body_mut() = Some(payload.into());

		Ok(self.transport.execute(request).await?)
	}

	fn headers(&self) -> HeaderMap {
		let mut headers = HeaderMap::new();
		headers.insert(AUTHORIZATION, bearer(&self.token));
		headers.insert(
			USER_AGENT,
			HeaderValue::from_str(&self.user_agent)
				.unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
		);
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		headers.insert(ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODINGS));
		headers
	}
}

impl fmt::Debug for RemoteAdapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RemoteAdapter")
			.field("endpoint", &self.endpoint)
			.field("token", &"<redacted>")
			.field("user_agent", &self.user_agent)
			.finish()
	}
}

fn bearer(token: &str) -> HeaderValue {
	HeaderValue::from_str(&format!("Bearer {token}"))
		.unwrap_or_else(|_| HeaderValue::from_static("Bearer"))
}

fn expect_accepted(status: StatusCode) -> Result<()> {
	if status != StatusCode::ACCEPTED {
		return Err(AdapterError::UnexpectedStatus(status.as_u16()));
	}
	Ok(())
}

/// Reads the response body, transparently decompressing gzip content.
///
/// Bodies without a `Content-Encoding: gzip` header are returned as-is.
async fn read_body(response: reqwest::Response) -> Result<Vec<u8>> {
	let gzipped = response
		.headers()
		.get(CONTENT_ENCODING)
		.is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"gzip"));

	let bytes = response.bytes().await?;
	if !gzipped {
		return Ok(bytes.to_vec());
	}

	let mut decoder = GzDecoder::new(bytes.as_ref());
	let mut decompressed = Vec::new();
	decoder
		.read_to_end(&mut decompressed)
		.map_err(|e| AdapterError::Decode(e.to_string()))?;
	Ok(decompressed)
}

#[async_trait]
impl Adapter for RemoteAdapter {
	async fn boolean_evaluation(
		&self,
		flag: &str,
		default: bool,
		ctx: &EvaluationContext,
	) -> Result<bool> {
		let value = self.resolve_feature(flag, ctx).await?;
		Ok(resolve(value.as_ref(), default)?)
	}

	async fn string_evaluation(
		&self,
		flag: &str,
		default: &str,
		ctx: &EvaluationContext,
	) -> Result<String> {
		let value = self.resolve_feature(flag, ctx).await?;
		Ok(resolve(value.as_ref(), default.to_string())?)
	}

	async fn int64_evaluation(
		&self,
		flag: &str,
		default: i64,
		ctx: &EvaluationContext,
	) -> Result<i64> {
		let value = self.resolve_feature(flag, ctx).await?;
		Ok(resolve(value.as_ref(), default)?)
	}

	async fn object_evaluation(
		&self,
		flag: &str,
		default: FlagValue,
		ctx: &EvaluationContext,
	) -> Result<FlagValue> {
		let value = self.resolve_feature(flag, ctx).await?;
		Ok(value.unwrap_or(default))
	}

	async fn set_boolean(&self, _flag: &str, _value: bool) -> Result<()> {
		Err(AdapterError::NotImplemented)
	}

	async fn set_metric(&self, metric: &str, value: i64, ctx: &EvaluationContext) -> Result<()> {
		self.update_metric(metric, "set", value, ctx).await
	}

	async fn inc_metric(&self, metric: &str, value: i64, ctx: &EvaluationContext) -> Result<()> {
		self.update_metric(metric, "increment", value, ctx).await
	}

	async fn dec_metric(&self, metric: &str, value: i64, ctx: &EvaluationContext) -> Result<()> {
		self.update_metric(metric, "decrement", value, ctx).await
	}

	async fn create_account(&self, key: &str, name: &str, plan_keys: &[String]) -> Result<()> {
		let url = format!("{}/accounts", self.endpoint);
		let body = CreateAccountRequest {
			key,
			name,
			account_plans: plan_keys
				.iter()
				.map(|plan_key| AccountPlan { plan_key })
				.collect(),
		};

		let response = self.send(&url, &body).await?;
		expect_accepted(response.status())
	}
}
