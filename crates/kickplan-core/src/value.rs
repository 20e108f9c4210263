// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dynamically-typed flag values and the single point where they are coerced
//! back into statically-typed results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A flag value as stored by an adapter or returned by the flag service.
///
/// Values are dynamically typed on the wire. [`resolve`] converts them into
/// the caller's expected type; nothing else in the SDK casts flag values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
	/// A boolean toggle.
	Boolean(bool),
	/// A 64-bit signed integer.
	Integer(i64),
	/// A string value.
	String(String),
	/// Any other JSON value: objects, arrays, floats, null.
	Object(Value),
}

impl FlagValue {
	/// Returns the name of the dynamic type, as reported in
	/// [`TypeMismatchError`].
	pub fn type_name(&self) -> &'static str {
		match self {
			FlagValue::Boolean(_) => "boolean",
			FlagValue::Integer(_) => "integer",
			FlagValue::String(_) => "string",
			FlagValue::Object(_) => "object",
		}
	}
}

impl From<bool> for FlagValue {
	fn from(value: bool) -> Self {
		FlagValue::Boolean(value)
	}
}

impl From<i64> for FlagValue {
	fn from(value: i64) -> Self {
		FlagValue::Integer(value)
	}
}

impl From<&str> for FlagValue {
	fn from(value: &str) -> Self {
		FlagValue::String(value.to_string())
	}
}

impl From<String> for FlagValue {
	fn from(value: String) -> Self {
		FlagValue::String(value)
	}
}

impl From<Value> for FlagValue {
	/// Normalizes a JSON value into the same variants `Deserialize` picks, so
	/// seeded values and wire values compare equal.
	fn from(value: Value) -> Self {
		match value {
			Value::Bool(b) => FlagValue::Boolean(b),
			Value::String(s) => FlagValue::String(s),
			Value::Number(n) => match n.as_i64() {
				Some(i) => FlagValue::Integer(i),
				None => FlagValue::Object(Value::Number(n)),
			},
			other => FlagValue::Object(other),
		}
	}
}

/// A flag value did not match the type the caller asked for.
///
/// The caller's default remains the value to proceed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("type mismatch: expected {expected}, got {actual}")]
pub struct TypeMismatchError {
	/// The type the caller asked for.
	pub expected: &'static str,
	/// The dynamic type actually stored.
	pub actual: &'static str,
}

/// Types a [`FlagValue`] can resolve into.
///
/// Implemented for the scalar flag types (`bool`, `String`, `i64`). Object
/// evaluations return the raw [`FlagValue`] and never go through this trait.
pub trait FromFlagValue: Sized {
	/// Type name used in [`TypeMismatchError::expected`].
	const TYPE_NAME: &'static str;

	/// Extracts `Self` when the dynamic type matches exactly.
	fn from_flag_value(value: &FlagValue) -> Option<Self>;
}

impl FromFlagValue for bool {
	const TYPE_NAME: &'static str = "boolean";

	fn from_flag_value(value: &FlagValue) -> Option<Self> {
		match value {
			FlagValue::Boolean(b) => Some(*b),
			_ => None,
		}
	}
}

impl FromFlagValue for String {
	const TYPE_NAME: &'static str = "string";

	fn from_flag_value(value: &FlagValue) -> Option<Self> {
		match value {
			FlagValue::String(s) => Some(s.clone()),
			_ => None,
		}
	}
}

impl FromFlagValue for i64 {
	const TYPE_NAME: &'static str = "integer";

	fn from_flag_value(value: &FlagValue) -> Option<Self> {
		match value {
			FlagValue::Integer(i) => Some(*i),
			_ => None,
		}
	}
}

/// Resolves a dynamically-typed value against a strongly-typed default.
///
/// An absent value means "use the default" and is not an error. A present
/// value of the wrong dynamic type yields [`TypeMismatchError`]; there is no
/// implicit conversion between types.
pub fn resolve<T: FromFlagValue>(
	value: Option<&FlagValue>,
	default: T,
) -> Result<T, TypeMismatchError> {
	match value {
		None => Ok(default),
		Some(v) => T::from_flag_value(v).ok_or(TypeMismatchError {
			expected: T::TYPE_NAME,
			actual: v.type_name(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn resolve_absent_returns_default() {
		assert_eq!(resolve::<bool>(None, true), Ok(true));
		assert_eq!(resolve::<String>(None, "fallback".to_string()), Ok("fallback".to_string()));
		assert_eq!(resolve::<i64>(None, 42), Ok(42));
	}

	#[test]
	fn resolve_exact_type_match() {
		assert_eq!(resolve(Some(&FlagValue::Boolean(true)), false), Ok(true));
		assert_eq!(
			resolve(Some(&FlagValue::String("dark".to_string())), "light".to_string()),
			Ok("dark".to_string())
		);
		assert_eq!(resolve(Some(&FlagValue::Integer(7)), 0), Ok(7));
	}

	#[test]
	fn resolve_mismatch_names_both_types() {
		let err = resolve(Some(&FlagValue::String("blue".to_string())), 0i64).unwrap_err();
		assert_eq!(
			err,
			TypeMismatchError {
				expected: "integer",
				actual: "string",
			}
		);
		assert_eq!(err.to_string(), "type mismatch: expected integer, got string");
	}

	#[test]
	fn resolve_never_coerces_between_scalars() {
		assert!(resolve(Some(&FlagValue::Integer(1)), false).is_err());
		assert!(resolve(Some(&FlagValue::Boolean(true)), "x".to_string()).is_err());
		assert!(resolve(Some(&FlagValue::Object(json!({"a": 1}))), 0i64).is_err());
	}

	#[test]
	fn deserialize_discriminates_variants() {
		let value: FlagValue = serde_json::from_value(json!(true)).unwrap();
		assert_eq!(value, FlagValue::Boolean(true));

		let value: FlagValue = serde_json::from_value(json!(42)).unwrap();
		assert_eq!(value, FlagValue::Integer(42));

		let value: FlagValue = serde_json::from_value(json!("on")).unwrap();
		assert_eq!(value, FlagValue::String("on".to_string()));

		let value: FlagValue = serde_json::from_value(json!({"limit": 10})).unwrap();
		assert_eq!(value, FlagValue::Object(json!({"limit": 10})));
	}

	#[test]
	fn floats_land_in_the_object_variant() {
		let value: FlagValue = serde_json::from_value(json!(1.5)).unwrap();
		assert_eq!(value, FlagValue::Object(json!(1.5)));
		assert!(resolve(Some(&value), 0i64).is_err());
	}

	#[test]
	fn from_json_value_matches_deserialization() {
		for raw in [json!(true), json!(42), json!("on"), json!(1.5), json!([1, 2]), json!(null)] {
			let deserialized: FlagValue = serde_json::from_value(raw.clone()).unwrap();
			assert_eq!(FlagValue::from(raw), deserialized);
		}
	}

	#[test]
	fn serialize_is_transparent() {
		assert_eq!(serde_json::to_value(FlagValue::Boolean(true)).unwrap(), json!(true));
		assert_eq!(serde_json::to_value(FlagValue::Integer(5)).unwrap(), json!(5));
		assert_eq!(
			serde_json::to_value(FlagValue::Object(json!({"a": 1}))).unwrap(),
			json!({"a": 1})
		);
	}

	proptest! {
		#[test]
		fn absent_value_echoes_any_default(default: i64) {
			prop_assert_eq!(resolve::<i64>(None, default), Ok(default));
		}

		#[test]
		fn integer_roundtrips_through_resolution(stored: i64, default: i64) {
			let value = FlagValue::Integer(stored);
			prop_assert_eq!(resolve(Some(&value), default), Ok(stored));
		}

		#[test]
		fn string_roundtrips_through_resolution(stored in "[a-zA-Z0-9_-]{0,40}") {
			let value = FlagValue::String(stored.clone());
			prop_assert_eq!(resolve(Some(&value), String::new()), Ok(stored));
		}

		#[test]
		fn wire_roundtrip_preserves_value(stored: i64) {
			let value = FlagValue::Integer(stored);
			let json = serde_json::to_string(&value).unwrap();
			let parsed: FlagValue = serde_json::from_str(&json).unwrap();
			prop_assert_eq!(parsed, value);
		}
	}
}
