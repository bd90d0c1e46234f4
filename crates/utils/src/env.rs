// Copyright 2024-2025 Irreducible Inc.

const TRUTHY: [&str; 4] = ["1", "on", "true", "yes"];
const FALSY: [&str; 4] = ["0", "off", "false", "no"];

/// Parse a boolean flag value, ignoring case and surrounding whitespace.
///
/// Returns `None` for values that are neither truthy nor falsy.
pub fn parse_flag(value: &str) -> Option<bool> {
	let value = value.trim();
	if TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value)) {
		Some(true)
	} else if FALSY.iter().any(|f| f.eq_ignore_ascii_case(value)) {
		Some(false)
	} else {
		None
	}
}

/// Read boolean flag from the environment variable.
///
/// Unset variables and unrecognised values both read as `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => parse_flag(&val).unwrap_or(false),
		Err(_) => false,
	}
}
