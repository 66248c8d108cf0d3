//! Memory size conversion
//!
//! `core show sysinfo` prints sizes such as `5915724 KiB`. Every prefix is
//! read as binary, so `K`, `KB` and `KiB` all mean 1024 bytes.

use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?) ?([kKmMgGtTpP])?[iI]?[bB]?$").expect("static regex must compile")
});

const KIB: f64 = 1024.0;

fn multiplier(prefix: Option<&str>) -> f64 {
    match prefix.map(|p| p.to_ascii_lowercase()).as_deref() {
        Some("k") => KIB,
        Some("m") => KIB * KIB,
        Some("g") => KIB * KIB * KIB,
        Some("t") => KIB * KIB * KIB * KIB,
        Some("p") => KIB * KIB * KIB * KIB * KIB,
        _ => 1.0,
    }
}

/// Convert a human-readable size to bytes
///
/// Fractional results are truncated toward zero.
pub fn ram_in_bytes(value: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidSize(value.to_string());

    let caps = SIZE.captures(value.trim()).ok_or_else(invalid)?;
    let number: f64 = caps[1].parse().map_err(|_| invalid())?;
    let bytes = number * multiplier(caps.get(2).map(|m| m.as_str()));

    if !bytes.is_finite() || bytes > i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(bytes as i64)
}
