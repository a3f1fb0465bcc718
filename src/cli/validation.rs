//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use serde_json::Value as JsonValue;
use std::fs;
use std::path::PathBuf;

use crate::models::{GcmPriority, Message, Platform};
use crate::push::Region;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Alert text is accepted exactly when [`Message::new`] accepts it
pub fn validate_alert(alert: &str) -> Result<String, String> {
    Message::new(alert)
        .map(|message| message.alert().to_string())
        .map_err(|e| e.to_string())
}

/// Parse a platform wire code or name
pub fn validate_platform(code: &str) -> Result<Platform, String> {
    code.parse().map_err(|e: crate::error::AppError| e.to_string())
}

/// Parse a region name or alias
pub fn validate_region(region: &str) -> Result<Region, String> {
    region.parse().map_err(|e: crate::error::AppError| e.to_string())
}

/// Parse a GCM priority name, case-insensitively
pub fn validate_gcm_priority(priority: &str) -> Result<GcmPriority, String> {
    match priority.to_lowercase().as_str() {
        "default" => Ok(GcmPriority::Default),
        "min" => Ok(GcmPriority::Min),
        "low" => Ok(GcmPriority::Low),
        "max" => Ok(GcmPriority::Max),
        "high" => Ok(GcmPriority::High),
        _ => Err(format!(
            "Invalid GCM priority '{}'. Valid values are: default, min, low, max, high",
            priority
        )),
    }
}

/// Time to live must be a non-negative number of seconds
pub fn validate_time_to_live(ttl_str: &str) -> Result<i32, String> {
    let ttl: i32 = ttl_str
        .parse()
        .map_err(|_| format!("Time to live must be a number of seconds, got: '{}'", ttl_str))?;

    if ttl < 0 {
        return Err("Time to live cannot be negative".to_string());
    }

    Ok(ttl)
}

/// Payloads must be JSON objects
pub fn validate_json_payload(payload: &str) -> Result<JsonValue, String> {
    let value: JsonValue =
        serde_json::from_str(payload).map_err(|e| format!("Payload is not valid JSON: {}", e))?;

    if !value.is_object() {
        return Err("Payload must be a JSON object".to_string());
    }

    Ok(value)
}
