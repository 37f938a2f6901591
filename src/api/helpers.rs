//! Shared helpers for WASM API operations
//!
//! Console logging, serialization to and from JavaScript, and argument
//! validation shared by every editor method.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::ScreenSide;
use crate::session::BOARD_SLOTS;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional object; `undefined` and `null` give the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Parse a control side name ("left" or "right")
pub fn parse_side(side: &str) -> Result<ScreenSide, String> {
    match side.to_ascii_lowercase().as_str() {
        "left" => Ok(ScreenSide::Left),
        "right" => Ok(ScreenSide::Right),
        _ => Err(format!("Invalid side: '{}' (must be 'left' or 'right')", side)),
    }
}

/// Validate a 1-based board slot
pub fn validate_slot(slot: usize) -> Result<(), String> {
    if !(1..=BOARD_SLOTS).contains(&slot) {
        return Err(format!(
            "Invalid board slot: {} (must be 1-{})",
            slot, BOARD_SLOTS
        ));
    }
    Ok(())
}

/// Validate that an index is within bounds
pub fn validate_index(index: usize, max_length: usize, context: &str) -> Result<(), String> {
    if index >= max_length {
        return Err(format!(
            "{} index {} out of bounds (max: {})",
            context,
            index,
            max_length.saturating_sub(1)
        ));
    }

    Ok(())
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}
