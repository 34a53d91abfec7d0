//! ==============================================================================
//! outcome.rs - rendering submission results for the <pre> panel
//! ==============================================================================

use std::fmt::Display;

use serde_json::Value;

/// pretty-print a backend response with two-space indentation. the response
/// schema is opaque to the client, so this is the whole success contract.
pub fn render_success(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// failures of every kind collapse to one visible string
pub fn render_error(err: &impl Display) -> String {
    format!("Error: {err}")
}

pub fn render_outcome<E: Display>(result: &Result<Value, E>) -> String {
    match result {
        Ok(value) => render_success(value),
        Err(err) => render_error(err),
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    // serde_json runs with preserve_order so the panel shows backend fields
    // in the order they arrived; the struct declaration order is the wire order
    #[derive(Serialize)]
    struct Stub {
        status: &'static str,
        id: u32,
    }

    #[test]
    fn test_success_is_two_space_indented() {
        let value = serde_json::to_value(Stub {
            status: "ok",
            id: 42,
        })
        .unwrap();
        assert_eq!(
            render_success(&value),
            "{\n  \"status\": \"ok\",\n  \"id\": 42\n}"
        );
    }

    #[test]
    fn test_error_rendering() {
        let result: Result<Value, String> = Err("network down".to_string());
        assert_eq!(render_outcome(&result), "Error: network down");
    }

    #[test]
    fn test_outcome_success_path() {
        let result: Result<Value, String> = Ok(serde_json::json!({"ok": true}));
        assert!(render_outcome(&result).starts_with('{'));
    }
}
