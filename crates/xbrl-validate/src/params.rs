//! Script parameters recognized by the filing checks.

use std::collections::HashMap;

pub const DEFAULT_MAX_ID_LENGTH: usize = 50;
pub const DEFAULT_MAX_STRING_LENGTH: usize = 100;

/// Limits configurable through host script parameters.
///
/// Recognized keys are `max-id-length` and `max-string-length`; absent or
/// non-numeric values fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleParams {
    pub max_id_length: usize,
    pub max_string_length: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            max_id_length: DEFAULT_MAX_ID_LENGTH,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}

impl RuleParams {
    pub fn from_script_params(params: &HashMap<String, String>) -> Self {
        Self {
            max_id_length: parse_or(params.get("max-id-length"), DEFAULT_MAX_ID_LENGTH),
            max_string_length: parse_or(params.get("max-string-length"), DEFAULT_MAX_STRING_LENGTH),
        }
    }
}

fn parse_or(value: Option<&String>, default: usize) -> usize {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let params = RuleParams::from_script_params(&HashMap::new());
        assert_eq!(params.max_id_length, 50);
        assert_eq!(params.max_string_length, 100);
    }

    #[test]
    fn numeric_values_override_defaults() {
        let mut raw = HashMap::new();
        raw.insert("max-id-length".to_string(), "10".to_string());
        raw.insert("max-string-length".to_string(), " 20 ".to_string());
        let params = RuleParams::from_script_params(&raw);
        assert_eq!(params.max_id_length, 10);
        assert_eq!(params.max_string_length, 20);
    }

    #[test]
    fn non_numeric_values_fall_back() {
        let mut raw = HashMap::new();
        raw.insert("max-id-length".to_string(), "plenty".to_string());
        let params = RuleParams::from_script_params(&raw);
        assert_eq!(params.max_id_length, DEFAULT_MAX_ID_LENGTH);
    }
}
