//! Configuration for infix-to-postfix conversion.

use serde::{Deserialize, Serialize};

/// What to do with `(` tokens still on the operator stack once the input is
/// exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnclosedGroups {
    /// Append them to the output along with every other pending stack token.
    Emit,
    /// Fail with `ConvertError::UnclosedParenthesis`.
    Reject,
}

/// Options for conversion.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `max-depth`, `unclosed-groups`).
/// Missing fields take their default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConvertOptions {
    /// Maximum parenthesis nesting depth. Default: `None` (unbounded).
    pub max_depth: Option<usize>,
    /// Handling of groups left open at end of input. Default: `Emit`.
    pub unclosed_groups: UnclosedGroups,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            unclosed_groups: UnclosedGroups::Emit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_serde_round_trip() {
        let opts = ConvertOptions {
            max_depth: Some(8),
            unclosed_groups: UnclosedGroups::Reject,
        };

        let json = serde_json::to_string(&opts).unwrap();

        assert!(json.contains("\"max-depth\""));
        assert!(json.contains("\"unclosed-groups\""));
        assert!(json.contains("\"reject\""));

        let deserialized: ConvertOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.max_depth, Some(8));
        assert_eq!(deserialized.unclosed_groups, UnclosedGroups::Reject);
    }

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.max_depth, None);
        assert_eq!(opts.unclosed_groups, UnclosedGroups::Emit);
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let opts: ConvertOptions = serde_json::from_str(r#"{"max-depth": 3}"#).unwrap();
        assert_eq!(opts.max_depth, Some(3));
        assert_eq!(opts.unclosed_groups, UnclosedGroups::Emit);

        let opts: ConvertOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.max_depth, None);
    }
}
