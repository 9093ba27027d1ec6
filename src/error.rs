//! Error handling for route tree compilation
//!
//! Compilation has exactly one failure mode: a route key colliding with the
//! reserved keyword blocklist. It is reported before any API surface is
//! built.

use std::fmt;

/// Errors raised while compiling a route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTreeError {
    /// One or more route keys collide with the reserved keyword blocklist.
    ///
    /// Keys appear in traversal order and are not deduplicated.
    ReservedKeys { keys: Vec<String> },
}

impl RouteTreeError {
    /// The offending keys, in traversal order.
    pub fn offending_keys(&self) -> &[String] {
        match self {
            RouteTreeError::ReservedKeys { keys } => keys,
        }
    }
}

impl fmt::Display for RouteTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTreeError::ReservedKeys { keys } => {
                write!(
                    f,
                    "You have used the reserved keywords \"{}\" in your route. \
                     This is not possible. Consider using different keys and \
                     overriding the rendered strings with segment_name",
                    keys.join(" & ")
                )
            }
        }
    }
}

impl std::error::Error for RouteTreeError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single_key() {
        let error = RouteTreeError::ReservedKeys {
            keys: vec!["name".to_string()],
        };
        let message = error.to_string();
        assert!(message.contains("reserved keywords \"name\""));
        assert!(message.contains("segment_name"));
    }

    #[test]
    fn test_display_joins_keys_with_ampersand() {
        let error = RouteTreeError::ReservedKeys {
            keys: vec!["name".to_string(), "length".to_string(), "name".to_string()],
        };
        assert!(error.to_string().contains("\"name & length & name\""));
    }

    #[test]
    fn test_offending_keys() {
        let error = RouteTreeError::ReservedKeys {
            keys: vec!["apply".to_string()],
        };
        assert_eq!(error.offending_keys(), ["apply".to_string()]);
    }
}
