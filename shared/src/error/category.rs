//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Roster errors
/// - 2xxx: Grouping errors
/// - 3xxx: Seating errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Roster errors (1xxx)
    Roster,
    /// Grouping errors (2xxx)
    Grouping,
    /// Seating errors (3xxx)
    Seating,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Roster,
            2000..3000 => Self::Grouping,
            3000..4000 => Self::Seating,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Roster => "roster",
            Self::Grouping => "grouping",
            Self::Seating => "seating",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Roster);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Roster);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Grouping);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Seating);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::PersonNotFound.category(), ErrorCategory::Roster);
        assert_eq!(
            ErrorCode::GroupCountInvalid.category(),
            ErrorCategory::Grouping
        );
        assert_eq!(
            ErrorCode::ConstraintSelfReference.category(),
            ErrorCategory::Seating
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::Seating).unwrap();
        assert_eq!(json, "\"seating\"");

        let category: ErrorCategory = serde_json::from_str("\"roster\"").unwrap();
        assert_eq!(category, ErrorCategory::Roster);
    }
}
