//! Group Model

use super::person::Person;
use serde::{Deserialize, Serialize};

/// A formed group (unconstrained partition output)
///
/// Groups are recomputed in full on every partition call and are never
/// persisted; only the roster and the grouping settings are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// 1-based sequential group number
    pub id: u32,
    pub members: Vec<Person>,
}

/// How a roster is split into groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "value")]
pub enum GroupingMode {
    /// Split into a fixed number of groups
    ByCount(u32),
    /// Split into groups of a fixed size
    BySize(u32),
}

/// Persisted grouping feature settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingSettings {
    pub mode: GroupingMode,
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            mode: GroupingMode::ByCount(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_mode_serde() {
        let json = serde_json::to_string(&GroupingMode::ByCount(4)).unwrap();
        assert_eq!(json, r#"{"mode":"by_count","value":4}"#);

        let mode: GroupingMode = serde_json::from_str(r#"{"mode":"by_size","value":3}"#).unwrap();
        assert_eq!(mode, GroupingMode::BySize(3));
    }
}
