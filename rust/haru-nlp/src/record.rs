//! The extracted task record.

use serde::{Deserialize, Serialize};

/// One extracted to-do, ready for downstream decoration (category,
/// embedding) by collaborators outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// The normalized action phrase; never empty.
    pub action_phrase: String,
    /// The resolved calendar date (`YYYY-MM-DD`); never empty. Either
    /// resolved from the clause's own temporal tokens, inherited from the
    /// nearest preceding clause of the same input, or today's date.
    pub date: String,
    /// The time-of-day marker (아침, 8시, …), possibly empty.
    pub time: String,
    /// The verbatim reconstruction of the originating clause.
    pub source_segment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_stable_field_names() {
        let record = TaskRecord {
            action_phrase: "두부 사기".to_string(),
            date: "2025-10-16".to_string(),
            time: "저녁".to_string(),
            source_segment: "저녁에두부를사야지".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action_phrase": "두부 사기",
                "date": "2025-10-16",
                "time": "저녁",
                "source_segment": "저녁에두부를사야지",
            })
        );
        let back: TaskRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
