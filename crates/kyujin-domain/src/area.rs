//! Work-location value type

use serde::{Deserialize, Serialize};

/// A work location, either free text or a structured record.
///
/// Normalization into a canonical prefecture (plus optional municipality
/// detail) happens in the normalizer crate; this type only carries what
/// the extraction model or an operator entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkArea {
    /// Free text, e.g. "東京都 板橋区"
    Text(String),

    /// Structured fields, any subset may be present
    Structured {
        /// Prefecture text
        #[serde(default)]
        prefecture: Option<String>,
        /// Municipality/city text
        #[serde(default)]
        city: Option<String>,
        /// Station text
        #[serde(default)]
        station: Option<String>,
        /// Wider area text
        #[serde(default)]
        area: Option<String>,
    },
}

impl From<&str> for WorkArea {
    fn from(value: &str) -> Self {
        WorkArea::Text(value.to_string())
    }
}

impl From<String> for WorkArea {
    fn from(value: String) -> Self {
        WorkArea::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let text: WorkArea = serde_json::from_str(r#""東京都 板橋区""#).unwrap();
        assert_eq!(text, WorkArea::Text("東京都 板橋区".to_string()));

        let structured: WorkArea = serde_json::from_str(r#"{"prefecture":"大阪"}"#).unwrap();
        match structured {
            WorkArea::Structured { prefecture, .. } => {
                assert_eq!(prefecture.as_deref(), Some("大阪"));
            }
            _ => panic!("expected structured"),
        }
    }
}
