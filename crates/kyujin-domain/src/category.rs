//! Canonical job category enumeration

use serde::{Deserialize, Serialize};

/// The fixed set of display job categories.
///
/// The declaration order is significant: keyword-scoring ties in the
/// normalizer resolve to the earliest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalJobCategory {
    /// 事務
    Office,
    /// 営業
    Sales,
    /// コールセンター
    CallCenter,
    /// IT・エンジニア
    Engineering,
    /// クリエイティブ
    Creative,
    /// 販売・接客
    Retail,
    /// 製造・軽作業
    Manufacturing,
    /// 医療・介護
    MedicalCare,
    /// リモート
    Remote,
    /// その他
    Other,
}

impl CanonicalJobCategory {
    /// All categories in declaration order
    pub const ALL: [CanonicalJobCategory; 10] = [
        CanonicalJobCategory::Office,
        CanonicalJobCategory::Sales,
        CanonicalJobCategory::CallCenter,
        CanonicalJobCategory::Engineering,
        CanonicalJobCategory::Creative,
        CanonicalJobCategory::Retail,
        CanonicalJobCategory::Manufacturing,
        CanonicalJobCategory::MedicalCare,
        CanonicalJobCategory::Remote,
        CanonicalJobCategory::Other,
    ];

    /// Japanese display label (also the stored value)
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalJobCategory::Office => "事務",
            CanonicalJobCategory::Sales => "営業",
            CanonicalJobCategory::CallCenter => "コールセンター",
            CanonicalJobCategory::Engineering => "IT・エンジニア",
            CanonicalJobCategory::Creative => "クリエイティブ",
            CanonicalJobCategory::Retail => "販売・接客",
            CanonicalJobCategory::Manufacturing => "製造・軽作業",
            CanonicalJobCategory::MedicalCare => "医療・介護",
            CanonicalJobCategory::Remote => "リモート",
            CanonicalJobCategory::Other => "その他",
        }
    }

    /// Parse an exact display label
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for category in CanonicalJobCategory::ALL {
            assert_eq!(CanonicalJobCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(CanonicalJobCategory::parse("パイロット"), None);
    }
}
