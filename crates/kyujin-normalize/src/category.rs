//! 職種カテゴリの正準化
//!
//! 生のカテゴリ文字列をまず別名表で正準形へ寄せ、それで決まらない場合は
//! 職種詳細・タイトル・説明文・タグを連結したコーパスに対するキーワード
//! 採点で決める。同点は [`CanonicalJobCategory`] の列挙順で早い方が勝つ。

use kyujin_domain::{CanonicalJobCategory, ExtractedJobData};
use once_cell::sync::Lazy;
use regex::Regex;

const CATEGORY_ALIASES: [(&str, CanonicalJobCategory); 16] = [
    ("事務職", CanonicalJobCategory::Office),
    ("バックオフィス", CanonicalJobCategory::Office),
    ("営業職", CanonicalJobCategory::Sales),
    ("セールス", CanonicalJobCategory::Sales),
    ("コールセンター職", CanonicalJobCategory::CallCenter),
    ("it", CanonicalJobCategory::Engineering),
    ("itエンジニア", CanonicalJobCategory::Engineering),
    ("エンジニア", CanonicalJobCategory::Engineering),
    ("販売", CanonicalJobCategory::Retail),
    ("接客", CanonicalJobCategory::Retail),
    ("サービス", CanonicalJobCategory::Retail),
    ("製造", CanonicalJobCategory::Manufacturing),
    ("軽作業", CanonicalJobCategory::Manufacturing),
    ("医療", CanonicalJobCategory::MedicalCare),
    ("介護", CanonicalJobCategory::MedicalCare),
    ("在宅", CanonicalJobCategory::Remote),
];

fn keywords(category: CanonicalJobCategory) -> &'static [&'static str] {
    match category {
        CanonicalJobCategory::Office => &[
            "事務", "営業事務", "一般事務", "経理", "総務", "人事", "労務", "データ入力",
            "バックオフィス", "秘書", "受付",
        ],
        CanonicalJobCategory::Sales => &[
            "営業", "法人営業", "個人営業", "ルート営業", "インサイドセールス",
            "フィールドセールス", "アカウント", "セールス",
        ],
        CanonicalJobCategory::CallCenter => &[
            "コールセンター", "テレオペ", "受電", "発信", "問い合わせ対応",
            "コンタクトセンター", "カスタマーサポート",
        ],
        CanonicalJobCategory::Engineering => &[
            "it", "エンジニア", "プログラマ", "プログラマー", "システム", "開発", "インフラ",
            "ネットワーク", "社内se", "se", "sre", "ヘルプデスク",
        ],
        CanonicalJobCategory::Creative => &[
            "クリエイティブ", "デザイナー", "webデザイナー", "ui", "ux", "動画編集",
            "ライター", "ディレクター", "illustrator", "photoshop",
        ],
        CanonicalJobCategory::Retail => &[
            "販売", "接客", "店舗", "ショップ", "アパレル", "レジ", "ホール",
            "サービススタッフ", "カウンセラー",
        ],
        CanonicalJobCategory::Manufacturing => &[
            "製造", "軽作業", "工場", "ライン", "倉庫", "検品", "梱包", "仕分け",
            "ピッキング", "物流", "フォークリフト",
        ],
        CanonicalJobCategory::MedicalCare => &[
            "医療", "介護", "看護", "看護師", "准看護師", "クリニック", "病院", "ケア",
            "ヘルパー", "医療事務", "歯科", "薬局",
        ],
        CanonicalJobCategory::Remote => &["リモート", "在宅", "テレワーク", "フルリモート"],
        CanonicalJobCategory::Other => &[],
    }
}

static MULTISPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn normalize_text(input: &str) -> String {
    MULTISPACE_RE.replace_all(input.trim(), " ").to_lowercase()
}

fn canonical_from_raw(raw: Option<&str>) -> Option<CanonicalJobCategory> {
    let normalized = normalize_text(raw?);
    if normalized.is_empty() {
        return None;
    }

    if let Some(direct) = CanonicalJobCategory::ALL
        .iter()
        .copied()
        .find(|c| normalize_text(c.as_str()) == normalized)
    {
        return Some(direct);
    }

    CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, category)| *category)
}

fn scoring_corpus(data: &ExtractedJobData) -> String {
    let mut parts: Vec<&str> = vec![
        data.job_category_detail.as_deref().unwrap_or(""),
        data.title.as_deref().unwrap_or(""),
        data.description.as_deref().unwrap_or(""),
    ];
    parts.extend(data.tags.iter().map(String::as_str));
    normalize_text(&parts.join(" "))
}

/// 抽出結果から一次職種カテゴリを1つに決める。
///
/// 生カテゴリが別名解決で「その他」以外へ寄ればそれで確定。寄らなければ
/// キーワード採点で最多ヒットのカテゴリを選ぶ。どのキーワードにも当たらず
/// 生カテゴリも無い場合は「その他」。
pub fn derive_primary_job_category(data: &ExtractedJobData) -> CanonicalJobCategory {
    let raw = canonical_from_raw(data.category.as_deref());
    if let Some(category) = raw.filter(|c| *c != CanonicalJobCategory::Other) {
        return category;
    }

    let corpus = scoring_corpus(data);

    let mut best: Option<CanonicalJobCategory> = None;
    let mut best_score = 0usize;
    for category in CanonicalJobCategory::ALL {
        if category == CanonicalJobCategory::Other {
            continue;
        }
        let score = keywords(category)
            .iter()
            .filter(|keyword| corpus.contains(&normalize_text(keyword)))
            .count();
        // 同点は列挙順で早いカテゴリを保持
        if score > best_score {
            best = Some(category);
            best_score = score;
        }
    }

    best.or(raw).unwrap_or(CanonicalJobCategory::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(category: Option<&str>, title: Option<&str>, description: Option<&str>) -> ExtractedJobData {
        ExtractedJobData {
            category: category.map(String::from),
            title: title.map(String::from),
            description: description.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_alias_wins_outright() {
        let d = data(Some("セールス"), Some("工場での軽作業スタッフ"), None);
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::Sales);
    }

    #[test]
    fn test_exact_canonical_label() {
        let d = data(Some("IT・エンジニア"), None, None);
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::Engineering);
    }

    #[test]
    fn test_keyword_scoring_from_corpus() {
        let d = data(None, Some("経理・総務スタッフ募集"), Some("データ入力と受付対応をお任せします"));
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::Office);
    }

    #[test]
    fn test_tags_participate_in_scoring() {
        let d = ExtractedJobData {
            tags: vec!["コールセンター".to_string(), "受電".to_string()],
            ..Default::default()
        };
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::CallCenter);
    }

    #[test]
    fn test_ties_break_by_enumeration_order() {
        // 販売(販売・接客)と医療(医療・介護)が1ヒットずつ、列挙順で販売・接客が勝つ
        let d = data(None, Some("販売と医療のお仕事"), None);
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::Retail);
    }

    #[test]
    fn test_more_hits_beat_enumeration_order() {
        // 「営業事務」は事務側に2ヒット(事務・営業事務)、営業側に1ヒット
        let d = data(None, Some("営業事務"), None);
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::Office);
    }

    #[test]
    fn test_no_signal_is_other() {
        let d = data(None, Some("スタッフ募集"), None);
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::Other);
    }

    #[test]
    fn test_other_raw_category_falls_through_to_keywords() {
        let d = data(Some("その他"), Some("看護師・クリニック勤務"), None);
        assert_eq!(derive_primary_job_category(&d), CanonicalJobCategory::MedicalCare);
    }
}
