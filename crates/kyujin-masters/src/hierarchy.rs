//! Built-in hierarchical master data
//!
//! Five main categories, each split into Japanese-labelled sub-categories.
//! The flat per-field lists consumed by extraction and matching are
//! projections over this hierarchy (see [`crate::taxonomy`]).

use kyujin_domain::MainCategory;

/// One sub-category and its standardized labels
pub type SubCategoryEntry = (&'static str, &'static [&'static str]);

/// 働き方・条件
const WORK_CONDITIONS: &[SubCategoryEntry] = &[
    ("勤務地", &["駅チカ・駅ナカ", "車通勤OK", "転勤なし"]),
    ("勤務時間", &["残業なし", "残業少なめ", "週3日からOK", "週4日からOK"]),
    (
        "働き方",
        &["リモートワーク可", "服装自由", "シフト制", "完全シフト制", "平日休み", "土日祝のみOK"],
    ),
];

/// 休日・休暇
const HOLIDAYS: &[SubCategoryEntry] = &[
    ("週休制度", &["完全週休2日制", "週休2日制", "土日祝休み"]),
    ("年間休日", &["年間休日120日以上"]),
    ("長期休暇", &["長期休暇あり", "夏季休暇", "年末年始休暇", "GW休暇"]),
    ("その他休暇", &["有給休暇", "慶弔休暇", "産前産後休暇", "育児休暇"]),
];

/// 給与・待遇
const COMPENSATION: &[SubCategoryEntry] = &[
    ("給与体系", &["賞与あり", "昇給あり"]),
    (
        "手当",
        &["交通費全額支給", "交通費規定支給", "残業代全額支給", "住宅手当", "家族手当"],
    ),
    ("福利厚生", &["社会保険完備", "退職金制度", "寮・社宅あり", "PC貸与"]),
    ("キャリア", &["研修制度あり", "資格取得支援", "社員登用あり"]),
];

/// 応募条件
const REQUIREMENTS: &[SubCategoryEntry] = &[
    ("経験", &["未経験OK", "経験者優遇", "ブランクOK"]),
    ("学歴", &["学歴不問", "大卒以上"]),
    (
        "対象者",
        &["第二新卒歓迎", "フリーター歓迎", "主婦(夫)活躍中", "20代活躍中", "30代活躍中"],
    ),
    ("スキル", &["PCスキル（基本操作）", "Excelスキル", "英語力不問"]),
];

/// 募集情報
const RECRUITMENT_INFO: &[SubCategoryEntry] = &[
    ("緊急度", &["急募", "大量募集"]),
    ("企業タイプ", &["外資系企業", "大手企業", "ベンチャー企業"]),
    ("その他", &["オープニングスタッフ"]),
];

/// The sub-categories of one main category
pub fn sub_categories(main: MainCategory) -> &'static [SubCategoryEntry] {
    match main {
        MainCategory::WorkConditions => WORK_CONDITIONS,
        MainCategory::Holidays => HOLIDAYS,
        MainCategory::Compensation => COMPENSATION,
        MainCategory::Requirements => REQUIREMENTS,
        MainCategory::RecruitmentInfo => RECRUITMENT_INFO,
    }
}

/// All main categories in taxonomy order
pub const MAIN_CATEGORIES: [MainCategory; 5] = [
    MainCategory::WorkConditions,
    MainCategory::Holidays,
    MainCategory::Compensation,
    MainCategory::Requirements,
    MainCategory::RecruitmentInfo,
];

/// Flatten all labels of one main category
pub fn flat_labels(main: MainCategory) -> Vec<&'static str> {
    sub_categories(main)
        .iter()
        .flat_map(|(_, labels)| labels.iter().copied())
        .collect()
}

/// Locate the main/sub category a standardized label belongs to
pub fn find_category_by_label(label: &str) -> Option<(MainCategory, &'static str)> {
    for main in MAIN_CATEGORIES {
        for &(sub, labels) in sub_categories(main) {
            if labels.contains(&label) {
                return Some((main, sub));
            }
        }
    }
    None
}
