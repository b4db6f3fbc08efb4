//! 勤務地の都道府県正規化と表示テキスト生成
//!
//! 抽出モデルや手入力から来る勤務地テキストは「東京」「都道府県: 千葉」
//! 「神奈川県横浜市」のように揺れるため、47都道府県の正準形へ寄せてから
//! 表示用テキストを組み立てる。正規化できない入力は `None` とし、勝手に
//! どこかの都道府県へ倒すことはしない。

use kyujin_domain::WorkArea;
use once_cell::sync::Lazy;
use regex::Regex;

/// 表示時に先頭へ寄せる都道府県(この順)
const PRIORITY_PREFECTURES: [&str; 5] = ["東京都", "大阪府", "神奈川県", "埼玉県", "千葉県"];

/// 47都道府県(地方順)
const ALL_PREFECTURES: [&str; 47] = [
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
    "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県", "岐阜県",
    "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府", "兵庫県",
    "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県",
    "徳島県", "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県",
    "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

/// 47都道府県を読みの五十音順に並べたもの。優先外の表示順に使う。
const GOJUON_PREFECTURES: [&str; 47] = [
    "愛知県", "青森県", "秋田県", "石川県", "茨城県", "岩手県", "愛媛県",
    "大分県", "大阪府", "岡山県", "沖縄県", "香川県", "鹿児島県", "神奈川県",
    "岐阜県", "京都府", "熊本県", "群馬県", "高知県", "埼玉県", "佐賀県",
    "滋賀県", "静岡県", "島根県", "千葉県", "東京都", "徳島県", "栃木県",
    "鳥取県", "富山県", "長崎県", "長野県", "奈良県", "新潟県", "兵庫県",
    "広島県", "福井県", "福岡県", "福島県", "北海道", "三重県", "宮城県",
    "宮崎県", "山形県", "山口県", "山梨県", "和歌山県",
];

/// 表記ゆれ(短縮形など)から正準形への別名表
const PREFECTURE_ALIASES: [(&str, &str); 20] = [
    ("東京", "東京都"),
    ("東京都", "東京都"),
    ("大阪", "大阪府"),
    ("大阪府", "大阪府"),
    ("神奈川", "神奈川県"),
    ("神奈川県", "神奈川県"),
    ("埼玉", "埼玉県"),
    ("埼玉県", "埼玉県"),
    ("千葉", "千葉県"),
    ("千葉県", "千葉県"),
    ("北海道", "北海道"),
    ("京都", "京都府"),
    ("京都府", "京都府"),
    ("兵庫", "兵庫県"),
    ("兵庫県", "兵庫県"),
    ("愛知", "愛知県"),
    ("愛知県", "愛知県"),
    ("福岡", "福岡県"),
    ("福岡県", "福岡県"),
    ("沖縄", "沖縄県"),
];

static LABEL_NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"都道府県\s*[:：]").unwrap());
static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s/／|｜,、・＞>→\-]+").unwrap());
static POSTAL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^〒?\d{3}[-ー]?\d{4}\s*").unwrap());
static GUN_MUNICIPALITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?郡.+?[町村])").unwrap());
static MUNICIPALITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?[市区町村])").unwrap());

/// 別名を長い順(最長一致用)
static ALIASES_BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut aliases = PREFECTURE_ALIASES.to_vec();
    aliases.sort_by_key(|(alias, _)| std::cmp::Reverse(alias.chars().count()));
    aliases
});

fn sanitize(value: &str) -> String {
    let replaced = value.replace('\u{3000}', " ");
    let stripped = LABEL_NOISE_RE.replace_all(&replaced, "");
    stripped.replace("エリア", "").trim().to_string()
}

fn canonical_from_candidate(candidate: &str) -> Option<&'static str> {
    if candidate.is_empty() {
        return None;
    }
    if let Some((_, canonical)) = PREFECTURE_ALIASES.iter().find(|(a, _)| *a == candidate) {
        return Some(canonical);
    }
    ALL_PREFECTURES.iter().copied().find(|p| *p == candidate)
}

/// 自由入力テキストから都道府県の正準形を得る。
///
/// 別名表の直接一致、47都道府県の前方一致、別名の最長前方一致、
/// 区切り文字で分割した各トークンの再試行の順で解決する。どれにも
/// 当たらなければ `None`(判別不能)。
pub fn normalize_prefecture(value: &str) -> Option<&'static str> {
    let text = sanitize(value);
    if text.is_empty() {
        return None;
    }

    if let Some(direct) = canonical_from_candidate(&text) {
        return Some(direct);
    }

    for pref in ALL_PREFECTURES {
        if text.starts_with(pref) {
            return Some(pref);
        }
    }

    for (alias, canonical) in ALIASES_BY_LENGTH.iter() {
        if text.starts_with(alias) {
            return Some(canonical);
        }
    }

    for token in DELIMITER_RE.split(&text).filter(|t| !t.is_empty()) {
        if let Some(normalized) = canonical_from_candidate(token) {
            return Some(normalized);
        }
    }

    None
}

fn prefecture_of(area: &WorkArea) -> Option<&'static str> {
    match area {
        WorkArea::Text(text) => normalize_prefecture(text),
        WorkArea::Structured { prefecture, city, station, area } => [prefecture, area, city, station]
            .into_iter()
            .flatten()
            .find_map(|value| normalize_prefecture(value)),
    }
}

/// 「都道府県 + 市区町村詳細」が取れる入力なら整形して返す
fn detailed_area_of(area: &WorkArea) -> Option<String> {
    let text = match area {
        WorkArea::Text(text) => sanitize(text),
        WorkArea::Structured { city, area, .. } => {
            sanitize(city.as_deref().or(area.as_deref()).unwrap_or(""))
        }
    };
    if text.is_empty() {
        return None;
    }

    let pref = normalize_prefecture(&text)?;

    // 正準形そのもの、または別名での前方一致分を剥がして詳細を得る
    let mut rest = text.strip_prefix(pref).map(str::to_string);
    if rest.is_none() {
        for (alias, canonical) in ALIASES_BY_LENGTH.iter() {
            if *canonical == pref {
                if let Some(stripped) = text.strip_prefix(alias) {
                    rest = Some(stripped.to_string());
                    break;
                }
            }
        }
    }

    let detail = rest?.trim_start_matches([' ', '/', '／', '、', ',']).trim().to_string();
    if detail.is_empty() {
        None
    } else {
        Some(format!("{pref} {detail}"))
    }
}

/// 重複を除いた都道府県を表示順(優先5都府県→五十音順)で返す
pub fn get_display_area_prefectures(areas: &[WorkArea]) -> Vec<&'static str> {
    let mut unique: Vec<&'static str> = Vec::new();
    for area in areas {
        if let Some(pref) = prefecture_of(area) {
            if !unique.contains(&pref) {
                unique.push(pref);
            }
        }
    }

    let priority = |p: &str| PRIORITY_PREFECTURES.iter().position(|x| *x == p);
    let gojuon = |p: &str| GOJUON_PREFECTURES.iter().position(|x| *x == p).unwrap_or(usize::MAX);

    unique.sort_by(|a, b| match (priority(a), priority(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => gojuon(a).cmp(&gojuon(b)),
    });
    unique
}

/// 勤務地リストから一覧表示用テキストを作る(表示上限は3)
pub fn build_display_area_text(areas: &[WorkArea]) -> String {
    build_display_area_text_with_limit(areas, 3)
}

/// 勤務地リストから一覧表示用テキストを作る。
///
/// 詳細勤務地(都道府県+市区町村)がちょうど1つに定まる場合はそれを
/// そのまま返す。複数都道府県にまたがる場合は上位 `max_display` 件を
/// " / " で連結し、あふれた分は「他N」を付ける。
pub fn build_display_area_text_with_limit(areas: &[WorkArea], max_display: usize) -> String {
    let prefectures = get_display_area_prefectures(areas);
    if prefectures.is_empty() {
        return String::new();
    }

    let mut detailed: Vec<String> = Vec::new();
    for area in areas {
        if let Some(d) = detailed_area_of(area) {
            if !detailed.contains(&d) {
                detailed.push(d);
            }
        }
    }
    if detailed.len() == 1 && prefectures.len() == 1 {
        return detailed.remove(0);
    }

    let max_display = max_display.max(1);
    let shown: Vec<&str> = prefectures.iter().take(max_display).copied().collect();
    let hidden = prefectures.len() - shown.len();
    let base = shown.join(" / ");
    if hidden > 0 {
        format!("{base} 他{hidden}")
    } else {
        base
    }
}

/// 勤務先住所から市区町村を切り出す
fn municipality_from_address(address: &str, pref: &str) -> Option<String> {
    let sanitized = sanitize(address);
    let without_postal = POSTAL_CODE_RE.replace(&sanitized, "");
    let mut rest = without_postal.trim().to_string();

    if let Some(stripped) = rest.strip_prefix(pref) {
        rest = stripped.to_string();
    } else {
        for (alias, canonical) in ALIASES_BY_LENGTH.iter() {
            if *canonical == pref {
                if let Some(stripped) = rest.strip_prefix(alias) {
                    rest = stripped.to_string();
                    break;
                }
            }
        }
    }
    let rest = rest.trim_start();

    GUN_MUNICIPALITY_RE
        .captures(rest)
        .or_else(|| MUNICIPALITY_RE.captures(rest))
        .map(|caps| caps[1].to_string())
}

/// 勤務地リストに市区町村詳細が無いとき、勤務先住所から補完して表示
/// テキストを作る。補完できない場合は通常の表示テキストへ倒す。
pub fn build_display_area_text_with_address(areas: &[WorkArea], address: Option<&str>) -> String {
    let prefectures = get_display_area_prefectures(areas);
    let has_detail = areas.iter().any(|a| detailed_area_of(a).is_some());

    if prefectures.len() == 1 && !has_detail {
        if let Some(address) = address.filter(|a| !a.trim().is_empty()) {
            if let Some(municipality) = municipality_from_address(address, prefectures[0]) {
                return format!("{} {}", prefectures[0], municipality);
            }
        }
    }

    build_display_area_text(areas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas(texts: &[&str]) -> Vec<WorkArea> {
        texts.iter().map(|t| WorkArea::from(*t)).collect()
    }

    #[test]
    fn test_normalize_prefecture_with_municipality() {
        assert_eq!(normalize_prefecture("東京都 渋谷区"), Some("東京都"));
        assert_eq!(normalize_prefecture("神奈川県横浜市"), Some("神奈川県"));
    }

    #[test]
    fn test_normalize_prefecture_aliases() {
        assert_eq!(normalize_prefecture("東京"), Some("東京都"));
        assert_eq!(normalize_prefecture("大阪"), Some("大阪府"));
        assert_eq!(normalize_prefecture("都道府県: 千葉"), Some("千葉県"));
    }

    #[test]
    fn test_normalize_prefecture_unclassifiable() {
        assert_eq!(normalize_prefecture("渋谷駅"), None);
        assert_eq!(normalize_prefecture(" "), None);
        assert_eq!(normalize_prefecture(""), None);
    }

    #[test]
    fn test_single_detailed_area_passthrough() {
        assert_eq!(build_display_area_text(&areas(&["東京都 板橋区"])), "東京都 板橋区");
    }

    #[test]
    fn test_priority_sort_and_dedup() {
        let result = build_display_area_text(&areas(&[
            "神奈川県 横浜市",
            "東京都 新宿区",
            "埼玉県 さいたま市",
            "東京都 渋谷区",
        ]));
        assert_eq!(result, "東京都 / 神奈川県 / 埼玉県");
    }

    #[test]
    fn test_overflow_suffix() {
        let result = build_display_area_text(&areas(&[
            "福岡県 福岡市",
            "千葉県 千葉市",
            "東京都 港区",
            "神奈川県 川崎市",
        ]));
        assert_eq!(result, "東京都 / 神奈川県 / 千葉県 他1");
    }

    #[test]
    fn test_non_priority_gojuon_order() {
        let result = build_display_area_text(&areas(&["福岡県 福岡市", "北海道 札幌市", "京都府 京都市"]));
        assert_eq!(result, "京都府 / 福岡県 / 北海道");
    }

    #[test]
    fn test_structured_work_areas() {
        let list = vec![
            WorkArea::Structured {
                prefecture: Some("大阪".to_string()),
                city: None,
                station: None,
                area: None,
            },
            WorkArea::Structured {
                prefecture: Some("東京".to_string()),
                city: None,
                station: None,
                area: None,
            },
            WorkArea::Structured {
                prefecture: Some("神奈川県".to_string()),
                city: None,
                station: None,
                area: None,
            },
            WorkArea::Structured {
                prefecture: None,
                city: Some("千葉県 船橋市".to_string()),
                station: None,
                area: None,
            },
        ];
        assert_eq!(build_display_area_text(&list), "東京都 / 大阪府 / 神奈川県 他1");
    }

    #[test]
    fn test_no_resolvable_prefecture() {
        assert_eq!(build_display_area_text(&areas(&["渋谷駅", "新宿駅"])), "");
        assert_eq!(build_display_area_text(&[]), "");
    }

    #[test]
    fn test_with_address_municipality_recovery() {
        let result =
            build_display_area_text_with_address(&areas(&["東京都"]), Some("東京都板橋区南町1-1-1"));
        assert_eq!(result, "東京都 板橋区");
    }

    #[test]
    fn test_with_address_postal_code_and_gun() {
        let result = build_display_area_text_with_address(
            &areas(&["北海道"]),
            Some("〒078-8214 北海道上川郡東川町西町1-1"),
        );
        assert_eq!(result, "北海道 上川郡東川町");
    }

    #[test]
    fn test_with_address_falls_back_when_detail_exists() {
        let result =
            build_display_area_text_with_address(&areas(&["東京都 港区"]), Some("東京都板橋区南町1-1-1"));
        assert_eq!(result, "東京都 港区");
    }

    #[test]
    fn test_get_display_area_prefectures_order() {
        let result = get_display_area_prefectures(&areas(&[
            "福岡県 福岡市",
            "神奈川県 横浜市",
            "東京都 渋谷区",
            "埼玉県 さいたま市",
        ]));
        assert_eq!(result, vec!["東京都", "神奈川県", "埼玉県", "福岡県"]);
    }

    #[test]
    fn test_display_text_is_order_insensitive() {
        let forward = build_display_area_text(&areas(&["大阪府 大阪市", "東京都 千代田区"]));
        let backward = build_display_area_text(&areas(&["東京都 千代田区", "大阪府 大阪市"]));
        assert_eq!(forward, backward);
    }
}
