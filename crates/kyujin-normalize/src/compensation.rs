//! 給与関連フィールドのヒューリスティック補完
//!
//! 抽出モデルが落とした昇給・賞与・交通費・給与内訳などを、給与系の
//! 自由記述をまとめたコーパスから正規表現で拾い直す。規則は順序付きの
//! 表として持ち、既に値が入っているフィールドは決して上書きしない。
//! 何も拾えないのは正常(補完は常にベストエフォート)で、関数全体として
//! 冪等になる。

use kyujin_domain::ExtractedJobData;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(年間休日|休日・休暇|休日|福利厚生|選考|勤務時間|試用期間|就業時間)").unwrap());
static BULLET_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[・\-*■◆\s]+").unwrap());

static RAISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(昇給|給与アップ)").unwrap());
static BONUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(賞与|ボーナス)").unwrap());
static COMMUTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(通勤手当|交通費)").unwrap());

static BREAKDOWN_DIRECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(基本給|月給内訳|給与内訳|固定残業|みなし残業|残業手当|地域手当|各種手当|手当:|手当：)").unwrap()
});
static BREAKDOWN_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(月給内訳|給与内訳|賃金等|給与備考|支払われる手当)").unwrap());
static BREAKDOWN_CAPTURE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(円|万円|手当|残業|基本給|内訳|支給)").unwrap());

static DETAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(想定年収|年収備考|月収例|年収幅|首都圏|関西|月給|年収|賃金)").unwrap());
static EXAMPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(想定年収|年収幅|年収[0-9]|[0-9]{2,4}万円.*(入社|年目|リーダー|主任|マネージャー))").unwrap()
});

static ANNUAL_MAN_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:想定)?年収[:：]?\s*([0-9]{2,4})\s*万(?:円)?\s*[~〜\-－]\s*([0-9]{2,4})\s*万").unwrap()
});
static ANNUAL_YEN_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:想定)?年収[:：]?\s*([0-9]{6,8})\s*円?\s*[~〜\-－]\s*([0-9]{6,8})\s*円").unwrap()
});
static ANNUAL_MIN_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:想定)?年収[:：]?\s*([0-9]{2,4})\s*万(?:円)?").unwrap());

/// 全角数字を半角へ寄せ、桁区切りカンマと全角空白を落とす
fn normalize_line_text(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - 0xfee0),
            '\u{3000}' => Some(' '),
            '\r' | ',' => None,
            other => Some(other),
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn collect_source_text(data: &ExtractedJobData) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let candidates = [
        &data.salary,
        &data.salary_description,
        &data.salary_detail,
        &data.salary_breakdown,
        &data.salary_example,
        &data.raise_info,
        &data.bonus_info,
        &data.commute_allowance,
        &data.description,
        &data.work_location_detail,
    ];
    for value in candidates {
        if ExtractedJobData::has_text(value) {
            blocks.push(normalize_line_text(value.as_deref().unwrap_or("")));
        }
    }
    if !data.benefits.is_empty() {
        blocks.push(data.benefits.join("\n"));
    }
    blocks.join("\n")
}

fn split_meaningful_lines(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    text.split('\n')
        .map(normalize_line_text)
        .map(|line| BULLET_PREFIX_RE.replace(&line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.clone()))
        .collect()
}

fn pick_first_line(lines: &[String], regex: &Regex) -> Option<String> {
    lines.iter().find(|line| regex.is_match(line)).cloned()
}

fn pick_salary_breakdown(lines: &[String]) -> Option<String> {
    let direct: Vec<&String> = lines.iter().filter(|l| BREAKDOWN_DIRECT_RE.is_match(l)).collect();
    if !direct.is_empty() {
        let joined = direct.iter().take(6).map(|s| s.as_str()).collect::<Vec<_>>().join("\n");
        return Some(joined);
    }

    let start = lines.iter().position(|l| BREAKDOWN_HEADER_RE.is_match(l))?;
    let mut captured: Vec<&str> = Vec::new();
    for line in &lines[start + 1..] {
        if captured.len() >= 6 || SECTION_BREAK_RE.is_match(line) {
            break;
        }
        if BREAKDOWN_CAPTURE_RE.is_match(line) {
            captured.push(line);
        }
    }
    if captured.is_empty() {
        None
    } else {
        Some(captured.join("\n"))
    }
}

fn pick_capped(lines: &[String], regex: &Regex, cap: usize) -> Option<String> {
    let matched: Vec<&str> =
        lines.iter().filter(|l| regex.is_match(l)).take(cap).map(String::as_str).collect();
    if matched.is_empty() {
        None
    } else {
        Some(matched.join("\n"))
    }
}

/// 補完規則が書き込む先
#[derive(Debug, Clone, Copy)]
enum RuleTarget {
    RaiseInfo,
    BonusInfo,
    CommuteAllowance,
    SalaryBreakdown,
    SalaryDetail,
    SalaryExample,
}

impl RuleTarget {
    fn is_filled(&self, data: &ExtractedJobData) -> bool {
        ExtractedJobData::has_text(match self {
            RuleTarget::RaiseInfo => &data.raise_info,
            RuleTarget::BonusInfo => &data.bonus_info,
            RuleTarget::CommuteAllowance => &data.commute_allowance,
            RuleTarget::SalaryBreakdown => &data.salary_breakdown,
            RuleTarget::SalaryDetail => &data.salary_detail,
            RuleTarget::SalaryExample => &data.salary_example,
        })
    }

    fn fill(&self, data: &mut ExtractedJobData, value: String) {
        let slot = match self {
            RuleTarget::RaiseInfo => &mut data.raise_info,
            RuleTarget::BonusInfo => &mut data.bonus_info,
            RuleTarget::CommuteAllowance => &mut data.commute_allowance,
            RuleTarget::SalaryBreakdown => &mut data.salary_breakdown,
            RuleTarget::SalaryDetail => &mut data.salary_detail,
            RuleTarget::SalaryExample => &mut data.salary_example,
        };
        *slot = Some(value);
    }
}

/// この順に評価される補完規則の表
const RECOVERY_RULES: [(RuleTarget, fn(&[String]) -> Option<String>); 6] = [
    (RuleTarget::RaiseInfo, |lines| pick_first_line(lines, &RAISE_RE)),
    (RuleTarget::BonusInfo, |lines| pick_first_line(lines, &BONUS_RE)),
    (RuleTarget::CommuteAllowance, |lines| pick_first_line(lines, &COMMUTE_RE)),
    (RuleTarget::SalaryBreakdown, pick_salary_breakdown),
    (RuleTarget::SalaryDetail, |lines| pick_capped(lines, &DETAIL_RE, 8)),
    (RuleTarget::SalaryExample, |lines| pick_capped(lines, &EXAMPLE_RE, 4)),
];

/// 行単位で正規表現の代替を順に試す(万表記レンジ→円表記レンジ→下限のみ)
fn parse_annual_salary_range(lines: &[String]) -> (Option<u32>, Option<u32>) {
    if let Some(caps) = lines.iter().find_map(|l| ANNUAL_MAN_RANGE_RE.captures(l)) {
        return (caps[1].parse().ok(), caps[2].parse().ok());
    }

    if let Some(caps) = lines.iter().find_map(|l| ANNUAL_YEN_RANGE_RE.captures(l)) {
        let to_man = |s: &str| s.parse::<f64>().ok().map(|v| (v / 10000.0).round() as u32);
        return (to_man(&caps[1]), to_man(&caps[2]));
    }

    if let Some(caps) = lines.iter().find_map(|l| ANNUAL_MIN_ONLY_RE.captures(l)) {
        return (caps[1].parse().ok(), None);
    }

    (None, None)
}

/// 給与関連フィールドを自由記述から補完する。
///
/// 既に値のあるフィールドには触れない。コーパスに手掛かりが無ければ
/// 入力をそのまま返す。
pub fn recover_compensation_fields(mut data: ExtractedJobData) -> ExtractedJobData {
    let source_text = collect_source_text(&data);
    if source_text.is_empty() {
        return data;
    }

    let lines = split_meaningful_lines(&source_text);
    if lines.is_empty() {
        return data;
    }

    for (target, pick) in RECOVERY_RULES {
        if target.is_filled(&data) {
            continue;
        }
        if let Some(value) = pick(&lines) {
            target.fill(&mut data, value);
        }
    }

    let min_missing = !data.annual_salary_min.is_some_and(|v| v > 0);
    let max_missing = !data.annual_salary_max.is_some_and(|v| v > 0);
    if min_missing || max_missing {
        let (min, max) = parse_annual_salary_range(&lines);
        if min_missing {
            if let Some(min) = min {
                data.annual_salary_min = Some(min);
            }
        }
        if max_missing {
            if let Some(max) = max {
                data.annual_salary_max = Some(max);
            }
        }
    }

    data
}
