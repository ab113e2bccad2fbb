use serde::{Deserialize, Serialize};

use super::ShowcaseRecord;

/// 站点语言
///
/// 只支持中英两种，内部不允许其他值，未识别的信号统一落到默认值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Zh,
    /// 默认语言
    #[default]
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// 严格解析语言信号
    ///
    /// 只有明确以 "zh"/"en" 开头的信号才会命中，否则返回 `None`，
    /// 由调用方自行决定回退行为（比如保持之前的语言）。
    pub fn from_signal(signal: Option<&str>) -> Option<Locale> {
        let normalized = signal?.trim().to_lowercase();

        if normalized.starts_with("zh") {
            return Some(Locale::Zh);
        }
        if normalized.starts_with("en") {
            return Some(Locale::En);
        }

        None
    }
}

/// 宽松解析语言偏好（如 `Accept-Language` 头）
///
/// 信号中出现 "zh" 即视为中文，其余一律英文。缺失或无法识别
/// 不会报错，总是返回合法的 [`Locale`]。
pub fn resolve_locale(signal: Option<&str>) -> Locale {
    let Some(signal) = signal else {
        return Locale::En;
    };

    if signal.to_lowercase().contains("zh") {
        return Locale::Zh;
    }

    Locale::En
}

/// 双语文本字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Summary,
    Headline,
    Body,
    PerfNotes,
}

/// 双语列表字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    KeyPoints,
    ReuseSteps,
}

/// 取记录某个文本字段的本地化值
///
/// 优先语言的字段非空白时返回它，否则回退到另一种语言，
/// 两边都没有则返回 `None`。只做选择，不做翻译。
pub fn localized_text(
    record: &ShowcaseRecord,
    field: TextField,
    preferred: Locale,
) -> Option<&str> {
    let (zh, en) = match field {
        TextField::Title => (&record.title_zh, &record.title_en),
        TextField::Summary => (&record.summary_zh, &record.summary_en),
        TextField::Headline => (&record.headline_zh, &record.headline_en),
        TextField::Body => (&record.body_md_zh, &record.body_md_en),
        TextField::PerfNotes => (&record.perf_notes_zh, &record.perf_notes_en),
    };

    let zh = non_blank(zh);
    let en = non_blank(en);

    match preferred {
        Locale::Zh => zh.or(en),
        Locale::En => en.or(zh),
    }
}

/// 取记录某个列表字段的本地化值
///
/// 规则同 [`localized_text`]，两边都为空时返回空切片。
pub fn localized_list(record: &ShowcaseRecord, field: ListField, preferred: Locale) -> &[String] {
    let (zh, en) = match field {
        ListField::KeyPoints => (&record.key_points_zh, &record.key_points_en),
        ListField::ReuseSteps => (&record.reuse_steps_zh, &record.reuse_steps_en),
    };

    let zh = non_empty(zh);
    let en = non_empty(en);

    let picked = match preferred {
        Locale::Zh => zh.or(en),
        Locale::En => en.or(zh),
    };
    picked.unwrap_or(&[])
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn non_empty(value: &Option<Vec<String>>) -> Option<&[String]> {
    value.as_deref().filter(|v| !v.is_empty())
}
