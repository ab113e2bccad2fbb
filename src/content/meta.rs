use serde::Serialize;

use super::locale::{Locale, TextField, localized_text};
use super::record::ShowcaseRecord;

const TITLE_SUFFIX: &str = " · SparkKit · spark.vincentke.cc";
const TITLE_MIN_LENGTH: usize = 24;
const TITLE_MAX_LENGTH: usize = 34;
const TITLE_FILLER: &str = " 精选拆解";
const TITLE_DEFAULT: &str = "SparkKit 精选灵感导航";

const DESCRIPTION_MIN_LENGTH: usize = 150;
const DESCRIPTION_MAX_LENGTH: usize = 160;
const DESCRIPTION_FILLER: &str = " 欢迎收藏 SparkKit，获取每日灵感更新。";
const DESCRIPTION_DEFAULT: &str = "SparkKit 提供 CodePen 灵感的亮点拆解、复用步骤与性能提示，\
帮助团队快速应用前端创意并保持展示站点持续更新。";

/// 页面级 SEO 元信息
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// 把任意文本规整到 [min, max] 个 Unicode 码点之间
///
/// 长度按码点计数（中文内容下按字节或 UTF-16 单元数都会算错）。
/// 空白输入用 `default` 兜底；超长截断到 max；不足 min 时反复追加
/// `filler`，补过头再截断到 max。
fn ensure_range(value: &str, min: usize, max: usize, filler: &str, default: &str) -> String {
    let mut output = value.trim().to_string();

    if output.is_empty() {
        output = default.to_string();
    }

    let mut len = output.chars().count();
    if len > max {
        output = output.chars().take(max).collect();
        len = max;
    }

    while len < min {
        output.push_str(filler);
        len = output.chars().count();

        if len > max {
            output = output.chars().take(max).collect();
            break;
        }
    }

    output
}

/// 把空白串（含换行、连续空格）压成单个空格并去掉首尾空白
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// SEO 标题正文，规整到 24-34 个码点
pub fn normalize_title(raw: &str) -> String {
    ensure_range(
        &collapse_whitespace(raw),
        TITLE_MIN_LENGTH,
        TITLE_MAX_LENGTH,
        TITLE_FILLER,
        TITLE_DEFAULT,
    )
}

/// SEO 描述，规整到 150-160 个码点
pub fn normalize_description(raw: &str) -> String {
    ensure_range(
        &collapse_whitespace(raw),
        DESCRIPTION_MIN_LENGTH,
        DESCRIPTION_MAX_LENGTH,
        DESCRIPTION_FILLER,
        DESCRIPTION_DEFAULT,
    )
}

/// 完整页面标题：规整后的正文加站点后缀
pub fn compose_title(main: &str) -> String {
    format!("{}{}", normalize_title(main), TITLE_SUFFIX)
}

/// 详情页元信息
///
/// 标题取中文标题，缺失时退回英文，再缺失用 `user/slug`；
/// 描述取本地化摘要加固定的栏目说明。
pub fn showcase_meta(record: &ShowcaseRecord) -> PageMeta {
    let title_source = localized_text(record, TextField::Title, Locale::Zh)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}/{}", record.pen_user, record.pen_slug));

    let base = format!("{title_source} 解读与复用要点全指南");
    let title = format!(
        "{}{}",
        ensure_range(
            &base,
            TITLE_MIN_LENGTH,
            TITLE_MAX_LENGTH,
            TITLE_FILLER,
            TITLE_DEFAULT,
        ),
        TITLE_SUFFIX
    );

    let summary = localized_text(record, TextField::Summary, Locale::Zh).unwrap_or("");
    let description = normalize_description(&format!(
        "{summary} 包含作者信息、亮点拆解、复用步骤与性能提示，\
配合官方 CodePen 嵌入帮助团队快速实践，并支持复制链接分享至协作工具。"
    ));

    PageMeta { title, description }
}

#[cfg(test)]
mod tests {
    use super::super::record::sample_record;
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_empty_title_uses_default_and_pads() {
        let title = normalize_title("");
        assert_eq!(title, "SparkKit 精选灵感导航 精选拆解 精选拆解");
        assert_eq!(char_len(&title), 25);
    }

    #[test]
    fn test_short_title_padded_with_filler() {
        let title = normalize_title("你好");
        assert_eq!(title, "你好 精选拆解 精选拆解 精选拆解 精选拆解 精选拆解");
        assert_eq!(char_len(&title), 27);
    }

    #[test]
    fn test_title_bounds_hold_for_varied_inputs() {
        let long = "超长的中文标题".repeat(30);
        for input in [
            "",
            "短",
            "A compact English headline",
            long.as_str(),
            "   空白   很多    的标题   ",
        ] {
            let len = char_len(&normalize_title(input));
            assert!(
                (TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&len),
                "title length {len} out of range for {input:?}"
            );
        }
    }

    #[test]
    fn test_long_description_truncated_to_exactly_max() {
        let description = normalize_description(&"x".repeat(200));
        assert_eq!(char_len(&description), DESCRIPTION_MAX_LENGTH);

        // 截断按码点而不是字节
        let description = normalize_description(&"聆听".repeat(80));
        assert_eq!(char_len(&description), DESCRIPTION_MAX_LENGTH);
    }

    #[test]
    fn test_empty_description_uses_default_then_pads() {
        let description = normalize_description("");
        assert_eq!(char_len(&description), 158);
        assert!(description.starts_with("SparkKit 提供 CodePen"));
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let title = normalize_title("灵感  \n  导航\t与  拆解 速查  的完整  指南合集");
        assert!(!title.contains("  "));
        assert!(!title.contains('\n'));
    }

    #[test]
    fn test_compose_title_appends_suffix() {
        let title = compose_title("每日6条前端灵感随取随用，深度解析即刻复用全指南");
        assert!(title.ends_with(" · SparkKit · spark.vincentke.cc"));
    }

    #[test]
    fn test_showcase_meta_prefers_zh_then_falls_back() {
        let mut record = sample_record("a");
        record.title_en = Some("Particle Playground".to_string());
        record.summary_zh = Some("一个粒子交互演示。".to_string());

        let meta = showcase_meta(&record);
        assert!(meta.title.contains("Particle Playground"));
        assert!(meta.title.ends_with(TITLE_SUFFIX));
        assert!(
            (DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH)
                .contains(&char_len(&meta.description))
        );

        // 双语都缺失时退回 user/slug
        let record = sample_record("b");
        let meta = showcase_meta(&record);
        assert!(meta.title.contains("user/b"));
    }
}
