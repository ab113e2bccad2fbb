use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 作品记录
///
/// 一条收录的第三方前端 demo，带双语解读字段。
/// `(pen_user, pen_slug)` 唯一标识一条记录，用于 URL 寻址。
/// 除 id/pen_user/pen_slug 外，所有字段都可能缺失。
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ShowcaseRecord {
    /// 记录唯一标识
    pub id: String,
    pub pen_user: String,
    pub pen_slug: String,

    pub author_name: Option<String>,
    pub author_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub oembed_html: Option<String>,

    /// 技术栈标签，如 "CSS" / "SVG"
    pub stack: Option<String>,
    pub tags: Option<Vec<String>>,
    /// 难度，精选抽样识别 "advanced" 和 "intermediate"（忽略大小写）
    pub difficulty: Option<String>,

    pub title_zh: Option<String>,
    pub title_en: Option<String>,
    pub summary_zh: Option<String>,
    pub summary_en: Option<String>,
    pub headline_zh: Option<String>,
    pub headline_en: Option<String>,
    pub key_points_zh: Option<Vec<String>>,
    pub key_points_en: Option<Vec<String>>,
    pub body_md_zh: Option<String>,
    pub body_md_en: Option<String>,
    pub reuse_steps_zh: Option<Vec<String>>,
    pub reuse_steps_en: Option<Vec<String>>,
    pub perf_notes_zh: Option<String>,
    pub perf_notes_en: Option<String>,

    /// ISO-8601 时间串，保留原样，解析失败按 epoch 处理
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ShowcaseRecord {
    /// 原作链接
    pub fn pen_url(&self) -> String {
        format!("https://codepen.io/{}/pen/{}", self.pen_user, self.pen_slug)
    }
}

/// 列表排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// 最新在前（默认）
    #[default]
    Latest,
    /// 最旧在前
    Oldest,
}

/// 记录的活跃时间戳（毫秒）
///
/// 取创建时间与更新时间中较大的一个，缺失或无法解析按 0 处理。
pub fn recency_timestamp(record: &ShowcaseRecord) -> i64 {
    let created = parse_timestamp_millis(record.created_at.as_deref());
    let updated = parse_timestamp_millis(record.updated_at.as_deref());
    created.max(updated)
}

/// 按活跃时间排序，返回新的有序序列，不修改输入
///
/// 使用稳定排序，时间戳相同的记录保持输入顺序。
pub fn sort_by_recency(records: &[ShowcaseRecord], order: SortOrder) -> Vec<ShowcaseRecord> {
    let mut sorted = records.to_vec();
    match order {
        SortOrder::Latest => {
            sorted.sort_by_key(|r| std::cmp::Reverse(recency_timestamp(r)));
        }
        SortOrder::Oldest => {
            sorted.sort_by_key(recency_timestamp);
        }
    }
    sorted
}

pub(crate) fn parse_timestamp_millis(value: Option<&str>) -> i64 {
    let Some(s) = value else {
        return 0;
    };
    let s = s.trim();
    if s.is_empty() {
        return 0;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis();
    }

    // Postgres timestamptz::text 形如 "2024-06-01 08:00:00+00"
    for fmt in &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return dt.timestamp_millis();
        }
    }

    for fmt in &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive.and_utc().timestamp_millis();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return naive.and_utc().timestamp_millis();
        }
    }

    0
}

#[cfg(test)]
pub(crate) fn sample_record(id: &str) -> ShowcaseRecord {
    ShowcaseRecord {
        id: id.to_string(),
        pen_user: "user".to_string(),
        pen_slug: id.to_string(),
        author_name: None,
        author_url: None,
        thumbnail_url: None,
        oembed_html: None,
        stack: None,
        tags: None,
        difficulty: None,
        title_zh: None,
        title_en: None,
        summary_zh: None,
        summary_en: None,
        headline_zh: None,
        headline_en: None,
        key_points_zh: None,
        key_points_en: None,
        body_md_zh: None,
        body_md_en: None,
        reuse_steps_zh: None,
        reuse_steps_en: None,
        perf_notes_zh: None,
        perf_notes_en: None,
        created_at: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recency_takes_max_of_created_and_updated() {
        let mut record = sample_record("a");
        record.created_at = Some("2024-06-01T00:00:00Z".to_string());
        record.updated_at = Some("2024-06-02T00:00:00Z".to_string());

        let expected = DateTime::parse_from_rfc3339("2024-06-02T00:00:00Z")
            .unwrap()
            .timestamp_millis();
        assert_eq!(recency_timestamp(&record), expected);
    }

    #[test]
    fn test_recency_unparsable_is_epoch() {
        let mut record = sample_record("a");
        record.created_at = Some("not a date".to_string());
        record.updated_at = None;

        assert_eq!(recency_timestamp(&record), 0);
    }

    #[test]
    fn test_recency_parses_postgres_text_and_bare_date() {
        let mut record = sample_record("a");
        record.created_at = Some("2024-06-01 08:00:00+00".to_string());
        assert!(recency_timestamp(&record) > 0);

        record.created_at = Some("2024-06-01".to_string());
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis();
        assert_eq!(recency_timestamp(&record), expected);
    }

    #[test]
    fn test_sort_latest_and_oldest() {
        let mut a = sample_record("a");
        a.created_at = Some("2024-06-01T00:00:00Z".to_string());
        let mut b = sample_record("b");
        b.created_at = Some("2024-06-03T00:00:00Z".to_string());
        let mut c = sample_record("c");
        c.updated_at = Some("2024-06-02T00:00:00Z".to_string());

        let records = vec![a, b, c];

        let latest = sort_by_recency(&records, SortOrder::Latest);
        let ids: Vec<_> = latest.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);

        let oldest = sort_by_recency(&records, SortOrder::Oldest);
        let ids: Vec<_> = oldest.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let mut a = sample_record("a");
        a.created_at = Some("2024-06-01T00:00:00Z".to_string());
        let mut b = sample_record("b");
        b.created_at = Some("2024-06-01T00:00:00Z".to_string());
        let mut c = sample_record("c");
        c.created_at = Some("2024-06-01T00:00:00Z".to_string());

        let records = vec![a, b, c];

        // latest -> oldest -> latest 往返后相对顺序不变
        let pass1 = sort_by_recency(&records, SortOrder::Latest);
        let pass2 = sort_by_recency(&pass1, SortOrder::Oldest);
        let pass3 = sort_by_recency(&pass2, SortOrder::Latest);

        let ids: Vec<_> = pass3.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_pen_url() {
        let record = sample_record("threejs-demo");
        assert_eq!(
            record.pen_url(),
            "https://codepen.io/user/pen/threejs-demo"
        );
    }
}
