use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use chrono::DateTime;

use crate::config::SiteConfig;
use crate::content::{
    Locale, ShowcaseFilters, ShowcaseRecord, SortOrder, TextField, localized_text,
    parse_timestamp_millis, sort_by_recency,
};
use crate::state::AppState;
use crate::storage::ShowcaseSource;

/// RSS 输出的条目上限
const RSS_ITEM_LIMIT: usize = 100;
/// sitemap 输出的条目上限
const SITEMAP_ITEM_LIMIT: usize = 5000;

pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/rss.xml", get(rss_feed))
        .route("/sitemap.xml", get(sitemap))
}

async fn rss_feed(
    State(source): State<ShowcaseSource>,
    State(config): State<Arc<SiteConfig>>,
) -> Response {
    let records = source
        .fetch_showcases(&ShowcaseFilters {
            limit: Some(RSS_ITEM_LIMIT),
            ..Default::default()
        })
        .await;

    (
        [(
            header::CONTENT_TYPE,
            "application/rss+xml; charset=utf-8",
        )],
        build_rss(&records, &config),
    )
        .into_response()
}

async fn sitemap(
    State(source): State<ShowcaseSource>,
    State(config): State<Arc<SiteConfig>>,
) -> Response {
    let records = source
        .fetch_showcases(&ShowcaseFilters {
            limit: Some(SITEMAP_ITEM_LIMIT),
            ..Default::default()
        })
        .await;

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        build_sitemap(&records, &config),
    )
        .into_response()
}

/// 生成 RSS 2.0 订阅源
///
/// 标题和摘要取中文，缺失时回退英文，条目按活跃时间从新到旧。
pub fn build_rss(records: &[ShowcaseRecord], config: &SiteConfig) -> String {
    let sorted = sort_by_recency(records, SortOrder::Latest);

    let items: Vec<String> = sorted
        .iter()
        .take(RSS_ITEM_LIMIT)
        .map(|item| {
            let title = localized_text(item, TextField::Title, Locale::Zh)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}/{}", item.pen_user, item.pen_slug));
            let summary = localized_text(item, TextField::Summary, Locale::Zh).unwrap_or("");
            let url = config.absolute_url(&format!("/p/{}/{}", item.pen_user, item.pen_slug));
            let pub_date = rfc2822_timestamp(item)
                .map(|d| format!("\n  <pubDate>{d}</pubDate>"))
                .unwrap_or_default();

            format!(
                "<item>\n  <title><![CDATA[{}]]></title>\n  <link>{}</link>\n  <guid>{}</guid>{}\n  <description><![CDATA[{}\n原作：{}]]></description>\n</item>",
                cdata(&title),
                xml_escape(&url),
                xml_escape(&item.id),
                pub_date,
                cdata(summary),
                item.pen_url(),
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<rss version=\"2.0\">\n  <channel>\n    <title>SparkKit · CodePen Showcases</title>\n    <link>{}</link>\n    <description>最新的 CodePen 灵感作品，来自 SparkKit 的双语解读。</description>\n    <language>zh-CN</language>\n{}\n  </channel>\n</rss>",
        xml_escape(&config.absolute_url("")),
        items.join("\n"),
    )
}

/// 生成 XML 站点地图
///
/// 固定页面在前，作品详情页按活跃时间从新到旧排在后面。
pub fn build_sitemap(records: &[ShowcaseRecord], config: &SiteConfig) -> String {
    let sorted = sort_by_recency(records, SortOrder::Latest);

    let mut entries = vec![
        sitemap_entry(&config.absolute_url(""), None, "daily", "1.0"),
        sitemap_entry(&config.absolute_url("/showcases"), None, "hourly", "0.9"),
        sitemap_entry(&config.absolute_url("/search"), None, "hourly", "0.8"),
        sitemap_entry(&config.absolute_url("/status"), None, "daily", "0.6"),
    ];

    entries.extend(sorted.iter().take(SITEMAP_ITEM_LIMIT).map(|record| {
        let url = config.absolute_url(&format!("/p/{}/{}", record.pen_user, record.pen_slug));
        let last_modified = record
            .updated_at
            .as_deref()
            .or(record.created_at.as_deref());
        sitemap_entry(&url, last_modified, "hourly", "0.8")
    }));

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
        entries.join("\n"),
    )
}

fn sitemap_entry(
    url: &str,
    last_modified: Option<&str>,
    change_frequency: &str,
    priority: &str,
) -> String {
    let lastmod = last_modified
        .map(|value| format!("\n  <lastmod>{}</lastmod>", xml_escape(value)))
        .unwrap_or_default();

    format!(
        "<url>\n  <loc>{}</loc>{}\n  <changefreq>{}</changefreq>\n  <priority>{}</priority>\n</url>",
        xml_escape(url),
        lastmod,
        change_frequency,
        priority,
    )
}

/// 条目的发布时间，优先创建时间，缺失时退回更新时间
fn rfc2822_timestamp(record: &ShowcaseRecord) -> Option<String> {
    for value in [record.created_at.as_deref(), record.updated_at.as_deref()] {
        let millis = parse_timestamp_millis(value);
        if millis != 0 {
            return DateTime::from_timestamp_millis(millis).map(|dt| dt.to_rfc2822());
        }
    }
    None
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn cdata(value: &str) -> String {
    // CDATA 内不允许出现终结符，按标准拆段处理
    value.replace("]]>", "]]]]><![CDATA[>")
}
