use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::Query;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::{
    ListField, Locale, PageMeta, ShowcaseFilters, ShowcaseRecord, SortOrder, TextField,
    localized_list, localized_text, resolve_locale, select_daily_featured_with, showcase_meta,
};
use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::storage::{FilterOptions, ShowcaseSource, SyncStatus};

pub fn setup_route() -> Router<AppState> {
    Router::new()
        .route("/showcases", get(showcase_list))
        .route("/showcases/{pen_user}/{pen_slug}", get(showcase_detail))
        .route("/featured", get(featured_list))
        .route("/filters", get(filter_options))
        .route("/status", get(sync_status))
}

/// 作品卡片，用于列表展示
///
/// 标题和摘要已按请求语言完成选择与回退。
#[derive(Debug, Serialize)]
pub struct ShowcaseSummary {
    pub id: String,
    pub pen_user: String,
    pub pen_slug: String,
    pub pen_url: String,
    pub author_name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub stack: Option<String>,
    pub tags: Vec<String>,
    pub difficulty: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ShowcaseSummary {
    fn from_record(record: &ShowcaseRecord, locale: Locale) -> Self {
        Self {
            id: record.id.clone(),
            pen_user: record.pen_user.clone(),
            pen_slug: record.pen_slug.clone(),
            pen_url: record.pen_url(),
            author_name: record.author_name.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            stack: record.stack.clone(),
            tags: record.tags.clone().unwrap_or_default(),
            difficulty: record.difficulty.clone(),
            title: localized_text(record, TextField::Title, locale).map(str::to_string),
            summary: localized_text(record, TextField::Summary, locale).map(str::to_string),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        }
    }
}

/// 完整详情：原始记录加本地化要点与 SEO 元信息
#[derive(Debug, Serialize)]
pub struct ShowcaseDetail {
    #[serde(flatten)]
    record: ShowcaseRecord,

    locale: Locale,
    pen_url: String,
    headline: Option<String>,
    key_points: Vec<String>,
    reuse_steps: Vec<String>,
    perf_notes: Option<String>,
    meta: PageMeta,
}

/// 查询参数，用于作品列表筛选和分页
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    q: String,
    tags: String,
    stack: Option<String>,
    difficulty: Option<String>,
    order: Option<SortOrder>,
    limit: Option<usize>,
    offset: Option<usize>,
    /// 语言覆盖参数，如 `?hl=en`
    hl: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            q: String::new(),
            tags: String::new(),
            stack: None,
            difficulty: None,
            order: None,
            limit: None,
            offset: None,
            hl: None,
        }
    }
}

impl QueryParams {
    fn to_filters(&self) -> ShowcaseFilters {
        let query = {
            let trimmed = self.q.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        let tags: Vec<String> = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();

        ShowcaseFilters {
            query,
            tags: (!tags.is_empty()).then_some(tags),
            stack: self.stack.clone(),
            difficulty: self.difficulty.clone(),
            order: self.order,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// 请求语言：`hl` 参数严格匹配优先，其次 `Accept-Language`，
/// 都没有时用站点默认语言
fn request_locale(hl: Option<&str>, headers: &HeaderMap, config: &SiteConfig) -> Locale {
    if let Some(locale) = Locale::from_signal(hl) {
        return locale;
    }

    match headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
    {
        Some(value) => resolve_locale(Some(value)),
        None => config.default_locale,
    }
}

/// 获取作品列表
///
/// 支持关键词、标签、技术栈、难度筛选与分页。
/// 返回 [`ShowcaseSummary`] 列表。
async fn showcase_list(
    Query(params): Query<QueryParams>,
    headers: HeaderMap,
    State(source): State<ShowcaseSource>,
    State(config): State<Arc<SiteConfig>>,
) -> Json<Vec<ShowcaseSummary>> {
    let locale = request_locale(params.hl.as_deref(), &headers, &config);
    let records = source.fetch_showcases(&params.to_filters()).await;

    Json(
        records
            .iter()
            .map(|r| ShowcaseSummary::from_record(r, locale))
            .collect(),
    )
}

/// 根据 `(pen_user, pen_slug)` 获取单个作品
///
/// 返回 [`ShowcaseDetail`]，如果作品不存在返回 [`ApiError::NotFound`]。
async fn showcase_detail(
    Path((pen_user, pen_slug)): Path<(String, String)>,
    Query(params): Query<QueryParams>,
    headers: HeaderMap,
    State(source): State<ShowcaseSource>,
    State(config): State<Arc<SiteConfig>>,
) -> Result<Json<ShowcaseDetail>> {
    let locale = request_locale(params.hl.as_deref(), &headers, &config);
    let record = source
        .fetch_by_user_and_slug(&pen_user, &pen_slug)
        .await
        .ok_or(ApiError::NotFound)?;

    let meta = showcase_meta(&record);
    Ok(Json(ShowcaseDetail {
        locale,
        pen_url: record.pen_url(),
        headline: localized_text(&record, TextField::Headline, locale).map(str::to_string),
        key_points: localized_list(&record, ListField::KeyPoints, locale).to_vec(),
        reuse_steps: localized_list(&record, ListField::ReuseSteps, locale).to_vec(),
        perf_notes: localized_text(&record, TextField::PerfNotes, locale).map(str::to_string),
        meta,
        record,
    }))
}

/// 获取今日精选
///
/// 同一个精选周期内（北京时间 08:00 换档）结果稳定不变。
async fn featured_list(
    Query(params): Query<QueryParams>,
    headers: HeaderMap,
    State(source): State<ShowcaseSource>,
    State(config): State<Arc<SiteConfig>>,
) -> Json<Vec<ShowcaseSummary>> {
    let locale = request_locale(params.hl.as_deref(), &headers, &config);
    let records = source.fetch_showcases(&ShowcaseFilters::default()).await;
    let featured = select_daily_featured_with(&records, Utc::now(), &config.featured());

    Json(
        featured
            .iter()
            .map(|r| ShowcaseSummary::from_record(r, locale))
            .collect(),
    )
}

/// 获取所有可用筛选项
async fn filter_options(State(source): State<ShowcaseSource>) -> Json<FilterOptions> {
    Json(source.fetch_distinct_filters().await)
}

/// 获取同步状态
async fn sync_status(State(source): State<ShowcaseSource>) -> Json<SyncStatus> {
    Json(source.fetch_sync_status().await)
}
