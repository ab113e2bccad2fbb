use sqlx::QueryBuilder;

use crate::content::{ShowcaseFilters, ShowcaseRecord, SortOrder};

use super::{DBPool, SyncStatus};

/// 作品表的查询列，时间戳取 text 形式保持与回退数据一致
const SELECT_COLUMNS: &str = "\
SELECT id, pen_user, pen_slug, author_name, author_url, thumbnail_url, oembed_html, \
stack, tags, difficulty, \
title_zh, title_en, summary_zh, summary_en, headline_zh, headline_en, \
key_points_zh, key_points_en, body_md_zh, body_md_en, \
reuse_steps_zh, reuse_steps_en, perf_notes_zh, perf_notes_en, \
created_at::text AS created_at, updated_at::text AS updated_at \
FROM showcases";

/// 用于查询作品相关数据
///
/// 提供获取作品详情、列表、筛选项和同步状态的接口。
/// 列表查询的可见语义必须与 [`crate::content::apply_filters`]
/// 一致，远程与回退之间切换对调用方透明。
pub trait ShowcaseQuery: Send + Sync {
    type Error;

    /// 按 `(pen_user, pen_slug)` 查询单个作品
    ///
    /// 返回 [`ShowcaseRecord`]，如果作品不存在则返回 `None`。
    fn get_one(
        &self,
        pen_user: &str,
        pen_slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<ShowcaseRecord>, Self::Error>>;

    /// 按筛选条件查询作品列表
    ///
    /// 支持关键词、标签（任一命中）、技术栈、难度、排序与分页。
    fn list(
        &self,
        filters: &ShowcaseFilters,
    ) -> impl std::future::Future<Output = Result<Vec<ShowcaseRecord>, Self::Error>>;

    /// 查询所有出现过的标签，去重排序
    fn distinct_tags(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, Self::Error>>;

    /// 查询所有出现过的技术栈，去重排序
    fn distinct_stacks(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, Self::Error>>;

    /// 查询所有出现过的难度，去重排序
    fn distinct_difficulties(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<String>, Self::Error>>;

    /// 查询同步状态视图
    fn sync_status(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<SyncStatus>, Self::Error>>;
}

impl ShowcaseQuery for DBPool {
    type Error = sqlx::Error;

    async fn get_one(
        &self,
        pen_user: &str,
        pen_slug: &str,
    ) -> Result<Option<ShowcaseRecord>, sqlx::Error> {
        let sql = format!(
            "{SELECT_COLUMNS}
            WHERE pen_user = $1 AND pen_slug = $2
            LIMIT 1"
        );
        sqlx::query_as::<_, ShowcaseRecord>(&sql)
            .bind(pen_user)
            .bind(pen_slug)
            .fetch_optional(self)
            .await
    }

    async fn list(&self, filters: &ShowcaseFilters) -> Result<Vec<ShowcaseRecord>, sqlx::Error> {
        let mut builder = QueryBuilder::new(SELECT_COLUMNS);

        builder.push(" WHERE TRUE");

        if let Some(query) = filters
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        {
            let like = format!("%{query}%");
            builder.push(" AND (");
            let mut separated = builder.separated(" OR ");
            for column in [
                "title_en", "title_zh", "summary_en", "summary_zh", "body_md_en", "body_md_zh",
            ] {
                separated.push(format!("{column} ILIKE "));
                separated.push_bind_unseparated(like.clone());
            }
            builder.push(")");
        }

        if let Some(tags) = filters.tags.as_ref().filter(|t| !t.is_empty()) {
            let lowered: Vec<String> = tags.iter().map(|tag| tag.to_lowercase()).collect();
            builder
                .push(" AND EXISTS (SELECT 1 FROM UNNEST(tags) AS t WHERE LOWER(t) = ANY(")
                .push_bind(lowered)
                .push("))");
        }

        if let Some(stack) = &filters.stack {
            builder
                .push(" AND LOWER(COALESCE(stack, '')) = LOWER(")
                .push_bind(stack.clone())
                .push(")");
        }

        if let Some(difficulty) = &filters.difficulty {
            builder
                .push(" AND LOWER(COALESCE(difficulty, '')) = LOWER(")
                .push_bind(difficulty.clone())
                .push(")");
        }

        let direction = match filters.order.unwrap_or_default() {
            SortOrder::Latest => "DESC",
            SortOrder::Oldest => "ASC",
        };
        builder.push(format!(
            " ORDER BY GREATEST(COALESCE(created_at, 'epoch'::timestamptz), \
COALESCE(updated_at, 'epoch'::timestamptz)) {direction}"
        ));

        if let Some(limit) = filters.limit {
            builder.push(" LIMIT ").push_bind(limit as i64);
        }
        if let Some(offset) = filters.offset {
            builder.push(" OFFSET ").push_bind(offset as i64);
        }

        let query = builder.build_query_as::<ShowcaseRecord>();
        query.fetch_all(self).await
    }

    async fn distinct_tags(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT UNNEST(tags) AS "tag"
            FROM showcases
            WHERE tags IS NOT NULL
            ORDER BY tag
            "#,
        )
        .fetch_all(self)
        .await
    }

    async fn distinct_stacks(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT stack
            FROM showcases
            WHERE stack IS NOT NULL
            ORDER BY stack
            "#,
        )
        .fetch_all(self)
        .await
    }

    async fn distinct_difficulties(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT DISTINCT difficulty
            FROM showcases
            WHERE difficulty IS NOT NULL
            ORDER BY difficulty
            "#,
        )
        .fetch_all(self)
        .await
    }

    async fn sync_status(&self) -> Result<Option<SyncStatus>, sqlx::Error> {
        sqlx::query_as::<_, SyncStatus>(
            r#"
            SELECT version, last_synced_at::text AS last_synced_at,
                   total_indexed, cache_hit_rate
            FROM showcase_sync_status
            LIMIT 1
            "#,
        )
        .fetch_optional(self)
        .await
    }
}
