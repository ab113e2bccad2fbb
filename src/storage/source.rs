use std::collections::BTreeSet;
use std::sync::Arc;

use crate::content::{ShowcaseFilters, ShowcaseRecord, apply_filters};

use super::{
    DBPool, FilterOptions, ShowcaseQuery, SyncStatus, fallback_showcases, fallback_status,
};

/// 作品数据源
///
/// 远程可用时走数据库查询，远程缺失或出错时回退到静态数据集，
/// 并通过 [`apply_filters`] 复现同一套筛选语义，调用方无感知。
/// 本层吞掉所有远程错误（记日志后回退），对外不再失败。
#[derive(Clone)]
pub struct ShowcaseSource {
    db: Option<DBPool>,
    fallback: Arc<Vec<ShowcaseRecord>>,
}

impl ShowcaseSource {
    pub fn new(db: Option<DBPool>) -> Self {
        Self::with_fallback(db, fallback_showcases())
    }

    /// 指定回退数据集，主要供测试使用
    pub fn with_fallback(db: Option<DBPool>, records: Vec<ShowcaseRecord>) -> Self {
        Self {
            db,
            fallback: Arc::new(records),
        }
    }

    /// 按筛选条件获取作品列表
    pub async fn fetch_showcases(&self, filters: &ShowcaseFilters) -> Vec<ShowcaseRecord> {
        if let Some(db) = &self.db {
            match db.list(filters).await {
                Ok(records) => return records,
                Err(e) => tracing::error!(%e, "作品列表查询失败，回退到静态数据"),
            }
        }

        apply_filters(&self.fallback, filters)
    }

    /// 按 `(pen_user, pen_slug)` 获取单个作品
    pub async fn fetch_by_user_and_slug(
        &self,
        pen_user: &str,
        pen_slug: &str,
    ) -> Option<ShowcaseRecord> {
        if let Some(db) = &self.db {
            match db.get_one(pen_user, pen_slug).await {
                Ok(record) => return record,
                Err(e) => tracing::error!(%e, "作品详情查询失败，回退到静态数据"),
            }
        }

        self.fallback
            .iter()
            .find(|r| r.pen_user == pen_user && r.pen_slug == pen_slug)
            .cloned()
    }

    /// 获取列表页的全部筛选项
    pub async fn fetch_distinct_filters(&self) -> FilterOptions {
        if let Some(db) = &self.db {
            match tokio::try_join!(
                db.distinct_tags(),
                db.distinct_stacks(),
                db.distinct_difficulties()
            ) {
                Ok((tags, stacks, difficulties)) => {
                    return FilterOptions {
                        tags,
                        stacks,
                        difficulties,
                    };
                }
                Err(e) => tracing::error!(%e, "筛选项查询失败，回退到静态数据"),
            }
        }

        distinct_filters_of(&self.fallback)
    }

    /// 获取同步状态
    pub async fn fetch_sync_status(&self) -> SyncStatus {
        if let Some(db) = &self.db {
            match db.sync_status().await {
                Ok(Some(status)) => return status,
                Ok(None) => {}
                Err(e) => tracing::error!(%e, "同步状态查询失败，回退到静态数据"),
            }
        }

        fallback_status()
    }
}

/// 从内存数据集归纳筛选项，与远程 DISTINCT 查询语义一致
fn distinct_filters_of(records: &[ShowcaseRecord]) -> FilterOptions {
    let tags: BTreeSet<String> = records
        .iter()
        .flat_map(|r| r.tags.iter().flatten())
        .cloned()
        .collect();
    let stacks: BTreeSet<String> = records.iter().filter_map(|r| r.stack.clone()).collect();
    let difficulties: BTreeSet<String> = records
        .iter()
        .filter_map(|r| r.difficulty.clone())
        .collect();

    FilterOptions {
        tags: tags.into_iter().collect(),
        stacks: stacks.into_iter().collect(),
        difficulties: difficulties.into_iter().collect(),
    }
}
