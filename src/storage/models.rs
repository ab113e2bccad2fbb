use serde::Serialize;

/// 同步状态
///
/// 来自同步视图的只读快照，远程不可用时用静态值兜底。
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    /// 部署版本号
    pub version: String,
    /// 最近一次同步时间，ISO-8601 文本
    pub last_synced_at: String,
    /// 已收录的作品总数
    pub total_indexed: i64,
    pub cache_hit_rate: Option<f64>,
}

/// 列表页可用的筛选项集合
///
/// 三组都去重并按字典序排序。
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub tags: Vec<String>,
    pub stacks: Vec<String>,
    pub difficulties: Vec<String>,
}
