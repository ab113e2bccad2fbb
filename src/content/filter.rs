use serde::{Deserialize, Serialize};

use super::record::{ShowcaseRecord, SortOrder, sort_by_recency};

/// 列表/搜索的筛选条件
///
/// 条件之间是 AND 关系，tags 内部是 OR（任一命中即可）。
/// 也是远程查询不可用时本地回退使用的同一套语义。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseFilters {
    /// 关键词，匹配双语标题/摘要/正文
    pub query: Option<String>,
    pub tags: Option<Vec<String>>,
    pub stack: Option<String>,
    pub difficulty: Option<String>,
    pub order: Option<SortOrder>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// 对内存中的记录集应用筛选管线
///
/// 固定顺序：按活跃时间排序 → 关键词 → 标签 → 技术栈 → 难度 →
/// offset/limit 截取。输入相同则输出相同，不修改入参。
pub fn apply_filters(records: &[ShowcaseRecord], filters: &ShowcaseFilters) -> Vec<ShowcaseRecord> {
    let sorted = sort_by_recency(records, filters.order.unwrap_or_default());

    let query = filters
        .query
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());
    let tags: Option<Vec<String>> = filters
        .tags
        .as_ref()
        .filter(|t| !t.is_empty())
        .map(|t| t.iter().map(|tag| tag.to_lowercase()).collect());

    let offset = filters.offset.unwrap_or(0);
    let limit = filters.limit.unwrap_or(usize::MAX);

    sorted
        .into_iter()
        .filter(|item| {
            if let Some(query) = &query {
                if !text_bucket(item).contains(query.as_str()) {
                    return false;
                }
            }

            if let Some(tags) = &tags {
                let item_tags: Vec<String> = item
                    .tags
                    .as_deref()
                    .unwrap_or(&[])
                    .iter()
                    .map(|tag| tag.to_lowercase())
                    .collect();
                if !tags.iter().any(|tag| item_tags.contains(tag)) {
                    return false;
                }
            }

            if let Some(stack) = &filters.stack {
                let item_stack = item.stack.as_deref().unwrap_or("").to_lowercase();
                if item_stack != stack.to_lowercase() {
                    return false;
                }
            }

            if let Some(difficulty) = &filters.difficulty {
                let item_difficulty = item.difficulty.as_deref().unwrap_or("").to_lowercase();
                if item_difficulty != difficulty.to_lowercase() {
                    return false;
                }
            }

            true
        })
        .skip(offset)
        .take(limit)
        .collect()
}

/// 关键词匹配的检索桶：六个双语字段按空格拼接后转小写
fn text_bucket(record: &ShowcaseRecord) -> String {
    [
        &record.title_en,
        &record.title_zh,
        &record.summary_en,
        &record.summary_zh,
        &record.body_md_en,
        &record.body_md_zh,
    ]
    .into_iter()
    .filter_map(|field| field.as_deref())
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}
