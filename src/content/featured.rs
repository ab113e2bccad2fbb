use std::collections::HashSet;

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

use super::record::ShowcaseRecord;

/// 每日精选抽样配置
///
/// 默认每档 3 条、北京时间 08:00 换档，与既有部署保持一致。
#[derive(Debug, Clone, Copy)]
pub struct FeaturedConfig {
    /// 每个难度档抽取的条数，总量为它的两倍
    pub per_tier: usize,
    /// 换档小时（北京时间），小于该小时算前一天
    pub refresh_hour: u32,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            per_tier: 3,
            refresh_hour: 8,
        }
    }
}

/// 抽样所用的固定时区，北京时间（UTC+8，无夏令时）
fn beijing_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 within ±24h")
}

/// 计算参考时刻所属的精选周期键
///
/// 取北京时间的日历日期，小时小于 `refresh_hour` 时回退一天，
/// 输出零填充的 "YYYY-MM-DD"。同一周期内所有时刻得到相同的键。
pub fn cycle_key(reference: DateTime<Utc>, refresh_hour: u32) -> String {
    let local = reference.with_timezone(&beijing_offset());
    let mut date = local.date_naive();

    if local.hour() < refresh_hour {
        date = date.pred_opt().unwrap_or(date);
    }

    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// 周期键的 32 位滚动哈希
///
/// 即 `hash = hash * 31 + code_unit`，按 32 位有符号回绕，
/// 最后取绝对值加一保证种子为正。必须与既有实现保持逐位一致，
/// 否则同一天会选出不同的精选集。
fn hash_cycle_key(key: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in key.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs() + 1
}

/// Lehmer / Park-Miller 线性同余生成器
///
/// 模数 2147483647、乘数 16807，输出 [0, 1) 浮点流。
/// 每次调用都从种子重建，不持有跨请求的共享状态。
struct SeededRandom {
    value: i64,
}

impl SeededRandom {
    fn new(seed: u32) -> Self {
        let mut value = i64::from(seed) % 2_147_483_647;
        if value <= 0 {
            value += 2_147_483_646;
        }
        Self { value }
    }

    fn next(&mut self) -> f64 {
        self.value = self.value * 16807 % 2_147_483_647;
        (self.value - 1) as f64 / 2_147_483_646.0
    }
}

fn normalized_difficulty(record: &ShowcaseRecord) -> String {
    record
        .difficulty
        .as_deref()
        .map(|d| d.trim().to_lowercase())
        .unwrap_or_default()
}

/// 按默认配置（3+3，北京时间 08:00 换档）抽取今日精选
pub fn select_daily_featured(
    records: &[ShowcaseRecord],
    reference: DateTime<Utc>,
) -> Vec<ShowcaseRecord> {
    select_daily_featured_with(records, reference, &FeaturedConfig::default())
}

/// 抽取参考时刻所属周期的精选子集
///
/// 同一周期键下结果完全一致；换档后种子变化，选集随之更新。
/// 先抽满 advanced 档、再抽 intermediate 档，不足时从剩余记录
/// 均匀补齐，最后用同一随机流做 Fisher-Yates 打散展示顺序。
pub fn select_daily_featured_with(
    records: &[ShowcaseRecord],
    reference: DateTime<Utc>,
    config: &FeaturedConfig,
) -> Vec<ShowcaseRecord> {
    let total = config.per_tier * 2;
    if records.len() <= total {
        return records.iter().take(total).cloned().collect();
    }

    let key = cycle_key(reference, config.refresh_hour);
    let mut random = SeededRandom::new(hash_cycle_key(&key));
    let mut used: HashSet<&str> = HashSet::new();
    let mut selections: Vec<&ShowcaseRecord> = Vec::new();

    let advanced: Vec<&ShowcaseRecord> = records
        .iter()
        .filter(|r| normalized_difficulty(r) == "advanced")
        .collect();
    let intermediate: Vec<&ShowcaseRecord> = records
        .iter()
        .filter(|r| normalized_difficulty(r) == "intermediate")
        .collect();

    pick_from_pool(
        &advanced,
        config.per_tier,
        total,
        &mut random,
        &mut used,
        &mut selections,
    );
    pick_from_pool(
        &intermediate,
        config.per_tier,
        total,
        &mut random,
        &mut used,
        &mut selections,
    );

    // 两档供给不足时，从未选中的记录里继续均匀抽取补齐
    if selections.len() < total {
        let mut pool: Vec<&ShowcaseRecord> = records
            .iter()
            .filter(|r| !used.contains(r.id.as_str()))
            .collect();
        while !pool.is_empty() && selections.len() < total {
            let index = (random.next() * pool.len() as f64) as usize;
            if index >= pool.len() {
                break;
            }
            let chosen = pool.remove(index);
            used.insert(chosen.id.as_str());
            selections.push(chosen);
        }
    }

    let mut shuffled = selections;
    for i in (1..shuffled.len()).rev() {
        let j = (random.next() * (i + 1) as f64) as usize;
        shuffled.swap(i, j);
    }

    shuffled.truncate(total);
    shuffled.into_iter().cloned().collect()
}

/// 从单个难度池中按随机索引抽取至多 `count` 条
fn pick_from_pool<'a>(
    pool: &[&'a ShowcaseRecord],
    mut count: usize,
    total: usize,
    random: &mut SeededRandom,
    used: &mut HashSet<&'a str>,
    selections: &mut Vec<&'a ShowcaseRecord>,
) {
    let mut candidates: Vec<&'a ShowcaseRecord> = pool
        .iter()
        .copied()
        .filter(|r| !used.contains(r.id.as_str()))
        .collect();

    while !candidates.is_empty() && selections.len() < total && count > 0 {
        let index = (random.next() * candidates.len() as f64) as usize;
        if index >= candidates.len() {
            break;
        }
        let chosen = candidates.remove(index);
        used.insert(chosen.id.as_str());
        selections.push(chosen);
        count -= 1;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::super::record::sample_record;
    use super::*;

    fn tiered_dataset() -> Vec<ShowcaseRecord> {
        // r1-r4 高级，r5-r8 中级
        (1..=8)
            .map(|i| {
                let mut record = sample_record(&format!("r{i}"));
                record.difficulty = Some(if i <= 4 {
                    "Advanced".to_string()
                } else {
                    "Intermediate".to_string()
                });
                record
            })
            .collect()
    }

    fn ids(records: &[ShowcaseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_hash_cycle_key_known_values() {
        assert_eq!(hash_cycle_key(""), 1);
        assert_eq!(hash_cycle_key("a"), 98);
        assert_eq!(hash_cycle_key("ab"), 3106);
        assert_eq!(hash_cycle_key("2024-06-01"), 613_192_678);
        assert_eq!(hash_cycle_key("2024-05-31"), 613_222_376);
    }

    #[test]
    fn test_seeded_random_is_in_unit_interval_and_deterministic() {
        let mut a = SeededRandom::new(hash_cycle_key("2024-06-01"));
        let mut b = SeededRandom::new(hash_cycle_key("2024-06-01"));
        for _ in 0..100 {
            let x = a.next();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next());
        }
    }

    #[test]
    fn test_cycle_key_boundary_hour() {
        // 北京时间 09:00，当天
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();
        assert_eq!(cycle_key(t, 8), "2024-06-01");

        // 北京时间恰好 08:00，已换档
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(cycle_key(t, 8), "2024-06-01");

        // 北京时间 6月1日 07:00，仍属前一天
        let t = Utc.with_ymd_and_hms(2024, 5, 31, 23, 0, 0).unwrap();
        assert_eq!(cycle_key(t, 8), "2024-05-31");
    }

    #[test]
    fn test_cycle_key_crosses_month_and_year() {
        // 北京时间 2024-06-01 06:00 -> 回退到 5 月末
        let t = Utc.with_ymd_and_hms(2024, 5, 31, 22, 0, 0).unwrap();
        assert_eq!(cycle_key(t, 8), "2024-05-31");

        // 北京时间 2024-01-01 02:00 -> 回退到上一年
        let t = Utc.with_ymd_and_hms(2023, 12, 31, 18, 0, 0).unwrap();
        assert_eq!(cycle_key(t, 8), "2023-12-31");
    }

    #[test]
    fn test_same_cycle_same_selection() {
        let records = tiered_dataset();
        let morning = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();

        assert_eq!(
            ids(&select_daily_featured(&records, morning)),
            ids(&select_daily_featured(&records, evening))
        );
    }

    #[test]
    fn test_selection_changes_across_refresh_boundary() {
        let records = tiered_dataset();
        // 边界前：北京时间 6月1日 07:00，周期键 2024-05-31
        let before = Utc.with_ymd_and_hms(2024, 5, 31, 23, 0, 0).unwrap();
        // 边界后：北京时间 6月1日 09:00，周期键 2024-06-01
        let after = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();

        assert_eq!(
            ids(&select_daily_featured(&records, before)),
            ["r3", "r2", "r6", "r5", "r7", "r4"]
        );
        assert_eq!(
            ids(&select_daily_featured(&records, after)),
            ["r1", "r5", "r2", "r8", "r7", "r3"]
        );
    }

    #[test]
    fn test_tier_balance_three_advanced_three_intermediate() {
        let records = tiered_dataset();
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();
        let selected = select_daily_featured(&records, t);

        assert_eq!(selected.len(), 6);
        let advanced = selected
            .iter()
            .filter(|r| normalized_difficulty(r) == "advanced")
            .count();
        let intermediate = selected
            .iter()
            .filter(|r| normalized_difficulty(r) == "intermediate")
            .count();
        assert_eq!(advanced, 3);
        assert_eq!(intermediate, 3);
    }

    #[test]
    fn test_small_dataset_returned_as_is() {
        let records: Vec<ShowcaseRecord> =
            (1..=5).map(|i| sample_record(&format!("r{i}"))).collect();
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();

        assert_eq!(
            ids(&select_daily_featured(&records, t)),
            ["r1", "r2", "r3", "r4", "r5"]
        );
    }

    #[test]
    fn test_backfill_when_tiers_are_short() {
        // 两档各 2 条，其余难度杂项，需补齐到 6 条
        let specs: [(&str, Option<&str>); 8] = [
            ("a1", Some("advanced")),
            ("a2", Some(" ADVANCED ")),
            ("b1", Some("intermediate")),
            ("b2", Some("Intermediate")),
            ("c1", Some("beginner")),
            ("c2", None),
            ("c3", Some("expert")),
            ("c4", Some("beginner")),
        ];
        let records: Vec<ShowcaseRecord> = specs
            .into_iter()
            .map(|(id, difficulty)| {
                let mut record = sample_record(id);
                record.difficulty = difficulty.map(String::from);
                record
            })
            .collect();

        let t = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();
        assert_eq!(
            ids(&select_daily_featured(&records, t)),
            ["a1", "c1", "b1", "c4", "b2", "a2"]
        );
    }

    #[test]
    fn test_custom_config_tier_size() {
        let records = tiered_dataset();
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();
        let config = FeaturedConfig {
            per_tier: 2,
            refresh_hour: 8,
        };

        let selected = select_daily_featured_with(&records, t, &config);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_empty_input_yields_empty_selection() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap();
        assert!(select_daily_featured(&[], t).is_empty());
    }
}
