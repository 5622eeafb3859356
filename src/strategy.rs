//! 戦略選択（argmax）
//!
//! 分類は平均エンゲージメント、時刻は平均 likes という別々の指標での
//! 独立した最大化。同点は「ソート順で最初のキー」（BTreeMap のイテレーション
//! 順 + 真に大きいときだけ更新）に解決する。

use crate::analyzer::compute_engagement_by_type;
use crate::domain::{PostMetrics, StrategyDecision};
use crate::error::Error;
use std::collections::BTreeMap;

/// posted_time ごとの平均 likes
pub fn compute_time_profile(posts: &[PostMetrics]) -> BTreeMap<u32, f64> {
    let mut acc: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for p in posts {
        let e = acc.entry(p.posted_time).or_insert((0.0, 0));
        e.0 += p.likes;
        e.1 += 1;
    }
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// 最良の分類と時刻を選ぶ。どちらかのグループ化が空なら NoData。
pub fn select_strategy(posts: &[PostMetrics]) -> Result<StrategyDecision, Error> {
    let by_type = compute_engagement_by_type(posts);
    let (content_type, score) = arg_max(&by_type)
        .ok_or_else(|| Error::no_data("dataset has no rows to rank content types"))?;

    let by_hour = compute_time_profile(posts);
    let (posting_time, _) = arg_max(&by_hour)
        .ok_or_else(|| Error::no_data("dataset has no rows to rank posting hours"))?;

    Ok(StrategyDecision {
        content_type: content_type.clone(),
        score,
        posting_time: *posting_time,
    })
}

/// 値が最大のエントリ。同値は最初（=最小キー）を保持する。
fn arg_max<K: Ord>(map: &BTreeMap<K, f64>) -> Option<(&K, f64)> {
    let mut best: Option<(&K, f64)> = None;
    for (k, &v) in map {
        let better = match best {
            None => true,
            Some((_, bv)) => v > bv,
        };
        if better {
            best = Some((k, v));
        }
    }
    best
}
