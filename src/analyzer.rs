//! エンゲージメント集計
//!
//! content_type ごとの平均エンゲージメント。イテレーション順を安定させる
//! ため BTreeMap（キーのソート順）で返す。

use crate::domain::PostMetrics;
use std::collections::BTreeMap;

/// content_type ごとに engagement（likes+comments+shares）の算術平均を取る。
/// 入力が空なら空のマップ（NoData にするのは selector の責務）。
pub fn compute_engagement_by_type(posts: &[PostMetrics]) -> BTreeMap<String, f64> {
    let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for p in posts {
        let e = acc.entry(p.content_type.clone()).or_insert((0.0, 0));
        e.0 += p.engagement();
        e.1 += 1;
    }
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}
