//! ドメイン型（投稿メトリクスと戦略決定）

/// 投稿 1 件分のメトリクス（データセットの 1 行）
#[derive(Debug, Clone, PartialEq)]
pub struct PostMetrics {
    /// コンテンツ分類ラベル（video / image / text など）
    pub content_type: String,
    /// 投稿時刻（0〜23 の時）
    pub posted_time: u32,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
}

impl PostMetrics {
    /// 派生エンゲージメント値 = likes + comments + shares（重み付けなし）
    pub fn engagement(&self) -> f64 {
        self.likes + self.comments + self.shares
    }
}

/// 戦略決定（平均エンゲージメント最大の分類と、平均 likes 最大の時刻）
///
/// 分類と時刻は別々のメトリクス・別々のキーでの独立した argmax であり、
/// 同じ行集合から選ばれるとは限らない。
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyDecision {
    pub content_type: String,
    /// content_type の平均エンゲージメント
    pub score: f64,
    pub posting_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_is_unweighted_sum() {
        let p = PostMetrics {
            content_type: "video".to_string(),
            posted_time: 9,
            likes: 10.0,
            comments: 2.0,
            shares: 1.0,
        };
        assert_eq!(p.engagement(), 13.0);
    }
}
