//! コンソールレポートの整形
//!
//! 出力内容は純粋関数で組み立て、表示は呼び出し側（app）が行う。

use crate::domain::StrategyDecision;

/// 決定・キャプション・根拠の説明を 1 つのレポートに整形する
pub fn render(decision: &StrategyDecision, caption: &str) -> String {
    let rule_heavy = "=".repeat(50);
    let rule_light = "-".repeat(50);
    format!(
        "\n🤖 SOCIAL MEDIA MANAGER AGENT (CLI)\n\
         {rule_heavy}\n\
         📊 Best Content Type : {ctype}\n\
         📈 Avg Engagement   : {score:.2}\n\
         ⏰ Best Time        : {hour}:00 hrs\n\
         \n\
         📝 Generated Caption:\n\
         {rule_light}\n\
         {caption}\n\
         \n\
         🧠 Agent Reasoning:\n\
         {rule_light}\n\
         {ctype} posts historically achieved the highest engagement.\n\
         Audience activity peaks around {hour}:00 hrs.\n\
         The agent used these insights to generate optimized content.\n\
         {rule_heavy}",
        ctype = decision.content_type,
        score = decision.score,
        hour = decision.posting_time,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_decision_and_caption() {
        let d = StrategyDecision {
            content_type: "video".to_string(),
            score: 16.5,
            posting_time: 9,
        };
        let out = render(&d, "Great caption #x");
        assert!(out.contains("Best Content Type : video"));
        assert!(out.contains("Avg Engagement   : 16.50"));
        assert!(out.contains("Best Time        : 9:00 hrs"));
        assert!(out.contains("Great caption #x"));
        assert!(out.contains("video posts historically achieved the highest engagement."));
    }
}
