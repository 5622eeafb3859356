//! 実行オーケストレーション
//!
//! Load → Analyze/Select → Generate → Report → Record を直列に 1 回だけ実行する。
//! Report より前のエラーはレポートなしで中断、Record のエラーはレポート表示後に
//! 中断する（順序が契約）。ライフサイクルは実行ログに記録するが、ログ失敗で
//! 実行は落とさない。

use crate::caption::CaptionClient;
use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::recorder::DecisionRecorder;
use crate::report;
use crate::runlog::{now_iso8601, Log, LogLevel, LogRecord};
use crate::strategy;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 配線済みの実行単位
pub struct App {
    pub config: AppConfig,
    pub fs: Arc<dyn FileSystem>,
    pub client: CaptionClient,
    pub recorder: DecisionRecorder,
    pub logger: Arc<dyn Log>,
}

impl App {
    /// 1 サイクル実行して終了コードを返す
    pub fn run(&self) -> Result<i32, Error> {
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "run started".to_string(),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert(
                    "data".to_string(),
                    serde_json::json!(self.config.data_path.display().to_string()),
                );
                Some(m)
            },
        });

        let result = self.run_pipeline();

        match &result {
            Ok(_) => {
                let _ = self.logger.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Info,
                    message: "run finished".to_string(),
                    kind: Some("lifecycle".to_string()),
                    fields: None,
                });
            }
            Err(e) => {
                let _ = self.logger.log(&LogRecord {
                    ts: now_iso8601(),
                    level: LogLevel::Error,
                    message: e.to_string(),
                    kind: Some("error".to_string()),
                    fields: None,
                });
            }
        }
        result
    }

    fn run_pipeline(&self) -> Result<i32, Error> {
        let dataset = Dataset::load(self.fs.as_ref(), &self.config.data_path)?;
        let posts = dataset.posts()?;
        let decision = strategy::select_strategy(&posts)?;
        let caption = self
            .client
            .generate(&decision.content_type, decision.posting_time)?;

        // レポートを表示してから記録する（記録失敗はレポート後の中断になる）
        println!("{}", report::render(&decision, &caption));
        self.recorder.record(&decision, &caption)?;
        Ok(0)
    }
}
