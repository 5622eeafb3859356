//! 決定ログ（追記専用の人間可読テキスト）
//!
//! 実行 1 回につき 1 ブロックを追記する。書き換え・コンパクションはしない。
//! ブロックはフッタ区切り線で分割すれば個別に取り出せる。

use crate::domain::StrategyDecision;
use crate::error::Error;
use crate::fs::FileSystem;
use crate::runlog::now_iso8601;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// ブロックのフッタ区切り線
pub const FOOTER: &str = "----------------------------------------";

/// 戦略決定とキャプションをログファイルへ追記する
pub struct DecisionRecorder {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl DecisionRecorder {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 1 ブロックを追記する。ディレクトリが無ければ作成する（冪等）。
    /// 書き込み失敗は Persistence エラーで伝播し、実行を中断させる。
    pub fn record(&self, decision: &StrategyDecision, caption: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent).map_err(|e| {
                Error::persistence(format!(
                    "failed to create '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let block = format_block(decision, caption, &now_iso8601());
        let mut w = self.fs.open_append(&self.path).map_err(|e| {
            Error::persistence(format!(
                "failed to open '{}' for append: {}",
                self.path.display(),
                e
            ))
        })?;
        w.write_all(block.as_bytes())
            .map_err(|e| Error::persistence(format!("failed to write decision log: {}", e)))?;
        w.flush()
            .map_err(|e| Error::persistence(format!("failed to flush decision log: {}", e)))?;
        Ok(())
    }
}

/// 1 ブロック分のテキスト: ヘッダ行、3 つのラベル付きフィールド、
/// キャプション本文、フッタ区切り線、末尾の空行。
pub fn format_block(decision: &StrategyDecision, caption: &str, ts: &str) -> String {
    format!(
        "=== strategy decision {} ===\n\
         content type  : {}\n\
         posting time  : {}:00\n\
         avg engagement: {:.2}\n\
         caption:\n\
         {}\n\
         {}\n\
         \n",
        ts, decision.content_type, decision.posting_time, decision.score, caption, FOOTER
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::StdFileSystem;

    fn decision() -> StrategyDecision {
        StrategyDecision {
            content_type: "video".to_string(),
            score: 16.5,
            posting_time: 9,
        }
    }

    #[test]
    fn test_format_block_layout() {
        let block = format_block(&decision(), "Great caption #x", "2026-02-07T12:00:00Z");
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "=== strategy decision 2026-02-07T12:00:00Z ===");
        assert_eq!(lines[1], "content type  : video");
        assert_eq!(lines[2], "posting time  : 9:00");
        assert_eq!(lines[3], "avg engagement: 16.50");
        assert_eq!(lines[4], "caption:");
        assert_eq!(lines[5], "Great caption #x");
        assert_eq!(lines[6], FOOTER);
        assert!(block.ends_with("\n\n"));
    }

    #[test]
    fn test_two_records_are_recoverable_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("decisions.log");
        let rec = DecisionRecorder::new(Arc::new(StdFileSystem), &path);

        rec.record(&decision(), "first caption").unwrap();
        let second = StrategyDecision {
            content_type: "image".to_string(),
            score: 7.0,
            posting_time: 14,
        };
        rec.record(&second, "second caption").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let blocks: Vec<&str> = text
            .split(FOOTER)
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("content type  : video"));
        assert!(blocks[0].contains("first caption"));
        assert!(blocks[1].contains("content type  : image"));
        assert!(blocks[1].contains("second caption"));
    }
}
