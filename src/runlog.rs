//! 構造化実行ログ（JSONL）
//!
//! ランナーのライフサイクルをファイルに追記する。コンソール出力（レポート・
//! stderr のエラー表示）とは別チャネルで、ファイルにのみ書き出す。
//! ログ失敗で実行を落とさないため、呼び出し側は `let _ =` で捨ててよい。

use crate::error::Error;
use crate::fs::FileSystem;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 現在時刻を ISO8601 (RFC3339) で返す。LogRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Info,
}

/// 1 行分のログレコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: LogLevel,
    pub message: String,
    /// 例: lifecycle, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, serde_json::Value>>,
}

/// 構造化ログの Outbound ポート
pub trait Log: Send + Sync {
    fn log(&self, record: &LogRecord) -> Result<(), Error>;
}

/// ファイルへ JSONL を追記する Log 実装。
/// 親ディレクトリが無ければ書き込み時に作成する。
pub struct FileJsonLog {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileJsonLog {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| Error::persistence(e.to_string()))?;
        }
        let line = serde_json::to_string(record).map_err(|e| Error::persistence(e.to_string()))?;
        let mut w = self
            .fs
            .open_append(&self.path)
            .map_err(|e| Error::persistence(e.to_string()))?;
        use std::io::Write;
        w.write_all(line.as_bytes())
            .map_err(|e| Error::persistence(e.to_string()))?;
        w.write_all(b"\n")
            .map_err(|e| Error::persistence(e.to_string()))?;
        w.flush().map_err(|e| Error::persistence(e.to_string()))?;
        Ok(())
    }
}

/// 何も出力しない Log 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::StdFileSystem;

    #[test]
    fn test_log_record_serialize() {
        let rec = LogRecord {
            ts: "2026-02-07T12:00:00Z".to_string(),
            level: LogLevel::Info,
            message: "run started".to_string(),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("data".to_string(), serde_json::json!("data/posts.csv"));
                Some(m)
            },
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"ts\":\"2026-02-07T12:00:00Z\""));
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"message\":\"run started\""));
        assert!(json.contains("\"kind\":\"lifecycle\""));
        assert!(json.contains("\"data\""));
    }

    #[test]
    fn test_file_json_log_appends_lines_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("run.jsonl");
        let log = FileJsonLog::new(Arc::new(StdFileSystem), &path);
        for msg in ["first", "second"] {
            log.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Info,
                message: msg.to_string(),
                kind: None,
                fields: None,
            })
            .unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["message"], "first");
    }

    #[test]
    fn test_noop_log() {
        let rec = LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "x".to_string(),
            kind: None,
            fields: None,
        };
        assert!(NoopLog.log(&rec).is_ok());
    }
}
