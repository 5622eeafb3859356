//! 実行設定
//!
//! 環境変数の参照は起動時にここへ集約し、以降は AppConfig を参照で渡す。
//! .env の読み込みは利便のためのベストエフォート（契約ではない）。

use crate::cli;
use crate::error::Error;
use std::path::PathBuf;
use std::time::Duration;

/// キャプション生成 API の認証情報を読む環境変数名
pub const API_KEY_ENV: &str = "SCALEDOWN_API_KEY";
/// エンドポイント URL の上書き用環境変数名（主にテスト向け）
pub const ENDPOINT_ENV: &str = "POSTPILOT_ENDPOINT";

const DEFAULT_ENDPOINT: &str = "https://api.scaledown.xyz/compress/raw/";
const DEFAULT_DATA_PATH: &str = "data/posts.csv";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 起動時に一度だけ構築する実行設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub endpoint: String,
    pub data_path: PathBuf,
    pub log_dir: PathBuf,
    /// 外部 API 呼び出しのタイムアウト
    pub timeout: Duration,
}

impl AppConfig {
    /// 環境と CLI から構築する。認証情報の欠落は Configuration エラー
    /// （ネットワークアクセスより前にここで落ちる）。
    pub fn from_env(cli: &cli::Config) -> Result<Self, Error> {
        let _ = dotenvy::dotenv();
        let api_key = resolve_api_key(std::env::var(API_KEY_ENV).ok())?;
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self {
            api_key,
            endpoint,
            data_path: cli
                .data
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
            log_dir: cli
                .log_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// 認証情報を検証する。未設定・空文字は Configuration エラー。
pub fn resolve_api_key(value: Option<String>) -> Result<String, Error> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::configuration(format!(
            "{} not found (set it in the environment or a .env file)",
            API_KEY_ENV
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_present() {
        assert_eq!(resolve_api_key(Some("k".to_string())).unwrap(), "k");
    }

    #[test]
    fn test_resolve_api_key_missing_is_configuration_error() {
        let err = resolve_api_key(None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_resolve_api_key_blank_is_configuration_error() {
        assert!(resolve_api_key(Some("  ".to_string())).is_err());
    }
}
