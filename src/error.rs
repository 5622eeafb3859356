//! エラーハンドリング
//!
//! 実行全体で使うエラー型。終了コードは sysexits に揃える
//! （64 usage / 65 dataerr / 66 noinput / 69 unavailable / 74 ioerr / 78 config）。

/// 実行エラー（ドメイン層）
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// 入力ファイルが読めない・表形式としてパースできない
    #[error("Data load error: {0}")]
    DataLoad(String),
    /// 必要なカラムが存在しない（使用箇所で検出する。事前検証はしない）
    #[error("Missing column: {0}")]
    MissingColumn(String),
    /// データセットが空、または group-by の結果が空
    #[error("No data: {0}")]
    NoData(String),
    /// 認証情報など設定の欠落
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// 外部 API のトランスポート失敗・非 2xx ステータス
    #[error("Remote service error: {0}")]
    RemoteService(String),
    /// 決定ログ・実行ログの書き込み失敗
    #[error("Persistence error: {0}")]
    Persistence(String),
    /// コマンドライン引数の不正
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn data_load(msg: impl Into<String>) -> Self {
        Self::DataLoad(msg.into())
    }

    pub fn missing_column(msg: impl Into<String>) -> Self {
        Self::MissingColumn(msg.into())
    }

    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoData(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn remote_service(msg: impl Into<String>) -> Self {
        Self::RemoteService(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// プロセス終了コード（sysexits 準拠）
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::MissingColumn(_) | Self::NoData(_) => 65,
            Self::DataLoad(_) => 66,
            Self::RemoteService(_) => 69,
            Self::Persistence(_) => 74,
            Self::Configuration(_) => 78,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::missing_column("likes").exit_code(), 65);
        assert_eq!(Error::no_data("empty").exit_code(), 65);
        assert_eq!(Error::data_load("x").exit_code(), 66);
        assert_eq!(Error::remote_service("x").exit_code(), 69);
        assert_eq!(Error::persistence("x").exit_code(), 74);
        assert_eq!(Error::configuration("x").exit_code(), 78);
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::invalid_argument("bad flag").is_usage());
        assert!(!Error::no_data("empty").is_usage());
    }

    #[test]
    fn test_display_includes_message() {
        let e = Error::missing_column("'likes' not found");
        assert_eq!(e.to_string(), "Missing column: 'likes' not found");
    }
}
