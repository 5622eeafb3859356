//! ファイルシステム Outbound ポート
//!
//! データセット読み込み・決定ログ・実行ログはこの trait 経由でのみ I/O を行う。
//! エラーは io::Error のまま返し、ドメインのエラー型への変換は呼び出し側で行う
//! （読み込み失敗は DataLoad、書き込み失敗は Persistence）。

use std::io;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    /// ディレクトリを作成する（既に存在すれば何もしない）
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>>;
}

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn open_append(&self, path: &Path) -> io::Result<Box<dyn io::Write + Send>> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Box::new(f))
    }
}
