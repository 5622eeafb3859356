//! 配線: 標準アダプタで App を組み立てる

use crate::app::App;
use crate::caption::CaptionClient;
use crate::config::AppConfig;
use crate::fs::{FileSystem, StdFileSystem};
use crate::recorder::DecisionRecorder;
use crate::runlog::{FileJsonLog, Log};
use std::sync::Arc;

pub fn wire_app(config: AppConfig) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let client = CaptionClient::new(&config);
    let recorder = DecisionRecorder::new(Arc::clone(&fs), config.log_dir.join("decisions.log"));
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        config.log_dir.join("run.jsonl"),
    ));
    App {
        config,
        fs,
        client,
        recorder,
        logger,
    }
}
