//! コマンドライン引数の解析

use crate::error::Error;
use clap::builder::ArgAction;
use std::path::PathBuf;

/// 解析済みのコマンドライン設定
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -d / --data: 入力データセットのパス（既定: data/posts.csv）
    pub data: Option<PathBuf>,
    /// --log-dir: 決定ログ・実行ログの出力先（既定: logs/）
    pub log_dir: Option<PathBuf>,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("postpilot")
        .about("Analyze historical post metrics and generate an optimized caption")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("data")
                .short('d')
                .long("data")
                .value_name("PATH")
                .help("Path to the posts dataset (default: data/posts.csv)"),
        )
        .arg(
            clap::Arg::new("log-dir")
                .long("log-dir")
                .value_name("DIR")
                .help("Directory for the decision log and run log (default: logs)"),
        )
}

pub fn parse_args() -> Result<Config, Error> {
    parse_from(std::env::args().collect())
}

pub fn parse_from(args: Vec<String>) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(Config {
        help: matches.get_flag("help"),
        data: matches.get_one::<String>("data").map(PathBuf::from),
        log_dir: matches.get_one::<String>("log-dir").map(PathBuf::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rest: &[&str]) -> Vec<String> {
        let mut v = vec!["postpilot".to_string()];
        v.extend(rest.iter().map(|s| s.to_string()));
        v
    }

    #[test]
    fn test_no_flags() {
        let c = parse_from(args(&[])).unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn test_data_and_log_dir() {
        let c = parse_from(args(&["-d", "other.csv", "--log-dir", "/tmp/logs"])).unwrap();
        assert_eq!(c.data.as_deref(), Some(std::path::Path::new("other.csv")));
        assert_eq!(c.log_dir.as_deref(), Some(std::path::Path::new("/tmp/logs")));
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_from(args(&["-h"])).unwrap().help);
        assert!(parse_from(args(&["--help"])).unwrap().help);
    }

    #[test]
    fn test_unknown_flag_is_invalid_argument() {
        let err = parse_from(args(&["--bogus"])).unwrap_err();
        assert!(err.is_usage());
    }
}
