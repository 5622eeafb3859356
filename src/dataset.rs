//! データセット読み込み（カンマ区切りの表形式ファイル）
//!
//! 読み込み時にはスキーマ検証をしない。カラムの解決は使用箇所で行い、
//! 欠落はそこで MissingColumn になる。セルは単純な数値・ラベルを想定し、
//! クォート付きフィールドは契約外。

use crate::domain::PostMetrics;
use crate::error::Error;
use crate::fs::FileSystem;
use std::path::Path;

/// ヘッダ付きの行列（セルは未解釈の文字列のまま保持する）
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// ファイルから読み込む。パスが存在しない・ヘッダ行がない場合は DataLoad。
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, Error> {
        let text = fs.read_to_string(path).map_err(|e| {
            Error::data_load(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::parse(&text).map_err(|e| match e {
            Error::DataLoad(msg) => Error::data_load(format!("'{}': {}", path.display(), msg)),
            other => other,
        })
    }

    /// テキストからパースする。最初の非空行をヘッダとして扱う。
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());
        let header_line = lines
            .next()
            .ok_or_else(|| Error::data_load("no header row".to_string()))?;
        let headers = split_row(header_line);
        let rows = lines.map(split_row).collect();
        Ok(Self { headers, rows })
    }

    /// カラム名をインデックスに解決する（使用箇所で呼ぶ）
    pub fn column(&self, name: &str) -> Result<usize, Error> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::missing_column(format!("'{}' not found in header", name)))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 型付きの投稿メトリクスに具体化する。
    /// カラム欠落は MissingColumn、数値として読めないセルは行番号付きの DataLoad。
    pub fn posts(&self) -> Result<Vec<PostMetrics>, Error> {
        let type_col = self.column("content_type")?;
        let time_col = self.column("posted_time")?;
        let likes_col = self.column("likes")?;
        let comments_col = self.column("comments")?;
        let shares_col = self.column("shares")?;

        let mut posts = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            // 行番号はヘッダを 1 行目とした実ファイル上の位置
            let line_no = i + 2;
            let content_type = cell(row, type_col, "content_type", line_no)?.to_string();
            let posted_time = parse_hour(cell(row, time_col, "posted_time", line_no)?)
                .ok_or_else(|| {
                    Error::data_load(format!("row {}: invalid posted_time", line_no))
                })?;
            let likes = parse_count(cell(row, likes_col, "likes", line_no)?).ok_or_else(|| {
                Error::data_load(format!("row {}: invalid likes", line_no))
            })?;
            let comments = parse_count(cell(row, comments_col, "comments", line_no)?)
                .ok_or_else(|| Error::data_load(format!("row {}: invalid comments", line_no)))?;
            let shares = parse_count(cell(row, shares_col, "shares", line_no)?).ok_or_else(
                || Error::data_load(format!("row {}: invalid shares", line_no)),
            )?;
            posts.push(PostMetrics {
                content_type,
                posted_time,
                likes,
                comments,
                shares,
            });
        }
        Ok(posts)
    }
}

fn cell<'a>(row: &'a [String], col: usize, name: &str, line_no: usize) -> Result<&'a str, Error> {
    row.get(col)
        .map(String::as_str)
        .ok_or_else(|| Error::data_load(format!("row {}: '{}' cell is missing", line_no, name)))
}

fn split_row(line: &str) -> Vec<String> {
    line.split(',').map(|c| c.trim().to_string()).collect()
}

/// 時刻セルをパースする。"9" / "09" / "9:00" をいずれも 9 として受ける。
fn parse_hour(s: &str) -> Option<u32> {
    let head = s.split(':').next()?;
    let hour: u32 = head.trim().parse().ok()?;
    if hour < 24 {
        Some(hour)
    } else {
        None
    }
}

/// 非負の数値セルをパースする
fn parse_count(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    if v.is_finite() && v >= 0.0 {
        Some(v)
    } else {
        None
    }
}
