//! キャプション生成（外部テキスト生成 API）
//!
//! 1 回の同期 POST で `{prompt, max_tokens}` を送り、応答 JSON から
//! キャプション文字列を取り出す。応答の形はバックエンドにより揺れるため、
//! 名前付きプローブの順序付きリストで最初に当たったものを採用する。
//! どのプローブにも当たらない整形済み JSON はエラーにせずテンプレートに
//! フォールバックする。一方で非 2xx ステータスと JSON として読めない
//! ボディはエラーのまま伝播させる（リトライなし）。この非対称は意図的。

use crate::config::AppConfig;
use crate::error::Error;
use serde_json::{json, Value};
use std::time::Duration;

/// 生成の長さ上限（リクエストの max_tokens）
pub const MAX_TOKENS: u32 = 120;

/// キャプション生成 API のクライアント
pub struct CaptionClient {
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl CaptionClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout,
        }
    }

    /// 戦略決定からキャプションを 1 つ生成する。
    /// 返り値は常に非空（プローブ結果かフォールバック）。
    pub fn generate(&self, content_type: &str, posting_time: u32) -> Result<String, Error> {
        let prompt = build_prompt(content_type, posting_time);
        let payload = json!({ "prompt": prompt, "max_tokens": MAX_TOKENS });
        let body = self.make_http_request(&payload)?;
        parse_body(&body, content_type, posting_time)
    }

    fn make_http_request(&self, payload: &Value) -> Result<String, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::remote_service(format!("failed to build HTTP client: {}", e)))?;

        let response = client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .map_err(|e| Error::remote_service(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::remote_service(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::remote_service(format!(
                "caption endpoint returned HTTP {}: {}",
                status, response_text
            )));
        }

        Ok(response_text)
    }
}

/// 応答ボディからキャプションを取り出す。
/// JSON として読めないボディは RemoteService エラー、整形済みだが
/// どのプローブにも当たらない形はフォールバック（エラーにしない）。
pub fn parse_body(body: &str, content_type: &str, posting_time: u32) -> Result<String, Error> {
    let v: Value = serde_json::from_str(body)
        .map_err(|e| Error::remote_service(format!("failed to parse response JSON: {}", e)))?;
    Ok(extract_caption(&v).unwrap_or_else(|| fallback_caption(content_type, posting_time)))
}

/// 戦略の洞察を埋め込んだプロンプトを組み立てる
pub fn build_prompt(content_type: &str, posting_time: u32) -> String {
    format!(
        "You are a professional social media manager.\n\
         \n\
         Insights:\n\
         - Best content type: {}\n\
         - Best posting time: {}:00 hrs\n\
         \n\
         Generate ONE short, engaging social media caption with hashtags.",
        content_type, posting_time
    )
}

type Probe = fn(&Value) -> Option<String>;

/// 応答形プローブ（順序が契約。最初に当たったものを採用する）
const PROBES: &[Probe] = &[
    probe_compressed_text,
    probe_output,
    probe_data_text,
    probe_chat_completion,
];

/// 既知の応答形を順に当てる。空文字列はヒット扱いにしない。
pub fn extract_caption(v: &Value) -> Option<String> {
    PROBES
        .iter()
        .find_map(|probe| probe(v))
        .filter(|s| !s.trim().is_empty())
}

fn probe_compressed_text(v: &Value) -> Option<String> {
    v.get("compressed_text")?.as_str().map(str::to_string)
}

fn probe_output(v: &Value) -> Option<String> {
    v.get("output")?.as_str().map(str::to_string)
}

fn probe_data_text(v: &Value) -> Option<String> {
    v.get("data")?.get("text")?.as_str().map(str::to_string)
}

fn probe_chat_completion(v: &Value) -> Option<String> {
    v["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
}

/// 決定的なフォールバックキャプション
pub fn fallback_caption(content_type: &str, posting_time: u32) -> String {
    format!(
        "🔥 {} content performs best! Post around {}:00 to maximize engagement. \
         #SocialMedia #AI #Growth",
        content_type, posting_time
    )
}
