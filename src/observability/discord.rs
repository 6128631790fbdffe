use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::json;
use url::Url;

/// Sends a plain-content message to a Discord webhook. Used for operator
/// alerts on business-critical failures that are never surfaced over HTTP.
pub async fn send_ops_alert(webhook_url: Url, content: String) -> Result<()> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(3))
        .build()?;

    let response = client
        .post(webhook_url)
        .json(&json!({ "content": truncate_for_discord(content) }))
        .send()
        .await
        .map_err(sanitize_reqwest_error)?;

    if response.status().is_success() {
        return Ok(());
    }

    Err(anyhow!(
        "discord webhook returned non-success status: {}",
        response.status()
    ))
}

fn sanitize_reqwest_error(error: reqwest::Error) -> anyhow::Error {
    if error.is_timeout() {
        return anyhow!("discord webhook request timed out");
    }
    if error.is_connect() {
        return anyhow!("discord webhook connection failed");
    }
    anyhow!("discord webhook request failed")
}

fn truncate_for_discord(mut content: String) -> String {
    const LIMIT: usize = 2000;
    const SUFFIX: &str = "\n… (truncated)";

    if content.chars().count() <= LIMIT {
        return content;
    }

    let allowed = LIMIT.saturating_sub(SUFFIX.chars().count());
    let truncated: String = content.chars().take(allowed).collect();
    content.clear();
    content.push_str(&truncated);
    content.push_str(SUFFIX);
    content
}

#[cfg(test)]
mod tests {
    use super::truncate_for_discord;

    #[test]
    fn short_content_is_untouched() {
        let content = "grant failed for order O-1".to_string();
        assert_eq!(truncate_for_discord(content.clone()), content);
    }

    #[test]
    fn long_content_is_truncated_to_discord_limit() {
        let content = "x".repeat(5000);
        let truncated = truncate_for_discord(content);
        assert!(truncated.chars().count() <= 2000);
        assert!(truncated.ends_with("… (truncated)"));
    }
}
