use anyhow::Result;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::error;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Minimal Discord REST client built on reqwest. Only the member-role
/// endpoint is used; the bot must hold Manage Roles in the guild.
pub struct DiscordRoleClient {
    http: reqwest::Client,
    bot_token: String,
    guild_id: String,
}

#[derive(Debug, Deserialize)]
struct DiscordErrorEnvelope {
    code: Option<i64>,
    message: Option<String>,
}

impl DiscordRoleClient {
    pub fn new(bot_token: String, guild_id: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            bot_token,
            guild_id,
        })
    }

    /// Adds the role to the guild member. Idempotent on the Discord side:
    /// re-adding an already-held role succeeds.
    pub async fn add_member_role(&self, discord_user_id: &str, role_id: &str) -> Result<()> {
        let url = format!(
            "{}/guilds/{}/members/{}/roles/{}",
            DISCORD_API_BASE, self.guild_id, discord_user_id, role_id
        );

        let resp = self
            .http
            .put(url)
            .header(AUTHORIZATION, format!("Bot {}", self.bot_token))
            .json(&serde_json::json!({}))
            .send()
            .await?;

        Self::ensure_success(resp, "add member role").await
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<()> {
        if resp.status().is_success() {
            return Ok(());
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (discord_error_code, discord_error_message) =
            match serde_json::from_str::<DiscordErrorEnvelope>(&body) {
                Ok(envelope) => (envelope.code, envelope.message),
                Err(_) => (None, None),
            };

        error!(
            status = %status,
            discord_error_code = ?discord_error_code,
            discord_error_message = ?discord_error_message,
            response_body = %body,
            context = %context,
            "discord api request failed"
        );

        anyhow::bail!("Discord API request failed: {} (status {})", context, status);
    }
}
