use anyhow::{Ok, Result};
use tracing::warn;
use url::Url;

use super::config_model::{AdminAuth, Database, Discord, DotEnvyConfig, Payments, Server};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let admin_auth = AdminAuth {
        jwt_secret: std::env::var("JWT_ADMIN_SECRET").expect("JWT_ADMIN_SECRET is invalid"),
        token_ttl_seconds: std::env::var("JWT_ADMIN_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()?,
        seed_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
        seed_password: std::env::var("ADMIN_INITIAL_PASSWORD")
            .expect("ADMIN_INITIAL_PASSWORD is invalid"),
    };

    let discord = Discord {
        bot_token: std::env::var("DISCORD_BOT_TOKEN").expect("DISCORD_BOT_TOKEN is invalid"),
        guild_id: std::env::var("DISCORD_GUILD_ID").expect("DISCORD_GUILD_ID is invalid"),
        ops_webhook_url: ops_webhook_url_from_env(),
    };

    let payments = Payments {
        ipn_secret: std::env::var("NOWPAYMENTS_IPN_SECRET")
            .expect("NOWPAYMENTS_IPN_SECRET is invalid"),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        admin_auth,
        discord,
        payments,
    })
}

pub fn get_admin_secret() -> Result<String> {
    dotenvy::dotenv().ok();

    Ok(std::env::var("JWT_ADMIN_SECRET").expect("JWT_ADMIN_SECRET is invalid"))
}

fn ops_webhook_url_from_env() -> Option<Url> {
    let raw = std::env::var("DISCORD_OPS_WEBHOOK_URL").ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Url::parse(trimmed)
        .inspect_err(
            |err| warn!(error = %err, "DISCORD_OPS_WEBHOOK_URL is invalid, ops alerts disabled"),
        )
        .ok()
}
