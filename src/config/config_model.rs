use url::Url;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub admin_auth: AdminAuth,
    pub discord: Discord,
    pub payments: Payments,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub jwt_secret: String,
    pub token_ttl_seconds: u64,
    pub seed_username: String,
    pub seed_password: String,
}

#[derive(Debug, Clone)]
pub struct Discord {
    pub bot_token: String,
    pub guild_id: String,
    pub ops_webhook_url: Option<Url>,
}

#[derive(Debug, Clone)]
pub struct Payments {
    pub ipn_secret: String,
}
