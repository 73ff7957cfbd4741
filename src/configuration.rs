use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Everything the workflow needs, assembled once at startup and passed down
/// explicitly. Nothing reads the process environment after `get_config`.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub db: DatabaseSettings,
    pub smtp: SmtpSettings,
    pub from: SenderSettings,
    pub api: ApiSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub host: String,
    pub user: String,
    // No default: startup fails fast when DB_PASSWORD is absent rather than
    // shipping a placeholder credential.
    pub password: Secret<String>,
    pub database: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub user: Option<String>,
    pub pass: Option<Secret<String>>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SenderSettings {
    pub email: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub url: String,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(self.password.expose_secret())
            .ssl_mode(PgSslMode::Prefer)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database)
    }
}

/// Read settings from the environment: DB_HOST, DB_USER, DB_PASSWORD,
/// DB_DATABASE, SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS, FROM_EMAIL and
/// API_URL. Everything except DB_PASSWORD has a default; SMTP credentials are
/// optional.
pub fn get_config() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("db.host", "localhost")?
        .set_default("db.user", "app")?
        .set_default("db.database", "app")?
        .set_default("smtp.host", "localhost")?
        .set_default("smtp.port", "465")?
        .set_default("from.email", "no-reply@example.com")?
        .set_default("api.url", "https://api.example.com/value")?
        .add_source(config::Environment::default().separator("_"))
        .build()?;

    settings.try_deserialize::<Settings>()
}
