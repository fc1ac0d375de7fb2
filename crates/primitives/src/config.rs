use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

#[derive(Clone)]
pub struct StripeInfo {
    pub secret_key: SecretString,
    pub webhook_secret: SecretString,
}

#[derive(Clone)]
pub struct AppConfig {
    pub app_url: String,
    pub stripe: StripeInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),
            stripe: StripeInfo {
                secret_key: required_secret("STRIPE_SECRET_KEY")?,
                webhook_secret: required_secret("STRIPE_WEBHOOK_SECRET")?,
            },
        })
    }
}

fn required_secret(key: &str) -> Result<SecretString, Report> {
    let value = env::var(key).map_err(|_| eyre!("{} must be set", key))?;
    Ok(SecretString::new(Box::from(value)))
}
