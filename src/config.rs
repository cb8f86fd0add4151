use anyhow::{bail, Result};

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram: TelegramConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. A token that is
    /// absent or blank is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = match lookup(TOKEN_VAR) {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => bail!("{} is not set", TOKEN_VAR),
        };

        Ok(Config {
            telegram: TelegramConfig { bot_token },
        })
    }

    /// Token safe for logs: keeps the bot id, hides the secret.
    pub fn masked_token(&self) -> String {
        match self.telegram.bot_token.split_once(':') {
            Some((bot_id, _)) => format!("{}:***", bot_id),
            None => "***".to_string(),
        }
    }
}
