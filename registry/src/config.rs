use std::env;

#[derive(Clone)]
pub struct Config {
    /// Sender address stamped on welcome mail
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "registrar@leaf.example".to_string()),
        }
    }
}
