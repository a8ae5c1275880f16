use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5009;
const DEFAULT_DB_MIN_CONN: u32 = 1;
const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub cors_allowed_origin: Option<String>,
    pub otel_endpoint: Option<String>,
    pub static_dir: Option<PathBuf>,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url =
            var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations = match var("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        let db_min_conn = match var("DB_MIN_CONN") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MIN_CONN must be a valid u32 integer")?,
            None => DEFAULT_DB_MIN_CONN,
        };

        let db_max_conn = match var("DB_MAX_CONN") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            None => DEFAULT_DB_MAX_CONN,
        };

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        let flag = |key: &str| {
            var(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
        };

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN"),
            otel_endpoint: var("OTEL_ENDPOINT"),
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            dev_mode: flag("DEV_MODE"),
            enable_file_log: flag("ENABLE_FILE_LOG"),
        })
    }
}
