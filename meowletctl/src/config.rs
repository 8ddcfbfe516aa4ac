use std::fs::create_dir_all;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use toml::{Table, Value};

use meowlet::prelude::*;

use crate::cli::{Cli, Commands};

const DEFAULT_CURRENCY: &str = "EUR";
const DEFAULT_DB_FILENAME: &str = "db.meowlet";

#[derive(Debug)]
pub struct Config {
    pub dir: PathBuf,
    pub data_dir: PathBuf,
    cli: Cli,
    table: Table,
}

impl Config {
    pub fn try_parse() -> Result<Self> {
        Self::try_parse_from(std::env::args_os())
    }

    pub fn try_parse_from<I, T>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        use clap::Parser;

        let cli = Cli::try_parse_from(iter)?;

        let dir = match cli.config.clone() {
            Some(dir) => dir,
            None => config_home()?,
        };
        let table = match std::fs::read_to_string(dir.join("config.toml")) {
            Ok(content) => content.parse::<Table>()?,
            Err(_) => Table::new(),
        };

        let data_dir = match cli.data.clone() {
            Some(dir) => dir,
            None => match table.get("data_dir").and_then(Value::as_str) {
                Some(dir) => PathBuf::from(dir),
                None => data_home()?,
            },
        };

        if !data_dir.is_dir() {
            return Err(anyhow!(
                "Data directory is not a dir: {}",
                data_dir.display()
            ));
        }

        Ok(Config {
            dir,
            data_dir,
            cli,
            table,
        })
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.cli.verbose.log_level_filter()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.cli.user.as_deref().map(str::trim)
    }

    pub fn user(&self) -> Result<String> {
        if let Some(name) = self.user_name() {
            if name.is_empty() {
                anyhow::bail!("User name cannot be empty");
            }
            Ok(name.to_string())
        } else if let Some(name) = self.default_user()? {
            Ok(name)
        } else {
            anyhow::bail!("User not provided")
        }
    }

    pub fn default_user(&self) -> Result<Option<String>> {
        Ok(self
            .get("default_user")?
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }

    pub fn currency(&self) -> Currency {
        let code = self
            .table
            .get("currency")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CURRENCY);

        Currency::from_code(code).unwrap_or_else(|| {
            log::warn!("Unknown currency {code}, using {DEFAULT_CURRENCY}");
            Currency::EUR
        })
    }

    pub fn command(&self) -> Option<&Commands> {
        self.cli.command.as_ref()
    }

    pub fn database_path(&self) -> PathBuf {
        let db_filename = self
            .table
            .get("db")
            .and_then(Value::as_table)
            .and_then(|db| db.get("filename"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_DB_FILENAME);

        self.data_dir.join(db_filename)
    }

    pub fn database(&self) -> Result<Database> {
        let mut conn = Database::open(self.database_path())?;
        conn.setup()?;
        Ok(conn)
    }

    pub fn kvdir(&self) -> Result<PathBuf> {
        let dir = self.dir.join("key_value_store");

        if !dir.is_dir() {
            create_dir_all(&dir)?;
        }

        Ok(dir)
    }

    pub fn path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.kvdir()?.join(key))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key)?;

        match path.exists() {
            true => Ok(Some(std::fs::read_to_string(path)?)),
            false => Ok(None),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.path(key)?, value)?;
        Ok(())
    }

    pub fn reset(&self, key: &str) -> Result<()> {
        let path = self.path(key)?;

        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn config_home() -> Result<PathBuf> {
    match std::env::var("MEOWLET_CONFIG") {
        Ok(val) if !val.is_empty() => Ok(PathBuf::from(val)),
        _ => {
            let path = xdg::BaseDirectories::with_prefix("meowlet")?.get_config_home();
            if !path.exists() {
                create_dir_all(&path)?;
            }
            Ok(path)
        }
    }
}

fn data_home() -> Result<PathBuf> {
    match std::env::var("MEOWLET_DATA") {
        Ok(val) if !val.is_empty() => Ok(PathBuf::from(val)),
        _ => {
            let path = xdg::BaseDirectories::with_prefix("meowlet")?.get_data_home();
            if !path.exists() {
                create_dir_all(&path)?;
            }
            Ok(path)
        }
    }
}
