use std::path::Path;

use anyhow::Result;
use chefmenu_core::IdStrategy;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    pub app: AppSettings,
    pub menu: MenuSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppSettings {
    pub name: String,
    pub currency: String, // prefix for every displayed price
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MenuSettings {
    pub seed_demo_items: bool,
    pub id_strategy: String, // "sequential" | "uuid"
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingSettings {
    pub directory: String,
    pub file_prefix: String,
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Chef's Menu".to_string(),
                currency: "R".to_string(),
            },
            menu: MenuSettings {
                seed_demo_items: true,
                id_strategy: IdStrategy::default().as_str().to_string(),
            },
            logging: LoggingSettings {
                directory: "logs".to_string(),
                file_prefix: "chefmenu".to_string(),
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// Defaults, then the config file, then `CHEFMENU__SECTION__KEY` variables.
    ///
    /// An explicit `path` must exist; the default `config/chefmenu` file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("app.name", defaults.app.name)?
            .set_default("app.currency", defaults.app.currency)?
            .set_default("menu.seed_demo_items", defaults.menu.seed_demo_items)?
            .set_default("menu.id_strategy", defaults.menu.id_strategy)?
            .set_default("logging.directory", defaults.logging.directory)?
            .set_default("logging.file_prefix", defaults.logging.file_prefix)?
            .set_default("logging.level", defaults.logging.level)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("config/chefmenu").required(false)),
        };

        let config = builder
            // Example: CHEFMENU__APP__CURRENCY=USD
            .add_source(
                Environment::with_prefix("CHEFMENU")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if IdStrategy::from_str(&self.menu.id_strategy).is_none() {
            anyhow::bail!(
                "Unknown id strategy '{}' (expected 'sequential' or 'uuid')",
                self.menu.id_strategy
            );
        }

        if self.app.currency.trim().is_empty() {
            anyhow::bail!("Currency symbol must not be empty");
        }

        Ok(())
    }

    pub fn id_strategy(&self) -> IdStrategy {
        IdStrategy::from_str(&self.menu.id_strategy).unwrap_or_default()
    }
}
