//! Resolved runtime settings.
//!
//! Config file values win; environment variables fill in whatever the file
//! leaves unset; built-in defaults cover the rest.

use std::{env, time::Duration};

use lantern_types::{
    ContentCategory, ContentPoolError, ContentPools, PanelTable, PanelTableError, ui::UiOptions,
};
use thiserror::Error;

use crate::config::{AppConfig, LanternConfig};
use crate::content::default_pools;
use crate::input::LinkClickPolicy;
use crate::variants::{DEFAULT_CONTINUE_HINT_DELAY, DEFAULT_SECONDARY_DELAY, Variant};

pub const DEFAULT_CREDIT: &str = "Developed by MituFun";
pub const DEFAULT_CONTINUE_HINT: &str = "点击屏幕继续";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid panel table: {0}")]
    Panels(#[from] PanelTableError),
    #[error("invalid content pools: {0}")]
    Content(#[from] ContentPoolError),
}

/// Raw environment overrides (`LANTERN_VARIANT`, `LANTERN_SEED`).
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub variant: Option<String>,
    pub seed: Option<String>,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            variant: env::var("LANTERN_VARIANT").ok(),
            seed: env::var("LANTERN_SEED").ok(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Option<Variant> {
        let raw = self.variant.as_deref()?;
        let parsed = Variant::parse(raw);
        if parsed.is_none() {
            tracing::warn!("Unknown LANTERN_VARIANT: {}", raw);
        }
        parsed
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        let raw = self.seed.as_deref()?;
        match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(err) => {
                tracing::warn!("Ignoring LANTERN_SEED={}: {}", raw, err);
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub variant: Variant,
    pub table: PanelTable,
    pub pools: ContentPools,
    pub ui: UiOptions,
    pub link_clicks: LinkClickPolicy,
    pub credit: String,
    pub continue_hint: String,
    pub seed: Option<u64>,
}

impl Settings {
    /// Built-in defaults for `variant`.
    pub fn defaults(variant: Variant) -> Result<Self, SettingsError> {
        Ok(Self {
            variant,
            table: variant.table()?,
            pools: default_pools()?,
            ui: UiOptions::default(),
            link_clicks: LinkClickPolicy::default(),
            credit: DEFAULT_CREDIT.to_string(),
            continue_hint: DEFAULT_CONTINUE_HINT.to_string(),
            seed: None,
        })
    }

    pub fn resolve(
        config: Option<&LanternConfig>,
        overrides: &EnvOverrides,
    ) -> Result<Self, SettingsError> {
        let default_app = AppConfig::default();
        let app = config.and_then(|c| c.app.as_ref()).unwrap_or(&default_app);

        let variant = app
            .variant
            .as_deref()
            .and_then(|raw| {
                let parsed = Variant::parse(raw);
                if parsed.is_none() {
                    tracing::warn!("Unknown variant in config: {}", raw);
                }
                parsed
            })
            .or_else(|| overrides.variant())
            .unwrap_or_default();

        let mut settings = Self::defaults(variant)?;

        if let Some(timing) = config.and_then(|c| c.timing.as_ref()) {
            let secondary = timing
                .secondary_delay_ms
                .map_or(DEFAULT_SECONDARY_DELAY, Duration::from_millis);
            let continue_hint = timing
                .continue_hint_delay_ms
                .map_or(DEFAULT_CONTINUE_HINT_DELAY, Duration::from_millis);
            settings.table = settings.table.with_delays(secondary, continue_hint);
        }

        if let Some(content) = config.and_then(|c| c.content.as_ref()) {
            for (category, entries) in [
                (ContentCategory::Greeting, &content.greetings),
                (ContentCategory::Farewell, &content.farewells),
                (ContentCategory::Study, &content.studies),
                (ContentCategory::Tool, &content.tools),
            ] {
                if let Some(entries) = entries {
                    settings.pools = settings.pools.with_pool(category, entries.clone())?;
                }
            }
        }

        settings.ui = UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
            snow: app.snow,
        };
        settings.link_clicks = app.link_clicks;
        if let Some(credit) = &app.credit {
            settings.credit.clone_from(credit);
        }
        if let Some(hint) = &app.continue_hint {
            settings.continue_hint.clone_from(hint);
        }
        settings.seed = app.seed.or_else(|| overrides.seed());

        Ok(settings)
    }
}
