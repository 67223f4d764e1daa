use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::autoplay::DEFAULT_INTERVAL;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "tamagon";

/// Smallest autoplay interval accepted from the user, in milliseconds.
/// Anything shorter would fire inside the transition window.
pub const MIN_AUTOPLAY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// 1-indexed slide shown at launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,

    /// Auto-advance interval; absent means autoplay is off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_trail: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt: Option<bool>,
}

/// Effect switches with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    pub particles: bool,
    pub cursor_trail: bool,
    pub parallax: bool,
    pub tilt: bool,
}

impl Default for Effects {
    fn default() -> Self {
        Self {
            particles: true,
            cursor_trail: true,
            parallax: true,
            tilt: true,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `tamagon config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config =
            serde_yaml::from_str(contents).context("Config file is not valid YAML")?;
        Ok(config)
    }

    /// Load the config at `path`, or defaults when none exists yet. A file
    /// that cannot be read or parsed is an error.
    pub fn load_from_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .with_context(|| format!("Invalid config {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!("Failed to read {}: {e}", path.display())),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Tamagon configuration\n{yaml}");
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn effects(&self) -> Effects {
        let base = Effects::default();
        let Some(e) = &self.effects else {
            return base;
        };
        Effects {
            particles: e.particles.unwrap_or(base.particles),
            cursor_trail: e.cursor_trail.unwrap_or(base.cursor_trail),
            parallax: e.parallax.unwrap_or(base.parallax),
            tilt: e.tilt.unwrap_or(base.tilt),
        }
    }

    pub fn start_slide(&self) -> Option<usize> {
        self.defaults.as_ref().and_then(|d| d.start_slide)
    }

    pub fn windowed(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.windowed)
            .unwrap_or(false)
    }

    pub fn autoplay_ms(&self) -> Option<u64> {
        self.defaults.as_ref().and_then(|d| d.autoplay_ms)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.start_slide" => {
                let slide = parse_slide_number(value)?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(slide);
            }
            "defaults.windowed" => {
                let windowed = parse_bool(key, value)?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .windowed = Some(windowed);
            }
            "defaults.autoplay_ms" => {
                let autoplay = match value {
                    "off" | "none" => None,
                    "on" => Some(DEFAULT_INTERVAL.as_millis() as u64),
                    _ => Some(parse_autoplay_ms(value)?),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .autoplay_ms = autoplay;
            }
            "effects.particles" | "effects.cursor_trail" | "effects.parallax" | "effects.tilt" => {
                let enabled = parse_bool(key, value)?;
                let effects = self.effects.get_or_insert_with(EffectsConfig::default);
                let slot = match key {
                    "effects.particles" => &mut effects.particles,
                    "effects.cursor_trail" => &mut effects.cursor_trail,
                    "effects.parallax" => &mut effects.parallax,
                    _ => &mut effects.tilt,
                };
                *slot = Some(enabled);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.start_slide, defaults.windowed, \
                 defaults.autoplay_ms, effects.particles, effects.cursor_trail, effects.parallax, \
                 effects.tilt"
            ),
        }
        Ok(())
    }
}

pub fn parse_slide_number(value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => anyhow::bail!("Invalid start slide: {value}. Must be a slide number starting at 1."),
    }
}

pub fn parse_autoplay_ms(value: &str) -> Result<u64> {
    match value.parse::<u64>() {
        Ok(ms) if ms >= MIN_AUTOPLAY_MS => Ok(ms),
        _ => anyhow::bail!(
            "Invalid autoplay interval: {value}. Must be 'off' or at least {MIN_AUTOPLAY_MS} ms."
        ),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => anyhow::bail!("Invalid value for {key}: {value}. Must be 'true' or 'false'."),
    }
}
