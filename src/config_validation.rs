// Configuration validation module

use std::path::PathBuf;

use crate::config::{load_config, resolve_config_path, ConfigError};
use sticky_tabs::AppConfig;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Load the config file if one is found and check its values.
/// With no file the compiled defaults are returned.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let Some(path) = resolve_config_path(config_path) else {
        return Ok(AppConfig::default());
    };

    let config = load_config(&path)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.animation.duration_ms == 0 {
        return Err(invalid("animation.duration_ms", "must be greater than 0"));
    }
    if config.animation.frame_interval_ms == 0 {
        return Err(invalid("animation.frame_interval_ms", "must be greater than 0"));
    }

    let threshold = config.scroll.activation_threshold;
    if !threshold.is_finite() {
        return Err(invalid("scroll.activation_threshold", "must be a finite number"));
    }

    let fraction = config.scroll.section_height_fraction;
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(invalid(
            "scroll.section_height_fraction",
            &format!("{} is outside (0, 1]", fraction),
        ));
    }

    if config.scroll.line_step == 0 {
        return Err(invalid("scroll.line_step", "must be at least 1"));
    }
    if config.scroll.page_step == 0 {
        return Err(invalid("scroll.page_step", "must be at least 1"));
    }

    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(invalid(
            "logging.level",
            &format!("'{}' is not one of {}", config.logging.level, LOG_LEVELS.join(", ")),
        ));
    }

    Ok(())
}

fn invalid(key: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}
