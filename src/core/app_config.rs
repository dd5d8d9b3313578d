// Application Configuration
// Defaults compiled from config.yaml at build time; a runtime YAML file may override any subset

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::animation::Animation;
use super::resolver::ResolverConfig;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Full application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub application: ApplicationSettings,
    pub animation: AnimationSettings,
    pub scroll: ScrollSettings,
    pub tab_strip: TabStripSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    /// Title shown in the top bar
    pub title: String,

    pub status_bar: StatusBarSettings,

    /// Key hints shown in the status bar
    pub bindings: Vec<BindingSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusBarSettings {
    pub default_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BindingSettings {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Length of every tab, indicator and scroll animation
    pub duration_ms: u64,

    /// Event poll timeout; one frame per interval while idle
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    pub activation_threshold: f32,
    pub section_height_fraction: f32,

    /// Rows per arrow key / wheel notch
    pub line_step: u16,

    /// Rows per PgUp / PgDn
    pub page_step: u16,

    /// Rows the content may be pulled past its top
    pub max_overscroll: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TabStripSettings {
    /// Columns on each side of a tab label
    pub padding: u16,

    /// Columns between tabs
    pub spacing: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file; logging is off when unset
    pub file: Option<PathBuf>,

    /// Default filter directive, overridden by RUST_LOG
    pub level: String,
}

impl AnimationSettings {
    pub fn animation(&self) -> Animation {
        Animation::ease_in_out(Duration::from_millis(self.duration_ms))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl ScrollSettings {
    pub fn resolver(&self) -> ResolverConfig {
        ResolverConfig {
            activation_threshold: self.activation_threshold,
            height_fraction: self.section_height_fraction,
        }
    }
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            title: compiled::TITLE.to_string(),
            status_bar: StatusBarSettings::default(),
            bindings: compiled::BINDINGS
                .iter()
                .map(|(key, description)| BindingSettings {
                    key: key.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        }
    }
}

impl Default for StatusBarSettings {
    fn default() -> Self {
        Self {
            default_text: compiled::STATUS_TEXT.to_string(),
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: compiled::ANIMATION_DURATION_MS,
            frame_interval_ms: compiled::FRAME_INTERVAL_MS,
        }
    }
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            activation_threshold: compiled::ACTIVATION_THRESHOLD,
            section_height_fraction: compiled::SECTION_HEIGHT_FRACTION,
            line_step: compiled::LINE_STEP,
            page_step: compiled::PAGE_STEP,
            max_overscroll: compiled::MAX_OVERSCROLL,
        }
    }
}

impl Default for TabStripSettings {
    fn default() -> Self {
        Self {
            padding: compiled::TAB_PADDING,
            spacing: compiled::TAB_SPACING,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: compiled::LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_compiled_defaults() {
        let config: AppConfig = serde_yaml::from_str("scroll:\n  page_step: 4\n").unwrap();

        assert_eq!(config.scroll.page_step, 4);
        assert_eq!(config.scroll.line_step, compiled::LINE_STEP);
        assert_eq!(config.animation.duration_ms, compiled::ANIMATION_DURATION_MS);
        assert_eq!(config.application.title, compiled::TITLE);
    }

    #[test]
    fn test_animation_settings_produce_ease_in_out() {
        let settings = AnimationSettings {
            duration_ms: 300,
            frame_interval_ms: 16,
        };
        assert_eq!(settings.animation(), Animation::ease_in_out(Duration::from_millis(300)));
        assert_eq!(settings.frame_interval(), Duration::from_millis(16));
    }
}
