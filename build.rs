// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const TITLE: &str = {title:?};
pub const STATUS_TEXT: &str = {status_text:?};

pub const BINDINGS: &[(&str, &str)] = &[
{bindings}
];

pub const ANIMATION_DURATION_MS: u64 = {duration_ms};
pub const FRAME_INTERVAL_MS: u64 = {frame_interval_ms};

pub const ACTIVATION_THRESHOLD: f32 = {activation_threshold:?};
pub const SECTION_HEIGHT_FRACTION: f32 = {section_height_fraction:?};
pub const LINE_STEP: u16 = {line_step};
pub const PAGE_STEP: u16 = {page_step};
pub const MAX_OVERSCROLL: u16 = {max_overscroll};

pub const TAB_PADDING: u16 = {tab_padding};
pub const TAB_SPACING: u16 = {tab_spacing};

pub const LOG_LEVEL: &str = {log_level:?};
"#,
        title = config.title,
        status_text = config.status_text,
        bindings = config.bindings
            .iter()
            .map(|(key, description)| format!("    ({:?}, {:?}),", key, description))
            .collect::<Vec<_>>()
            .join("\n"),
        duration_ms = config.duration_ms,
        frame_interval_ms = config.frame_interval_ms,
        activation_threshold = config.activation_threshold,
        section_height_fraction = config.section_height_fraction,
        line_step = config.line_step,
        page_step = config.page_step,
        max_overscroll = config.max_overscroll,
        tab_padding = config.tab_padding,
        tab_spacing = config.tab_spacing,
        log_level = config.log_level,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    title: String,
    status_text: String,
    bindings: Vec<(String, String)>,
    duration_ms: u64,
    frame_interval_ms: u64,
    activation_threshold: f32,
    section_height_fraction: f32,
    line_step: u16,
    page_step: u16,
    max_overscroll: u16,
    tab_padding: u16,
    tab_spacing: u16,
    log_level: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            title: "Product Catalog".to_string(),
            status_text: "Scroll the list or pick a tab".to_string(),
            bindings: vec![
                ("←/→".to_string(), "Tab".to_string()),
                ("↑/↓".to_string(), "Scroll".to_string()),
                ("q".to_string(), "Quit".to_string()),
            ],
            duration_ms: 300,
            frame_interval_ms: 16,
            activation_threshold: 2.0,
            section_height_fraction: 0.5,
            line_step: 1,
            page_step: 10,
            max_overscroll: 3,
            tab_padding: 2,
            tab_spacing: 1,
            log_level: "info".to_string(),
        }
    }
}

#[derive(PartialEq)]
enum Section {
    None,
    Application,
    Bindings,
    Animation,
    Scroll,
    TabStrip,
    Logging,
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();
    let defaults = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::None;
    let mut pending_key: Option<String> = None;

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Top-level keys switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') {
            section = match trimmed.trim_end_matches(':') {
                "application" => Section::Application,
                "animation" => Section::Animation,
                "scroll" => Section::Scroll,
                "tab_strip" => Section::TabStrip,
                "logging" => Section::Logging,
                _ => Section::None,
            };
            continue;
        }

        if section == Section::Application && trimmed.starts_with("bindings:") {
            section = Section::Bindings;
            config.bindings.clear(); // Start fresh when we see the list
            continue;
        }

        // Binding list items: "- key: ..." followed by "description: ..."
        if section == Section::Bindings {
            let item = trimmed.strip_prefix("- ").unwrap_or(trimmed);
            if let Some((key, value)) = parse_kv(item) {
                match key {
                    "key" => pending_key = Some(unquote(value)),
                    "description" => {
                        if let Some(binding_key) = pending_key.take() {
                            config.bindings.push((binding_key, unquote(value)));
                        }
                    }
                    _ => {}
                }
            }
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        match section {
            Section::Application => match key {
                "title" => config.title = unquote(value),
                "default_text" => config.status_text = unquote(value),
                _ => {}
            },
            Section::Animation => match key {
                "duration_ms" => config.duration_ms = value.parse().unwrap_or(defaults.duration_ms),
                "frame_interval_ms" => config.frame_interval_ms = value.parse().unwrap_or(defaults.frame_interval_ms),
                _ => {}
            },
            Section::Scroll => match key {
                "activation_threshold" => config.activation_threshold = value.parse().unwrap_or(defaults.activation_threshold),
                "section_height_fraction" => config.section_height_fraction = value.parse().unwrap_or(defaults.section_height_fraction),
                "line_step" => config.line_step = value.parse().unwrap_or(defaults.line_step),
                "page_step" => config.page_step = value.parse().unwrap_or(defaults.page_step),
                "max_overscroll" => config.max_overscroll = value.parse().unwrap_or(defaults.max_overscroll),
                _ => {}
            },
            Section::TabStrip => match key {
                "padding" => config.tab_padding = value.parse().unwrap_or(defaults.tab_padding),
                "spacing" => config.tab_spacing = value.parse().unwrap_or(defaults.tab_spacing),
                _ => {}
            },
            Section::Logging => {
                if key == "level" {
                    config.log_level = unquote(value);
                }
            }
            Section::None | Section::Bindings => {}
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    // Find the colon separator
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn unquote(s: &str) -> String {
    s.trim().trim_matches('"').trim_matches('\'').to_string()
}
