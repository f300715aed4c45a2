//! Raw persisted settings.
//!
//! [`SettingsSnapshot`] is the unvalidated source of truth: a flat bag of
//! primitives and encoded strings exactly as written to `settings.toml`. No
//! cross-field rules apply here; the [`state`](crate::state) module turns a
//! snapshot into something the presentation layer can use.
//!
//! ## Loading
//!
//! Stock defaults are serialized to a `toml::Value`, the user's file is merged
//! on top key by key, and the merged table is deserialized:
//!
//! ```text
//! stock defaults  ←  settings.toml  =  SettingsSnapshot
//! ```
//!
//! Files are sparse. Keys the current version doesn't know are ignored, so a
//! file written by an older or newer build still loads. Each key is also
//! defaulted on its own: a value of the wrong type or out of range is dropped
//! with a warning and the stock default takes its place, while every other
//! key in the file is kept. Only malformed TOML syntax is an error.
//!
//! Writes go to a sibling temp file that is renamed over the original, so an
//! interrupted save never leaves a truncated file behind.
//!
//! ## Updating
//!
//! There is no global settings object. A [`SettingsStore`] owns the current
//! snapshot and its path; changes go through [`SettingsStore::update`], which
//! builds a new snapshot, persists it, then swaps it in.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{FabAlignment, NightMode};
use crate::color::ColorTuple;
use crate::lists::encode_int_list;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("unknown settings key: {0}")]
    UnknownKey(String),
}

/// A custom crop aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Settings exactly as persisted.
///
/// Enumerations are stored as ordinals and lists as encoded strings; see
/// [`catalog`](crate::catalog), [`color`](crate::color) and
/// [`lists`](crate::lists) for their formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSnapshot {
    /// `0` dark, `1` light, `2` follow the system.
    pub night_mode: i32,
    pub is_dynamic_colors: bool,
    pub allow_change_color_by_image: bool,
    pub emojis_count: i32,
    pub is_amoled_mode: bool,
    /// Encoded [`ColorTuple`].
    pub app_color_tuple: String,
    /// Container border width in dp; negative disables borders.
    pub border_width: f32,
    /// Encoded resize preset ids.
    pub presets: String,
    pub fab_alignment: i32,
    pub show_update_dialog_on_startup: bool,
    /// Index into the available emoji list, `-1` for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_emoji: Option<i32>,
    pub image_picker_mode: i32,
    pub clear_cache_on_launch: bool,
    pub group_options_by_types: bool,
    /// Encoded screen ids in user-defined order.
    pub screen_list: String,
    /// Encoded list of [`ColorTuple`]s the user picked from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_tuple_list: Option<String>,
    pub add_sequence_number: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_folder_uri: Option<String>,
    pub filename_prefix: String,
    pub add_size_in_filename: bool,
    pub add_original_filename: bool,
    pub randomize_filename: bool,
    pub font: i32,
    /// Non-positive means "no override".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<f32>,
    pub allow_collect_crashlytics: bool,
    pub allow_collect_analytics: bool,
    pub allow_betas: bool,
    pub draw_container_shadows: bool,
    pub draw_button_shadows: bool,
    pub draw_slider_shadows: bool,
    pub draw_switch_shadows: bool,
    pub draw_fab_shadows: bool,
    pub draw_app_bar_shadows: bool,
    pub app_open_count: i32,
    pub lock_draw_orientation: bool,
    pub theme_contrast_level: f64,
    pub theme_style: i32,
    pub is_invert_theme_colors: bool,
    pub screens_search_enabled: bool,
    pub copy_to_clipboard_mode: i32,
    pub haptics_strength: i32,
    pub overwrite_files: bool,
    pub filename_suffix: String,
    pub default_image_scale_mode: i32,
    pub use_pixel_switch: bool,
    pub magnifier_enabled: bool,
    pub exif_widget_initial_state: bool,
    pub screen_list_with_max_brightness_enforcement: String,
    pub is_confetti_enabled: bool,
    pub is_secure_mode: bool,
    pub aspect_ratios: Vec<AspectRatio>,
}

/// Stock resize presets, in percent.
pub const DEFAULT_PRESETS: [i32; 15] = [
    500, 400, 300, 200, 150, 100, 90, 80, 70, 60, 50, 40, 30, 20, 10,
];

/// Every key a settings file may set.
pub const SETTINGS_KEYS: &[&str] = &[
    "night_mode",
    "is_dynamic_colors",
    "allow_change_color_by_image",
    "emojis_count",
    "is_amoled_mode",
    "app_color_tuple",
    "border_width",
    "presets",
    "fab_alignment",
    "show_update_dialog_on_startup",
    "selected_emoji",
    "image_picker_mode",
    "clear_cache_on_launch",
    "group_options_by_types",
    "screen_list",
    "color_tuple_list",
    "add_sequence_number",
    "save_folder_uri",
    "filename_prefix",
    "add_size_in_filename",
    "add_original_filename",
    "randomize_filename",
    "font",
    "font_scale",
    "allow_collect_crashlytics",
    "allow_collect_analytics",
    "allow_betas",
    "draw_container_shadows",
    "draw_button_shadows",
    "draw_slider_shadows",
    "draw_switch_shadows",
    "draw_fab_shadows",
    "draw_app_bar_shadows",
    "app_open_count",
    "lock_draw_orientation",
    "theme_contrast_level",
    "theme_style",
    "is_invert_theme_colors",
    "screens_search_enabled",
    "copy_to_clipboard_mode",
    "haptics_strength",
    "overwrite_files",
    "filename_suffix",
    "default_image_scale_mode",
    "use_pixel_switch",
    "magnifier_enabled",
    "exif_widget_initial_state",
    "screen_list_with_max_brightness_enforcement",
    "is_confetti_enabled",
    "is_secure_mode",
    "aspect_ratios",
];

/// Keys whose values are text, including encoded lists and tuples.
pub const TEXT_KEYS: &[&str] = &[
    "app_color_tuple",
    "presets",
    "screen_list",
    "color_tuple_list",
    "save_folder_uri",
    "filename_prefix",
    "filename_suffix",
    "screen_list_with_max_brightness_enforcement",
];

impl Default for SettingsSnapshot {
    fn default() -> Self {
        Self {
            night_mode: NightMode::DEFAULT_ORDINAL,
            is_dynamic_colors: true,
            allow_change_color_by_image: true,
            emojis_count: 1,
            is_amoled_mode: false,
            app_color_tuple: ColorTuple::default().encode(),
            border_width: -1.0,
            presets: encode_int_list(&DEFAULT_PRESETS),
            fab_alignment: FabAlignment::DEFAULT_ORDINAL,
            show_update_dialog_on_startup: true,
            selected_emoji: Some(0),
            image_picker_mode: 0,
            clear_cache_on_launch: true,
            group_options_by_types: true,
            screen_list: String::new(),
            color_tuple_list: None,
            add_sequence_number: true,
            save_folder_uri: None,
            filename_prefix: String::new(),
            add_size_in_filename: false,
            add_original_filename: false,
            randomize_filename: false,
            font: 0,
            font_scale: None,
            allow_collect_crashlytics: true,
            allow_collect_analytics: true,
            allow_betas: true,
            draw_container_shadows: true,
            draw_button_shadows: true,
            draw_slider_shadows: true,
            draw_switch_shadows: true,
            draw_fab_shadows: true,
            draw_app_bar_shadows: true,
            app_open_count: 0,
            lock_draw_orientation: true,
            theme_contrast_level: 0.0,
            theme_style: 0,
            is_invert_theme_colors: false,
            screens_search_enabled: false,
            copy_to_clipboard_mode: 0,
            haptics_strength: 1,
            overwrite_files: false,
            filename_suffix: String::new(),
            default_image_scale_mode: 0,
            use_pixel_switch: false,
            magnifier_enabled: false,
            exif_widget_initial_state: false,
            screen_list_with_max_brightness_enforcement: String::new(),
            is_confetti_enabled: true,
            is_secure_mode: false,
            aspect_ratios: default_aspect_ratios(),
        }
    }
}

fn default_aspect_ratios() -> Vec<AspectRatio> {
    vec![
        AspectRatio::new(1.0, 1.0),
        AspectRatio::new(2.0, 3.0),
        AspectRatio::new(3.0, 2.0),
        AspectRatio::new(3.0, 4.0),
        AspectRatio::new(4.0, 3.0),
        AspectRatio::new(9.0, 16.0),
        AspectRatio::new(16.0, 9.0),
    ]
}

// =============================================================================
// Loading, merging, and persisting
// =============================================================================

/// Stock defaults as a `toml::Value::Table`, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SettingsSnapshot::default()).expect("default settings must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a settings file as a raw TOML value. `Ok(None)` if the file doesn't exist.
pub fn load_raw_settings(path: &Path) -> Result<Option<toml::Value>, SettingsError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base` and deserialize the result.
pub fn resolve_settings(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SettingsSnapshot, SettingsError> {
    let Some(overlay) = overlay else {
        let snapshot: SettingsSnapshot = base.try_into()?;
        return Ok(snapshot);
    };
    warn_unknown_keys(&overlay);
    let whole: Result<SettingsSnapshot, _> = merge_toml(base.clone(), overlay.clone()).try_into();
    match whole {
        Ok(snapshot) => Ok(snapshot),
        Err(err) => {
            log::debug!("settings do not deserialize as a whole ({err}); checking keys one by one");
            let accepted = accepted_keys(&base, overlay);
            let snapshot: SettingsSnapshot = merge_toml(base, accepted).try_into()?;
            Ok(snapshot)
        }
    }
}

/// Keep only the overlay keys that deserialize when merged alone over `base`.
fn accepted_keys(base: &toml::Value, overlay: toml::Value) -> toml::Value {
    let mut accepted = toml::Table::new();
    let toml::Value::Table(table) = overlay else {
        return toml::Value::Table(accepted);
    };
    for (key, value) in table {
        let mut single = toml::Table::new();
        single.insert(key.clone(), value.clone());
        let candidate: Result<SettingsSnapshot, _> =
            merge_toml(base.clone(), toml::Value::Table(single)).try_into();
        match candidate {
            Ok(_) => {
                accepted.insert(key, value);
            }
            Err(err) => log::warn!("dropping settings key {key:?}, using stock default: {err}"),
        }
    }
    toml::Value::Table(accepted)
}

fn warn_unknown_keys(overlay: &toml::Value) {
    if let Some(table) = overlay.as_table() {
        for key in table.keys().filter(|k| !SETTINGS_KEYS.contains(&k.as_str())) {
            log::warn!("ignoring unknown settings key {key:?}");
        }
    }
}

/// Load a settings file over stock defaults. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<SettingsSnapshot, SettingsError> {
    resolve_settings(stock_defaults_value(), load_raw_settings(path)?)
}

/// Sibling path an in-progress save is written to before it replaces `path`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `snapshot` to `path`, creating parent directories as needed.
///
/// The new content is written next to `path` and renamed over it, so
/// readers see either the old file or the new one.
pub fn save_settings(path: &Path, snapshot: &SettingsSnapshot) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(snapshot)?;
    let tmp = temp_path(path);
    fs::write(&tmp, content)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

/// Owns the current snapshot and the file it came from.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    snapshot: SettingsSnapshot,
}

impl SettingsStore {
    /// Open the store at `path`. The file need not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let snapshot = load_settings(&path)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &SettingsSnapshot {
        &self.snapshot
    }

    /// Re-read the file, replacing the in-memory snapshot.
    pub fn reload(&mut self) -> Result<&SettingsSnapshot, SettingsError> {
        self.snapshot = load_settings(&self.path)?;
        Ok(&self.snapshot)
    }

    /// Apply `change` to a copy of the snapshot, persist it, then make it current.
    ///
    /// If persisting fails the current snapshot is left untouched.
    pub fn update<F>(&mut self, change: F) -> Result<&SettingsSnapshot, SettingsError>
    where
        F: FnOnce(&mut SettingsSnapshot),
    {
        let mut next = self.snapshot.clone();
        change(&mut next);
        save_settings(&self.path, &next)?;
        self.snapshot = next;
        Ok(&self.snapshot)
    }

    /// Set one key from a TOML value. The value must have the field's type.
    pub fn set_value(
        &mut self,
        key: &str,
        value: toml::Value,
    ) -> Result<&SettingsSnapshot, SettingsError> {
        if !SETTINGS_KEYS.contains(&key) {
            return Err(SettingsError::UnknownKey(key.to_string()));
        }
        let current = toml::Value::try_from(&self.snapshot)?;
        let mut overlay = toml::Table::new();
        overlay.insert(key.to_string(), value);
        let next: SettingsSnapshot = merge_toml(current, toml::Value::Table(overlay)).try_into()?;
        self.update(|snapshot| *snapshot = next)
    }

    /// Count one more application launch.
    pub fn register_app_open(&mut self) -> Result<&SettingsSnapshot, SettingsError> {
        self.update(|snapshot| {
            snapshot.app_open_count = snapshot.app_open_count.saturating_add(1);
        })
    }
}

/// A fully-commented stock `settings.toml`. Used by the `gen-settings` command.
pub fn stock_settings_toml() -> &'static str {
    r##"# Toolbox Settings
# ================
# All settings are optional. Values shown below are the defaults.
# Unknown keys are ignored so files survive upgrades and downgrades.

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
# 0 = dark, 1 = light, 2 = follow the system
night_mode = 2
is_dynamic_colors = true
allow_change_color_by_image = true
is_amoled_mode = false
is_invert_theme_colors = false
theme_contrast_level = 0.0

# Palette style ordinal (0 = TonalSpot ... 8 = Content).
# Unknown ordinals fall back to TonalSpot.
theme_style = 0

# Seed colors as "primary/secondary/tertiary/surface", each a signed
# decimal ARGB integer. Trailing colors may be omitted.
app_color_tuple = "-7349446"

# Colors offered in the picker: tuples separated by "*".
# color_tuple_list = "-7349446*-16777216/-1"

# ---------------------------------------------------------------------------
# Appearance
# ---------------------------------------------------------------------------
emojis_count = 1
# Index into the emoji list; -1 shows no emoji.
selected_emoji = 0
# Container border width in dp; negative disables borders.
border_width = -1.0
# 0 = start, 1 = center, anything else = end
fab_alignment = 1
# Font ordinal (0 = system font).
font = 0
# Font scale override; zero or negative means "follow the system".
# font_scale = 1.0
draw_container_shadows = true
draw_button_shadows = true
draw_slider_shadows = true
draw_switch_shadows = true
draw_fab_shadows = true
draw_app_bar_shadows = true
use_pixel_switch = false
is_confetti_enabled = true
haptics_strength = 1

# ---------------------------------------------------------------------------
# Screens
# ---------------------------------------------------------------------------
# Comma-separated screen ids in display order; empty = stock order.
screen_list = ""
screen_list_with_max_brightness_enforcement = ""
group_options_by_types = true
screens_search_enabled = false
image_picker_mode = 0
lock_draw_orientation = true
magnifier_enabled = false
exif_widget_initial_state = false

# Comma-separated resize presets, in percent.
presets = "500,400,300,200,150,100,90,80,70,60,50,40,30,20,10"

# ---------------------------------------------------------------------------
# Saving
# ---------------------------------------------------------------------------
# save_folder_uri = "content://..."
filename_prefix = ""
filename_suffix = ""
add_sequence_number = true
add_size_in_filename = false
add_original_filename = false
randomize_filename = false
overwrite_files = false
# 0 = disabled, 1 = enabled, 2 = enabled and also save
copy_to_clipboard_mode = 0
default_image_scale_mode = 0

# ---------------------------------------------------------------------------
# Application
# ---------------------------------------------------------------------------
show_update_dialog_on_startup = true
clear_cache_on_launch = true
allow_collect_crashlytics = true
allow_collect_analytics = true
allow_betas = true
is_secure_mode = false
app_open_count = 0

# ---------------------------------------------------------------------------
# Crop aspect ratios
# ---------------------------------------------------------------------------
[[aspect_ratios]]
width = 1.0
height = 1.0

[[aspect_ratios]]
width = 2.0
height = 3.0

[[aspect_ratios]]
width = 3.0
height = 2.0

[[aspect_ratios]]
width = 3.0
height = 4.0

[[aspect_ratios]]
width = 4.0
height = 3.0

[[aspect_ratios]]
width = 9.0
height = 16.0

[[aspect_ratios]]
width = 16.0
height = 9.0
"##
}
