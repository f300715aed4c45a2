//! CLI output formatting for derived settings.
//!
//! The summary groups fields the way a settings screen would, with one
//! header per section and indented `key: value` lines:
//!
//! ```text
//! Theme
//!     Night mode: off
//!     Style: TonalSpot
//!     App colors: #FF8FDB3A
//!     Palette: 1 tuple(s)
//! Appearance
//!     Emoji: none
//!     Font: System (scale: system)
//!     FAB: BottomCenter
//! Saving
//!     Folder: default
//!     Presets: 500, 400, 300, ...
//! Launch
//!     Opened 0 time(s), first launch
//! ```

use crate::color::ColorTuple;
use crate::state::UiSettingsState;

/// Presets shown before eliding the rest.
const PRESET_PREVIEW: usize = 3;

fn section(title: &str, lines: Vec<String>) -> Vec<String> {
    std::iter::once(title.to_string())
        .chain(lines.into_iter().map(|l| format!("    {l}")))
        .collect()
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// `#AARRGGBB` for every present component, separated by ` / `.
pub fn format_tuple(tuple: &ColorTuple) -> String {
    [
        Some(tuple.primary),
        tuple.secondary,
        tuple.tertiary,
        tuple.surface,
    ]
    .iter()
    .flatten()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(" / ")
}

fn format_presets(presets: &[i32]) -> String {
    if presets.is_empty() {
        return "none".to_string();
    }
    let mut shown: Vec<String> = presets
        .iter()
        .take(PRESET_PREVIEW)
        .map(i32::to_string)
        .collect();
    if presets.len() > PRESET_PREVIEW {
        shown.push("...".to_string());
    }
    shown.join(", ")
}

/// Render the human-readable summary printed by `show`.
pub fn format_ui_state(state: &UiSettingsState) -> Vec<String> {
    let mut lines = Vec::new();

    lines.extend(section(
        "Theme",
        vec![
            format!("Night mode: {}", on_off(state.is_night_mode)),
            format!("Style: {:?}", state.theme_style),
            format!("App colors: {}", format_tuple(&state.app_color_tuple)),
            format!("Palette: {} tuple(s)", state.color_tuple_list.len()),
        ],
    ));

    let emoji = state
        .selected_emoji
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string);
    let scale = state
        .font_scale
        .map_or_else(|| "system".to_string(), |s| s.to_string());
    lines.extend(section(
        "Appearance",
        vec![
            format!("Emoji: {emoji}"),
            format!("Font: {:?} (scale: {scale})", state.font),
            format!("FAB: {:?}", state.fab_alignment),
        ],
    ));

    let folder = state
        .save_folder_uri
        .as_ref()
        .map_or_else(|| "default".to_string(), ToString::to_string);
    lines.extend(section(
        "Saving",
        vec![
            format!("Folder: {folder}"),
            format!("Presets: {}", format_presets(&state.presets)),
        ],
    ));

    let launch = if state.is_first_launch(false) {
        ", first launch"
    } else if state.is_first_launch(true) {
        ", onboarding"
    } else {
        ""
    };
    lines.extend(section(
        "Launch",
        vec![format!("Opened {} time(s){launch}", state.app_open_count)],
    ));

    lines
}
