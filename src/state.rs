//! Derived, presentation-ready settings.
//!
//! [`derive_ui_state`] is a pure, total function from a raw
//! [`SettingsSnapshot`] plus the external inputs it depends on to a
//! [`UiSettingsState`]. Callers re-run it whenever the snapshot, the emoji
//! list or the platform's dark-mode signal changes; the result is never
//! mutated or persisted.
//!
//! Nothing here returns an error. Every malformed, missing or out-of-range
//! input resolves to a documented default or to `None`:
//!
//! | Field | Raw input | Resolution |
//! |-------|-----------|------------|
//! | `is_night_mode` | night mode ordinal | system → platform signal, dark → true, else false |
//! | `presets` | encoded id list | resolved through a [`PresetResolver`], unresolved ids dropped |
//! | `selected_emoji` | index, `-1` = none | `None` for the sentinel or an index past the list |
//! | `save_folder_uri` | string | `None` when absent or empty |
//! | `app_color_tuple` | encoded tuple | default tuple when the primary is bad |
//! | `color_tuple_list` | encoded list | never empty |
//! | `font_scale` | float | `None` unless strictly positive |
//! | `theme_style` | ordinal | `TonalSpot` when out of range |
//! | `fab_alignment` | ordinal | `0` start, `1` center, anything else end |

use serde::Serialize;

use crate::catalog::{CopyToClipboardMode, FabAlignment, FontFamily, NightMode, PaletteStyle};
use crate::color::{ColorTuple, decode_tuple_list};
use crate::lists::{PresetResolver, decode_int_list, decode_screen_list, resolve_presets};
use crate::settings::{AspectRatio, SettingsSnapshot};
use crate::uri::Uri;

/// Sentinel stored in `selected_emoji` for "no emoji".
pub const NO_EMOJI: i32 = -1;

/// Platform inputs the derivation depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformSignals {
    /// Whether the platform is currently in dark mode.
    pub system_dark: bool,
}

/// Fully-defaulted settings for the presentation layer.
///
/// Only `selected_emoji`, `save_folder_uri` and `font_scale` are optional;
/// for those, `None` means "unset", which is different from any concrete value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiSettingsState {
    pub is_night_mode: bool,
    pub is_dynamic_colors: bool,
    pub allow_change_color_by_image: bool,
    pub emojis_count: i32,
    pub is_amoled_mode: bool,
    pub app_color_tuple: ColorTuple,
    pub border_width: f32,
    pub presets: Vec<i32>,
    pub fab_alignment: FabAlignment,
    pub show_update_dialog_on_startup: bool,
    pub selected_emoji: Option<Uri>,
    pub image_picker_mode: i32,
    pub clear_cache_on_launch: bool,
    pub group_options_by_types: bool,
    pub screen_list: Vec<i32>,
    pub color_tuple_list: Vec<ColorTuple>,
    pub add_sequence_number: bool,
    pub save_folder_uri: Option<Uri>,
    pub filename_prefix: String,
    pub add_size_in_filename: bool,
    pub add_original_filename: bool,
    pub randomize_filename: bool,
    pub font: FontFamily,
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
    pub aspect_ratios: Vec<AspectRatio>,
    pub lock_draw_orientation: bool,
    pub theme_contrast_level: f64,
    pub theme_style: PaletteStyle,
    pub is_invert_theme_colors: bool,
    pub screens_search_enabled: bool,
    pub copy_to_clipboard_mode: CopyToClipboardMode,
    pub haptics_strength: i32,
    pub overwrite_files: bool,
    pub filename_suffix: String,
    pub default_image_scale_mode: i32,
    pub use_pixel_switch: bool,
    pub magnifier_enabled: bool,
    pub exif_widget_initial_state: bool,
    pub screen_list_with_max_brightness_enforcement: Vec<i32>,
    pub is_confetti_enabled: bool,
    pub is_secure_mode: bool,
}

impl UiSettingsState {
    /// Whether the app is still in its first launches.
    ///
    /// `approximate` covers the first few launches (onboarding hints);
    /// exact covers only the very first one (one-time dialogs).
    pub fn is_first_launch(&self, approximate: bool) -> bool {
        is_first_launch(self.app_open_count, approximate)
    }
}

/// Launch-count threshold shared by [`UiSettingsState::is_first_launch`] and the CLI.
pub fn is_first_launch(app_open_count: i32, approximate: bool) -> bool {
    if approximate {
        app_open_count <= 3
    } else {
        app_open_count <= 1
    }
}

/// Resolve a stored emoji index against the emojis available right now.
pub fn resolve_selected_emoji(selected: Option<i32>, available: &[Uri]) -> Option<Uri> {
    let index = selected.filter(|i| *i != NO_EMOJI)?;
    let uri = usize::try_from(index).ok().and_then(|i| available.get(i));
    if uri.is_none() {
        log::debug!(
            "emoji index {index} not in {} available emojis",
            available.len()
        );
    }
    uri.cloned()
}

/// A font scale override, or `None` for "follow the platform".
pub fn resolve_font_scale(raw: Option<f32>) -> Option<f32> {
    raw.filter(|scale| *scale > 0.0)
}

/// Derive the presentation state from a raw snapshot.
pub fn derive_ui_state<R>(
    snapshot: &SettingsSnapshot,
    available_emojis: &[Uri],
    signals: &PlatformSignals,
    presets: &R,
) -> UiSettingsState
where
    R: PresetResolver + ?Sized,
{
    let s = snapshot;
    UiSettingsState {
        is_night_mode: NightMode::from_ordinal(s.night_mode).is_night(signals.system_dark),
        is_dynamic_colors: s.is_dynamic_colors,
        allow_change_color_by_image: s.allow_change_color_by_image,
        emojis_count: s.emojis_count,
        is_amoled_mode: s.is_amoled_mode,
        app_color_tuple: ColorTuple::decode(Some(&s.app_color_tuple)),
        border_width: s.border_width,
        presets: resolve_presets(&decode_int_list(Some(&s.presets)), presets),
        fab_alignment: FabAlignment::from_ordinal(s.fab_alignment),
        show_update_dialog_on_startup: s.show_update_dialog_on_startup,
        selected_emoji: resolve_selected_emoji(s.selected_emoji, available_emojis),
        image_picker_mode: s.image_picker_mode,
        clear_cache_on_launch: s.clear_cache_on_launch,
        group_options_by_types: s.group_options_by_types,
        screen_list: decode_screen_list(Some(&s.screen_list)),
        color_tuple_list: decode_tuple_list(s.color_tuple_list.as_deref()),
        add_sequence_number: s.add_sequence_number,
        save_folder_uri: Uri::non_empty(s.save_folder_uri.as_deref()),
        filename_prefix: s.filename_prefix.clone(),
        add_size_in_filename: s.add_size_in_filename,
        add_original_filename: s.add_original_filename,
        randomize_filename: s.randomize_filename,
        font: FontFamily::from_ordinal(s.font),
        font_scale: resolve_font_scale(s.font_scale),
        allow_collect_crashlytics: s.allow_collect_crashlytics,
        allow_collect_analytics: s.allow_collect_analytics,
        allow_betas: s.allow_betas,
        draw_container_shadows: s.draw_container_shadows,
        draw_button_shadows: s.draw_button_shadows,
        draw_slider_shadows: s.draw_slider_shadows,
        draw_switch_shadows: s.draw_switch_shadows,
        draw_fab_shadows: s.draw_fab_shadows,
        draw_app_bar_shadows: s.draw_app_bar_shadows,
        app_open_count: s.app_open_count,
        aspect_ratios: s.aspect_ratios.clone(),
        lock_draw_orientation: s.lock_draw_orientation,
        theme_contrast_level: s.theme_contrast_level,
        theme_style: PaletteStyle::from_ordinal(s.theme_style),
        is_invert_theme_colors: s.is_invert_theme_colors,
        screens_search_enabled: s.screens_search_enabled,
        copy_to_clipboard_mode: CopyToClipboardMode::from_ordinal(s.copy_to_clipboard_mode),
        haptics_strength: s.haptics_strength,
        overwrite_files: s.overwrite_files,
        filename_suffix: s.filename_suffix.clone(),
        default_image_scale_mode: s.default_image_scale_mode,
        use_pixel_switch: s.use_pixel_switch,
        magnifier_enabled: s.magnifier_enabled,
        exif_widget_initial_state: s.exif_widget_initial_state,
        screen_list_with_max_brightness_enforcement: decode_screen_list(Some(
            &s.screen_list_with_max_brightness_enforcement,
        )),
        is_confetti_enabled: s.is_confetti_enabled,
        is_secure_mode: s.is_secure_mode,
    }
}
