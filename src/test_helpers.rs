//! Shared test utilities: snapshot builders and one-line derivations.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let state = derive_dark(&snapshot_with(|s| s.night_mode = 2));
//! assert!(state.is_night_mode);
//! ```

use crate::lists::PercentPresets;
use crate::settings::SettingsSnapshot;
use crate::state::{PlatformSignals, UiSettingsState, derive_ui_state};
use crate::uri::Uri;

/// Stock snapshot with `edit` applied.
pub fn snapshot_with(edit: impl FnOnce(&mut SettingsSnapshot)) -> SettingsSnapshot {
    let mut snapshot = SettingsSnapshot::default();
    edit(&mut snapshot);
    snapshot
}

/// `count` distinct emoji references.
pub fn emoji_list(count: usize) -> Vec<Uri> {
    (0..count)
        .map(|i| Uri::parse(&format!("file:///android_asset/emoji/{i}.svg")))
        .collect()
}

/// Derive with the platform in light mode, no emojis, stock presets.
pub fn derive_light(snapshot: &SettingsSnapshot) -> UiSettingsState {
    derive_ui_state(snapshot, &[], &PlatformSignals::default(), &PercentPresets)
}

/// Derive with the platform in dark mode, no emojis, stock presets.
pub fn derive_dark(snapshot: &SettingsSnapshot) -> UiSettingsState {
    let signals = PlatformSignals { system_dark: true };
    derive_ui_state(snapshot, &[], &signals, &PercentPresets)
}
