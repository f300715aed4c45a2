//! End-to-end: settings file on disk → store → derived UI state.
//!
//! Run with: cargo test --test settings_flow

use std::fs;
use tempfile::TempDir;
use toolbox_settings::catalog::{FabAlignment, PaletteStyle};
use toolbox_settings::color::{Color, ColorTuple, encode_tuple_list};
use toolbox_settings::lists::PercentPresets;
use toolbox_settings::settings::SettingsStore;
use toolbox_settings::state::{PlatformSignals, derive_ui_state};
use toolbox_settings::uri::Uri;

fn emojis() -> Vec<Uri> {
    ["a", "b", "c", "d", "e"]
        .iter()
        .map(|name| Uri::parse(&format!("file:///emoji/{name}.svg")))
        .collect()
}

#[test]
fn corrupted_file_still_derives() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(
        &path,
        r#"
night_mode = 9
app_color_tuple = "not_a_number/5/6"
color_tuple_list = "junk"
selected_emoji = 10
theme_style = 999
fab_alignment = 7
font_scale = -1.0
save_folder_uri = ""
presets = "abc,,0"
removed_in_v3 = "whatever"
"#,
    )
    .unwrap();

    let store = SettingsStore::open(&path).unwrap();
    let state = derive_ui_state(
        store.snapshot(),
        &emojis(),
        &PlatformSignals { system_dark: true },
        &PercentPresets,
    );

    assert!(!state.is_night_mode);
    assert_eq!(state.app_color_tuple, ColorTuple::default());
    assert_eq!(state.color_tuple_list, vec![ColorTuple::default()]);
    assert_eq!(state.selected_emoji, None);
    assert_eq!(state.theme_style, PaletteStyle::TonalSpot);
    assert_eq!(state.fab_alignment, FabAlignment::BottomEnd);
    assert_eq!(state.font_scale, None);
    assert_eq!(state.save_folder_uri, None);
    assert!(state.presets.is_empty());
}

#[test]
fn updates_flow_into_next_derivation() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    let mut store = SettingsStore::open(&path).unwrap();
    let signals = PlatformSignals::default();

    let before = derive_ui_state(store.snapshot(), &emojis(), &signals, &PercentPresets);
    assert_eq!(before.selected_emoji, Some(emojis()[0].clone()));

    let picked = ColorTuple {
        primary: Color(0xFF12_3456),
        secondary: Some(Color(0xFF65_4321)),
        tertiary: None,
        surface: Some(Color(0xFF00_0000)),
    };
    store
        .update(|s| {
            s.selected_emoji = Some(2);
            s.night_mode = 0;
            s.app_color_tuple = picked.encode();
            s.color_tuple_list = Some(encode_tuple_list(&[picked, ColorTuple::default(), picked]));
        })
        .unwrap();

    let mut reopened = SettingsStore::open(&path).unwrap();
    let after = derive_ui_state(reopened.snapshot(), &emojis(), &signals, &PercentPresets);
    assert!(after.is_night_mode);
    assert_eq!(after.selected_emoji, Some(emojis()[2].clone()));
    assert_eq!(after.app_color_tuple, picked);
    assert_eq!(after.color_tuple_list, vec![picked, ColorTuple::default()]);

    // Before is a separate value, untouched by the update
    assert!(!before.is_night_mode);

    reopened.register_app_open().unwrap();
    reopened.register_app_open().unwrap();
    let launched = derive_ui_state(reopened.snapshot(), &[], &signals, &PercentPresets);
    assert!(launched.is_first_launch(true));
    assert!(!launched.is_first_launch(false));
}

#[test]
fn mistyped_field_keeps_the_rest_of_the_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");

    fs::write(&path, "night_mode = \"dark\"\nfont = 3\n").unwrap();
    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.snapshot().font, 3);
    assert_eq!(store.snapshot().night_mode, 2);

    fs::write(&path, "theme_style = 99999999999\nfont = 3\n").unwrap();
    let store = SettingsStore::open(&path).unwrap();
    assert_eq!(store.snapshot().font, 3);
    assert_eq!(store.snapshot().theme_style, 0);

    let state = derive_ui_state(store.snapshot(), &[], &PlatformSignals::default(), &PercentPresets);
    assert_eq!(state.theme_style, PaletteStyle::TonalSpot);
}

#[test]
fn broken_toml_syntax_is_still_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "font = [[[").unwrap();
    assert!(SettingsStore::open(&path).is_err());
}
