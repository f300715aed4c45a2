//! # Toolbox Settings
//!
//! The settings layer of an image toolbox: a persisted raw snapshot, compact
//! string codecs for its compound fields, and a pure mapper that turns the
//! snapshot into the fully-defaulted state a UI renders from.
//!
//! # Architecture: Load → Decode → Derive
//!
//! ```text
//! settings.toml ──load──▶ SettingsSnapshot ──derive_ui_state──▶ UiSettingsState
//!                              ▲                   ▲   ▲
//!                      SettingsStore::update   emojis   platform dark signal
//! ```
//!
//! - **Load** merges the user's file over stock defaults. Only this stage can
//!   fail, and only on I/O or malformed TOML.
//! - **Decode** turns encoded strings (color tuples, id lists) into values.
//! - **Derive** applies fallbacks, clamps and lookups. It is total: corrupted
//!   or half-migrated settings never prevent a state from being built.
//!
//! The derived state is never stored. Callers recompute it whenever the
//! snapshot, the available emoji list or the platform signal changes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`settings`] | Raw snapshot, TOML loading/merging, and the [`settings::SettingsStore`] |
//! | [`color`] | `primary/secondary/tertiary/surface` tuple codec and `*`-joined tuple lists |
//! | [`lists`] | Comma-separated id lists and preset resolution |
//! | [`catalog`] | Ordinal tables for enumerated settings and their fallbacks |
//! | [`uri`] | Opaque resource references with an empty sentinel |
//! | [`state`] | [`state::UiSettingsState`] and the [`state::derive_ui_state`] mapper |
//! | [`output`] | CLI summary formatting |

pub mod catalog;
pub mod color;
pub mod lists;
pub mod output;
pub mod settings;
pub mod state;
pub mod uri;

#[cfg(test)]
pub(crate) mod test_helpers;
