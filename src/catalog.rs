//! Fixed ordinal tables for enumerated settings.
//!
//! Enumerated settings are persisted as plain integers. Each table maps an
//! ordinal to a variant and sends anything it doesn't know to one designated
//! fallback. The fallback is not the nearest valid value: an out-of-range
//! theme style is `TonalSpot`, not `Content`.

use serde::Serialize;

/// Stored light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NightMode {
    Dark,
    Light,
    System,
}

impl NightMode {
    /// Ordinal written for a fresh install.
    pub const DEFAULT_ORDINAL: i32 = 2;

    /// `0 → Dark`, `1 → Light`, `2 → System`. Unknown ordinals are `Light`.
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::Dark,
            2 => Self::System,
            _ => Self::Light,
        }
    }

    /// Resolve to a concrete night flag given the platform's current signal.
    pub fn is_night(self, system_dark: bool) -> bool {
        match self {
            Self::System => system_dark,
            Self::Dark => true,
            Self::Light => false,
        }
    }
}

/// Dynamic color scheme generator styles, in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaletteStyle {
    TonalSpot,
    Neutral,
    Vibrant,
    Expressive,
    Rainbow,
    FruitSalad,
    Monochrome,
    Fidelity,
    Content,
}

impl PaletteStyle {
    pub const ALL: [PaletteStyle; 9] = [
        Self::TonalSpot,
        Self::Neutral,
        Self::Vibrant,
        Self::Expressive,
        Self::Rainbow,
        Self::FruitSalad,
        Self::Monochrome,
        Self::Fidelity,
        Self::Content,
    ];

    pub fn from_ordinal(ordinal: i32) -> Self {
        lookup(&Self::ALL, ordinal).unwrap_or_else(|| {
            log::debug!("theme style {ordinal} out of range; using TonalSpot");
            Self::TonalSpot
        })
    }
}

/// Bottom-edge anchor of the floating action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FabAlignment {
    BottomStart,
    BottomCenter,
    BottomEnd,
}

impl FabAlignment {
    pub const DEFAULT_ORDINAL: i32 = 1;

    /// Three-bucket clamp: `0` start, `1` center, everything else end.
    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::BottomStart,
            1 => Self::BottomCenter,
            _ => Self::BottomEnd,
        }
    }
}

/// Application font family, in persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontFamily {
    System,
    Caveat,
    Comfortaa,
    Handjet,
    Jura,
    Montserrat,
    Podkova,
    Tektur,
    YsabeauSC,
    DejaVu,
    BadScript,
    RuslanDisplay,
    Catterdale,
    FRM32,
    TokeelyBrookings,
    Nunito,
}

impl FontFamily {
    pub const ALL: [FontFamily; 16] = [
        Self::System,
        Self::Caveat,
        Self::Comfortaa,
        Self::Handjet,
        Self::Jura,
        Self::Montserrat,
        Self::Podkova,
        Self::Tektur,
        Self::YsabeauSC,
        Self::DejaVu,
        Self::BadScript,
        Self::RuslanDisplay,
        Self::Catterdale,
        Self::FRM32,
        Self::TokeelyBrookings,
        Self::Nunito,
    ];

    pub fn from_ordinal(ordinal: i32) -> Self {
        lookup(&Self::ALL, ordinal).unwrap_or(Self::System)
    }
}

/// What happens to a processed image besides saving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CopyToClipboardMode {
    Disabled,
    Enabled,
    EnabledWithSave,
}

impl CopyToClipboardMode {
    pub const ALL: [CopyToClipboardMode; 3] =
        [Self::Disabled, Self::Enabled, Self::EnabledWithSave];

    pub fn from_ordinal(ordinal: i32) -> Self {
        lookup(&Self::ALL, ordinal).unwrap_or(Self::Disabled)
    }
}

fn lookup<T: Copy>(table: &[T], ordinal: i32) -> Option<T> {
    usize::try_from(ordinal)
        .ok()
        .and_then(|i| table.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_mode_resolution() {
        assert!(NightMode::from_ordinal(0).is_night(false));
        assert!(!NightMode::from_ordinal(1).is_night(true));
        assert!(NightMode::from_ordinal(2).is_night(true));
        assert!(!NightMode::from_ordinal(2).is_night(false));
    }

    #[test]
    fn unknown_night_mode_is_never_night() {
        assert_eq!(NightMode::from_ordinal(7), NightMode::Light);
        assert!(!NightMode::from_ordinal(-1).is_night(true));
    }

    #[test]
    fn palette_style_in_range() {
        assert_eq!(PaletteStyle::from_ordinal(2), PaletteStyle::Vibrant);
        assert_eq!(PaletteStyle::from_ordinal(8), PaletteStyle::Content);
    }

    #[test]
    fn palette_style_out_of_range_is_tonal_spot() {
        assert_eq!(PaletteStyle::from_ordinal(9), PaletteStyle::TonalSpot);
        assert_eq!(PaletteStyle::from_ordinal(999), PaletteStyle::TonalSpot);
        assert_eq!(PaletteStyle::from_ordinal(-3), PaletteStyle::TonalSpot);
    }

    #[test]
    fn fab_alignment_collapses_to_end() {
        assert_eq!(FabAlignment::from_ordinal(0), FabAlignment::BottomStart);
        assert_eq!(FabAlignment::from_ordinal(1), FabAlignment::BottomCenter);
        assert_eq!(FabAlignment::from_ordinal(2), FabAlignment::BottomEnd);
        assert_eq!(FabAlignment::from_ordinal(42), FabAlignment::BottomEnd);
        assert_eq!(FabAlignment::from_ordinal(-1), FabAlignment::BottomEnd);
    }

    #[test]
    fn font_family_fallback_is_system() {
        assert_eq!(FontFamily::from_ordinal(15), FontFamily::Nunito);
        assert_eq!(FontFamily::from_ordinal(16), FontFamily::System);
    }

    #[test]
    fn clipboard_mode_fallback_is_disabled() {
        assert_eq!(
            CopyToClipboardMode::from_ordinal(2),
            CopyToClipboardMode::EnabledWithSave
        );
        assert_eq!(
            CopyToClipboardMode::from_ordinal(3),
            CopyToClipboardMode::Disabled
        );
    }
}
