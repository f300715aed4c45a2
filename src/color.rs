//! Compact string encoding for theme color tuples.
//!
//! A [`ColorTuple`] is the seed of a dynamic theme: one required primary color
//! plus up to three optional accents. Tuples are persisted as short strings so
//! they fit in a flat key/value settings file.
//!
//! ## Wire Format
//!
//! ```text
//! tuple:  <primary>/<secondary>/<tertiary>/<surface>
//! list:   <tuple>*<tuple>*<tuple>
//! ```
//!
//! Every component is a packed ARGB color written as a **signed** decimal
//! 32-bit integer, e.g. `0xFF8FDB3A` is stored as `-7349446`. Trailing absent
//! components are omitted; an absent component in the middle is written as an
//! empty segment so positions survive (`"5//6"`).
//!
//! The component delimiter (`/`) and the tuple delimiter (`*`) are distinct.
//! Older files stored the single app tuple with `*` between components; a
//! tuple string without any `/` is therefore split on `*` instead, which keeps
//! those values readable. New values are always written with `/`.
//!
//! ## Degradation Rules
//!
//! Decoding never fails:
//! - a missing or unparseable primary makes the **whole** tuple the default
//!   tuple, even when the remaining components parse;
//! - an unparseable optional component becomes `None`;
//! - a list with no decodable tuple becomes `[ColorTuple::default()]`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Separator between the components of a single tuple.
pub const COMPONENT_DELIMITER: char = '/';

/// Separator between tuples in a list.
pub const TUPLE_DELIMITER: char = '*';

/// Component separator used by the legacy single-tuple encoding.
const LEGACY_COMPONENT_DELIMITER: char = '*';

/// Packed 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn argb(self) -> u32 {
        self.0
    }

    /// Parse the persisted decimal form.
    ///
    /// The signed form is canonical; the unsigned form (`4287617850`) is
    /// accepted as well since hand-edited files tend to use it.
    pub fn parse(raw: &str) -> Option<Self> {
        if let Ok(signed) = raw.parse::<i32>() {
            return Some(Self(signed as u32));
        }
        raw.parse::<u32>().ok().map(Self)
    }

    /// Signed decimal form used on disk.
    pub fn to_persisted(self) -> String {
        (self.argb() as i32).to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.argb())
    }
}

/// Primary color of the stock theme.
pub const DEFAULT_PRIMARY: Color = Color::from_argb(0xFF8F_DB3A);

/// Theme seed colors: a required primary plus optional accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTuple {
    pub primary: Color,
    pub secondary: Option<Color>,
    pub tertiary: Option<Color>,
    pub surface: Option<Color>,
}

impl Default for ColorTuple {
    fn default() -> Self {
        Self::from_primary(DEFAULT_PRIMARY)
    }
}

impl ColorTuple {
    pub fn from_primary(primary: Color) -> Self {
        Self {
            primary,
            secondary: None,
            tertiary: None,
            surface: None,
        }
    }

    /// Encode as `primary/secondary/tertiary/surface`, trimming absent trailing components.
    pub fn encode(&self) -> String {
        let slots = [
            Some(self.primary),
            self.secondary,
            self.tertiary,
            self.surface,
        ];
        let used = slots.iter().rposition(Option::is_some).map_or(1, |i| i + 1);
        slots[..used]
            .iter()
            .map(|slot| slot.map(Color::to_persisted).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(&COMPONENT_DELIMITER.to_string())
    }

    /// Decode a persisted tuple, falling back to the default tuple when the
    /// primary component is missing or malformed.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let legacy =
            !raw.contains(COMPONENT_DELIMITER) && raw.contains(LEGACY_COMPONENT_DELIMITER);
        let delimiter = if legacy {
            LEGACY_COMPONENT_DELIMITER
        } else {
            COMPONENT_DELIMITER
        };
        decode_components(raw, delimiter).unwrap_or_else(|| {
            log::debug!("color tuple {raw:?} has no valid primary; using default tuple");
            Self::default()
        })
    }
}

/// Split `raw` on `delimiter` and build a tuple. `None` when the primary does not parse.
fn decode_components(raw: &str, delimiter: char) -> Option<ColorTuple> {
    let parts: Vec<&str> = raw.split(delimiter).collect();
    let component = |i: usize| parts.get(i).and_then(|p| Color::parse(p));
    Some(ColorTuple {
        primary: component(0)?,
        secondary: component(1),
        tertiary: component(2),
        surface: component(3),
    })
}

/// Encode a list of tuples, joined by [`TUPLE_DELIMITER`].
pub fn encode_tuple_list(tuples: &[ColorTuple]) -> String {
    tuples
        .iter()
        .map(ColorTuple::encode)
        .collect::<Vec<_>>()
        .join(&TUPLE_DELIMITER.to_string())
}

/// Decode a persisted tuple list.
///
/// Segments without a valid primary are dropped. Duplicates collapse to their
/// first occurrence. The result is never empty: if nothing decodes, it holds
/// exactly the default tuple.
pub fn decode_tuple_list(raw: Option<&str>) -> Vec<ColorTuple> {
    let mut seen = HashSet::new();
    let mut tuples = Vec::new();
    for segment in raw.into_iter().flat_map(|r| r.split(TUPLE_DELIMITER)) {
        match decode_components(segment, COMPONENT_DELIMITER) {
            Some(tuple) => {
                if seen.insert(tuple) {
                    tuples.push(tuple);
                }
            }
            None if !segment.is_empty() => {
                log::debug!("dropping undecodable color tuple segment {segment:?}");
            }
            None => {}
        }
    }
    if tuples.is_empty() {
        tuples.push(ColorTuple::default());
    }
    tuples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_tuple() -> ColorTuple {
        ColorTuple {
            primary: Color(0xFF11_2233),
            secondary: Some(Color(0xFF44_5566)),
            tertiary: Some(Color(0x8077_8899)),
            surface: Some(Color(0x0000_00FF)),
        }
    }

    // =========================================================================
    // Color
    // =========================================================================

    #[test]
    fn color_parses_signed_form() {
        assert_eq!(Color::parse("-7349446"), Some(DEFAULT_PRIMARY));
    }

    #[test]
    fn color_parses_unsigned_form() {
        assert_eq!(Color::parse("4287617850"), Some(DEFAULT_PRIMARY));
    }

    #[test]
    fn color_rejects_garbage() {
        assert_eq!(Color::parse(""), None);
        assert_eq!(Color::parse("0xFF00FF00"), None);
        assert_eq!(Color::parse("99999999999"), None);
    }

    #[test]
    fn color_persisted_form_is_signed() {
        assert_eq!(DEFAULT_PRIMARY.to_persisted(), "-7349446");
    }

    #[test]
    fn color_display_is_hex() {
        assert_eq!(DEFAULT_PRIMARY.to_string(), "#FF8FDB3A");
        assert_eq!(DEFAULT_PRIMARY.argb(), 0xFF8F_DB3A);
    }

    // =========================================================================
    // Single tuple
    // =========================================================================

    #[test]
    fn full_tuple_round_trips() {
        let tuple = full_tuple();
        assert_eq!(ColorTuple::decode(Some(&tuple.encode())), tuple);
    }

    #[test]
    fn encode_omits_trailing_absent_components() {
        assert_eq!(ColorTuple::from_primary(Color(5)).encode(), "5");
    }

    #[test]
    fn encode_keeps_position_of_inner_gap() {
        let tuple = ColorTuple {
            primary: Color(5),
            secondary: None,
            tertiary: Some(Color(6)),
            surface: None,
        };
        assert_eq!(tuple.encode(), "5//6");
        assert_eq!(ColorTuple::decode(Some("5//6")), tuple);
    }

    #[test]
    fn decode_missing_is_default() {
        assert_eq!(ColorTuple::decode(None), ColorTuple::default());
        assert_eq!(ColorTuple::decode(Some("")), ColorTuple::default());
    }

    #[test]
    fn decode_bad_primary_discards_valid_accents() {
        assert_eq!(
            ColorTuple::decode(Some("not_a_number/5/6")),
            ColorTuple::default()
        );
    }

    #[test]
    fn decode_bad_accent_becomes_absent() {
        let tuple = ColorTuple::decode(Some("5/bad/6"));
        assert_eq!(tuple.primary, Color(5));
        assert_eq!(tuple.secondary, None);
        assert_eq!(tuple.tertiary, Some(Color(6)));
        assert_eq!(tuple.surface, None);
    }

    #[test]
    fn decode_ignores_components_past_surface() {
        let tuple = ColorTuple::decode(Some("1/2/3/4/5"));
        assert_eq!(tuple.surface, Some(Color(4)));
    }

    #[test]
    fn decode_reads_legacy_star_separated_tuple() {
        let tuple = ColorTuple::decode(Some("-7349446*10*20"));
        assert_eq!(tuple.primary, DEFAULT_PRIMARY);
        assert_eq!(tuple.secondary, Some(Color(10)));
        assert_eq!(tuple.tertiary, Some(Color(20)));
    }

    // =========================================================================
    // Tuple lists
    // =========================================================================

    #[test]
    fn list_of_garbage_is_single_default() {
        assert_eq!(decode_tuple_list(None), vec![ColorTuple::default()]);
        assert_eq!(decode_tuple_list(Some("")), vec![ColorTuple::default()]);
        assert_eq!(
            decode_tuple_list(Some("abc*def/1")),
            vec![ColorTuple::default()]
        );
    }

    #[test]
    fn list_collapses_duplicates() {
        let list = decode_tuple_list(Some("1/2*3/4*1/2"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].primary, Color(1));
        assert_eq!(list[1].primary, Color(3));
    }

    #[test]
    fn list_drops_invalid_segments() {
        let list = decode_tuple_list(Some("1*oops/2*3"));
        assert_eq!(
            list,
            vec![ColorTuple::from_primary(Color(1)), ColorTuple::from_primary(Color(3))]
        );
    }

    #[test]
    fn list_keeps_four_component_tuples_apart() {
        let tuples = vec![full_tuple(), ColorTuple::default()];
        assert_eq!(decode_tuple_list(Some(&encode_tuple_list(&tuples))), tuples);
    }
}
