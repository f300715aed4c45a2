//! Integer list fields: resize presets and screen ordering.
//!
//! Lists are stored as comma-separated decimal integers (`"500,250,100"`).
//! Decoding is null-filtering: entries that don't parse are dropped and the
//! remaining order is kept.

/// Separator between list entries.
pub const LIST_DELIMITER: char = ',';

pub fn encode_int_list(values: &[i32]) -> String {
    values
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(&LIST_DELIMITER.to_string())
}

pub fn decode_int_list(raw: Option<&str>) -> Vec<i32> {
    raw.into_iter()
        .flat_map(|r| r.split(LIST_DELIMITER))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match entry.parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::debug!("dropping non-numeric list entry {entry:?}");
                None
            }
        })
        .collect()
}

/// Decode a screen id list. Screen ids are ordinals, so negatives are dropped too.
pub fn decode_screen_list(raw: Option<&str>) -> Vec<i32> {
    decode_int_list(raw)
        .into_iter()
        .filter(|id| *id >= 0)
        .collect()
}

/// Resolves a stored preset id to its value, or `None` if it names nothing.
pub trait PresetResolver {
    fn resolve(&self, raw: i32) -> Option<i32>;
}

impl<F> PresetResolver for F
where
    F: Fn(i32) -> Option<i32>,
{
    fn resolve(&self, raw: i32) -> Option<i32> {
        self(raw)
    }
}

/// Stock resolver: presets are resize percentages in `1..=500`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentPresets;

impl PercentPresets {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 500;
}

impl PresetResolver for PercentPresets {
    fn resolve(&self, raw: i32) -> Option<i32> {
        (Self::MIN..=Self::MAX).contains(&raw).then_some(raw)
    }
}

/// Map every stored id through `resolver`, dropping the ones that resolve to nothing.
pub fn resolve_presets<R: PresetResolver + ?Sized>(raw: &[i32], resolver: &R) -> Vec<i32> {
    raw.iter().filter_map(|id| resolver.resolve(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_preserves_order() {
        assert_eq!(decode_int_list(Some("500,100,250")), vec![500, 100, 250]);
    }

    #[test]
    fn decode_drops_garbage_entries() {
        assert_eq!(decode_int_list(Some("1, x,,3 ,4.5")), vec![1, 3]);
    }

    #[test]
    fn decode_missing_is_empty() {
        assert!(decode_int_list(None).is_empty());
        assert!(decode_int_list(Some("")).is_empty());
    }

    #[test]
    fn encode_joins_with_commas() {
        assert_eq!(encode_int_list(&[3, -1, 7]), "3,-1,7");
        assert_eq!(encode_int_list(&[]), "");
    }

    #[test]
    fn screen_list_drops_negative_ids() {
        assert_eq!(decode_screen_list(Some("4,-2,0,9")), vec![4, 0, 9]);
    }

    #[test]
    fn percent_presets_bounds() {
        assert_eq!(PercentPresets.resolve(0), None);
        assert_eq!(PercentPresets.resolve(1), Some(1));
        assert_eq!(PercentPresets.resolve(500), Some(500));
        assert_eq!(PercentPresets.resolve(501), None);
    }

    #[test]
    fn resolve_presets_drops_unresolved_and_keeps_order() {
        let resolver = |id: i32| (id % 2 == 0).then_some(id * 10);
        assert_eq!(resolve_presets(&[2, 3, 4, 1, 6], &resolver), vec![20, 40, 60]);
    }
}
