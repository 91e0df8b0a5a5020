//! # Variant Key
//!
//! Order-insensitive identity for a set of selected options.
//!
//! ```text
//!   [Size=Large, Temp=Iced]  ──┐
//!                              ├──► sort by (group, option) ──► [(1,11),(2,21)]
//!   [Temp=Iced, Size=Large]  ──┘
//! ```
//!
//! Two selections are the same variant iff their keys are equal. Display
//! names and prices never take part in the comparison.

use std::fmt;

use crate::order::OptionRef;
use crate::types::SelectedOption;

/// Canonical `(group_id, option_id)` list, sorted ascending.
///
/// Duplicated pairs are kept, so the key identifies a multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey(Vec<(i64, i64)>);

impl VariantKey {
    /// Key of the empty selection.
    pub fn empty() -> Self {
        VariantKey(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key for bare `(groupId, optionId)` references.
    ///
    /// Needs no catalog lookup: the key of a cart line stays computable after
    /// its menu or options are deleted.
    pub fn from_refs(refs: &[OptionRef]) -> Self {
        VariantKey::from_pairs(refs.iter().map(|r| (r.group_id, r.option_id)))
    }

    fn from_pairs(pairs: impl Iterator<Item = (i64, i64)>) -> Self {
        let mut pairs: Vec<(i64, i64)> = pairs.collect();
        pairs.sort_unstable();
        VariantKey(pairs)
    }

    fn refs(&self) -> Vec<OptionRef> {
        self.0
            .iter()
            .map(|&(group_id, option_id)| OptionRef { group_id, option_id })
            .collect()
    }
}

/// Builds the canonical key for a selection.
///
/// ```rust
/// use kiosk_core::{canonical_key, SelectedOption, Translations};
///
/// let pick = |group_id, option_id| SelectedOption {
///     group_id,
///     option_id,
///     group_name: String::new(),
///     group_name_translations: Translations::new(),
///     option_name: String::new(),
///     option_name_translations: Translations::new(),
///     price_modifier: 0,
/// };
///
/// let a = canonical_key(&[pick(2, 21), pick(1, 11)]);
/// let b = canonical_key(&[pick(1, 11), pick(2, 21)]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), r#"[{"groupId":1,"optionId":11},{"groupId":2,"optionId":21}]"#);
/// ```
pub fn canonical_key(options: &[SelectedOption]) -> VariantKey {
    VariantKey::from_pairs(options.iter().map(|o| (o.group_id, o.option_id)))
}

/// Stable JSON form; the storefront uses it as the tile key.
impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.refs()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Translations;

    fn pick(group_id: i64, option_id: i64, name: &str, price: i64) -> SelectedOption {
        SelectedOption {
            group_id,
            option_id,
            group_name: format!("group {}", group_id),
            group_name_translations: Translations::new(),
            option_name: name.to_string(),
            option_name_translations: Translations::new(),
            price_modifier: price,
        }
    }

    #[test]
    fn test_empty_selection_has_fixed_key() {
        let key = canonical_key(&[]);
        assert!(key.is_empty());
        assert_eq!(key, VariantKey::empty());
        assert_eq!(key.to_string(), "[]");
    }

    #[test]
    fn test_key_is_order_invariant() {
        let a = [pick(1, 10, "Hot", 0), pick(2, 21, "Large", 1000), pick(3, 30, "Oat", 500)];
        let permutations = [
            vec![a[0].clone(), a[1].clone(), a[2].clone()],
            vec![a[2].clone(), a[1].clone(), a[0].clone()],
            vec![a[1].clone(), a[2].clone(), a[0].clone()],
        ];
        let expected = canonical_key(&a);
        for p in &permutations {
            assert_eq!(canonical_key(p), expected);
        }
    }

    #[test]
    fn test_key_ignores_display_and_price_fields() {
        let a = canonical_key(&[pick(1, 10, "Hot", 0)]);
        let b = canonical_key(&[pick(1, 10, "따뜻하게", 700)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_pairs_give_different_keys() {
        let hot = canonical_key(&[pick(1, 10, "Hot", 0)]);
        let iced = canonical_key(&[pick(1, 11, "Iced", 500)]);
        let other_group = canonical_key(&[pick(2, 10, "Hot", 0)]);
        assert_ne!(hot, iced);
        assert_ne!(hot, other_group);
        assert_ne!(hot, VariantKey::empty());
    }

    #[test]
    fn test_key_is_a_multiset() {
        let once = canonical_key(&[pick(1, 10, "Hot", 0)]);
        let twice = canonical_key(&[pick(1, 10, "Hot", 0), pick(1, 10, "Hot", 0)]);
        assert_ne!(once, twice);
    }

    #[test]
    fn test_ties_on_group_sort_by_option() {
        let key = canonical_key(&[pick(1, 12, "b", 0), pick(1, 11, "a", 0)]);
        assert_eq!(
            key.to_string(),
            r#"[{"groupId":1,"optionId":11},{"groupId":1,"optionId":12}]"#
        );
    }

    #[test]
    fn test_refs_and_selections_share_keys() {
        let from_selection = canonical_key(&[pick(2, 21, "Large", 1000), pick(1, 11, "Iced", 500)]);
        let from_refs = VariantKey::from_refs(&[
            OptionRef { group_id: 1, option_id: 11 },
            OptionRef { group_id: 2, option_id: 21 },
        ]);
        assert_eq!(from_selection, from_refs);
        assert_eq!(VariantKey::from_refs(&[]), VariantKey::empty());
    }
}
