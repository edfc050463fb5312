//! Three-tier selector specificity and the selector ordering built on it.
//!
//! Specificity is the tuple
//!
//! ```text
//! (id_weight, class_weight, tag_weight)
//! ```
//!
//! where `id_weight` is 1 when an id is present (not the id's length),
//! `class_weight` counts classes, and `tag_weight` is 1 when a tag name is
//! present. Fields are ordered so the derived `Ord` is the lexicographic
//! comparison. It is always recomputed from the selector, never cached.

use std::cmp::Ordering;

use crate::css::model::Selector;

/// Selector specificity; a higher value means a more specific selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity {
    /// 1 if the selector has an id, else 0.
    pub id_weight: u32,
    /// Number of class selectors.
    pub class_weight: u32,
    /// 1 if the selector has a tag name, else 0.
    pub tag_weight: u32,
}

impl Specificity {
    pub fn new(id_weight: u32, class_weight: u32, tag_weight: u32) -> Self {
        Self {
            id_weight,
            class_weight,
            tag_weight,
        }
    }

    /// Compute specificity from a parsed selector. `*` contributes nothing.
    pub fn of(selector: &Selector) -> Self {
        let simple = selector.simple();
        Self {
            id_weight: u32::from(simple.id.is_some()),
            class_weight: u32::try_from(simple.classes.len()).unwrap_or(u32::MAX),
            tag_weight: u32::from(simple.tag_name.is_some()),
        }
    }
}

/// Total order used to sort a rule's selectors.
///
/// More specific selectors come first. Equal specificity falls back to
/// ascending tag name, with an absent tag name ordered as `""`.
pub fn compare_selectors(a: &Selector, b: &Selector) -> Ordering {
    b.specificity()
        .cmp(&a.specificity())
        .then_with(|| tag_key(a).cmp(tag_key(b)))
}

/// Stable sort by [`compare_selectors`].
pub fn sort_selectors(selectors: &mut [Selector]) {
    selectors.sort_by(compare_selectors);
}

fn tag_key(selector: &Selector) -> &str {
    selector.simple().tag_name.as_deref().unwrap_or("")
}
