//! Hover description memo.
//!
//! Identifiers are non-negative for hardpoints (index into the `BlockIndex`)
//! and `-(group + 1)` for fire-group buttons.

use std::sync::Arc;

use hardpoint_core::constants::{FG_DEFENSE, FIRE_GROUP_DESCRIPTIONS};

use crate::block_index::BlockIndex;
use crate::fire_groups::FireGroupTable;

/// Remembers the text of the last identifier asked for.
#[derive(Debug, Clone, Default)]
pub struct TooltipCache {
    last: Option<(i32, Arc<str>)>,
}

impl TooltipCache {
    /// Return the memoized text for `ident`, computing it only when `ident`
    /// differs from the previous request.
    pub fn get_or_compute(&mut self, ident: i32, compute: impl FnOnce() -> String) -> Arc<str> {
        if let Some((last_ident, text)) = &self.last {
            if *last_ident == ident {
                return Arc::clone(text);
            }
        }
        let text: Arc<str> = compute().into();
        self.last = Some((ident, Arc::clone(&text)));
        text
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn last_ident(&self) -> Option<i32> {
        self.last.as_ref().map(|(ident, _)| *ident)
    }
}

/// Build the tooltip text for `ident`.
pub fn describe(ident: i32, blocks: &BlockIndex, groups: &FireGroupTable) -> String {
    if ident < 0 {
        let index = (-ident - 1) as usize;
        let mut text = FIRE_GROUP_DESCRIPTIONS
            .get(index)
            .copied()
            .unwrap_or_default()
            .to_string();
        if index != FG_DEFENSE {
            if let Ok(mode) = groups.fire_mode(index) {
                text.push('\n');
                text.push_str(mode.hint());
            }
        }
        text
    } else {
        let name = blocks
            .get(ident as usize)
            .map(|h| h.name.as_str())
            .unwrap_or_default();
        format!("Double click to select all {name}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_ident_returns_identical_text() {
        let mut cache = TooltipCache::default();
        let first = cache.get_or_compute(3, || "three".to_string());
        let second = cache.get_or_compute(3, || unreachable!("must be cached"));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_new_ident_recomputes() {
        let mut cache = TooltipCache::default();
        let a = cache.get_or_compute(-1, || "group".to_string());
        let b = cache.get_or_compute(0, || "hardpoint".to_string());
        assert_eq!(&*a, "group");
        assert_eq!(&*b, "hardpoint");
        assert_eq!(cache.last_ident(), Some(0));

        let c = cache.get_or_compute(-1, || "group again".to_string());
        assert_eq!(&*c, "group again");
        assert!(!Arc::ptr_eq(&a, &c));
    }

    /// A fresh cache must not answer for group 0, whose identifier is -1.
    #[test]
    fn test_invalidate_has_no_stale_sentinel() {
        let mut cache = TooltipCache::default();
        cache.get_or_compute(-1, || "old".to_string());
        cache.invalidate();
        assert_eq!(cache.last_ident(), None);
        let text = cache.get_or_compute(-1, || "new".to_string());
        assert_eq!(&*text, "new");
    }

    #[test]
    fn test_describe_groups() {
        let blocks = BlockIndex::default();
        let mut groups = FireGroupTable::default();

        let primary = describe(-1, &blocks, &groups);
        assert!(primary.starts_with(FIRE_GROUP_DESCRIPTIONS[0]));
        assert!(primary.ends_with("Fire all weapons in group simultaneously"));

        groups.toggle_fire_mode(0);
        let primary = describe(-1, &blocks, &groups);
        assert!(primary.ends_with("Ripple Fire alternates weapons to maximize rate of fire"));

        let defense = describe(-(FG_DEFENSE as i32 + 1), &blocks, &groups);
        assert_eq!(defense, FIRE_GROUP_DESCRIPTIONS[FG_DEFENSE]);
    }
}
