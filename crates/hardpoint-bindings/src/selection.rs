//! Hardpoint selection: an ordered set of indices into the `BlockIndex`.

use crate::block_index::BlockIndex;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: Vec<usize>,
}

impl SelectionSet {
    /// Replace the selection with `{index}`.
    pub fn select_single(&mut self, index: usize) {
        self.selected.clear();
        self.selected.push(index);
    }

    /// Replace the selection with every hardpoint sharing `index`'s type tag.
    pub fn select_all_of_type(&mut self, index: usize, blocks: &BlockIndex) {
        self.selected = blocks.same_type(index);
    }

    /// Empty the selection. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.selected.is_empty();
        self.selected.clear();
        had_any
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::cluster::BlockCluster;
    use crate::world_setup::{autocannon, missile_launcher, place};

    fn index_aab() -> BlockIndex {
        let mut cluster = BlockCluster::new();
        place(&mut cluster, autocannon(), Vec2::new(0.0, 0.0), 4.0);
        place(&mut cluster, autocannon(), Vec2::new(10.0, 0.0), 4.0);
        place(&mut cluster, missile_launcher(), Vec2::new(20.0, 0.0), 4.0);
        BlockIndex::scan(&cluster)
    }

    #[test]
    fn test_select_single_replaces() {
        let mut selection = SelectionSet::default();
        selection.select_single(2);
        selection.select_single(0);
        assert_eq!(selection.as_slice(), &[0]);
        assert!(selection.contains(0));
        assert!(!selection.contains(2));
    }

    #[test]
    fn test_select_all_of_type() {
        let blocks = index_aab();
        let mut selection = SelectionSet::default();
        selection.select_single(2);

        selection.select_all_of_type(1, &blocks);
        assert_eq!(selection.as_slice(), &[0, 1]);

        selection.select_all_of_type(2, &blocks);
        assert_eq!(selection.as_slice(), &[2]);
    }

    #[test]
    fn test_clear_reports_prior_state() {
        let mut selection = SelectionSet::default();
        assert!(!selection.clear());
        selection.select_single(1);
        assert!(selection.clear());
        assert!(selection.is_empty());
        assert!(!selection.clear());
    }
}
