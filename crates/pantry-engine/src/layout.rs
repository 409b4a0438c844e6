//! Two-column card placement.
//!
//! Cards are assigned greedily to the shorter column. A card that is
//! currently expanded stays in the column it was last placed in, so toggling
//! it open does not make it jump sideways; cards after it are placed using
//! their collapsed height.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Share of a card's height by which the left column may be taller and
/// still receive the card
pub const BIAS_RATIO: f64 = 0.5;

/// Extra slack (in measurement units) for cards placed after an expanded
/// card, absorbing sub-unit measurement noise
pub const JITTER_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    pub bias_ratio: f64,
    pub jitter_tolerance: f64,
    /// Vertical gap between consecutive cards of one column
    pub gap: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            bias_ratio: BIAS_RATIO,
            jitter_tolerance: JITTER_TOLERANCE,
            gap: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// Measure the card in its current expanded/collapsed state
    AsIs,
    /// Measure the card as if it were collapsed
    ForceCollapsed,
}

/// A card the layout engine can place
pub trait LayoutItem {
    type Key: Clone + Eq + Hash;

    fn layout_key(&self) -> Self::Key;
    fn is_expanded(&self) -> bool;
}

/// Height measurement capability.
///
/// Implementations render the card off-screen at the target column width
/// and report its height; they must not affect what is on screen.
pub trait Measure<I: ?Sized> {
    fn measure(&self, item: &I, mode: MeasureMode) -> f64;
}

/// Result of a layout pass: card keys per column in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAssignment<K> {
    pub left: Vec<K>,
    pub right: Vec<K>,
    pub left_height: f64,
    pub right_height: f64,
}

impl<K: PartialEq> ColumnAssignment<K> {
    pub fn column_of(&self, key: &K) -> Option<Column> {
        if self.left.contains(key) {
            Some(Column::Left)
        } else if self.right.contains(key) {
            Some(Column::Right)
        } else {
            None
        }
    }

    pub fn column(&self, column: Column) -> &[K] {
        match column {
            Column::Left => &self.left,
            Column::Right => &self.right,
        }
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

struct ColumnAcc<K> {
    keys: Vec<K>,
    height: f64,
}

impl<K> ColumnAcc<K> {
    fn new() -> Self {
        Self {
            keys: Vec::new(),
            height: 0.0,
        }
    }

    fn push(&mut self, key: K, height: f64, gap: f64) {
        if !self.keys.is_empty() {
            self.height += gap;
        }
        self.height += height;
        self.keys.push(key);
    }
}

/// Places cards into two balanced columns and remembers where each card
/// went, which is what keeps an expanded card pinned across passes.
#[derive(Debug)]
pub struct LayoutEngine<K> {
    tuning: LayoutTuning,
    last_placement: HashMap<K, Column>,
}

impl<K: Clone + Eq + Hash> Default for LayoutEngine<K> {
    fn default() -> Self {
        Self::new(LayoutTuning::default())
    }
}

impl<K: Clone + Eq + Hash> LayoutEngine<K> {
    pub fn new(tuning: LayoutTuning) -> Self {
        Self {
            tuning,
            last_placement: HashMap::new(),
        }
    }

    pub fn tuning(&self) -> &LayoutTuning {
        &self.tuning
    }

    /// Column a card was assigned to by the most recent pass
    pub fn placement(&self, key: &K) -> Option<Column> {
        self.last_placement.get(key).copied()
    }

    /// Forget every remembered placement
    pub fn reset(&mut self) {
        self.last_placement.clear();
    }

    /// Assign `items` (in display order) to the two columns.
    ///
    /// Only the first expanded item is treated as expanded. Placements of
    /// keys absent from `items` are forgotten afterwards.
    pub fn layout<I, M>(&mut self, items: &[I], measure: &M) -> ColumnAssignment<K>
    where
        I: LayoutItem<Key = K>,
        M: Measure<I> + ?Sized,
    {
        let expanded_index = items.iter().position(|item| item.is_expanded());
        let mut left = ColumnAcc::new();
        let mut right = ColumnAcc::new();
        let gap = self.tuning.gap;

        for (index, item) in items.iter().enumerate() {
            let key = item.layout_key();
            let height = measure.measure(item, MeasureMode::AsIs);

            let column = match expanded_index {
                Some(pinned) if index == pinned => self
                    .placement(&key)
                    .unwrap_or_else(|| self.balanced(left.height, right.height, height)),
                Some(pinned) if index > pinned => {
                    let collapsed = measure.measure(item, MeasureMode::ForceCollapsed);
                    self.after_expanded(left.height, right.height, collapsed)
                }
                _ => self.balanced(left.height, right.height, height),
            };

            self.last_placement.insert(key.clone(), column);
            match column {
                Column::Left => left.push(key, height, gap),
                Column::Right => right.push(key, height, gap),
            }
        }

        let present: HashSet<K> = items.iter().map(|i| i.layout_key()).collect();
        self.last_placement.retain(|key, _| present.contains(key));

        ColumnAssignment {
            left: left.keys,
            right: right.keys,
            left_height: left.height,
            right_height: right.height,
        }
    }

    /// Single-column arrangement for list view: input order, no balancing,
    /// no measurement and no placement memory.
    pub fn stack<I>(&self, items: &[I]) -> ColumnAssignment<K>
    where
        I: LayoutItem<Key = K>,
    {
        ColumnAssignment {
            left: items.iter().map(|i| i.layout_key()).collect(),
            right: Vec::new(),
            left_height: 0.0,
            right_height: 0.0,
        }
    }

    /// Shorter column wins; a left column taller by at most
    /// `bias_ratio * height` still gets the card.
    fn balanced(&self, left: f64, right: f64, height: f64) -> Column {
        let lead = left - right;
        if lead <= 0.0 || lead <= height * self.tuning.bias_ratio {
            Column::Left
        } else {
            Column::Right
        }
    }

    fn after_expanded(&self, left: f64, right: f64, collapsed: f64) -> Column {
        let threshold = right + collapsed * self.tuning.bias_ratio + self.tuning.jitter_tolerance;
        if left <= threshold {
            Column::Left
        } else {
            Column::Right
        }
    }
}

/// Coalesces relayout requests so at most one layout pass runs per tick.
#[derive(Debug, Default)]
pub struct RelayoutGate {
    pending: bool,
    runs: u64,
}

impl RelayoutGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Called once per tick: true when a layout pass should run now
    pub fn take(&mut self) -> bool {
        if std::mem::take(&mut self.pending) {
            self.runs += 1;
            true
        } else {
            false
        }
    }

    /// Number of passes granted so far
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Card {
        id: u32,
        collapsed: f64,
        expanded_extra: f64,
        expanded: bool,
    }

    impl Card {
        fn new(id: u32, collapsed: f64) -> Self {
            Self {
                id,
                collapsed,
                expanded_extra: 0.0,
                expanded: false,
            }
        }

        fn expanded_by(mut self, extra: f64) -> Self {
            self.expanded_extra = extra;
            self.expanded = true;
            self
        }
    }

    impl LayoutItem for Card {
        type Key = u32;

        fn layout_key(&self) -> u32 {
            self.id
        }

        fn is_expanded(&self) -> bool {
            self.expanded
        }
    }

    struct FakeMeasure;

    impl Measure<Card> for FakeMeasure {
        fn measure(&self, item: &Card, mode: MeasureMode) -> f64 {
            match mode {
                MeasureMode::AsIs if item.expanded => item.collapsed + item.expanded_extra,
                _ => item.collapsed,
            }
        }
    }

    fn cards(heights: &[f64]) -> Vec<Card> {
        heights
            .iter()
            .enumerate()
            .map(|(i, h)| Card::new(i as u32 + 1, *h))
            .collect()
    }

    #[test]
    fn test_equal_cards_alternate() {
        let mut engine = LayoutEngine::default();
        let result = engine.layout(&cards(&[10.0, 10.0, 10.0, 10.0, 10.0]), &FakeMeasure);

        assert_eq!(result.left, vec![1, 3, 5]);
        assert_eq!(result.right, vec![2, 4]);
        assert_eq!(result.left_height, 30.0);
        assert_eq!(result.right_height, 20.0);
    }

    #[test]
    fn test_small_lead_keeps_card_on_left() {
        let mut engine = LayoutEngine::default();
        // After 1 (left) and 2 (right): left leads by 2, card 3 is 10 tall,
        // 2 <= 10 * 0.5 so it still goes left. Card 4 faces a lead of 12,
        // more than half its height, so it goes right.
        let result = engine.layout(&cards(&[12.0, 10.0, 10.0, 20.0]), &FakeMeasure);

        assert_eq!(result.left, vec![1, 3]);
        assert_eq!(result.right, vec![2, 4]);
    }

    #[test]
    fn test_large_lead_sends_card_right() {
        let mut engine = LayoutEngine::default();
        let result = engine.layout(&cards(&[40.0, 10.0, 10.0]), &FakeMeasure);

        assert_eq!(result.left, vec![1]);
        assert_eq!(result.right, vec![2, 3]);
    }

    #[test]
    fn test_gap_counts_between_cards_only() {
        let tuning = LayoutTuning {
            gap: 2.0,
            ..LayoutTuning::default()
        };
        let mut engine = LayoutEngine::new(tuning);
        let result = engine.layout(&cards(&[10.0, 10.0, 10.0]), &FakeMeasure);

        assert_eq!(result.left, vec![1, 3]);
        assert_eq!(result.left_height, 22.0);
        assert_eq!(result.right_height, 10.0);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut engine = LayoutEngine::default();
        let mut items = cards(&[14.0, 9.0, 22.0, 7.0, 7.0, 31.0, 12.0]);
        items[3] = items[3].clone().expanded_by(40.0);

        let first = engine.layout(&items, &FakeMeasure);
        let second = engine.layout(&items, &FakeMeasure);

        assert_eq!(first, second);
    }

    #[test]
    fn test_expanded_card_keeps_its_column() {
        let mut engine = LayoutEngine::default();
        let mut items = cards(&[10.0, 10.0, 10.0, 10.0]);

        let collapsed = engine.layout(&items, &FakeMeasure);
        assert_eq!(collapsed.column_of(&2), Some(Column::Right));

        // Expanding card 2 must not move it, even though balancing alone
        // would now favour the left column for it.
        items[1] = items[1].clone().expanded_by(100.0);
        let expanded = engine.layout(&items, &FakeMeasure);

        assert_eq!(expanded.column_of(&2), Some(Column::Right));
        assert_eq!(expanded.left, vec![1, 3, 4]);
    }

    #[test]
    fn test_first_placement_of_expanded_card_is_balanced() {
        let mut engine = LayoutEngine::default();
        let mut items = cards(&[40.0, 10.0]);
        items[1] = items[1].clone().expanded_by(50.0);

        let result = engine.layout(&items, &FakeMeasure);
        assert_eq!(result.column_of(&2), Some(Column::Right));
    }

    #[test]
    fn test_cards_after_expanded_use_collapsed_height() {
        let mut engine = LayoutEngine::default();
        // Card 1 expanded to 60 on the left. Card 2 (collapsed 10):
        // 60 <= 0 + 5 + 1 is false, so it goes right. Card 3 (collapsed 100):
        // 60 <= 10 + 50 + 1 holds, so it goes left despite being taller.
        let items = vec![
            Card::new(1, 20.0).expanded_by(40.0),
            Card::new(2, 10.0),
            Card::new(3, 100.0),
        ];

        let result = engine.layout(&items, &FakeMeasure);
        assert_eq!(result.left, vec![1, 3]);
        assert_eq!(result.right, vec![2]);
    }

    #[test]
    fn test_jitter_tolerance_keeps_card_left() {
        let mut engine = LayoutEngine::default();
        // Left leads by 20.5: past 40 * 0.5 but within the extra 1.0
        let items = vec![
            Card::new(1, 10.0).expanded_by(10.5),
            Card::new(2, 40.0),
        ];

        let result = engine.layout(&items, &FakeMeasure);
        assert_eq!(result.left, vec![1, 2]);
        assert!(result.right.is_empty());
    }

    #[test]
    fn test_lead_past_jitter_tolerance_goes_right() {
        let mut engine = LayoutEngine::default();
        let items = vec![
            Card::new(1, 10.0).expanded_by(11.5),
            Card::new(2, 40.0),
        ];

        let result = engine.layout(&items, &FakeMeasure);
        assert_eq!(result.left, vec![1]);
        assert_eq!(result.right, vec![2]);
    }

    #[test]
    fn test_only_first_expanded_card_is_pinned() {
        let mut engine = LayoutEngine::default();
        let items = vec![
            Card::new(1, 10.0).expanded_by(10.0),
            Card::new(2, 10.0).expanded_by(10.0),
        ];

        let result = engine.layout(&items, &FakeMeasure);
        // Card 2 follows the post-expanded rule: 20 <= 0 + 5 + 1 fails
        assert_eq!(result.right, vec![2]);
    }

    #[test]
    fn test_placements_of_removed_cards_are_forgotten() {
        let mut engine = LayoutEngine::default();
        engine.layout(&cards(&[10.0, 10.0, 10.0]), &FakeMeasure);
        assert_eq!(engine.placement(&3), Some(Column::Left));

        engine.layout(&cards(&[10.0, 10.0]), &FakeMeasure);
        assert_eq!(engine.placement(&3), None);
    }

    #[test]
    fn test_stack_keeps_input_order() {
        let engine = LayoutEngine::default();
        let result = engine.stack(&cards(&[50.0, 1.0, 20.0]));

        assert_eq!(result.left, vec![1, 2, 3]);
        assert!(result.right.is_empty());
        assert_eq!(engine.placement(&1), None);
    }

    #[test]
    fn test_relayout_gate_coalesces_requests() {
        let mut gate = RelayoutGate::new();
        assert!(!gate.take());

        gate.request();
        gate.request();
        gate.request();
        assert!(gate.is_pending());
        assert!(gate.take());
        assert!(!gate.take());
        assert_eq!(gate.runs(), 1);
    }
}
