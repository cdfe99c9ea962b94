//! Layout derivation from structure state
//!
//! [`derive_layout`] is a pure function from a kind and a sequence to a
//! [`LayoutDescription`]: the cells, labels and markers the visualization
//! pane draws. It holds no state, so calling it twice on the same input
//! gives the same layout.
//!
//! # Per-kind rules
//!
//! - **Array**: one cell per element, labeled with its 0-based index
//! - **Stack**: elements in reverse order, first one marked as the top
//! - **Queue**: elements in order between a front and a rear marker
//! - **Linked list**: nodes in order, each linked to the next, ending in `null`
//! - **Binary tree**: the first [`TREE_CAPACITY`] elements placed breadth-first
//!   onto three fixed levels. This is a flattening of insertion order, not a
//!   search tree; elements past slot 6 stay in the sequence but are not shown.

use crate::structures::StructureKind;

/// Number of slots in the three-level tree view
pub const TREE_CAPACITY: usize = 7;

/// Width of each tree level, root first
pub const TREE_LEVEL_WIDTHS: [usize; 3] = [1, 2, 4];

/// Marker drawn before the first queue element
pub const FRONT_MARKER: &str = "FRONT →";

/// Marker drawn after the last queue element
pub const REAR_MARKER: &str = "← REAR";

/// Sentinel node drawn after the last linked list node
pub const NULL_SENTINEL: &str = "null";

/// Label attached to the top stack element
pub const TOP_LABEL: &str = "TOP";

/// An array cell with its index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedCell {
    pub index: usize,
    pub value: i64,
}

/// A stack element in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackItem {
    pub value: i64,
    pub is_top: bool,
}

/// A linked list node; `has_next` is false for the last node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNode {
    pub value: i64,
    pub has_next: bool,
}

/// What the visualization pane draws for one structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDescription {
    Array { cells: Vec<IndexedCell> },
    Stack { items: Vec<StackItem> },
    Queue { items: Vec<i64> },
    LinkedList { nodes: Vec<ListNode> },
    BinaryTree { levels: [Vec<Option<i64>>; 3] },
}

impl LayoutDescription {
    /// The kind this layout was derived for
    pub fn kind(&self) -> StructureKind {
        match self {
            LayoutDescription::Array { .. } => StructureKind::Array,
            LayoutDescription::Stack { .. } => StructureKind::Stack,
            LayoutDescription::Queue { .. } => StructureKind::Queue,
            LayoutDescription::LinkedList { .. } => StructureKind::LinkedList,
            LayoutDescription::BinaryTree { .. } => StructureKind::BinaryTree,
        }
    }

    /// Values in the order they are drawn (tree: level by level, skipping empty slots)
    pub fn displayed_values(&self) -> Vec<i64> {
        match self {
            LayoutDescription::Array { cells } => cells.iter().map(|c| c.value).collect(),
            LayoutDescription::Stack { items } => items.iter().map(|i| i.value).collect(),
            LayoutDescription::Queue { items } => items.clone(),
            LayoutDescription::LinkedList { nodes } => nodes.iter().map(|n| n.value).collect(),
            LayoutDescription::BinaryTree { levels } => {
                levels.iter().flatten().filter_map(|slot| *slot).collect()
            }
        }
    }

    /// True when no value cell is drawn. Markers and sentinels don't count.
    pub fn is_empty(&self) -> bool {
        match self {
            LayoutDescription::Array { cells } => cells.is_empty(),
            LayoutDescription::Stack { items } => items.is_empty(),
            LayoutDescription::Queue { items } => items.is_empty(),
            LayoutDescription::LinkedList { nodes } => nodes.is_empty(),
            LayoutDescription::BinaryTree { levels } => {
                levels.iter().flatten().all(Option::is_none)
            }
        }
    }
}

/// Map a kind and its sequence to the layout the visualization pane draws
pub fn derive_layout(kind: StructureKind, sequence: &[i64]) -> LayoutDescription {
    match kind {
        StructureKind::Array => LayoutDescription::Array {
            cells: sequence
                .iter()
                .enumerate()
                .map(|(index, &value)| IndexedCell { index, value })
                .collect(),
        },
        StructureKind::Stack => LayoutDescription::Stack {
            items: sequence
                .iter()
                .rev()
                .enumerate()
                .map(|(i, &value)| StackItem {
                    value,
                    is_top: i == 0,
                })
                .collect(),
        },
        StructureKind::Queue => LayoutDescription::Queue {
            items: sequence.to_vec(),
        },
        StructureKind::LinkedList => LayoutDescription::LinkedList {
            nodes: sequence
                .iter()
                .enumerate()
                .map(|(i, &value)| ListNode {
                    value,
                    has_next: i + 1 < sequence.len(),
                })
                .collect(),
        },
        StructureKind::BinaryTree => LayoutDescription::BinaryTree {
            levels: tree_levels(sequence),
        },
    }
}

/// Place breadth-first slots 0..7 onto levels of width 1, 2 and 4
fn tree_levels(sequence: &[i64]) -> [Vec<Option<i64>>; 3] {
    let mut start = 0;
    TREE_LEVEL_WIDTHS.map(|width| {
        let level = (start..start + width)
            .map(|slot| sequence.get(slot).copied())
            .collect();
        start += width;
        level
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_levels_partial() {
        let levels = tree_levels(&[1, 2, 3, 4]);
        assert_eq!(levels[0], vec![Some(1)]);
        assert_eq!(levels[1], vec![Some(2), Some(3)]);
        assert_eq!(levels[2], vec![Some(4), None, None, None]);
    }

    #[test]
    fn test_tree_capacity_matches_level_widths() {
        assert_eq!(TREE_LEVEL_WIDTHS.iter().sum::<usize>(), TREE_CAPACITY);
    }

    #[test]
    fn test_linked_list_last_node_has_no_next() {
        let layout = derive_layout(StructureKind::LinkedList, &[7, 14]);
        assert_eq!(
            layout,
            LayoutDescription::LinkedList {
                nodes: vec![
                    ListNode { value: 7, has_next: true },
                    ListNode { value: 14, has_next: false },
                ]
            }
        );
    }

    #[test]
    fn test_layout_reports_its_kind() {
        for kind in StructureKind::ALL {
            assert_eq!(derive_layout(kind, &[1]).kind(), kind);
        }
    }
}
