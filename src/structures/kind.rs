//! The five structure kinds and their per-kind labels

use super::constants::{
    ARRAY_SEED, BINARY_TREE_SEED, LINKED_LIST_SEED, QUEUE_SEED, STACK_SEED,
};
use clap::ValueEnum;
use std::fmt;

/// Which data structure is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum StructureKind {
    #[default]
    Array,
    Stack,
    Queue,
    LinkedList,
    BinaryTree,
}

/// The end of a sequence that `remove` takes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveEnd {
    Front,
    Back,
}

impl StructureKind {
    /// All kinds, in selector order
    pub const ALL: [StructureKind; 5] = [
        StructureKind::Array,
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::LinkedList,
        StructureKind::BinaryTree,
    ];

    /// Human-readable name shown in the selector
    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::LinkedList => "Linked List",
            StructureKind::BinaryTree => "Binary Tree",
        }
    }

    /// One-line summary of the structure's asymptotic behavior
    pub fn description(self) -> &'static str {
        match self {
            StructureKind::Array => {
                "Array: A contiguous collection of elements accessed by index. O(1) access, O(n) insertion/deletion."
            }
            StructureKind::Stack => {
                "Stack: LIFO (Last In, First Out) structure. Push and pop from the top. O(1) operations."
            }
            StructureKind::Queue => {
                "Queue: FIFO (First In, First Out) structure. Enqueue at rear, dequeue from front. O(1) operations."
            }
            StructureKind::LinkedList => {
                "Linked List: Nodes connected via pointers. O(1) insertion at head, O(n) search and access."
            }
            StructureKind::BinaryTree => {
                "Binary Tree: Hierarchical structure where each node has up to 2 children. O(log n) operations in balanced trees."
            }
        }
    }

    /// Label for the add action, e.g. "Add (Push)"
    pub fn add_label(self) -> &'static str {
        match self {
            StructureKind::Stack => "Add (Push)",
            StructureKind::Queue => "Add (Enqueue)",
            _ => "Add",
        }
    }

    /// Label for the remove action, e.g. "Remove (Dequeue)"
    pub fn remove_label(self) -> &'static str {
        match self {
            StructureKind::Stack => "Remove (Pop)",
            StructureKind::Queue => "Remove (Dequeue)",
            _ => "Remove",
        }
    }

    /// Which end `remove` takes from. Only the queue dequeues from the front.
    pub fn remove_end(self) -> RemoveEnd {
        match self {
            StructureKind::Queue => RemoveEnd::Front,
            _ => RemoveEnd::Back,
        }
    }

    /// Values the sequence for this kind starts with
    pub fn seed(self) -> Vec<i64> {
        match self {
            StructureKind::Array => ARRAY_SEED.to_vec(),
            StructureKind::Stack => STACK_SEED.to_vec(),
            StructureKind::Queue => QUEUE_SEED.to_vec(),
            StructureKind::LinkedList => LINKED_LIST_SEED.to_vec(),
            StructureKind::BinaryTree => BINARY_TREE_SEED.to_vec(),
        }
    }

    /// Position in [`StructureKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            StructureKind::Array => 0,
            StructureKind::Stack => 1,
            StructureKind::Queue => 2,
            StructureKind::LinkedList => 3,
            StructureKind::BinaryTree => 4,
        }
    }

    /// Next kind in selector order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous kind in selector order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
