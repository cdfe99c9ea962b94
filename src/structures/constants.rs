// Seed values for each structure

/// Initial contents of the array view
pub const ARRAY_SEED: [i64; 5] = [5, 3, 8, 1, 9];

/// Initial contents of the stack view (last element is the top)
pub const STACK_SEED: [i64; 3] = [10, 20, 30];

/// Initial contents of the queue view (first element is the front)
pub const QUEUE_SEED: [i64; 4] = [1, 2, 3, 4];

/// Initial contents of the linked list view
pub const LINKED_LIST_SEED: [i64; 4] = [7, 14, 21, 28];

/// Initial contents of the binary tree view, in breadth-first slot order
pub const BINARY_TREE_SEED: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];
