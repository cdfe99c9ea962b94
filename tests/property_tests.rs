use dsviz::layout::{derive_layout, LayoutDescription, TREE_CAPACITY};
use dsviz::structures::{StructureKind, StructureStore};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = StructureKind> {
    prop::sample::select(StructureKind::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum Action {
    Select(StructureKind),
    Add(i64),
    AddText(String),
    Remove,
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        any_kind().prop_map(Action::Select),
        any::<i64>().prop_map(Action::Add),
        "[a-z]{1,4}".prop_map(Action::AddText),
        Just(Action::Remove),
    ]
}

/// Straightforward model of one sequence per kind
fn apply_to_model(model: &mut [Vec<i64>; 5], active: &mut StructureKind, action: &Action) {
    let seq = &mut model[active.index()];
    match action {
        Action::Select(kind) => *active = *kind,
        Action::Add(value) => seq.push(*value),
        Action::AddText(_) => {}
        Action::Remove => {
            if !seq.is_empty() {
                if *active == StructureKind::Queue {
                    seq.remove(0);
                } else {
                    seq.pop();
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn store_matches_model(actions in prop::collection::vec(any_action(), 0..64)) {
        let mut store = StructureStore::new();
        let mut model = StructureKind::ALL.map(StructureKind::seed);
        let mut active = StructureKind::Array;

        for action in &actions {
            match action {
                Action::Select(kind) => store.select_kind(*kind),
                Action::Add(value) => {
                    store.set_input(&value.to_string());
                    prop_assert_eq!(store.append(), Ok(*value));
                }
                Action::AddText(text) => {
                    store.set_input(text);
                    prop_assert!(store.append().is_err());
                    prop_assert_eq!(store.input(), text.as_str());
                }
                Action::Remove => {
                    store.remove();
                }
            }
            apply_to_model(&mut model, &mut active, action);
            prop_assert_eq!(store.active(), active);
        }

        for kind in StructureKind::ALL {
            prop_assert_eq!(store.sequence(kind), model[kind.index()].as_slice());
        }
    }

    #[test]
    fn append_then_remove_restores_except_queue(
        kind in any_kind(),
        seq in prop::collection::vec(any::<i64>(), 0..16),
        value in any::<i64>(),
    ) {
        let mut store = StructureStore::with_active(kind);
        while store.remove().is_some() {}
        for v in &seq {
            store.append_value(*v);
        }

        store.append_value(value);
        store.remove();

        if kind != StructureKind::Queue || seq.is_empty() {
            prop_assert_eq!(store.active_sequence(), seq.as_slice());
        } else {
            let mut expected = seq[1..].to_vec();
            expected.push(value);
            prop_assert_eq!(store.active_sequence(), expected.as_slice());
        }
    }

    #[test]
    fn layout_shows_every_value_except_tree_overflow(
        kind in any_kind(),
        seq in prop::collection::vec(any::<i64>(), 0..20),
    ) {
        let layout = derive_layout(kind, &seq);
        let shown = layout.displayed_values();
        match layout {
            LayoutDescription::Stack { .. } => {
                let reversed: Vec<i64> = seq.iter().rev().copied().collect();
                prop_assert_eq!(shown, reversed);
            }
            LayoutDescription::BinaryTree { .. } => {
                let visible = seq.len().min(TREE_CAPACITY);
                prop_assert_eq!(shown, seq[..visible].to_vec());
            }
            _ => prop_assert_eq!(shown, seq),
        }
    }
}
