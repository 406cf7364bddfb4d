// This file is part of raw-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model-based checks: every operation sequence must leave a `Vector` with
//! the same contents as a `Vec` driven by the same operations.

use proptest::prelude::*;
use raw_vector::{Cloning, Moving, Transfer, Vector};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Insert(usize, i32),
    Erase(usize),
    PopBack,
    Reserve(usize),
    Resize(usize),
    Truncate(usize),
    CloneFrom(Vec<i32>),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        3 => (any::<usize>(), any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => Just(Op::PopBack),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..48).prop_map(Op::Resize),
        1 => (0usize..48).prop_map(Op::Truncate),
        1 => proptest::collection::vec(any::<i32>(), 0..24).prop_map(Op::CloneFrom),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` to both and checks the capacity rules that hold for it.
fn apply<S: Transfer<i32>>(v: &mut Vector<i32, S>, model: &mut Vec<i32>, op: &Op) {
    let cap_before = v.capacity();
    match *op {
        Op::Push(x) => {
            let full = v.len() == v.capacity();
            let len = v.len();
            v.push(x);
            model.push(x);
            if full {
                assert_eq!(v.capacity(), (2 * len).max(1));
            }
        }
        Op::Insert(i, x) => {
            let i = i % (model.len() + 1);
            assert_eq!(v.insert(i, x), i);
            model.insert(i, x);
        }
        Op::Erase(i) => {
            if model.is_empty() {
                return;
            }
            let i = i % model.len();
            assert_eq!(v.erase(i), i);
            model.remove(i);
            assert_eq!(v.capacity(), cap_before);
        }
        Op::PopBack => {
            v.pop_back();
            model.pop();
        }
        Op::Reserve(n) => {
            v.reserve(n);
            assert_eq!(v.capacity(), cap_before.max(n));
        }
        Op::Resize(n) => {
            v.resize(n);
            model.resize(n, 0);
            assert_eq!(v.capacity(), cap_before.max(n));
        }
        Op::Truncate(n) => {
            v.truncate(n);
            model.truncate(n);
            assert_eq!(v.capacity(), cap_before);
        }
        Op::CloneFrom(ref src) => {
            let source: Vector<i32, S> = Vector::from(&src[..]);
            v.clone_from(&source);
            model.clone_from(src);
            assert!(v.capacity() >= cap_before);
        }
        Op::Clear => {
            v.clear();
            model.clear();
            assert_eq!(v.capacity(), cap_before);
        }
    }
}

fn run<S: Transfer<i32>>(ops: &[Op]) {
    let mut v: Vector<i32, S> = Vector::new();
    let mut model = Vec::new();
    for op in ops {
        apply(&mut v, &mut model, op);
        assert!(v.len() <= v.capacity());
        assert_eq!(v.as_slice(), &model[..]);
    }
    let collected: Vec<i32> = v.into_iter().collect();
    assert_eq!(collected, model);
}

proptest! {
    #[test]
    fn moving_matches_vec_model(ops in proptest::collection::vec(arb_op(), 0..120)) {
        run::<Moving>(&ops);
    }

    #[test]
    fn cloning_matches_vec_model(ops in proptest::collection::vec(arb_op(), 0..120)) {
        run::<Cloning>(&ops);
    }

    #[test]
    fn push_only_capacity_is_power_of_two(n in 1usize..300) {
        let mut v: Vector<u16> = Vector::new();
        for i in 0..n {
            v.push(i as u16);
        }
        prop_assert_eq!(v.len(), n);
        prop_assert!(v.capacity().is_power_of_two());
        prop_assert!(v.capacity() >= n && v.capacity() < 2 * n);
    }

    #[test]
    fn insert_then_erase_restores_contents(
        items in proptest::collection::vec(any::<i64>(), 0..40),
        pos in any::<usize>(),
        x in any::<i64>(),
    ) {
        let mut v: Vector<i64, Cloning> = Vector::from(&items[..]);
        let pos = pos % (items.len() + 1);
        v.insert(pos, x);
        prop_assert_eq!(v[pos], x);
        prop_assert_eq!(&v[..pos], &items[..pos]);
        prop_assert_eq!(&v[pos + 1..], &items[pos..]);
        v.erase(pos);
        prop_assert_eq!(v.as_slice(), &items[..]);
    }

    #[test]
    fn clone_is_independent(items in proptest::collection::vec(any::<String>(), 0..16)) {
        let original: Vector<String> = Vector::from(&items[..]);
        let mut copy = original.clone();
        prop_assert_eq!(copy.capacity(), items.len());
        copy.push(String::from("extra"));
        for s in copy.iter_mut() {
            s.push('!');
        }
        prop_assert_eq!(original.as_slice(), &items[..]);
    }
}
