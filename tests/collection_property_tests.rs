//! Property tests for the typed collection operations
//!
//! These verify:
//! - Shape: map and each visit every element exactly once, in order
//! - Idempotence: uniq(uniq(x)) == uniq(x)
//! - Ordering: sort_by yields non-decreasing keys and keeps every element
//! - Flattening: deep flatten removes all nesting without losing leaves

use fi::{
    compact, each, filter, first, flatten, last, map, reduce, sort_by, uniq, Compactable, Nested,
    Take,
};
use proptest::prelude::*;

fn nested_numbers() -> impl Strategy<Value = Nested<i32>> {
    let leaf = any::<i32>().prop_map(Nested::Item);
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Nested::List)
    })
}

fn count_leaves(node: &Nested<i32>) -> usize {
    match node {
        Nested::Item(_) => 1,
        Nested::List(items) => items.iter().map(count_leaves).sum(),
    }
}

mod traversal {
    use super::*;

    proptest! {
        #[test]
        fn prop_map_preserves_length_and_order(items in prop::collection::vec(-1000i64..1000, 0..100)) {
            let doubled = map(&items, |v| v * 2);
            prop_assert_eq!(doubled.len(), items.len());
            for (original, mapped) in items.iter().zip(&doubled) {
                prop_assert_eq!(original * 2, *mapped);
            }
        }

        #[test]
        fn prop_each_visits_in_order(items in prop::collection::vec(any::<i32>(), 0..100)) {
            let mut seen = Vec::new();
            let returned = each(&items, |v| seen.push(*v));
            prop_assert_eq!(&seen, &items);
            prop_assert!(std::ptr::eq(returned, &items));
        }

        #[test]
        fn prop_reduce_without_seed_matches_sum(items in prop::collection::vec(-1000i64..1000, 1..100)) {
            let total = reduce(&items, |acc, v, _| acc + v, None);
            prop_assert_eq!(total, Some(items.iter().sum::<i64>()));
        }

        #[test]
        fn prop_filter_partitions(items in prop::collection::vec(any::<i32>(), 0..100)) {
            let even = filter(&items, |v| v % 2 == 0);
            let odd = filter(&items, |v| v % 2 != 0);
            prop_assert_eq!(even.len() + odd.len(), items.len());
            prop_assert!(even.iter().all(|v| v % 2 == 0));
        }
    }
}

mod queries {
    use super::*;

    proptest! {
        #[test]
        fn prop_first_and_last_take_prefix_and_suffix(
            items in prop::collection::vec(any::<i32>(), 0..50),
            count in 1usize..60,
        ) {
            let taken = count.min(items.len());
            let head = first(&items, Some(count as i64));
            prop_assert_eq!(head, Take::Many(items[..taken].to_vec()));

            // the tail start wraps when count exceeds the length
            if count <= items.len() {
                let tail = last(&items, Some(count as i64));
                prop_assert_eq!(tail, Take::Many(items[items.len() - count..].to_vec()));
            }
        }

        #[test]
        fn prop_first_without_count_is_head(items in prop::collection::vec(any::<i32>(), 0..50)) {
            prop_assert_eq!(first(&items, None), Take::One(items.first().copied()));
            prop_assert_eq!(last(&items, None), Take::One(items.last().copied()));
        }
    }
}

mod transforms {
    use super::*;

    proptest! {
        #[test]
        fn prop_compact_drops_only_excluded(items in prop::collection::vec(-3i32..3, 0..100)) {
            let kept = compact(&items);
            prop_assert!(kept.iter().all(|v| !v.is_excluded()));
            prop_assert_eq!(kept.len(), items.iter().filter(|v| **v != 0).count());
        }

        #[test]
        fn prop_uniq_is_idempotent(items in prop::collection::vec(0i32..20, 0..100)) {
            let once = uniq(&items, false);
            let twice = uniq(&once, false);
            prop_assert_eq!(&once, &twice);
            for item in &items {
                prop_assert!(once.contains(item));
            }
        }

        #[test]
        fn prop_sort_by_orders_and_keeps_elements(items in prop::collection::vec(any::<i32>(), 0..100)) {
            let sorted = sort_by(&items, |v| *v);
            prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));

            let mut expected = items.clone();
            expected.sort();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn prop_sort_by_is_stable(items in prop::collection::vec((0i32..5, any::<u16>()), 0..100)) {
            let sorted = sort_by(&items, |(rank, _)| *rank);
            let mut expected = items.clone();
            expected.sort_by_key(|(rank, _)| *rank);
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn prop_deep_flatten_removes_nesting(tree in nested_numbers()) {
            let flat = flatten(&tree, false);
            prop_assert_eq!(flat.len(), count_leaves(&tree));
            prop_assert!(flat.iter().all(|node| matches!(node, Nested::Item(_))));
        }

        #[test]
        fn prop_shallow_flatten_keeps_top_level_count(tree in nested_numbers()) {
            if let Nested::List(items) = &tree {
                let flat = flatten(&tree, true);
                let expected: usize = items
                    .iter()
                    .map(|item| match item {
                        Nested::List(inner) => inner.len(),
                        Nested::Item(_) => 1,
                    })
                    .sum();
                prop_assert_eq!(flat.len(), expected);
            }
        }
    }
}
