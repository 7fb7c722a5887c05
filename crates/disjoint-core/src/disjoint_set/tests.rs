#![allow(clippy::expect_used)]

use std::collections::HashMap;

use super::*;
use crate::strategy::{CompressionKind, PathHalving};

const STRATEGIES: [CompressionKind; 2] = [CompressionKind::Full, CompressionKind::Halving];

fn letters(strategy: CompressionKind, elements: &str) -> DisjointSet<char, CompressionKind> {
    let mut set = DisjointSet::with_strategy(strategy);
    set.make_sets(elements.chars());
    set
}

// ── registration ────────────────────────────────────────────────────────────

#[test]
fn new_elements_are_their_own_representatives() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "ABC");
        for e in ['A', 'B', 'C'] {
            assert_eq!(set.find(&e), Ok(e), "{strategy}: {e} should be its own root");
        }
        assert_eq!(set.len(), 3);
        assert_eq!(set.set_count(), 3);
    }
}

#[test]
fn make_set_is_idempotent() {
    let mut set = DisjointSet::new();
    set.make_set("x");
    set.make_set("x");
    assert_eq!(set.len(), 1);
    assert_eq!(set.find(&"x"), Ok("x"));
    assert_eq!(set.rank(&"x"), Some(0));
}

#[test]
fn make_set_on_merged_element_keeps_its_set() {
    let mut set = letters(CompressionKind::Full, "AB");
    set.union(&'A', &'B').expect("registered");
    set.make_set('A');
    assert_eq!(set.find(&'A'), Ok('B'));
    assert_eq!(set.rank(&'B'), Some(1));
}

#[test]
fn empty_container() {
    let set: DisjointSet<u8> = DisjointSet::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.set_count(), 0);
}

#[test]
fn try_make_set_rejects_absent_element() {
    let mut set: DisjointSet<u8> = DisjointSet::new();
    assert_eq!(
        set.try_make_set(None),
        Err(DisjointSetError::NullElement {
            argument: "element"
        })
    );
    assert!(set.is_empty());
    set.try_make_set(Some(7)).expect("present element registers");
    assert!(set.contains(&7));
}

#[test]
fn try_make_sets_keeps_elements_before_the_first_absent_one() {
    let mut set: DisjointSet<u8> = DisjointSet::new();
    let err = set
        .try_make_sets([Some(1), Some(2), None, Some(4)])
        .expect_err("third element is absent");
    assert!(matches!(err, DisjointSetError::NullElement { .. }));
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(!set.contains(&4));
}

// ── find ────────────────────────────────────────────────────────────────────

#[test]
fn find_unregistered_element_fails() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "A");
        assert_eq!(set.find(&'Z'), Err(DisjointSetError::ElementNotFound));
    }
}

#[test]
fn find_does_not_change_ranks() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "ABCD");
        set.union(&'A', &'B').expect("registered");
        set.union(&'C', &'D').expect("registered");
        set.union(&'B', &'D').expect("registered");
        let ranks_before = set.ranks().clone();
        for e in "ABCD".chars() {
            set.find(&e).expect("registered");
        }
        assert_eq!(set.ranks(), &ranks_before, "{strategy}");
    }
}

// ── union ───────────────────────────────────────────────────────────────────

#[test]
fn union_of_equal_ranks_favours_second_root() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "AB");
        assert_eq!(set.union(&'A', &'B'), Ok(true));
        assert_eq!(set.find(&'A'), Ok('B'), "{strategy}");
        assert_eq!(set.find(&'B'), Ok('B'), "{strategy}");
        assert_eq!(set.rank(&'B'), Some(1));
        assert_eq!(set.rank(&'A'), Some(0));
    }
}

#[test]
fn union_higher_rank_root_wins() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "ABC");
        set.union(&'A', &'B').expect("registered");
        // B has rank 1, C has rank 0: C goes under B even though C is second.
        set.union(&'B', &'C').expect("registered");
        assert_eq!(set.find(&'C'), Ok('B'), "{strategy}");
        assert_eq!(set.rank(&'B'), Some(1), "unequal ranks do not promote");
    }
}

#[test]
fn union_lower_rank_first_root_moves_under_second() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "ABC");
        set.union(&'A', &'B').expect("registered");
        set.union(&'C', &'A').expect("registered");
        assert_eq!(set.find(&'C'), Ok('B'), "{strategy}");
        assert_eq!(set.rank(&'B'), Some(1));
    }
}

#[test]
fn rank_based_scenario_over_eight_letters() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "ABCDEFGH");
        set.union(&'A', &'B').expect("registered");
        set.union(&'C', &'D').expect("registered");
        set.union(&'B', &'D').expect("registered");

        let expected = ['D', 'D', 'D', 'D', 'E', 'F', 'G', 'H'];
        for (e, root) in "ABCDEFGH".chars().zip(expected) {
            assert_eq!(set.find(&e), Ok(root), "{strategy}: find({e})");
        }
        assert_eq!(set.rank(&'D'), Some(2));
        assert_eq!(set.set_count(), 5);
    }
}

#[test]
fn union_is_transitive() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "abc");
        set.union(&'a', &'b').expect("registered");
        set.union(&'b', &'c').expect("registered");
        let root = set.find(&'a').expect("registered");
        assert_eq!(set.find(&'b'), Ok(root));
        assert_eq!(set.find(&'c'), Ok(root));
    }
}

#[test]
fn repeated_union_is_a_no_op() {
    for strategy in STRATEGIES {
        let mut set = letters(strategy, "abc");
        assert_eq!(set.union(&'a', &'b'), Ok(true));
        let parents = set.parents().clone();
        let ranks = set.ranks().clone();
        assert_eq!(set.union(&'a', &'b'), Ok(false));
        assert_eq!(set.union(&'b', &'a'), Ok(false));
        assert_eq!(set.parents(), &parents, "{strategy}");
        assert_eq!(set.ranks(), &ranks, "{strategy}");
    }
}

#[test]
fn union_with_self_is_a_no_op() {
    let mut set = letters(CompressionKind::Full, "a");
    assert_eq!(set.union(&'a', &'a'), Ok(false));
    assert_eq!(set.rank(&'a'), Some(0));
}

#[test]
fn union_with_unregistered_element_leaves_state_untouched() {
    for strategy in STRATEGIES {
        // Chain d -> c -> b -> a: a find from `d` would compress it.
        let parents: HashMap<char, char> =
            [('a', 'a'), ('b', 'a'), ('c', 'b'), ('d', 'c')].into_iter().collect();
        let ranks: HashMap<char, u32> =
            [('a', 3), ('b', 2), ('c', 1), ('d', 0)].into_iter().collect();
        let mut set = DisjointSet::builder()
            .parents(parents.clone())
            .ranks(ranks.clone())
            .strategy(strategy)
            .build()
            .expect("both mappings supplied");

        assert_eq!(set.union(&'d', &'z'), Err(DisjointSetError::ElementNotFound));
        assert_eq!(set.union(&'z', &'d'), Err(DisjointSetError::ElementNotFound));
        assert_eq!(set.parents(), &parents, "{strategy}");
        assert_eq!(set.ranks(), &ranks, "{strategy}");
    }
}

#[test]
fn union_reports_missing_root_rank_in_injected_state() {
    let parents: HashMap<u8, u8> = [(1, 1), (2, 2)].into_iter().collect();
    let ranks: HashMap<u8, u32> = [(1, 0)].into_iter().collect();
    let mut set = DisjointSet::builder()
        .parents(parents)
        .ranks(ranks)
        .build()
        .expect("both mappings supplied");
    assert_eq!(
        set.union(&1, &2),
        Err(DisjointSetError::InvalidConfiguration {
            missing: "rank entry for a root"
        })
    );
    assert_eq!(set.find(&1), Ok(1));
    assert_eq!(set.find(&2), Ok(2));
}

#[test]
fn missing_root_rank_leaves_paths_uncompressed() {
    for strategy in STRATEGIES {
        // a -> b -> c is a compressible path, but root c has no rank.
        let parents: HashMap<char, char> =
            [('a', 'b'), ('b', 'c'), ('c', 'c'), ('d', 'd')].into_iter().collect();
        let ranks: HashMap<char, u32> = [('a', 0), ('b', 0), ('d', 0)].into_iter().collect();
        let mut set = DisjointSet::builder()
            .parents(parents.clone())
            .ranks(ranks.clone())
            .strategy(strategy)
            .build()
            .expect("both mappings supplied");

        for (first, second) in [('a', 'd'), ('d', 'a')] {
            assert_eq!(
                set.union(&first, &second),
                Err(DisjointSetError::InvalidConfiguration {
                    missing: "rank entry for a root"
                }),
                "{strategy}"
            );
            assert_eq!(set.parents(), &parents, "{strategy}: parents rewritten");
            assert_eq!(set.ranks(), &ranks, "{strategy}: ranks rewritten");
        }
    }
}

#[test]
fn dangling_parent_fails_union_without_writes() {
    for strategy in STRATEGIES {
        // a -> b -> c -> x, where x was never registered.
        let parents: HashMap<char, char> =
            [('a', 'b'), ('b', 'c'), ('c', 'x'), ('d', 'd')].into_iter().collect();
        let ranks: HashMap<char, u32> =
            [('a', 0), ('b', 0), ('c', 0), ('d', 0)].into_iter().collect();
        let mut set = DisjointSet::builder()
            .parents(parents.clone())
            .ranks(ranks)
            .strategy(strategy)
            .build()
            .expect("both mappings supplied");

        assert_eq!(set.union(&'d', &'a'), Err(DisjointSetError::ElementNotFound));
        assert_eq!(set.parents(), &parents, "{strategy}");
    }
}

#[test]
fn union_of_already_joined_elements_still_compresses() {
    for strategy in STRATEGIES {
        let parents: HashMap<char, char> =
            [('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'd')].into_iter().collect();
        let ranks: HashMap<char, u32> =
            [('a', 0), ('b', 1), ('c', 2), ('d', 3)].into_iter().collect();
        let mut set = DisjointSet::builder()
            .parents(parents.clone())
            .ranks(ranks.clone())
            .strategy(strategy)
            .build()
            .expect("both mappings supplied");

        assert_eq!(set.union(&'a', &'d'), Ok(false));
        assert_ne!(set.parents(), &parents, "{strategy}: path from a shortened");
        assert_eq!(set.ranks(), &ranks);
        for e in ['a', 'b', 'c', 'd'] {
            assert_eq!(set.find(&e), Ok('d'));
        }
    }
}

#[test]
fn large_component_merge() {
    const N: u32 = 64;
    for strategy in STRATEGIES {
        let mut set = DisjointSet::with_strategy(strategy);
        set.make_sets(0..N);
        for i in 1..N {
            set.union(&0, &i).expect("registered");
        }
        let root = set.find(&0).expect("registered");
        for i in 0..N {
            assert_eq!(set.find(&i), Ok(root), "{strategy}: element {i}");
        }
        assert_eq!(set.set_count(), 1);
        // 64 elements can never produce a rank above log2(64).
        assert!(set.rank(&root).expect("root has a rank") <= 6);
    }
}

// ── queries ─────────────────────────────────────────────────────────────────

#[test]
fn same_set_reflects_unions() {
    let mut set = letters(CompressionKind::Halving, "abcd");
    set.union(&'a', &'b').expect("registered");
    assert_eq!(set.same_set(&'a', &'b'), Ok(true));
    assert_eq!(set.same_set(&'a', &'c'), Ok(false));
    assert_eq!(set.same_set(&'a', &'q'), Err(DisjointSetError::ElementNotFound));
}

#[test]
fn groups_partition_all_elements() {
    let mut set = letters(CompressionKind::Full, "abcdef");
    set.union(&'a', &'b').expect("registered");
    set.union(&'c', &'d').expect("registered");
    set.union(&'d', &'e').expect("registered");

    let groups = set.groups().expect("well-formed forest");
    assert_eq!(groups.len(), 3);

    let mut members: Vec<Vec<char>> = groups
        .into_values()
        .map(|mut g| {
            g.sort_unstable();
            g
        })
        .collect();
    members.sort();
    assert_eq!(
        members,
        vec![vec!['a', 'b'], vec!['c', 'd', 'e'], vec!['f']]
    );
}

// ── builder ─────────────────────────────────────────────────────────────────

#[test]
fn builder_without_state_is_empty() {
    let set: DisjointSet<u8, PathHalving> = DisjointSet::builder()
        .strategy(PathHalving)
        .build()
        .expect("no state is valid");
    assert!(set.is_empty());
    assert_eq!(set.strategy(), &PathHalving);
}

#[test]
fn builder_rejects_parents_without_ranks() {
    let parents: HashMap<u8, u8> = [(1, 1)].into_iter().collect();
    let err = DisjointSet::builder()
        .parents(parents)
        .build()
        .expect_err("ranks are missing");
    assert_eq!(
        err,
        DisjointSetError::InvalidConfiguration {
            missing: "rank mapping"
        }
    );
}

#[test]
fn builder_rejects_ranks_without_parents() {
    let ranks: HashMap<u8, u32> = [(1, 0)].into_iter().collect();
    let err = DisjointSet::builder()
        .ranks(ranks)
        .build()
        .expect_err("parents are missing");
    assert_eq!(
        err,
        DisjointSetError::InvalidConfiguration {
            missing: "parent mapping"
        }
    );
}

#[test]
fn into_parts_round_trips_through_builder() {
    let mut set = letters(CompressionKind::Full, "ABCDEFGH");
    set.union(&'A', &'B').expect("registered");
    set.union(&'C', &'D').expect("registered");
    let (parents, ranks) = set.into_parts();

    let mut resumed = DisjointSet::builder()
        .parents(parents)
        .ranks(ranks)
        .strategy(PathHalving)
        .build()
        .expect("both mappings supplied");
    resumed.union(&'B', &'D').expect("registered");
    assert_eq!(resumed.find(&'A'), Ok('D'));
    assert_eq!(resumed.find(&'H'), Ok('H'));
}
