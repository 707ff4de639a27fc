use bit_set::BitSet;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use transversals::{transversal, Hypergraph};

fn random_hypergraph(rng: &mut StdRng, max_verts: usize, max_edges: usize) -> Hypergraph {
    let n = rng.gen_range(1..=max_verts);
    let m = rng.gen_range(0..=max_edges);
    let density = rng.gen_range(0.15..0.6);
    let mut h = Hypergraph::new(n, m);
    for _ in 0..m {
        let edge = (0..n).filter(|_| rng.gen_bool(density)).collect_vec();
        // keep the occasional empty edge
        if !edge.is_empty() || rng.gen_bool(0.1) {
            h.add_edge_from_vertices(edge).unwrap();
        }
    }
    h
}

/// All minimal hitting sets, by checking every vertex subset.
fn brute_force(h: &Hypergraph) -> Vec<Vec<usize>> {
    (0..h.num_verts())
        .powerset()
        .filter(|subset| h.is_minimal_hitting_set(&subset.iter().cloned().collect::<BitSet>()))
        .sorted()
        .collect_vec()
}

fn seeded_instances(seed: u64, count: usize) -> Vec<Hypergraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_hypergraph(&mut rng, 11, 12)).collect()
}

#[test]
fn matches_brute_force() {
    for h in seeded_instances(7, 150) {
        let found = transversal(&h, 1, 0).unwrap().to_sorted_sets();
        assert_eq!(found, brute_force(&h), "instance {:?}", h.to_sorted_sets());
    }
}

#[test]
fn sound_minimal_and_duplicate_free() {
    for h in seeded_instances(11, 100) {
        let htrans = transversal(&h, 4, 0).unwrap();
        for set in htrans.edges() {
            assert!(h.is_hitting_set(set));
            assert!(h.is_minimal_hitting_set(set));
        }
        let distinct: HashSet<Vec<usize>> = htrans.to_sorted_sets().into_iter().collect();
        assert_eq!(distinct.len(), htrans.num_edges());
    }
}

#[test]
fn thread_count_invariance() {
    for h in seeded_instances(23, 60) {
        let single = transversal(&h, 1, 0).unwrap().to_sorted_sets();
        for threads in [2, 3, 8] {
            assert_eq!(transversal(&h, threads, 0).unwrap().to_sorted_sets(), single);
        }
    }
}

#[test]
fn cutoff_restricts_by_size() {
    for h in seeded_instances(31, 60) {
        let all = transversal(&h, 2, 0).unwrap().to_sorted_sets();
        for k in 1..=5 {
            let expected = all.iter().filter(|set| set.len() < k).cloned().collect_vec();
            assert_eq!(transversal(&h, 2, k).unwrap().to_sorted_sets(), expected, "cutoff {}", k);
        }
    }
}

#[test]
fn scenarios() {
    let run = |n: usize, edges: &[Vec<usize>]| {
        transversal(&Hypergraph::from_edges(n, edges).unwrap(), 2, 0)
            .unwrap()
            .to_sorted_sets()
    };
    assert_eq!(
        run(3, &[vec![0, 1], vec![1, 2], vec![0, 2]]),
        vec![vec![0, 1], vec![0, 2], vec![1, 2]]
    );
    assert_eq!(run(1, &[vec![0]]), vec![vec![0]]);
    assert_eq!(run(3, &[vec![0, 1, 2]]), vec![vec![0], vec![1], vec![2]]);
    assert_eq!(run(3, &[]), vec![Vec::<usize>::new()]);
}

#[test]
fn transversal_of_transversal_is_minimised_input() {
    // Berge duality: Tr(Tr(H)) is the set of inclusion-minimal edges of H.
    let h = Hypergraph::from_edges(5, &[vec![0, 1], vec![1, 2, 3], vec![3, 4], vec![0, 1, 4]]).unwrap();
    let back = transversal(&transversal(&h, 2, 0).unwrap(), 2, 0).unwrap();
    assert_eq!(back.to_sorted_sets(), vec![vec![0, 1], vec![1, 2, 3], vec![3, 4]]);
}

#[test]
fn larger_instance_is_consistent_across_threads() {
    // Disjoint pairs: 2^8 minimal transversals, one vertex from each pair.
    let edges = (0..8).map(|i| vec![2 * i, 2 * i + 1]).collect_vec();
    let h = Hypergraph::from_edges(16, &edges).unwrap();
    let single = transversal(&h, 1, 0).unwrap();
    assert_eq!(single.num_edges(), 256);
    assert_eq!(
        transversal(&h, 6, 0).unwrap().to_sorted_sets(),
        single.to_sorted_sets()
    );
}
