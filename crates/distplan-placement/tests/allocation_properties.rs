//! Property checks for the placement loop on random instances.
//!
//! Every run is seeded, so failures reproduce. Each check steps the
//! allocator one file at a time and compares its decision with a brute-force
//! scan over all nodes.

use distplan_placement::sequencer::{compare_containers, container_precedes, is_container_order_sorted};
use distplan_placement::{AllocationPlan, Allocator, Container, Item, Outcome, allocate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEEDS: u64 = 200;

fn random_instance(rng: &mut StdRng) -> (Vec<Item>, Vec<Container>) {
    let file_count: usize = rng.gen_range(0..40);
    let node_count: usize = rng.gen_range(0..8);
    // Small ranges so ties and exact fits happen often.
    let max_size: u64 = rng.gen_range(1..20);

    let items: Vec<Item> = (0..file_count)
        .map(|i| Item::new(format!("f{i}"), rng.gen_range(0..=max_size)))
        .collect();
    let containers: Vec<Container> = (0..node_count)
        .map(|i| Container::new(format!("n{i}"), rng.gen_range(0..=max_size * 3)))
        .collect();
    (items, containers)
}

fn for_each_instance(mut check: impl FnMut(u64, &[Item], Vec<Container>)) {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (items, containers) = random_instance(&mut rng);
        check(seed, &items, containers);
    }
}

#[test]
fn order_stays_sorted_after_every_step() {
    for_each_instance(|seed, items, containers| {
        let mut alloc = Allocator::new(items, containers);
        assert!(is_container_order_sorted(alloc.container_order(), alloc.containers()));

        while alloc.step().is_some() {
            assert!(
                is_container_order_sorted(alloc.container_order(), alloc.containers()),
                "seed {seed}: unsorted order {:?}",
                alloc.container_order()
            );
        }
    });
}

#[test]
fn order_is_always_a_permutation() {
    for_each_instance(|seed, items, containers| {
        let n = containers.len();
        let mut alloc = Allocator::new(items, containers);
        while alloc.step().is_some() {
            let mut seen = alloc.container_order().to_vec();
            seen.sort_unstable();
            assert_eq!(seen, (0..n).collect::<Vec<_>>(), "seed {seed}");
        }
    });
}

#[test]
fn chosen_node_is_least_loaded_that_fits() {
    for_each_instance(|seed, items, containers| {
        let mut alloc = Allocator::new(items, containers);
        loop {
            let before = alloc.containers().to_vec();
            let Some(outcome) = alloc.step() else { break };
            let item = &items[outcome.item()];

            let fitting: Vec<&Container> = before.iter().filter(|c| c.can_accept(item)).collect();

            match outcome {
                Outcome::Placed { container, .. } => {
                    let chosen = &before[container];
                    assert!(chosen.can_accept(item), "seed {seed}");
                    assert!(
                        fitting.iter().all(|c| !container_precedes(c, chosen)),
                        "seed {seed}: a fitting node sorts before '{}'",
                        chosen.name()
                    );
                }
                Outcome::Unassigned { .. } => {
                    assert!(fitting.is_empty(), "seed {seed}: '{}' had a home", item.name());
                }
            }
        }
    });
}

#[test]
fn files_are_processed_largest_first() {
    for_each_instance(|seed, items, containers| {
        let mut alloc = Allocator::new(items, containers);
        let mut last = u64::MAX;
        while let Some(outcome) = alloc.step() {
            let size = items[outcome.item()].size();
            assert!(size <= last, "seed {seed}");
            last = size;
        }
    });
}

#[test]
fn no_node_overflows() {
    for_each_instance(|seed, items, containers| {
        let original = containers.clone();
        let plan = allocate(items, containers);

        for (idx, node) in original.iter().enumerate() {
            let assigned: u64 = plan
                .assignments
                .iter()
                .enumerate()
                .filter(|&(_, a)| *a == Some(idx))
                .map(|(i, _)| items[i].size())
                .sum();
            assert!(assigned <= node.capacity(), "seed {seed}: node {idx} overflows");
            assert_eq!(plan.containers[idx].occupied(), assigned, "seed {seed}");
            assert!(plan.containers[idx].occupied() <= plan.containers[idx].capacity());
        }
    });
}

#[test]
fn every_file_gets_exactly_one_entry() {
    for_each_instance(|seed, items, containers| {
        let n = containers.len();
        let plan = allocate(items, containers);

        assert_eq!(plan.assignments.len(), items.len(), "seed {seed}");
        for entry in &plan.assignments {
            if let Some(c) = entry {
                assert!(*c < n, "seed {seed}");
            }
        }
        assert_eq!(plan.placed_count() + plan.unassigned().len(), items.len());
    });
}

#[test]
fn same_input_same_plan() {
    for_each_instance(|seed, items, containers| {
        let a: AllocationPlan = allocate(items, containers.clone());
        let b: AllocationPlan = allocate(items, containers);
        assert_eq!(a.assignments, b.assignments, "seed {seed}");
        assert_eq!(a.containers, b.containers, "seed {seed}");
    });
}

#[test]
fn incremental_order_matches_full_resort() {
    for_each_instance(|seed, items, containers| {
        let mut alloc = Allocator::new(items, containers);
        while alloc.step().is_some() {
            let nodes = alloc.containers();
            let keys = |order: &[usize]| -> Vec<(u64, u64)> {
                order
                    .iter()
                    .map(|&i| (nodes[i].occupied(), nodes[i].free()))
                    .collect()
            };

            let mut resorted: Vec<usize> = (0..nodes.len()).collect();
            resorted.sort_by(|&a, &b| compare_containers(&nodes[a], &nodes[b]));

            assert_eq!(keys(alloc.container_order()), keys(&resorted), "seed {seed}");
        }
    });
}

#[test]
fn many_equal_files_spread_evenly() {
    let nodes: Vec<Container> = (0..4).map(|i| Container::new(format!("n{i}"), 100)).collect();
    let files: Vec<Item> = (0..40).map(|i| Item::new(format!("f{i}"), 5)).collect();

    let plan = allocate(&files, nodes);

    assert_eq!(plan.placed_count(), 40);
    for node in &plan.containers {
        assert_eq!(node.occupied(), 50);
    }
}
