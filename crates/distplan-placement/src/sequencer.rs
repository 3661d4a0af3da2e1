//! Index permutations over files and nodes.
//!
//! Neither sort touches the entity storage; they return `0..n` reordered.
//! Both sorts are stable, so equal keys keep their input order.

use std::cmp::Ordering;

use crate::entity::{Container, Item};

/// File indices by size, largest first.
pub fn item_order(items: &[Item]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].size().cmp(&items[a].size()));
    order
}

/// Node ordering: least occupied first, then most free space first.
///
/// Must stay a pure function of the two nodes; the incremental reposition
/// in [`crate::reorder`] relies on it.
pub fn compare_containers(a: &Container, b: &Container) -> Ordering {
    a.occupied()
        .cmp(&b.occupied())
        .then_with(|| b.free().cmp(&a.free()))
}

/// True when `a` sorts strictly before `b`.
pub fn container_precedes(a: &Container, b: &Container) -> bool {
    compare_containers(a, b) == Ordering::Less
}

/// Node indices sorted by [`compare_containers`].
pub fn container_order(containers: &[Container]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..containers.len()).collect();
    order.sort_by(|&a, &b| compare_containers(&containers[a], &containers[b]));
    order
}

/// Whether `order` is sorted under [`compare_containers`].
pub fn is_container_order_sorted(order: &[usize], containers: &[Container]) -> bool {
    order
        .windows(2)
        .all(|w| !container_precedes(&containers[w[1]], &containers[w[0]]))
}
