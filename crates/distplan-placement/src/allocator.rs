//! Greedy placement loop.
//!
//! Files are taken largest first. For each one the node ordering is scanned
//! from the front and the first node with room receives the file. That node
//! is then moved to its new slot with [`reorder::reposition`], so the
//! ordering stays sorted between steps without a full re-sort.

use distplan_core::NodeUsage;
use tracing::{debug, info, warn};

use crate::entity::{Container, Item};
use crate::reorder;
use crate::sequencer::{container_order, container_precedes, is_container_order_sorted, item_order};

/// Result of processing one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file went to `container`, found at position `from` of the node
    /// ordering and moved to position `to` afterwards.
    Placed {
        item: usize,
        container: usize,
        from: usize,
        to: usize,
    },
    /// No node had enough free space.
    Unassigned { item: usize },
}

impl Outcome {
    pub fn item(&self) -> usize {
        match *self {
            Outcome::Placed { item, .. } | Outcome::Unassigned { item } => item,
        }
    }
}

/// Finished allocation.
#[derive(Debug, Clone)]
pub struct AllocationPlan {
    /// One entry per file, in input order: the index of the receiving node.
    pub assignments: Vec<Option<usize>>,
    /// Nodes with their final loads, in input order.
    pub containers: Vec<Container>,
}

impl AllocationPlan {
    /// Node that received file `item`, if any.
    pub fn node_for(&self, item: usize) -> Option<&Container> {
        self.assignments
            .get(item)
            .copied()
            .flatten()
            .map(|c| &self.containers[c])
    }

    pub fn placed_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_some()).count()
    }

    /// Indices of files nothing could hold.
    pub fn unassigned(&self) -> Vec<usize> {
        self.assignments
            .iter()
            .enumerate()
            .filter_map(|(i, a)| a.is_none().then_some(i))
            .collect()
    }

    pub fn node_usage(&self) -> Vec<NodeUsage> {
        self.containers
            .iter()
            .map(|c| NodeUsage {
                name: c.name().to_string(),
                capacity: c.capacity(),
                occupied: c.occupied(),
                free: c.free(),
            })
            .collect()
    }
}

/// State of one allocation pass.
///
/// Owns the nodes and the node ordering until [`Allocator::finish`].
pub struct Allocator<'a> {
    items: &'a [Item],
    containers: Vec<Container>,
    item_order: Vec<usize>,
    container_order: Vec<usize>,
    assignments: Vec<Option<usize>>,
    next: usize,
}

impl<'a> Allocator<'a> {
    pub fn new(items: &'a [Item], containers: Vec<Container>) -> Self {
        let item_order = item_order(items);
        let container_order = container_order(&containers);
        Self {
            items,
            containers,
            item_order,
            container_order,
            assignments: vec![None; items.len()],
            next: 0,
        }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Current node ordering, least loaded first.
    pub fn container_order(&self) -> &[usize] {
        &self.container_order
    }

    /// Order in which files are processed.
    pub fn item_order(&self) -> &[usize] {
        &self.item_order
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.item_order.len()
    }

    /// Process the next pending file. Returns `None` once all are done.
    pub fn step(&mut self) -> Option<Outcome> {
        let &item_idx = self.item_order.get(self.next)?;
        self.next += 1;
        let items = self.items;
        let item = &items[item_idx];

        let containers = &self.containers;
        let found = self
            .container_order
            .iter()
            .position(|&c| containers[c].can_accept(item));

        let Some(from) = found else {
            warn!(
                file = item.name(),
                size = item.size(),
                "no node has room for file"
            );
            return Some(Outcome::Unassigned { item: item_idx });
        };

        let container_idx = self.container_order[from];
        self.containers[container_idx].place(item);
        self.assignments[item_idx] = Some(container_idx);

        let containers = &self.containers;
        let to = reorder::reposition(&mut self.container_order, from, |a, b| {
            container_precedes(&containers[a], &containers[b])
        });
        debug_assert!(
            is_container_order_sorted(&self.container_order, &self.containers),
            "node ordering unsorted after placing '{}'",
            item.name()
        );

        let node = &self.containers[container_idx];
        debug!(
            file = item.name(),
            size = item.size(),
            node = node.name(),
            occupied = node.occupied(),
            free = node.free(),
            from,
            to,
            "placed file"
        );

        Some(Outcome::Placed {
            item: item_idx,
            container: container_idx,
            from,
            to,
        })
    }

    /// Process every remaining file and hand back the plan.
    pub fn finish(mut self) -> AllocationPlan {
        while self.step().is_some() {}

        let plan = AllocationPlan {
            assignments: self.assignments,
            containers: self.containers,
        };
        info!(
            files = plan.assignments.len(),
            nodes = plan.containers.len(),
            placed = plan.placed_count(),
            unassigned = plan.assignments.len() - plan.placed_count(),
            "allocation finished"
        );
        plan
    }
}

/// Run a full first-fit-decreasing pass over `items`.
pub fn allocate(items: &[Item], containers: Vec<Container>) -> AllocationPlan {
    Allocator::new(items, containers).finish()
}
