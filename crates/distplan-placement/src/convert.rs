//! Conversions between input records and placement entities.
//!
//! Bridges `distplan_core::{Record, AssignmentRecord}` to the engine's
//! `Item`, `Container` and `AllocationPlan`.

use distplan_core::{AssignmentRecord, Record};

use crate::allocator::AllocationPlan;
use crate::entity::{Container, Item};

/// Convert a file [`Record`] to an [`Item`].
pub fn record_to_item(record: &Record) -> Item {
    Item::new(record.name.clone(), record.size)
}

/// Convert a node [`Record`] to an empty [`Container`] of that capacity.
pub fn record_to_container(record: &Record) -> Container {
    Container::new(record.name.clone(), record.size)
}

/// Pair every file with the node name it received, in input order.
///
/// # Panics
///
/// Panics if `items` and `plan` disagree on the number of files.
pub fn plan_to_assignments(items: &[Item], plan: &AllocationPlan) -> Vec<AssignmentRecord> {
    assert_eq!(
        items.len(),
        plan.assignments.len(),
        "plan does not cover the given files"
    );
    items
        .iter()
        .enumerate()
        .map(|(i, item)| AssignmentRecord {
            file: item.name().to_string(),
            node: plan.node_for(i).map(|c| c.name().to_string()),
        })
        .collect()
}
