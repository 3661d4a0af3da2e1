//! distplan placement engine — first-fit-decreasing file distribution.
//!
//! Files are processed largest first. Each one goes to the least-loaded node
//! that still has room for it. After a placement only that node's load has
//! changed, so the node ordering is repaired by moving a single entry instead
//! of re-sorting the whole list.
//!
//! # Components
//!
//! - **`entity`** — Files (`Item`) and nodes (`Container`)
//! - **`sequencer`** — Sorted index permutations over both sets
//! - **`reorder`** — Binary-search reposition of one node index
//! - **`allocator`** — The greedy placement loop
//! - **`convert`** — Mapping between input records and entities

pub mod allocator;
pub mod convert;
pub mod entity;
pub mod reorder;
pub mod sequencer;

pub use allocator::{AllocationPlan, Allocator, Outcome, allocate};
pub use convert::{plan_to_assignments, record_to_container, record_to_item};
pub use entity::{Container, Item};
pub use reorder::{find_new_position, reposition, shift_to};
pub use sequencer::{compare_containers, container_order, container_precedes, item_order};
