//! Building sets and maps with explicit collision rules.
//!
//! Hash-based collections have no intrinsic order and silently decide what
//! happens when two entries share a key. The helpers here make both choices
//! visible at the call site:
//!
//! - **Deduplication**: [`to_set`], and [`to_sorted_vec`] to get a
//!   deterministic sequence back out through an [`Order`](crate::ordering::Order).
//! - **Key collisions**: [`to_map_keep_last`], [`to_map_keep_first`],
//!   [`to_map_merge`] and [`to_map_combine`].
//! - **Set algebra**: [`set_difference`], [`set_intersection`] and [`set_union`].
//! - **Map algebra**: [`map_union_with`] and [`map_intersection_with`].
//! - **Page views**: [`Analytics`] entries from several sources, merged with
//!   [`all_page_views`] and [`shared_page_views`].
//!
//! # Examples
//!
//! ```rust
//! use fp_training::collection::{to_map_keep_last, to_map_merge};
//!
//! let pairs = vec![(1, "Alice".to_string()), (2, "Bob".to_string()), (2, "Robert".to_string())];
//!
//! assert_eq!(to_map_keep_last(pairs.clone())[&2], "Robert");
//! assert_eq!(to_map_merge(pairs, |old, new| old + &new)[&2], "BobRobert");
//! ```

mod analytics;
mod map;
mod set;

pub use analytics::{Analytics, all_page_views, page_views, shared_page_views};

pub use map::{
    map_intersection_with, map_union_with, to_map_combine, to_map_keep_first, to_map_keep_last,
    to_map_merge, to_sorted_entries,
};
pub use set::{set_difference, set_intersection, set_union, to_set, to_sorted_vec};
