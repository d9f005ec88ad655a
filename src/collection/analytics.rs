//! Page view counts from several analytics sources.

use std::collections::HashMap;

use super::map::{map_intersection_with, map_union_with, to_map_combine};
use crate::typeclass::Semigroup;

/// The number of views of one page, as reported by one source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analytics {
    /// The page the views were counted on.
    pub page: String,
    /// How many times the page was viewed.
    pub views: u64,
}

impl Analytics {
    /// Views counted on `page`.
    pub fn new(page: impl Into<String>, views: u64) -> Self {
        Self {
            page: page.into(),
            views,
        }
    }
}

/// Adds the view counts. Both sides are expected to describe the same page;
/// the left one's name is kept.
impl Semigroup for Analytics {
    fn combine(self, other: Self) -> Self {
        Self {
            page: self.page,
            views: self.views.saturating_add(other.views),
        }
    }
}

/// Indexes entries by page, adding the views of repeated pages.
///
/// # Examples
///
/// ```rust
/// use fp_training::collection::{Analytics, page_views};
///
/// let views = page_views([Analytics::new("home", 5), Analytics::new("home", 1)]);
/// assert_eq!(views["home"].views, 6);
/// ```
pub fn page_views<I>(entries: I) -> HashMap<String, Analytics>
where
    I: IntoIterator<Item = Analytics>,
{
    to_map_combine(entries.into_iter().map(|entry| (entry.page.clone(), entry)))
}

/// Views of every page seen by either source, summed where both saw it.
pub fn all_page_views(
    left: HashMap<String, Analytics>,
    right: HashMap<String, Analytics>,
) -> HashMap<String, Analytics> {
    map_union_with(left, right, Semigroup::combine)
}

/// Summed views of the pages seen by both sources only.
pub fn shared_page_views(
    left: HashMap<String, Analytics>,
    right: HashMap<String, Analytics>,
) -> HashMap<String, Analytics> {
    map_intersection_with(left, right, Semigroup::combine)
}
