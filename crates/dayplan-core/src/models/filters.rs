//! Filter types for querying the bucket catalog.

use jiff::civil::Date;

use super::BucketItem;

/// Selects a partition of the active (non-deleted) catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketFilter {
    /// Every active item
    #[default]
    All,
    /// Items required on the given date
    RequiredOn(Date),
    /// Items not required on the given date
    OptionalOn(Date),
}

impl BucketFilter {
    /// Whether an active item belongs to this partition.
    pub fn matches(&self, item: &BucketItem) -> bool {
        match self {
            BucketFilter::All => true,
            BucketFilter::RequiredOn(date) => item.is_required_on(*date),
            BucketFilter::OptionalOn(date) => !item.is_required_on(*date),
        }
    }
}
