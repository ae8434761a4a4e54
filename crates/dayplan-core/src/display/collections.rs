//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its elements with their own `Display` impl and
//! prints a fixed message when empty. Titles are left to the caller.

use std::{fmt, ops::Index};

use crate::models::{BucketItem, HistoryEntry, HistorySummary};

/// Defines a `Vec` newtype with slice-like accessors and a Display impl.
macro_rules! display_collection {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        pub struct $name(pub Vec<$item>);

        impl $name {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of elements in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    writeln!(f, $empty)
                } else {
                    for item in &self.0 {
                        write!(f, "{item}")?;
                    }
                    Ok(())
                }
            }
        }
    };
}

display_collection!(
    /// Bucket items, one Markdown section each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dayplan_core::display::BucketItems;
    ///
    /// let items = BucketItems(vec![]);
    /// assert_eq!(items.to_string(), "No items found.\n");
    /// ```
    BucketItems,
    BucketItem,
    "No items found."
);

display_collection!(
    /// Per-day history summaries, newest first.
    HistorySummaries,
    HistorySummary,
    "No history recorded yet."
);

display_collection!(
    /// Raw history rows for a date or an item.
    HistoryEntries,
    HistoryEntry,
    "No history entries found."
);
