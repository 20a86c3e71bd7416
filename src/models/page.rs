//! One page of the paginated item listing.

use super::ItemSummary;

/// A page of item references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListPage {
    pub items: Vec<ItemSummary>,
    /// Whether another page exists after this one.
    pub has_next: bool,
    /// Size of the whole listing, not just this page.
    pub total_count: usize,
}

impl ListPage {
    /// Slice `[offset, offset + limit)` out of a complete, unpaginated list.
    pub fn from_full_list(mut members: Vec<ItemSummary>, limit: usize, offset: usize) -> Self {
        let total_count = members.len();
        let end = offset.saturating_add(limit).min(total_count);
        let start = offset.min(end);
        let items = members.drain(start..end).collect();
        Self {
            items,
            has_next: offset.saturating_add(limit) < total_count,
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(n: usize) -> Vec<ItemSummary> {
        (1..=n)
            .map(|i| ItemSummary::new(format!("mon-{}", i), format!("/pokemon/{}/", i)))
            .collect()
    }

    #[test]
    fn test_first_page() {
        let page = ListPage::from_full_list(members(73), 20, 0);
        assert_eq!(page.items.len(), 20);
        assert!(page.has_next);
        assert_eq!(page.total_count, 73);
        assert_eq!(page.items[0].name, "mon-1");
    }

    #[test]
    fn test_last_partial_page() {
        let page = ListPage::from_full_list(members(73), 20, 60);
        assert_eq!(page.items.len(), 13);
        assert!(!page.has_next);
        assert_eq!(page.items[0].name, "mon-61");
    }

    #[test]
    fn test_offset_past_end() {
        let page = ListPage::from_full_list(members(5), 20, 40);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_exact_boundary() {
        let page = ListPage::from_full_list(members(40), 20, 20);
        assert_eq!(page.items.len(), 20);
        assert!(!page.has_next);
    }
}
