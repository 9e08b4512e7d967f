//! Order list state: status tab filter, id search, sort, pagination
//!
//! Shared by the admin console and the customer view; both present the same
//! affordances over differently-scoped lists. Operates purely on the cached
//! order list, which the owning console refreshes from the repository.

use shared::models::{Order, OrderStatus};

/// Fixed page size for order tables
pub const PAGE_SIZE: usize = 5;

/// Sortable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    TotalAmount,
    OrderDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Filterable, sortable, paginated view over a cached order list
#[derive(Debug)]
pub struct OrderListState {
    orders: Vec<Order>,
    /// Active status tab; `None` shows all statuses
    tab: Option<OrderStatus>,
    /// Free-text id search
    search: String,
    /// Explicit sort; `None` means the default date-descending order
    sort: Option<(SortField, SortDirection)>,
    /// Current page, 1-based
    page: usize,
}

impl OrderListState {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            tab: None,
            search: String::new(),
            sort: None,
            page: 1,
        }
    }

    /// Replace the whole cached list (after a refetch)
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.clamp_page();
    }

    /// All cached orders, unfiltered
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Find a cached order by id
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Replace a single order with the backend's updated copy
    pub fn replace(&mut self, updated: Order) {
        if let Some(slot) = self.orders.iter_mut().find(|o| o.id == updated.id) {
            *slot = updated;
        } else {
            self.orders.push(updated);
        }
    }

    /// Drop an order from the cache (e.g. gone on refetch)
    pub fn remove(&mut self, order_id: &str) {
        self.orders.retain(|o| o.id != order_id);
        self.clamp_page();
    }

    pub fn tab(&self) -> Option<OrderStatus> {
        self.tab
    }

    /// Switch the status tab; resets to the first page
    pub fn set_tab(&mut self, tab: Option<OrderStatus>) {
        self.tab = tab;
        self.page = 1;
    }

    /// Update the id search term; resets to the first page
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn sort(&self) -> Option<(SortField, SortDirection)> {
        self.sort
    }

    /// Sort by a column; toggling the same column reverses direction
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = match self.sort {
            Some((current, dir)) if current == field => Some((field, dir.flipped())),
            _ => Some((field, SortDirection::Ascending)),
        };
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Number of pages for the current filter
    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    fn matches(&self, order: &Order) -> bool {
        let matches_tab = self.tab.is_none_or(|tab| order.status == tab);
        let matches_search = self.search.is_empty()
            || order
                .id
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        matches_tab && matches_search
    }

    fn filtered(&self) -> Vec<&Order> {
        let mut filtered: Vec<&Order> = self.orders.iter().filter(|o| self.matches(o)).collect();

        match self.sort {
            // Default: newest first.
            None => filtered.sort_by(|a, b| b.order_date.cmp(&a.order_date)),
            Some((field, dir)) => {
                filtered.sort_by(|a, b| {
                    let ordering = match field {
                        SortField::Id => a.id.cmp(&b.id),
                        SortField::TotalAmount => a
                            .total_amount
                            .partial_cmp(&b.total_amount)
                            .unwrap_or(std::cmp::Ordering::Equal),
                        SortField::OrderDate => a.order_date.cmp(&b.order_date),
                    };
                    match dir {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                });
            }
        }

        filtered
    }

    /// Orders visible on the current page, filtered and sorted
    pub fn visible(&self) -> Vec<&Order> {
        self.filtered()
            .into_iter()
            .skip((self.page.saturating_sub(1)) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages().max(1);
        if self.page > total {
            self.page = total;
        }
    }
}

impl Default for OrderListState {
    fn default() -> Self {
        Self::new()
    }
}
