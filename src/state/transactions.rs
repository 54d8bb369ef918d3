//! Transaction listing filters and pagination.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::net::types::{Category, Transaction, TxKind};

pub const PAGE_SIZE: u32 = 20;

/// Server-side filter set for `GET /transactions`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionQuery {
    pub month: u32,
    pub year: i32,
    pub page: u32,
    pub category: Option<Category>,
    pub kind: Option<TxKind>,
}

impl TransactionQuery {
    pub fn new(month: u32, year: i32) -> Self {
        TransactionQuery { month, year, page: 1, category: None, kind: None }
    }

    /// Query string for the listing endpoint, leading `?` included.
    pub fn query_string(&self) -> String {
        let mut q = format!(
            "?month={}&year={}&page={}&limit={}",
            self.month, self.year, self.page, PAGE_SIZE
        );
        if let Some(category) = self.category {
            q.push_str("&category=");
            q.push_str(category.as_str());
        }
        if let Some(kind) = self.kind {
            q.push_str("&type=");
            q.push_str(kind.as_str());
        }
        q
    }

    pub fn page_count(&self, total: u64) -> u32 {
        u32::try_from(total.div_ceil(u64::from(PAGE_SIZE))).unwrap_or(u32::MAX).max(1)
    }
}

/// Case-insensitive description/notes search, applied client-side on the
/// current page.
pub fn matches_search(tx: &Transaction, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    tx.description.to_lowercase().contains(&needle)
        || tx.notes.as_deref().is_some_and(|n| n.to_lowercase().contains(&needle))
}
