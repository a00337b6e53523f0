//! Transaction-history ordering and paging for the dashboard table.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};

use crate::net::types::Transaction;

pub const PAGE_SIZE: usize = 10;

/// One page of the history table.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub items: Vec<Transaction>,
    /// 1-based page actually shown after clamping.
    pub page: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Newest first; unparseable timestamps sink to the end in their original order.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by_cached_key(|tx| Reverse(parse_timestamp(&tx.timestamp)));
}

/// Sort a copy of `transactions` and slice out `requested` page.
pub fn paginate(transactions: &[Transaction], requested: usize) -> Page {
    let mut sorted = transactions.to_vec();
    sort_newest_first(&mut sorted);
    let total_pages = total_pages(sorted.len());
    let page = clamp_page(requested, total_pages);
    let items = sorted.into_iter().skip((page - 1) * PAGE_SIZE).take(PAGE_SIZE).collect();
    Page { items, page, total_pages }
}

/// Status column text: capitalized, `Approved` when the backend omits it.
pub fn status_label(status: Option<&str>) -> String {
    let clean = status.map(str::trim).filter(|s| !s.is_empty()).unwrap_or("approved").to_lowercase();
    let mut chars = clean.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Short reference shown in the ID column.
pub fn short_reference(id: &str) -> String {
    let prefix: String = id.chars().take(5).collect();
    format!("TXN{prefix}")
}

/// Display date (`YYYY-MM-DD`) or the raw value when unparseable.
pub fn display_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |ts| ts.format("%Y-%m-%d").to_string())
}
