//! Paginated response envelope
//!
//! Matches the page metadata the headless catalog API wraps around
//! list results.

use serde::{Deserialize, Serialize};

/// Paginated list of documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub docs: Vec<T>,
    pub total_docs: i64,
    pub limit: i64,
    pub total_pages: i64,
    pub page: i64,
    #[serde(default)]
    pub paging_counter: i64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<i64>,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a fully materialized page (used by the client-side fallback).
    pub fn single_page(docs: Vec<T>, page: i64, limit: i64, total_docs: i64) -> Self {
        let total_pages = if total_docs == 0 {
            1
        } else {
            (total_docs + limit - 1) / limit
        };
        Self {
            docs,
            total_docs,
            limit,
            total_pages,
            page,
            paging_counter: (page - 1) * limit + 1,
            has_prev_page: page > 1,
            has_next_page: page < total_pages,
            prev_page: (page > 1).then(|| page - 1),
            next_page: (page < total_pages).then(|| page + 1),
        }
    }
}
