//! One-shot operations composed from the authenticated bindings.

pub mod dedupe;
pub mod domains;
pub mod import;
pub mod records;

use std::future::Future;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;

use crate::error::Result;

pub use dedupe::{DEFAULT_DEDUPE_LIMIT, delete_duplicate_records};
pub use domains::{create_domain, delete_domain};
pub use import::import_records;
pub use records::{
    change_records_ip, create_record, export_records, list_records, update_record,
};

/// Outcome of a set of per-record requests dispatched together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    /// Drives every pending request to completion, in whatever order they
    /// finish. Failures are already logged by the HTTP layer.
    pub async fn collect<F, T>(mut pending: FuturesUnordered<F>) -> Self
    where
        F: Future<Output = Result<T>>,
    {
        let mut report = Self::default();
        while let Some(result) = pending.next().await {
            match result {
                Ok(_) => report.succeeded += 1,
                Err(_) => report.failed += 1,
            }
        }
        report
    }
}
