use std::collections::HashSet;

use futures_util::stream::FuturesUnordered;
use log::{info, warn};

use crate::api::RecordQuery;
use crate::api::paths;
use crate::error::{Error, Result};
use crate::model::provider::DomainApi;
use crate::model::record::Record;
use crate::workflows::BatchReport;
use crate::workflows::records::list_records;

pub const DEFAULT_DEDUPE_LIMIT: u32 = 100;

/// The first record (in response order) for every distinct
/// `(type, name, data)` triple.
pub fn first_occurrences(records: &[Record]) -> Vec<&Record> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|record| seen.insert(record.key()))
        .collect()
}

/// Ids of every record that is not the first occurrence of its triple.
pub fn duplicate_ids(records: &[Record]) -> Vec<u64> {
    let keep: HashSet<u64> = first_occurrences(records)
        .into_iter()
        .filter_map(|record| record.id)
        .collect();

    records
        .iter()
        .filter_map(|record| record.id)
        .filter(|id| !keep.contains(id))
        .collect()
}

/// Deletes all but the first copy of each duplicated record. Only the
/// first `limit` records are inspected.
pub async fn delete_duplicate_records(
    api: &dyn DomainApi,
    domain: &str,
    limit: u32,
) -> Result<BatchReport> {
    let query = RecordQuery::new(Some(limit), None);
    let records = list_records(api, domain, &query).await?.domain_records;
    if records.len() >= limit as usize {
        warn!(
            "{domain} returned {} records, anything past the first {limit} was not checked",
            records.len()
        );
    }

    let ids = duplicate_ids(&records);
    info!("Found {} duplicate records on {domain}", ids.len());

    let pending = FuturesUnordered::new();
    for id in ids {
        let path = paths::record_path(domain, id);
        pending.push(async move {
            info!("Deleting {path}");
            let body = api.delete(&path).await?;
            info!("{body}");
            Ok::<(), Error>(())
        });
    }

    Ok(BatchReport::collect(pending).await)
}
