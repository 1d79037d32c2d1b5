use std::path::Path;

use futures_util::stream::FuturesUnordered;
use log::{info, warn};
use serde_json::{Value, json};

use crate::api::RecordQuery;
use crate::api::paths;
use crate::error::Result;
use crate::model::provider::DomainApi;
use crate::model::record::RecordCollection;
use crate::workflows::BatchReport;

/// Page size used when collecting the A records to repoint.
pub const CHANGE_IP_LIMIT: u32 = 100;

pub async fn create_record(api: &dyn DomainApi, domain: &str, record: &Value) -> Result<Value> {
    let response = api.post(&paths::records_path(domain), record).await?;
    info!("{response}");
    Ok(response)
}

pub async fn list_records(
    api: &dyn DomainApi,
    domain: &str,
    query: &RecordQuery,
) -> Result<RecordCollection> {
    let response = api
        .get(&paths::records_query_path(domain, query))
        .await?;
    Ok(serde_json::from_value(response)?)
}

/// Writes the unpaginated record listing for `domain` to `path` exactly as
/// the API returned it, replacing any existing file.
pub async fn export_records(api: &dyn DomainApi, domain: &str, path: &Path) -> Result<()> {
    let response = api.get(&paths::records_path(domain)).await?;
    tokio::fs::write(path, serde_json::to_string(&response)?).await?;
    info!("Exported records of {domain} to {}", path.display());
    Ok(())
}

pub async fn update_record(
    api: &dyn DomainApi,
    domain: &str,
    id: u64,
    payload: &Value,
) -> Result<Value> {
    let response = api.put(&paths::record_path(domain, id), payload).await?;
    info!("{response}");
    Ok(response)
}

/// Points every A record of `domain` (first page of 100) at `new_ip`.
/// Updates run concurrently and all of them finish before this returns.
pub async fn change_records_ip(
    api: &dyn DomainApi,
    domain: &str,
    new_ip: &str,
) -> Result<BatchReport> {
    let query = RecordQuery::new(Some(CHANGE_IP_LIMIT), Some("A".to_string()));
    let records = list_records(api, domain, &query).await?.domain_records;
    let payload = json!({ "data": new_ip });

    let pending = FuturesUnordered::new();
    for record in &records {
        let Some(id) = record.id else {
            warn!("Skipping A record {} without an id", record.name);
            continue;
        };
        pending.push(update_record(api, domain, id, &payload));
    }

    let report = BatchReport::collect(pending).await;
    info!(
        "Changed {} A records of {domain} to {new_ip} ({} failed)",
        report.succeeded, report.failed
    );
    Ok(report)
}
