use std::path::Path;

use log::{error, info};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::provider::DomainApi;
use crate::template::substitute_placeholders;
use crate::workflows::records::create_record;

/// Record types the provider manages itself and refuses to create.
const PROVIDER_MANAGED_TYPES: [&str; 2] = ["NS", "SOA"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Extracts the `domain_records` array from an exported listing.
pub fn template_records(text: &str) -> Result<Vec<Value>> {
    let mut listing: Value = serde_json::from_str(text)?;
    match listing.get_mut("domain_records").map(Value::take) {
        Some(Value::Array(records)) => Ok(records),
        _ => Err(Error::InvalidInput(
            "template has no domain_records array".to_string(),
        )),
    }
}

/// Turns one template entry into a request body: the id is dropped,
/// NS/SOA entries yield `None`, and `{domain}`/`{ip}` are substituted
/// across the whole serialized record.
pub fn prepare_template_record(mut record: Value, domain: &str, ip: &str) -> Result<Option<Value>> {
    if let Some(fields) = record.as_object_mut() {
        fields.shift_remove("id");
    }

    let record_type = record.get("type").and_then(Value::as_str);
    if record_type.is_some_and(|t| PROVIDER_MANAGED_TYPES.contains(&t)) {
        return Ok(None);
    }

    let text = serde_json::to_string(&record)?;
    let text = substitute_placeholders(&text, &[("domain", domain), ("ip", ip)]);
    Ok(Some(serde_json::from_str(&text)?))
}

/// Creates one record on `domain` per template entry in `path`, one request
/// at a time and in file order. A failing entry is logged and skipped over.
pub async fn import_records(
    api: &dyn DomainApi,
    domain: &str,
    ip: &str,
    path: &Path,
) -> Result<ImportReport> {
    let text = tokio::fs::read_to_string(path).await?;
    let templates = template_records(&text)?;
    let mut report = ImportReport::default();

    for template in templates {
        let record = match prepare_template_record(template, domain, ip) {
            Ok(Some(record)) => record,
            Ok(None) => {
                report.skipped += 1;
                continue;
            }
            Err(e) => {
                error!("Could not prepare template record: {e}");
                report.failed += 1;
                continue;
            }
        };

        match create_record(api, domain, &record).await {
            Ok(_) => {
                info!(
                    "Created record {} - {} -> {}",
                    field(&record, "type"),
                    field(&record, "name"),
                    field(&record, "data")
                );
                report.created += 1;
            }
            Err(_) => report.failed += 1,
        }
    }

    info!(
        "Imported {} records into {domain} ({} skipped, {} failed)",
        report.created, report.skipped, report.failed
    );
    Ok(report)
}

fn field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or_default()
}
