use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use serde_json::Value;

use crate::api::RecordQuery;
use crate::error::{Error, Result};
use crate::model::provider::DomainApi;
use crate::workflows::{self, DEFAULT_DEDUPE_LIMIT};

#[derive(Parser, Debug)]
#[command(name = "do-zones", version, about = "Manage DNS zones and records over the provider REST API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create a domain pointing at an IP address
    CreateDomain { domain: String, ip: String },
    /// Delete a domain and all of its records
    DeleteDomain { domain: String },
    /// Create a single record from a JSON body
    CreateRecord {
        domain: String,
        /// Record body, e.g. '{"type":"A","name":"www","data":"1.2.3.4"}'
        record: String,
    },
    /// Write every record of a domain to a JSON file
    Export {
        domain: String,
        #[arg(short, long, default_value = "records.json")]
        file: PathBuf,
    },
    /// Create records from an exported file, replacing {domain} and {ip}
    Import {
        domain: String,
        ip: String,
        #[arg(short, long, default_value = "records.json")]
        file: PathBuf,
    },
    /// Delete records sharing type, name and data with an earlier record
    Dedupe {
        domain: String,
        #[arg(short, long, default_value_t = DEFAULT_DEDUPE_LIMIT)]
        limit: u32,
    },
    /// List records, optionally filtered
    List {
        domain: String,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short = 't', long = "type")]
        record_type: Option<String>,
    },
    /// Update one record with a partial JSON body
    UpdateRecord {
        domain: String,
        id: u64,
        /// Partial record body, e.g. '{"data":"5.6.7.8"}'
        payload: String,
    },
    /// Point every A record of a domain at a new IP address
    ChangeIp { domain: String, ip: String },
}

fn parse_body(text: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(Error::InvalidInput(format!(
            "expected a JSON object, got {text}"
        )));
    }
    Ok(value)
}

pub async fn run(command: Command, api: &dyn DomainApi) -> Result<()> {
    match command {
        Command::CreateDomain { domain, ip } => {
            workflows::create_domain(api, &domain, &ip).await?;
        }
        Command::DeleteDomain { domain } => {
            workflows::delete_domain(api, &domain).await?;
        }
        Command::CreateRecord { domain, record } => {
            workflows::create_record(api, &domain, &parse_body(&record)?).await?;
        }
        Command::Export { domain, file } => {
            workflows::export_records(api, &domain, &file).await?;
        }
        Command::Import { domain, ip, file } => {
            workflows::import_records(api, &domain, &ip, &file).await?;
        }
        Command::Dedupe { domain, limit } => {
            let report = workflows::delete_duplicate_records(api, &domain, limit).await?;
            info!(
                "Deleted {} duplicate records ({} failed)",
                report.succeeded, report.failed
            );
        }
        Command::List {
            domain,
            limit,
            record_type,
        } => {
            let query = RecordQuery::new(limit, record_type);
            let records = workflows::list_records(api, &domain, &query).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::UpdateRecord {
            domain,
            id,
            payload,
        } => {
            workflows::update_record(api, &domain, id, &parse_body(&payload)?).await?;
        }
        Command::ChangeIp { domain, ip } => {
            workflows::change_records_ip(api, &domain, &ip).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::provider::MockDomainApi;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_parse_import_defaults_file() {
        let cli = Cli::try_parse_from(["do-zones", "import", "clone.com", "1.2.3.4"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Import {
                domain: "clone.com".into(),
                ip: "1.2.3.4".into(),
                file: PathBuf::from("records.json"),
            }
        );
    }

    #[test]
    fn test_parse_dedupe_default_limit() {
        let cli = Cli::try_parse_from(["do-zones", "dedupe", "example.com"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Dedupe {
                domain: "example.com".into(),
                limit: 100,
            }
        );
    }

    #[test]
    fn test_parse_list_filters() {
        let cli =
            Cli::try_parse_from(["do-zones", "list", "example.com", "-l", "50", "--type", "A"])
                .unwrap();
        assert_eq!(
            cli.command,
            Command::List {
                domain: "example.com".into(),
                limit: Some(50),
                record_type: Some("A".into()),
            }
        );
    }

    #[test]
    fn test_parse_requires_a_command() {
        assert!(Cli::try_parse_from(["do-zones"]).is_err());
    }

    #[test]
    fn test_parse_body_rejects_non_objects() {
        assert_matches!(parse_body("[1, 2]"), Err(Error::InvalidInput(_)));
        assert_matches!(parse_body("{"), Err(Error::Json(_)));
        assert_eq!(parse_body(r#"{"data":"1.2.3.4"}"#).unwrap(), json!({"data": "1.2.3.4"}));
    }

    #[tokio::test]
    async fn test_run_update_record() {
        let mut api = MockDomainApi::new();
        api.expect_put()
            .withf(|path, body| {
                path == "/v2/domains/example.com/records/7" && body == &json!({ "data": "5.6.7.8" })
            })
            .times(1)
            .returning(|_, _| Ok(json!({ "domain_record": { "id": 7 } })));

        let command = Command::UpdateRecord {
            domain: "example.com".into(),
            id: 7,
            payload: r#"{"data":"5.6.7.8"}"#.into(),
        };
        run(command, &api).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_propagates_workflow_errors() {
        let api = MockDomainApi::new();
        let command = Command::CreateRecord {
            domain: "example.com".into(),
            record: "not json".into(),
        };
        assert_matches!(run(command, &api).await, Err(Error::Json(_)));
    }
}
