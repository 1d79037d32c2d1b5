use crate::api::types::RecordQuery;

pub fn domains_path() -> String {
    String::from("/v2/domains")
}

pub fn domain_path(domain: &str) -> String {
    format!("/v2/domains/{domain}")
}

pub fn records_path(domain: &str) -> String {
    format!("/v2/domains/{domain}/records")
}

pub fn records_query_path(domain: &str, query: &RecordQuery) -> String {
    format!("{}{}", records_path(domain), query.to_query_string())
}

pub fn record_path(domain: &str, id: u64) -> String {
    format!("/v2/domains/{domain}/records/{id}")
}
