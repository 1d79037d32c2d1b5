use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct CreateDomainRequest {
    pub name: String,
    pub ip_address: String,
}

/// Optional filters for listing a domain's records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub per_page: Option<u32>,
    pub record_type: Option<String>,
}

impl RecordQuery {
    pub fn new(per_page: Option<u32>, record_type: Option<String>) -> Self {
        Self {
            per_page,
            record_type,
        }
    }

    /// Renders `?per_page=N&type=T` with only the supplied parameters, or
    /// an empty string when neither is set.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(per_page) = self.per_page {
            params.push(format!("per_page={per_page}"));
        }
        if let Some(record_type) = &self.record_type {
            params.push(format!("type={record_type}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}
