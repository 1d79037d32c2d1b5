use log::info;
use serde_json::Value;

use crate::api::CreateDomainRequest;
use crate::api::paths;
use crate::error::Result;
use crate::model::provider::DomainApi;

pub async fn create_domain(api: &dyn DomainApi, name: &str, ip: &str) -> Result<Value> {
    let body = serde_json::to_value(CreateDomainRequest {
        name: name.to_string(),
        ip_address: ip.to_string(),
    })?;
    let response = api.post(&paths::domains_path(), &body).await?;
    info!("{response}");
    Ok(response)
}

pub async fn delete_domain(api: &dyn DomainApi, name: &str) -> Result<String> {
    let response = api.delete(&paths::domain_path(name)).await?;
    info!("{response}");
    Ok(response)
}
