use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use business::domain::shipping::errors::ShippingError;
use business::domain::shipping::model::{ShippingCity, ShippingWarehouse};
use business::domain::shipping::services::ShippingDirectoryService;

use crate::client::NovaPoshtaClient;

/// Response envelope shared by every Nova Poshta method. `data` stays raw
/// until `success` has been checked.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Value,
}

#[derive(Debug, Deserialize)]
struct CityRecord {
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Debug, Deserialize)]
struct WarehouseRecord {
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "CategoryOfWarehouse")]
    category: String,
}

fn parse_envelope(body: &str) -> Result<Envelope, ShippingError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Unexpected Nova Poshta response shape: {e}");
        ShippingError::InvalidResponse
    })
}

fn parse_records<T: DeserializeOwned>(data: Option<Value>) -> Result<Vec<T>, ShippingError> {
    let data = data.ok_or(ShippingError::InvalidResponse)?;
    serde_json::from_value(data).map_err(|e| {
        tracing::error!("Unexpected Nova Poshta record shape: {e}");
        ShippingError::InvalidResponse
    })
}

/// Cities in directory order. An unsuccessful call is an error.
fn parse_cities(body: &str) -> Result<Vec<ShippingCity>, ShippingError> {
    let envelope = parse_envelope(body)?;
    if !envelope.success {
        tracing::warn!("Nova Poshta rejected getCities: {}", envelope.errors);
        return Err(ShippingError::Rejected);
    }
    let records: Vec<CityRecord> = parse_records(envelope.data)?;

    Ok(records
        .into_iter()
        .map(|r| ShippingCity {
            description: r.description,
        })
        .collect())
}

/// Warehouses of the returned page. An unsuccessful call yields none,
/// whatever its `data` holds.
fn parse_warehouses(body: &str) -> Result<Vec<ShippingWarehouse>, ShippingError> {
    let envelope = parse_envelope(body)?;
    if !envelope.success {
        tracing::warn!("Nova Poshta rejected getWarehouses: {}", envelope.errors);
        return Ok(vec![]);
    }
    let records: Vec<WarehouseRecord> = parse_records(envelope.data)?;

    Ok(records
        .into_iter()
        .map(|r| ShippingWarehouse {
            description: r.description,
            category: r.category,
        })
        .collect())
}

fn warehouse_properties(city: Option<String>) -> Value {
    let mut properties = Map::new();
    if let Some(city) = city {
        properties.insert("CityName".to_string(), Value::String(city));
    }
    Value::Object(properties)
}

pub struct ShippingDirectoryNovaPoshta {
    client: NovaPoshtaClient,
}

impl ShippingDirectoryNovaPoshta {
    pub fn new(client: NovaPoshtaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ShippingDirectoryService for ShippingDirectoryNovaPoshta {
    async fn list_cities(&self) -> Result<Vec<ShippingCity>, ShippingError> {
        let body = self.client.call("Address", "getCities", json!({})).await?;
        parse_cities(&body)
    }

    async fn list_warehouses(
        &self,
        city: Option<String>,
    ) -> Result<Vec<ShippingWarehouse>, ShippingError> {
        let body = self
            .client
            .call(
                "AddressGeneral",
                "getWarehouses",
                warehouse_properties(city),
            )
            .await?;
        parse_warehouses(&body)
    }
}
