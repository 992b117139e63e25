use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use uniformes::workflows::uniforms::{
    Catalog, CatalogHandle, CatalogStore, CatalogStoreError, EmployeeGarmentInput, UniformEngine,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog snapshot holder plus the assessment engine, shared by the
/// HTTP routes.
pub(crate) struct EngineState {
    pub(crate) catalog: CatalogHandle,
    pub(crate) engine: UniformEngine,
}

impl EngineState {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self {
            catalog: CatalogHandle::new(catalog),
            engine: UniformEngine::new(),
        }
    }
}

/// Loads the catalog document, falling back to the built-in standard
/// catalog when the file does not exist or holds no occupations yet.
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog, CatalogStoreError> {
    let catalog = CatalogStore::new(path).load()?;
    if catalog.occupations.is_empty() {
        info!(
            path = %path.display(),
            "catalog file has no occupations; using the standard catalog"
        );
        return Ok(Catalog::standard());
    }
    Ok(catalog)
}

/// Converts a JSON quantity map into engine input cells. Numbers and
/// strings are both accepted; anything else reads as blank.
pub(crate) fn garment_input_from_json(
    quantities: &serde_json::Map<String, Value>,
) -> EmployeeGarmentInput {
    quantities
        .iter()
        .map(|(column_id, value)| {
            let cell = match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                _ => String::new(),
            };
            (column_id.clone(), cell)
        })
        .collect()
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
