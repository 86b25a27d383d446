use crate::app_config::AppConfig;
use crate::domain::{GeoLocation, School};
use crate::places::search_response::SearchResponse;
use reqwest::Client;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Resolves coordinates for each name in order. A failed lookup is logged and skipped,
/// it never aborts the run.
#[instrument(skip_all)]
pub async fn resolve_schools(client: &Client, config: &AppConfig, names: &[String]) -> Vec<School> {
    info!("🌍 Resolving school coordinates...");

    let mut schools = Vec::with_capacity(names.len());
    for name in names {
        match resolve(client, config, name).await {
            Ok(location) => schools.push(School {
                name: name.clone(),
                location,
            }),
            Err(err) => warn!("⚠️ Could not find coordinates for '{}': {}", name, err),
        }
    }

    info!("🌍 Resolving school coordinates... OK, {} of {} resolved", schools.len(), names.len());
    schools
}

#[instrument(skip(client, config))]
async fn resolve(client: &Client, config: &AppConfig, name: &str) -> Result<GeoLocation, ResolveError> {
    let places = config.places();
    let query = format!("{} {}", name, places.region_qualifier());

    let response = client
        .get(places.url())
        .query(&[("query", query.as_str()), ("key", places.api_key())])
        .send()
        .await?
        .error_for_status()?;

    let search_response = response.json::<SearchResponse>().await?;
    if search_response.status != "OK" {
        return Err(ResolveError::Miss {
            status: search_response.status,
        });
    }

    // Always the first result, no disambiguation
    search_response
        .results
        .into_iter()
        .next()
        .map(|result| result.geometry.location)
        .ok_or(ResolveError::Miss {
            status: "OK".to_string(),
        })
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no usable result (status {status})")]
    Miss { status: String },
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
}
