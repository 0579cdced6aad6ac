// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use greensense_api::RecommendationsResponse;
use greensense_model::{
    AirQualitySnapshot, AreaId, CarbonSnapshot, ForecastSnapshot, LocationKey,
    RecommendationItem, VegetationSnapshot, WaterSnapshot,
};
use serde::de::DeserializeOwned;
use std::fmt::{Display, Formatter};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError(pub String);

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ClientError {}

/// The metrics service surface as seen from the dashboard. The aggregator
/// depends only on this trait, so the HTTP implementation can be swapped for
/// an in-process fake (tests) or a real data pipeline later.
#[async_trait]
pub trait MetricsApi: Send + Sync + 'static {
    async fn air_quality(&self, city: &LocationKey) -> Result<AirQualitySnapshot, ClientError>;
    async fn carbon(&self, city: &LocationKey) -> Result<CarbonSnapshot, ClientError>;
    async fn water(&self, city: &LocationKey) -> Result<WaterSnapshot, ClientError>;
    async fn vegetation(&self, area: &AreaId) -> Result<VegetationSnapshot, ClientError>;
    async fn pollution_forecast(&self, city: &LocationKey)
        -> Result<ForecastSnapshot, ClientError>;
    async fn recommendations(&self, risk_score: f64)
        -> Result<Vec<RecommendationItem>, ClientError>;
}

pub struct HttpMetricsApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMetricsApi {
    #[must_use]
    pub fn new(base_url: &str, request_timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(request_timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError(format!("request failed for {url}: {e}")))?;
        if !resp.status().is_success() {
            return Err(ClientError(format!(
                "unexpected status {} for {url}",
                resp.status()
            )));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ClientError(format!("invalid response body for {url}: {e}")))
    }
}

#[async_trait]
impl MetricsApi for HttpMetricsApi {
    async fn air_quality(&self, city: &LocationKey) -> Result<AirQualitySnapshot, ClientError> {
        self.get_json(&format!("/api/aqi/{}", city.as_str())).await
    }

    async fn carbon(&self, city: &LocationKey) -> Result<CarbonSnapshot, ClientError> {
        self.get_json(&format!("/api/carbon/{}", city.as_str()))
            .await
    }

    async fn water(&self, city: &LocationKey) -> Result<WaterSnapshot, ClientError> {
        self.get_json(&format!("/api/water/{}", city.as_str()))
            .await
    }

    async fn vegetation(&self, area: &AreaId) -> Result<VegetationSnapshot, ClientError> {
        self.get_json(&format!("/api/ndvi/{}", area.as_str())).await
    }

    async fn pollution_forecast(
        &self,
        city: &LocationKey,
    ) -> Result<ForecastSnapshot, ClientError> {
        self.get_json(&format!("/api/forecast/pollution/{}", city.as_str()))
            .await
    }

    async fn recommendations(
        &self,
        risk_score: f64,
    ) -> Result<Vec<RecommendationItem>, ClientError> {
        let response: RecommendationsResponse = self
            .get_json(&format!("/api/recommendations?risk={risk_score}"))
            .await?;
        Ok(response.recommendations)
    }
}
