// SPDX-License-Identifier: Apache-2.0

use crate::client::{ClientError, HttpMetricsApi, MetricsApi};
use greensense_model::{AreaId, DashboardViewModel, LocationKey, MetricField};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// The dashboard observes one fixed vegetation area, independent of the
/// active city.
pub const DEFAULT_OBSERVATION_AREA: &str = "Amazon-Basin-01";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    /// Area identifier used for every vegetation fetch; the dashboard tracks
    /// one fixed observation area rather than deriving it from the city.
    pub area_id: String,
    pub risk_score: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(10),
            area_id: DEFAULT_OBSERVATION_AREA.to_string(),
            risk_score: 0.8,
        }
    }
}

/// What a `refresh` call did with the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// All fetches settled and this refresh published the view.
    Rendered,
    /// All fetches settled, but a newer refresh already published; the stale
    /// result was discarded.
    Superseded,
    /// Blank input or unchanged location; nothing was fetched.
    Ignored,
}

struct RefreshLedger {
    active: Option<LocationKey>,
    next_generation: u64,
    published_generation: u64,
}

/// Owns the active location and the shared view model. The view is only ever
/// replaced wholesale, after every fetch of a cycle has settled; readers
/// observe it through [`Dashboard::subscribe`] or [`Dashboard::snapshot`].
pub struct Dashboard {
    api: Arc<dyn MetricsApi>,
    area: AreaId,
    risk_score: f64,
    ledger: Mutex<RefreshLedger>,
    view: watch::Sender<DashboardViewModel>,
}

impl Dashboard {
    #[must_use]
    pub fn new(api: Arc<dyn MetricsApi>, config: &DashboardConfig) -> Self {
        let (view, _) = watch::channel(DashboardViewModel::empty());
        Self {
            api,
            area: AreaId::or_default(Some(&config.area_id), DEFAULT_OBSERVATION_AREA),
            risk_score: config.risk_score,
            ledger: Mutex::new(RefreshLedger {
                active: None,
                next_generation: 0,
                published_generation: 0,
            }),
            view,
        }
    }

    /// Wire an HTTP client from the same config.
    #[must_use]
    pub fn over_http(config: &DashboardConfig) -> Self {
        let api = Arc::new(HttpMetricsApi::new(&config.base_url, config.request_timeout));
        Self::new(api, config)
    }

    /// Read-only subscription to view replacements.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardViewModel> {
        self.view.subscribe()
    }

    /// Clone of the currently published view.
    #[must_use]
    pub fn snapshot(&self) -> DashboardViewModel {
        self.view.borrow().clone()
    }

    #[must_use]
    pub async fn active_location(&self) -> Option<LocationKey> {
        self.ledger.lock().await.active.clone()
    }

    /// Change the active location and rebuild the view.
    ///
    /// All six fetches are issued concurrently and each one converts its own
    /// failure into an unavailable slot, so one failing metric never blocks
    /// the rest. The merged view is published once, after every fetch has
    /// settled. Overlapping refreshes run to completion independently; each
    /// cycle is stamped with a generation and only the newest completed
    /// generation may publish, so a slow stale cycle can never overwrite a
    /// newer view.
    pub async fn refresh(&self, input: &str) -> RefreshOutcome {
        let Ok(location) = LocationKey::parse(input) else {
            debug!(input, "refresh ignored: blank location");
            return RefreshOutcome::Ignored;
        };

        let generation = {
            let mut ledger = self.ledger.lock().await;
            if ledger.active.as_ref() == Some(&location) {
                debug!(location = %location, "refresh ignored: location unchanged");
                return RefreshOutcome::Ignored;
            }
            ledger.active = Some(location.clone());
            ledger.next_generation += 1;
            ledger.next_generation
        };
        info!(location = %location, generation, "refresh start");

        let (air_quality, carbon, water, vegetation, forecast, recommendations) = tokio::join!(
            settle(self.api.air_quality(&location), "aqi"),
            settle(self.api.carbon(&location), "carbon"),
            settle(self.api.water(&location), "water"),
            settle(self.api.vegetation(&self.area), "ndvi"),
            settle(self.api.pollution_forecast(&location), "forecast"),
            async {
                match self.api.recommendations(self.risk_score).await {
                    Ok(items) => items,
                    Err(e) => {
                        warn!(metric = "recommendations", error = %e, "metric unavailable this cycle");
                        Vec::new()
                    }
                }
            },
        );

        let view = DashboardViewModel {
            location: Some(location.clone()),
            generation,
            air_quality,
            carbon,
            water,
            vegetation,
            forecast,
            recommendations,
        };

        let mut ledger = self.ledger.lock().await;
        if generation < ledger.published_generation {
            info!(
                location = %location,
                generation,
                newest = ledger.published_generation,
                "refresh superseded; discarding stale view"
            );
            return RefreshOutcome::Superseded;
        }
        ledger.published_generation = generation;
        let available = view.available_count();
        self.view.send_replace(view);
        info!(location = %location, generation, available, "refresh settled");
        RefreshOutcome::Rendered
    }
}

async fn settle<T>(
    fut: impl Future<Output = Result<T, ClientError>>,
    metric: &'static str,
) -> MetricField<T> {
    match fut.await {
        Ok(value) => MetricField::Available(value),
        Err(e) => {
            warn!(metric, error = %e, "metric unavailable this cycle");
            MetricField::Unavailable
        }
    }
}
