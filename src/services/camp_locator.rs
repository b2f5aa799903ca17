// src/services/camp_locator.rs
// DOCUMENTATION: Zip code -> geocode -> nearby search -> camp records
// PURPOSE: Own the lookup status and guarantee Loading never outlives a lookup

use crate::errors::LookupError;
use crate::models::{CampRecord, LookupQuery, LookupStatus};
use crate::services::LocationProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Status shared between the locator and its in-flight guard
struct LookupState {
    in_flight: AtomicBool,
    status: RwLock<LookupStatus>,
}

impl LookupState {
    fn set(&self, status: LookupStatus) {
        *self.status.write().unwrap_or_else(|e| e.into_inner()) = status;
    }

    fn get(&self) -> LookupStatus {
        self.status.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Exclusive hold on the single lookup slot
/// DOCUMENTATION: Dropping an unsettled guard (cancelled future, panic) resets Loading to Idle
struct LookupGuard<'a> {
    state: &'a LookupState,
    settled: bool,
}

impl<'a> LookupGuard<'a> {
    fn acquire(state: &'a LookupState) -> Option<Self> {
        state
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                state,
                settled: false,
            })
    }

    fn enter_loading(&self) {
        self.state.set(LookupStatus::Loading);
    }

    fn settle(mut self, status: LookupStatus) -> LookupStatus {
        self.state.set(status.clone());
        self.settled = true;
        status
    }
}

impl Drop for LookupGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut status = self.state.status.write().unwrap_or_else(|e| e.into_inner());
            if status.is_loading() {
                log::warn!("Camp lookup abandoned before it settled");
                *status = LookupStatus::Idle;
            }
        }
        self.state.in_flight.store(false, Ordering::Release);
    }
}

/// Campground locator
/// DOCUMENTATION: One lookup at a time; a concurrent call is rejected with LookupInProgress
pub struct CampLocator<P> {
    provider: P,
    state: LookupState,
}

impl<P: LocationProvider> CampLocator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            state: LookupState {
                in_flight: AtomicBool::new(false),
                status: RwLock::new(LookupStatus::Idle),
            },
        }
    }

    /// Snapshot of the current status
    pub fn status(&self) -> LookupStatus {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state.in_flight.load(Ordering::Acquire)
    }

    /// Run a full lookup for `raw` and return the settled status
    ///
    /// Invalid input settles straight to Error without entering Loading or
    /// calling the provider. It is only recorded when no lookup is in flight.
    pub async fn lookup(&self, raw: &str) -> LookupStatus {
        let query = match LookupQuery::parse(raw) {
            Ok(query) => query,
            Err(e) => {
                let status = LookupStatus::Error(e);
                return match LookupGuard::acquire(&self.state) {
                    Some(guard) => guard.settle(status),
                    None => status,
                };
            }
        };

        let Some(guard) = LookupGuard::acquire(&self.state) else {
            log::info!("Rejected lookup for {}: another lookup is in flight", raw);
            return LookupStatus::Error(LookupError::LookupInProgress);
        };

        guard.enter_loading();
        let outcome = self.find_camps(&query).await;
        match &outcome {
            Ok(camps) => log::info!("Found {} camps near {}", camps.len(), query.as_str()),
            Err(e) => log::info!("Camp lookup for {} failed: {}", query.as_str(), e),
        }
        guard.settle(LookupStatus::from(outcome))
    }

    async fn find_camps(&self, query: &LookupQuery) -> Result<Vec<CampRecord>, LookupError> {
        let center = self
            .provider
            .geocode(query)
            .await?
            .ok_or(LookupError::NotFound)?;

        let places = self.provider.nearby_campgrounds(center).await?;
        if places.is_empty() {
            return Err(LookupError::EmptyResults);
        }

        Ok(places.into_iter().map(CampRecord::from_place).collect())
    }
}
