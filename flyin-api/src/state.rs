use std::sync::Arc;
use flyin_catalog::{ExperienceCatalog, Fleet, PricingEngine};
use flyin_core::{LocationTable, PaymentCatalog, StablecoinConfig};

use crate::app_config::Config;

#[derive(Clone)]
pub struct AppState {
    pub pricing: Arc<PricingEngine>,
    pub locations: Arc<LocationTable>,
    pub fleet: Arc<Fleet>,
    pub experiences: Arc<ExperienceCatalog>,
    pub payments: Arc<PaymentCatalog>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let stablecoin = StablecoinConfig {
            enabled: config.payments.stablecoin_enabled,
            auto_approval_threshold: config.payments.auto_approval_threshold,
            ..StablecoinConfig::default()
        };

        Self {
            pricing: Arc::new(PricingEngine::new(config.pricing.clone())),
            locations: Arc::new(LocationTable::builtin().clone()),
            fleet: Arc::new(Fleet::builtin()),
            experiences: Arc::new(ExperienceCatalog::builtin()),
            payments: Arc::new(PaymentCatalog::with_stablecoin(stablecoin)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pricing: Arc::new(PricingEngine::default()),
            locations: Arc::new(LocationTable::builtin().clone()),
            fleet: Arc::new(Fleet::builtin()),
            experiences: Arc::new(ExperienceCatalog::builtin()),
            payments: Arc::new(PaymentCatalog::default()),
        }
    }
}
