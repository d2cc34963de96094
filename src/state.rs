//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, DeductionService, TaxService};
use crate::domain::repositories::DeductionRepository;

/// Services shared across all request handlers.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub tax_service: Arc<TaxService<dyn DeductionRepository>>,
    pub deduction_service: Arc<DeductionService<dyn DeductionRepository>>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Builds the state around one configuration repository.
    ///
    /// Both the tax and deduction services read from the same repository, so
    /// an admin update is visible to the next calculation.
    pub fn new(repository: Arc<dyn DeductionRepository>, auth_service: AuthService) -> Self {
        Self {
            tax_service: Arc::new(TaxService::new(repository.clone())),
            deduction_service: Arc::new(DeductionService::new(repository)),
            auth_service: Arc::new(auth_service),
        }
    }
}
