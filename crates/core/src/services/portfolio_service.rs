use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::{Holding, HoldingKind};
use crate::models::profile::Profile;

/// Manages the holdings collection: add, edit, remove, look up.
///
/// Pure business logic — no I/O. Every mutation is an atomic
/// replace-in-place: validation happens before the collection is
/// touched, so no partial state is ever observable.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add a new holding. Returns the assigned id.
    pub fn add(&self, profile: &mut Profile, kind: HoldingKind) -> Result<Uuid, CoreError> {
        Self::validate_kind(&kind)?;
        let holding = Holding::new(kind);
        let id = holding.id;
        profile.holdings.push(holding);
        Ok(id)
    }

    /// Replace an existing holding's kind, keeping its id and position.
    pub fn update(
        &self,
        profile: &mut Profile,
        id: Uuid,
        kind: HoldingKind,
    ) -> Result<(), CoreError> {
        Self::validate_kind(&kind)?;
        let holding = profile
            .holdings
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;
        holding.kind = kind;
        Ok(())
    }

    /// Remove a holding by id.
    pub fn remove(&self, profile: &mut Profile, id: Uuid) -> Result<(), CoreError> {
        let idx = profile
            .holdings
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| CoreError::HoldingNotFound(id.to_string()))?;
        profile.holdings.remove(idx);
        Ok(())
    }

    /// Look up a holding by id.
    pub fn get<'a>(&self, profile: &'a Profile, id: Uuid) -> Option<&'a Holding> {
        profile.holdings.iter().find(|h| h.id == id)
    }

    /// A holding must carry a finite, positive quantity to be persisted.
    /// Rejected input never reaches the collection.
    fn validate_kind(kind: &HoldingKind) -> Result<(), CoreError> {
        let amount = kind.amount();
        if !amount.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Amount must be a finite number, got {amount}"
            )));
        }
        if amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Amount must be positive, got {amount}"
            )));
        }
        Ok(())
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
