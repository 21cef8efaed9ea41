//! Correction configuration.
//!
//! A pipeline usually picks one model per experiment (tip + substrate are fixed
//! for a whole map), so the choice is bundled here and can be loaded from the
//! environment or deserialized from the caller's own settings file.

use serde::{Deserialize, Serialize};

use crate::domain::{BecModel, IndenterShape};
use crate::error::BecError;

pub const ENV_MODEL: &str = "BEC_MODEL";
pub const ENV_SHAPE: &str = "BEC_SHAPE";
pub const ENV_TIP_PARAMETER: &str = "BEC_TIP_PARAMETER";
pub const ENV_ORDER: &str = "BEC_ORDER";

/// Which correction to apply and with which tip geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    pub model: BecModel,
    pub shape: IndenterShape,
    /// Tip radius (paraboloid, flat punch) or half-opening angle in radians
    /// (cone, conical).
    pub tip_parameter: f64,
    /// Series truncation order. `None` uses the model default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
}

impl CorrectionConfig {
    pub fn new(model: BecModel, shape: IndenterShape, tip_parameter: f64) -> Self {
        Self {
            model,
            shape,
            tip_parameter,
            order: None,
        }
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// Order that will actually be summed.
    pub fn effective_order(&self) -> usize {
        self.order.unwrap_or_else(|| self.model.default_order())
    }

    /// Check everything that can be checked without indentation data.
    ///
    /// An order above the term table is accepted here: the selectable-order
    /// models degrade each sample instead of failing the call.
    pub fn validate(&self) -> Result<(), BecError> {
        if !self.model.supports(self.shape) {
            return Err(BecError::geometry_mismatch(self.model, self.shape));
        }
        if !self.tip_parameter.is_finite() {
            return Err(BecError::InvalidConfig(format!(
                "tip parameter must be finite, got {}",
                self.tip_parameter
            )));
        }
        if let Some(order) = self.order {
            check_order(self.model, order)?;
        }
        Ok(())
    }

    /// Load from `BEC_*` variables, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, BecError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, settings map, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BecError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| BecError::InvalidConfig(format!("Missing {key} in environment (.env).")))
        };

        let model: BecModel = required(ENV_MODEL)?.parse()?;
        let shape: IndenterShape = required(ENV_SHAPE)?.parse()?;
        let raw_tip = required(ENV_TIP_PARAMETER)?;
        let tip_parameter: f64 = raw_tip.trim().parse().map_err(|_| {
            BecError::InvalidConfig(format!("{ENV_TIP_PARAMETER} is not a number: {raw_tip:?}"))
        })?;
        let order = match lookup(ENV_ORDER) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<usize>().map_err(|_| {
                BecError::InvalidConfig(format!("{ENV_ORDER} is not a positive integer: {raw:?}"))
            })?),
            _ => None,
        };

        let config = Self {
            model,
            shape,
            tip_parameter,
            order,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Structural order checks shared by the config and the model dispatcher.
pub(crate) fn check_order(model: BecModel, order: usize) -> Result<(), BecError> {
    if order == 0 {
        return Err(BecError::invalid_order(model, order, "order must be >= 1"));
    }
    if !model.has_selectable_order() && order != model.term_count() {
        return Err(BecError::invalid_order(
            model,
            order,
            format!("the series has a fixed {} terms", model.term_count()),
        ));
    }
    Ok(())
}
