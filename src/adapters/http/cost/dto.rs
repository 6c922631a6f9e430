//! HTTP DTOs for cost endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::cost::TotalCostView;

/// Query parameters for `GET /api/v1/cost/total`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalCostParams {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
}

/// Total cost over a month window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalCostResponse {
    pub total: u128,
    pub currency: String,
    pub months_counted: u64,
}

impl From<TotalCostView> for TotalCostResponse {
    fn from(view: TotalCostView) -> Self {
        Self {
            total: view.total,
            currency: view.currency,
            months_counted: view.months_counted,
        }
    }
}
