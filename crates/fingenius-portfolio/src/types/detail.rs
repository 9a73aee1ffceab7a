//! Derived per-holding result.

use fingenius_traits::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Valuation and classification of one holding, computed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingDetail {
    /// Ticker symbol.
    pub symbol: Symbol,

    /// Units held.
    pub quantity: Decimal,

    /// Cost basis per unit.
    pub purchase_price: Decimal,

    /// Latest price (zero when unavailable).
    pub current_price: Decimal,

    /// `purchase_price × quantity`.
    pub invested_amount: Decimal,

    /// `current_price × quantity`.
    pub current_value: Decimal,

    /// `current_value - invested_amount`.
    pub profit_loss: Decimal,

    /// Holding ROI in percent (0 when nothing was invested).
    pub roi_percent: f64,

    /// Sector label ("Unknown" when not classified).
    pub sector: String,

    /// Price/earnings multiple, if known.
    pub valuation_multiple: Option<f64>,

    /// Deterministic recommendation for this holding.
    pub recommendation: String,
}
