//! Risk-adjusted return.

/// Sharpe-style ratio from percent returns and a decimal volatility.
///
/// ```text
/// sharpe = (roi% / 100 - rf% / 100) / volatility
/// ```
///
/// Returns `0.0` when volatility is zero or not finite.
#[must_use]
pub fn sharpe_ratio(roi_percent: f64, volatility: f64, risk_free_rate: f64) -> f64 {
    if volatility == 0.0 || !volatility.is_finite() {
        return 0.0;
    }
    (roi_percent / 100.0 - risk_free_rate / 100.0) / volatility
}
