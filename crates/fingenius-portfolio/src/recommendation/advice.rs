//! Advice sentences for holdings and portfolios.

use fingenius_traits::Symbol;

use super::tiers::{PortfolioRoiTier, RoiTier};
use crate::bucketing::SectorBreakdown;
use crate::types::AnalyticsConfig;

/// Advice emitted when no rule applies.
pub const NO_SPECIFIC_ADVICE: &str = "No specific advice at this time.";

/// Fixed sentence for one holding, keyed by its ROI tier.
#[must_use]
pub fn holding_recommendation(symbol: &Symbol, roi_percent: f64) -> String {
    match RoiTier::classify(roi_percent) {
        RoiTier::SevereLoss => format!(
            "{symbol} is down more than 20%. Review the position and consider cutting losses."
        ),
        RoiTier::MildLoss => format!(
            "{symbol} is at a modest loss. Hold and monitor, or average down if conviction is high."
        ),
        RoiTier::LowGain => {
            format!("{symbol} shows a small gain. Hold and watch for stronger momentum.")
        }
        RoiTier::ModerateGain => {
            format!("{symbol} is performing well. Consider holding or adding on dips.")
        }
        RoiTier::StrongGain => format!(
            "{symbol} has gained 20% or more. Consider taking partial profits."
        ),
    }
}

/// Fixed sentence for the overall portfolio ROI tier.
#[must_use]
pub fn portfolio_roi_sentence(roi_percent: f64) -> &'static str {
    match PortfolioRoiTier::classify(roi_percent) {
        PortfolioRoiTier::Negative => {
            "Your returns are negative. Consider rebalancing or diversifying."
        }
        PortfolioRoiTier::Low => {
            "Low positive ROI. Explore higher yield assets if risk tolerance allows."
        }
        PortfolioRoiTier::Healthy => "Looking good! Keep an eye on volatility.",
    }
}

/// Concentration and volatility warnings, in that order.
///
/// One warning per sector strictly above the concentration threshold
/// (heaviest first), then one if volatility is strictly above the
/// volatility threshold.
#[must_use]
pub fn risk_warnings(
    breakdown: &SectorBreakdown,
    volatility: f64,
    config: &AnalyticsConfig,
) -> Vec<String> {
    let mut warnings: Vec<String> = breakdown
        .concentrated(config.concentration_threshold_pct)
        .into_iter()
        .map(|(sector, weight)| {
            format!(
                "Your portfolio is {weight:.1}% concentrated in {sector}. Consider diversifying across sectors."
            )
        })
        .collect();

    if volatility > config.volatility_warning_threshold {
        warnings.push(format!(
            "Portfolio volatility is high ({:.1}% annualized). Consider adding lower-risk assets.",
            volatility * 100.0
        ));
    }
    warnings
}

/// Joins sentences with single spaces, or returns [`NO_SPECIFIC_ADVICE`].
#[must_use]
pub fn compose_advice<I, S>(sentences: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = sentences
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if parts.is_empty() {
        NO_SPECIFIC_ADVICE.to_string()
    } else {
        parts.join(" ")
    }
}

/// Deterministic portfolio advice.
///
/// Composes the ROI tier sentence, sector concentration warnings and the
/// volatility warning.
#[must_use]
pub fn portfolio_advice(
    roi_percent: f64,
    breakdown: &SectorBreakdown,
    volatility: f64,
    config: &AnalyticsConfig,
) -> String {
    let mut sentences = vec![portfolio_roi_sentence(roi_percent).to_string()];
    sentences.extend(risk_warnings(breakdown, volatility, config));
    compose_advice(sentences)
}
