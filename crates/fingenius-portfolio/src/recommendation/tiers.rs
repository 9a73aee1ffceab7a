//! ROI tier classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-tier classification of a single holding's ROI percent.
///
/// | ROI range        | Tier           |
/// |------------------|----------------|
/// | roi < -20        | `SevereLoss`   |
/// | -20 <= roi < 0   | `MildLoss`     |
/// | 0 <= roi < 5     | `LowGain`      |
/// | 5 <= roi < 20    | `ModerateGain` |
/// | roi >= 20        | `StrongGain`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoiTier {
    /// Loss worse than 20%.
    SevereLoss,
    /// Loss of up to 20%.
    MildLoss,
    /// Gain below 5%.
    LowGain,
    /// Gain from 5% up to 20%.
    ModerateGain,
    /// Gain of 20% or more.
    StrongGain,
}

impl RoiTier {
    /// Classifies a holding ROI percent.
    #[must_use]
    pub fn classify(roi_percent: f64) -> Self {
        if roi_percent < -20.0 {
            Self::SevereLoss
        } else if roi_percent < 0.0 {
            Self::MildLoss
        } else if roi_percent < 5.0 {
            Self::LowGain
        } else if roi_percent < 20.0 {
            Self::ModerateGain
        } else {
            Self::StrongGain
        }
    }

    /// Kebab-case tier label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevereLoss => "severe-loss",
            Self::MildLoss => "mild-loss",
            Self::LowGain => "low-gain",
            Self::ModerateGain => "moderate-gain",
            Self::StrongGain => "strong-gain",
        }
    }
}

impl fmt::Display for RoiTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-tier classification of the portfolio ROI percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortfolioRoiTier {
    /// roi < 0
    Negative,
    /// 0 <= roi < 5
    Low,
    /// roi >= 5
    Healthy,
}

impl PortfolioRoiTier {
    /// Classifies a portfolio ROI percent.
    #[must_use]
    pub fn classify(roi_percent: f64) -> Self {
        if roi_percent < 0.0 {
            Self::Negative
        } else if roi_percent < 5.0 {
            Self::Low
        } else {
            Self::Healthy
        }
    }
}
