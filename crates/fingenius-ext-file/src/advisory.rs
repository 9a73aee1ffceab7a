//! Offline narrative advisors.

use async_trait::async_trait;

use fingenius_traits::{AdvisoryRequest, NarrativeAdvisor, TraitError};

/// Advisor that answers every request with the same text.
#[derive(Debug, Clone)]
pub struct StaticAdvisor {
    text: String,
}

impl StaticAdvisor {
    /// Create an advisor that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for StaticAdvisor {
    fn default() -> Self {
        Self::new("Narrative advice is not configured; review the local advice above.")
    }
}

#[async_trait]
impl NarrativeAdvisor for StaticAdvisor {
    async fn summarize(&self, _request: &AdvisoryRequest) -> Result<String, TraitError> {
        Ok(self.text.clone())
    }
}

/// Advisor that always fails, so callers fall back to their unavailable text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAdvisor;

#[async_trait]
impl NarrativeAdvisor for UnavailableAdvisor {
    async fn summarize(&self, _request: &AdvisoryRequest) -> Result<String, TraitError> {
        Err(TraitError::SourceNotAvailable("no narrative advisor".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingenius_traits::MacroData;

    #[tokio::test]
    async fn test_static_and_unavailable() {
        let request = AdvisoryRequest::MacroOutlook(MacroData::default());

        let text = StaticAdvisor::new("Stay the course.").summarize(&request).await.unwrap();
        assert_eq!(text, "Stay the course.");
        assert!(!StaticAdvisor::default().summarize(&request).await.unwrap().is_empty());

        assert!(matches!(
            UnavailableAdvisor.summarize(&request).await,
            Err(TraitError::SourceNotAvailable(_))
        ));
    }
}
