// ABOUTME: Custom agent request form record and validation
// ABOUTME: Ordered checks, first failure short-circuits, then an intake sink

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a requested custom agent would need to read its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Gcp,
    SharePoint,
    DataLake,
    Other,
}

impl DataSource {
    pub const ALL: [DataSource; 4] = [
        DataSource::Gcp,
        DataSource::SharePoint,
        DataSource::DataLake,
        DataSource::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DataSource::Gcp => "Google Cloud Platform (GCP)",
            DataSource::SharePoint => "Microsoft SharePoint",
            DataSource::DataLake => "Data Lake",
            DataSource::Other => "Other",
        }
    }
}

/// The record collected by the custom-agent dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAgentRequest {
    pub requestor_email: String,
    pub short_description: String,
    pub required_capabilities: String,
    pub data_sources: BTreeSet<DataSource>,
}

impl CustomAgentRequest {
    pub fn toggle_source(&mut self, source: DataSource) {
        if !self.data_sources.remove(&source) {
            self.data_sources.insert(source);
        }
    }

    /// Clear every field, as after a successful submission or a cancel.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// First failed validation check, in form order. The messages are shown to
/// the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please describe the agent you need")]
    MissingDescription,
    #[error("Please list the required capabilities")]
    MissingCapabilities,
    #[error("Please select at least one data source location")]
    NoDataSource,
}

/// Validate in form order; the first failing check wins.
pub fn validate(form: &CustomAgentRequest) -> Result<(), ValidationError> {
    if form.requestor_email.trim().is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if form.short_description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    if form.required_capabilities.trim().is_empty() {
        return Err(ValidationError::MissingCapabilities);
    }
    if form.data_sources.is_empty() {
        return Err(ValidationError::NoDataSource);
    }
    Ok(())
}

/// Notice shown after a successful submission.
pub const SUBMIT_NOTICE: &str =
    "Request submitted. Our team will review and get back to you within 2-3 business days.";

/// Where validated requests go. The demo ships a logging stub; a real intake
/// integration supplies its own implementation.
pub trait IntakeSink {
    fn submit(&mut self, request: &CustomAgentRequest);
}

/// Stub sink that records the request in the log and nothing else.
#[derive(Debug, Default)]
pub struct LoggingIntake;

impl IntakeSink for LoggingIntake {
    fn submit(&mut self, request: &CustomAgentRequest) {
        tracing::info!(
            email = %request.requestor_email,
            sources = request.data_sources.len(),
            "custom agent request submitted"
        );
    }
}

/// Validate and, on success, hand the form to the sink and reset it.
pub fn submit(
    form: &mut CustomAgentRequest,
    sink: &mut dyn IntakeSink,
) -> Result<(), ValidationError> {
    validate(form)?;
    sink.submit(form);
    form.reset();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        calls: usize,
        last_email: String,
    }

    impl IntakeSink for CountingSink {
        fn submit(&mut self, request: &CustomAgentRequest) {
            self.calls += 1;
            self.last_email = request.requestor_email.clone();
        }
    }

    fn filled_form() -> CustomAgentRequest {
        let mut form = CustomAgentRequest {
            requestor_email: "me@example.com".to_string(),
            short_description: "Summarize financial reports".to_string(),
            required_capabilities: "Data analysis, report generation".to_string(),
            data_sources: BTreeSet::new(),
        };
        form.data_sources.insert(DataSource::SharePoint);
        form
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&filled_form()), Ok(()));
    }

    #[test]
    fn test_each_missing_field_fails_in_order() {
        let mut form = filled_form();
        form.requestor_email = "  ".to_string();
        assert_eq!(validate(&form), Err(ValidationError::MissingEmail));

        let mut form = filled_form();
        form.short_description.clear();
        assert_eq!(validate(&form), Err(ValidationError::MissingDescription));

        let mut form = filled_form();
        form.required_capabilities.clear();
        assert_eq!(validate(&form), Err(ValidationError::MissingCapabilities));

        let mut form = filled_form();
        form.data_sources.clear();
        assert_eq!(validate(&form), Err(ValidationError::NoDataSource));
    }

    #[test]
    fn test_first_failure_wins_when_everything_is_empty() {
        let form = CustomAgentRequest::default();
        assert_eq!(validate(&form), Err(ValidationError::MissingEmail));
    }

    #[test]
    fn test_invalid_submit_does_not_reach_sink() {
        let mut form = filled_form();
        form.data_sources.clear();
        let mut sink = CountingSink::default();
        assert!(submit(&mut form, &mut sink).is_err());
        assert_eq!(sink.calls, 0);
        // input retained for correction
        assert_eq!(form.requestor_email, "me@example.com");
    }

    #[test]
    fn test_successful_submit_invokes_sink_once_and_resets() {
        let mut form = filled_form();
        let mut sink = CountingSink::default();
        assert!(submit(&mut form, &mut sink).is_ok());
        assert_eq!(sink.calls, 1);
        assert_eq!(sink.last_email, "me@example.com");
        assert_eq!(form, CustomAgentRequest::default());
    }

    #[test]
    fn test_toggle_source_adds_and_removes() {
        let mut form = CustomAgentRequest::default();
        form.toggle_source(DataSource::Gcp);
        assert!(form.data_sources.contains(&DataSource::Gcp));
        form.toggle_source(DataSource::Gcp);
        assert!(form.data_sources.is_empty());
    }
}
