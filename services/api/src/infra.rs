use loan_approval::config::AppConfig;
use loan_approval::decision::{DecisionEngine, Education, SelfEmployed};
use loan_approval::error::AppError;
use loan_approval::ArtifactClassifier;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the model artifacts once; a failure here stops the process.
pub(crate) fn build_engine(
    config: &AppConfig,
    artifacts_override: Option<PathBuf>,
) -> Result<DecisionEngine<ArtifactClassifier>, AppError> {
    let dir = artifacts_override.unwrap_or_else(|| config.artifacts.dir.clone());
    let classifier = ArtifactClassifier::load(&dir)?;

    info!(
        artifacts = %dir.display(),
        annual_interest_rate = config.policy.annual_interest_rate,
        "decision engine initialised"
    );

    Ok(DecisionEngine::new(
        Arc::new(classifier),
        config.policy.clone(),
    ))
}

pub(crate) fn parse_education(raw: &str) -> Result<Education, String> {
    match raw.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
        "graduated" | "graduate" => Ok(Education::Graduated),
        "not graduated" | "not graduate" => Ok(Education::NotGraduated),
        _ => Err(format!(
            "expected 'Graduated' or 'Not Graduated', found '{raw}'"
        )),
    }
}

pub(crate) fn parse_self_employed(raw: &str) -> Result<SelfEmployed, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" => Ok(SelfEmployed::Yes),
        "no" | "n" | "false" => Ok(SelfEmployed::No),
        _ => Err(format!("expected 'Yes' or 'No', found '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_accepts_form_labels() {
        assert_eq!(parse_education("Graduated"), Ok(Education::Graduated));
        assert_eq!(parse_education("Not Graduated"), Ok(Education::NotGraduated));
        assert_eq!(parse_education("not-graduated"), Ok(Education::NotGraduated));
        assert!(parse_education("PhD").is_err());
    }

    #[test]
    fn self_employment_accepts_yes_and_no() {
        assert_eq!(parse_self_employed("Yes"), Ok(SelfEmployed::Yes));
        assert_eq!(parse_self_employed(" no "), Ok(SelfEmployed::No));
        assert!(parse_self_employed("sometimes").is_err());
    }
}
