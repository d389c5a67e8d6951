use serde::Serialize;

use super::domain::LoanApplication;
use super::outcome::DecisionResult;
use super::risk::{credit_meter, CreditBand};

/// Rendered decision shared by the HTTP and command line surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionView {
    pub status: &'static str,
    pub headline: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_emi: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_emi_display: Option<String>,
    pub credit_band: &'static str,
    pub credit_meter: f64,
}

impl DecisionView {
    pub fn render(application: &LoanApplication, result: &DecisionResult) -> Self {
        let cibil_score = application.applicant.cibil_score;
        let credit_band = CreditBand::from_score(cibil_score).label();
        let credit_meter = credit_meter(cibil_score);

        match result {
            DecisionResult::Rejected(rejection) => Self {
                status: "rejected",
                headline: "Loan Rejected",
                reasons: rejection.messages(),
                advice: Some(rejection.advice()),
                confidence_percent: None,
                confidence_display: None,
                risk_tier: None,
                estimated_emi: None,
                estimated_emi_display: None,
                credit_band,
                credit_meter,
            },
            DecisionResult::Evaluated {
                verdict,
                confidence_percent,
                risk_tier,
                estimated_emi,
            } => Self {
                status: if verdict.is_approved() {
                    "approved"
                } else {
                    "manual_review"
                },
                headline: verdict.headline(),
                reasons: Vec::new(),
                advice: None,
                confidence_percent: Some(*confidence_percent),
                confidence_display: Some(format!("{confidence_percent:.2}%")),
                risk_tier: Some(risk_tier.label()),
                estimated_emi: Some(*estimated_emi),
                estimated_emi_display: Some(group_thousands(*estimated_emi)),
                credit_band,
                credit_meter,
            },
        }
    }

    /// Plain-text rendering for terminals.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline.to_string()];

        for reason in &self.reasons {
            lines.push(format!("- {reason}"));
        }
        if let Some(advice) = self.advice {
            lines.push(format!("Tip: {advice}"));
        }
        if let Some(confidence) = &self.confidence_display {
            lines.push(format!("Approval Confidence: {confidence}"));
        }
        if let Some(risk) = self.risk_tier {
            lines.push(format!("Risk Level: {risk}"));
        }
        if let Some(emi) = &self.estimated_emi_display {
            lines.push(format!("Estimated EMI: {emi}"));
        }
        lines.push(format!(
            "Credit: {} ({:.0}% of scale)",
            self.credit_band,
            self.credit_meter * 100.0
        ));

        lines
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
