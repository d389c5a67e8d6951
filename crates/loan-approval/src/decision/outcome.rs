use serde::Serialize;

use super::risk::RiskTier;
use super::rules::Rejection;

/// What the classifier's label means for the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    ManualReview,
}

impl Verdict {
    /// Label `1` approves; anything else asks a person to look. A negative
    /// model answer is never a rejection.
    pub const fn from_label(label: u8) -> Self {
        if label == 1 {
            Verdict::Approved
        } else {
            Verdict::ManualReview
        }
    }

    pub const fn is_approved(self) -> bool {
        matches!(self, Verdict::Approved)
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Verdict::Approved => "Loan Approved",
            Verdict::ManualReview => "Manual Review Required",
        }
    }
}

/// Result of one evaluation: either the gate rejected it, or the model scored it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecisionResult {
    Rejected(Rejection),
    Evaluated {
        verdict: Verdict,
        confidence_percent: f64,
        risk_tier: RiskTier,
        estimated_emi: u64,
    },
}

impl DecisionResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, DecisionResult::Rejected(_))
    }

    pub fn approved(&self) -> bool {
        matches!(self, DecisionResult::Evaluated { verdict, .. } if verdict.is_approved())
    }

    pub fn summary(&self) -> String {
        match self {
            DecisionResult::Rejected(rejection) => {
                format!("loan rejected: {}", rejection.messages().join("; "))
            }
            DecisionResult::Evaluated {
                verdict,
                confidence_percent,
                risk_tier,
                estimated_emi,
            } => format!(
                "{} ({:.2}% confidence, {}, EMI {})",
                verdict.headline().to_lowercase(),
                confidence_percent,
                risk_tier.label().to_lowercase(),
                estimated_emi
            ),
        }
    }
}
