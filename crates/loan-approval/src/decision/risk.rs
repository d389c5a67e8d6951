use serde::{Deserialize, Serialize};

use super::policy::DecisionPolicy;

/// Coarse risk bucket derived from credit score and installment burden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }
}

/// First matching branch wins, unlike the eligibility rules.
pub fn derive_risk(
    cibil_score: u16,
    emi: f64,
    monthly_income: f64,
    policy: &DecisionPolicy,
) -> RiskTier {
    if cibil_score >= policy.low_risk_cibil_score
        && emi <= monthly_income * policy.low_risk_emi_to_income_ratio
    {
        RiskTier::Low
    } else if cibil_score >= policy.medium_risk_cibil_score {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Descriptive credit band shown next to the score. It never feeds the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CreditBand {
    pub const fn from_score(cibil_score: u16) -> Self {
        if cibil_score < 550 {
            CreditBand::Poor
        } else if cibil_score < 650 {
            CreditBand::Fair
        } else if cibil_score < 750 {
            CreditBand::Good
        } else {
            CreditBand::Excellent
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditBand::Poor => "Poor Credit",
            CreditBand::Fair => "Fair Credit",
            CreditBand::Good => "Good Credit",
            CreditBand::Excellent => "Excellent Credit",
        }
    }
}

/// Position of the score on the 300..=900 scale, clamped to `[0, 1]`.
pub fn credit_meter(cibil_score: u16) -> f64 {
    ((f64::from(cibil_score) - 300.0) / 600.0).clamp(0.0, 1.0)
}
