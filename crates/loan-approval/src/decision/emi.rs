//! Equated monthly installment for a fully amortizing loan.

/// Annual rate applied when no override is configured.
pub const DEFAULT_ANNUAL_INTEREST_RATE: f64 = 0.10;

/// Monthly installment for `amount` repaid over `tenure_years` at `annual_interest_rate`.
///
/// Uses `P * r * (1 + r)^n / ((1 + r)^n - 1)` with `r` the monthly rate and `n`
/// the number of months. A zero principal yields exactly zero. The result keeps
/// full precision; only [`displayed_emi`] truncates.
pub fn compute_emi(amount: f64, tenure_years: u8, annual_interest_rate: f64) -> f64 {
    if amount == 0.0 {
        return 0.0;
    }

    let months = i32::from(tenure_years) * 12;
    let monthly_rate = annual_interest_rate / 12.0;

    if monthly_rate <= 0.0 {
        return amount / f64::from(months);
    }

    let factor = (1.0 + monthly_rate).powi(months);
    amount * monthly_rate * factor / (factor - 1.0)
}

/// Whole currency units shown to the applicant, truncated toward zero.
pub fn displayed_emi(emi: f64) -> u64 {
    if emi.is_finite() && emi > 0.0 {
        emi.trunc() as u64
    } else {
        0
    }
}
