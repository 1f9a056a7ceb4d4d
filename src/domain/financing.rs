use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_ANNUAL_RATE: f64 = 0.12;
pub const DEFAULT_DOWN_PAYMENT_PERCENT: f64 = 0.20;
pub const DEFAULT_TERM_MONTHS: u32 = 36;
pub const TERM_OPTIONS: [u32; 5] = [12, 24, 36, 48, 60];
pub const MAX_TERM_MONTHS: u32 = TERM_OPTIONS[TERM_OPTIONS.len() - 1];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancingEstimate {
    pub price: f64,
    pub down_payment_percent: f64,
    pub term_months: u32,
    pub down_amount: f64,
    pub financed_amount: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum FinancingError {
    #[error("term must be at least one month")]
    ZeroTerm,
    #[error("term must be between 1 and {max} months, got {0}", max = MAX_TERM_MONTHS)]
    TermTooLong(u32),
    #[error("down payment must be between 0% and 100%, got {0}")]
    DownPaymentOutOfRange(f64),
    #[error("price must be a non-negative amount")]
    InvalidPrice,
}

/// Fixed-rate amortization estimate.
///
/// `down_payment_percent` is a fraction (0.20 for 20%). With a zero rate the
/// financed amount is split evenly across the term.
pub fn estimate_financing(
    price: f64,
    down_payment_percent: f64,
    term_months: u32,
    annual_rate: f64,
) -> Result<FinancingEstimate, FinancingError> {
    if !price.is_finite() || price < 0.0 {
        return Err(FinancingError::InvalidPrice);
    }
    if !(0.0..=1.0).contains(&down_payment_percent) {
        return Err(FinancingError::DownPaymentOutOfRange(down_payment_percent));
    }
    if term_months == 0 {
        return Err(FinancingError::ZeroTerm);
    }
    if term_months > MAX_TERM_MONTHS {
        return Err(FinancingError::TermTooLong(term_months));
    }
    let periods =
        i32::try_from(term_months).map_err(|_| FinancingError::TermTooLong(term_months))?;

    let monthly_rate = annual_rate / 12.0;
    let down_amount = price * down_payment_percent;
    let financed_amount = price - down_amount;

    let monthly_payment = if monthly_rate == 0.0 {
        financed_amount / term_months as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(periods);
        financed_amount * monthly_rate * growth / (growth - 1.0)
    };

    Ok(FinancingEstimate {
        price,
        down_payment_percent,
        term_months,
        down_amount,
        financed_amount,
        monthly_payment,
        total_paid: down_amount + monthly_payment * term_months as f64,
    })
}

/// Form inputs carry the down payment as a whole percent ("20").
pub fn percent_from_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .map(|p| p / 100.0)
        .unwrap_or(DEFAULT_DOWN_PAYMENT_PERCENT)
}

pub fn term_from_input(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(DEFAULT_TERM_MONTHS)
}
