//! Discounting helpers shared by the cash-flow services

/// Present value of an amount received at the end of `year`
pub fn present_value(amount: f64, rate: f64, year: u32) -> f64 {
    amount / (1.0 + rate).powi(year as i32)
}

/// Convert a 0-100 percentage into a fraction
pub fn percent(value: f64) -> f64 {
    value / 100.0
}
