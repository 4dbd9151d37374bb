//! Indicators that fit no other family: return on investment, true range,
//! average true range, internal bar strength and the positivity indicator.

pub mod bulk;
pub mod single;

/// Result of holding an investment from one price to another.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnOnInvestment<T> {
    /// Value of the investment at the end price.
    pub final_value: T,
    /// Percentage return on the initial investment.
    pub percent_return: T,
}

/// One output of the positivity indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positivity<T> {
    /// Gap between the open and the previous close, in percent of the previous close.
    pub positivity: T,
    /// Central value of the positivity over the signal window.
    pub signal: T,
}
