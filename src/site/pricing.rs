//! Per-token price table of the display page.
//!
//! Token values are fixed by the token id (5 BBTM per step, pegged 1:1 to
//! POL); only the EUR column depends on the user-adjustable EUR/POL rate.

use alloy::primitives::U256;

use crate::{
    constants::{BBTM_PER_TOKEN, TOKEN_COUNT},
    errors::ScriptError,
};

/// One row of the token price table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    /// Token id (1-based)
    pub token_id: u64,
    /// Price in BBTM
    pub bbtm: u64,
    /// Price in POL, pegged 1:1 to BBTM
    pub pol: u64,
    /// Price in wei (BBTM times 10^18)
    pub wei: U256,
}

impl PriceRow {
    /// EUR price of this row at the given EUR/POL rate
    pub fn eur(&self, eur_per_pol: f64) -> f64 {
        self.pol as f64 * eur_per_pol
    }
}

/// Build the full table for tokens `1..=TOKEN_COUNT`.
///
/// The rate must be finite and positive; the display page refuses a rate
/// update in the same case.
pub fn price_table(eur_per_pol: f64) -> Result<Vec<PriceRow>, ScriptError> {
    validate_rate(eur_per_pol)?;
    Ok((1..=TOKEN_COUNT)
        .map(|token_id| {
            let bbtm = token_id * BBTM_PER_TOKEN;
            PriceRow {
                token_id,
                bbtm,
                pol: bbtm,
                wei: U256::from(bbtm) * U256::from(10u64).pow(U256::from(18u64)),
            }
        })
        .collect())
}

/// Reject rates the page would refuse (zero, negative, NaN, infinite)
pub fn validate_rate(eur_per_pol: f64) -> Result<(), ScriptError> {
    if !eur_per_pol.is_finite() || eur_per_pol <= 0.0 {
        return Err(ScriptError::InvalidInput(format!(
            "EUR/POL rate must be a positive number, got {}",
            eur_per_pol
        )));
    }
    Ok(())
}

/// Render the table as aligned console text, EUR fixed to two decimals
pub fn render_price_table(rows: &[PriceRow], eur_per_pol: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:>10}  {:>9}  {:>12}  {:>24}\n",
        "Token", "BBTM", "POL", "EUR", "Wei"
    ));
    for row in rows {
        let eur_cell = format!("\u{20ac}{:.2}", row.eur(eur_per_pol));
        out.push_str(&format!(
            "{:>5}  {:>5} BBTM  {:>5} POL  {:>12}  {:>24}\n",
            row.token_id, row.bbtm, row.pol, eur_cell, row.wei
        ));
    }
    out
}
