//! Funding record module - the typed row every analysis starts from

/// One startup-funding row
///
/// Identifiers are expected to be canonical already: trimming, casing and
/// alias collapsing of investor names happen before a record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FundingRecord {
    /// Startup that received the funding
    pub startup: String,

    /// Investors that took part in the round
    pub investors: Vec<String>,

    /// Vertical / domain tokens of the startup
    pub verticals: Vec<String>,

    /// Amount raised in USD, if reported
    pub amount_usd: Option<f64>,
}

impl FundingRecord {
    /// Create a record with no verticals and no amount
    pub fn new(startup: impl Into<String>, investors: Vec<String>) -> Self {
        Self {
            startup: startup.into(),
            investors,
            verticals: Vec::new(),
            amount_usd: None,
        }
    }

    /// Attach vertical tokens
    pub fn with_verticals(mut self, verticals: Vec<String>) -> Self {
        self.verticals = verticals;
        self
    }

    /// Attach the reported amount
    pub fn with_amount(mut self, amount_usd: f64) -> Self {
        self.amount_usd = Some(amount_usd);
        self
    }

    /// Check whether an investor took part in this round
    pub fn has_investor(&self, investor: &str) -> bool {
        self.investors.iter().any(|i| i == investor)
    }
}
