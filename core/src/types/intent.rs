use super::{Chain, Token};
use crate::{constants::*, utils::derive_amount_with};
use serde::{Deserialize, Serialize};

/// What the user has filled into the swap form.
///
/// Amounts are kept as the text the user typed (and the text derived from it),
/// never as validated numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapIntent {
    pub source_chain: Chain,
    pub destination_chain: Chain,
    pub source_token: Token,
    pub destination_token: Token,
    source_amount: String,
    destination_amount: String,
    multiplier: f64,
}

impl Default for SwapIntent {
    fn default() -> Self {
        Self::new(DISCOUNT_MULTIPLIER)
    }
}

impl SwapIntent {
    pub fn new(multiplier: f64) -> Self {
        let mut intent = Self {
            source_chain: CHAINS[DEFAULT_SOURCE_CHAIN],
            destination_chain: CHAINS[DEFAULT_DESTINATION_CHAIN],
            source_token: TOKENS[DEFAULT_SOURCE_TOKEN],
            destination_token: TOKENS[DEFAULT_DESTINATION_TOKEN],
            source_amount: String::new(),
            destination_amount: String::new(),
            multiplier,
        };
        intent.set_source_amount(DEFAULT_SOURCE_AMOUNT);
        intent
    }

    pub fn source_amount(&self) -> &str {
        &self.source_amount
    }

    pub fn destination_amount(&self) -> &str {
        &self.destination_amount
    }

    /// Updates the input amount and re-derives the output amount.
    pub fn set_source_amount(&mut self, amount: impl Into<String>) {
        self.source_amount = amount.into();
        self.destination_amount = derive_amount_with(&self.source_amount, self.multiplier);
    }

    pub fn select_source_chain(&mut self, name: &str) {
        self.source_chain = Chain::by_name(name).unwrap_or(CHAINS[DEFAULT_SOURCE_CHAIN]);
    }

    pub fn select_destination_chain(&mut self, name: &str) {
        self.destination_chain = Chain::by_name(name).unwrap_or(CHAINS[DEFAULT_DESTINATION_CHAIN]);
    }

    pub fn select_source_token(&mut self, symbol: &str) {
        self.source_token = Token::by_symbol(symbol).unwrap_or(TOKENS[DEFAULT_SOURCE_TOKEN]);
    }

    pub fn select_destination_token(&mut self, symbol: &str) {
        self.destination_token =
            Token::by_symbol(symbol).unwrap_or(TOKENS[DEFAULT_DESTINATION_TOKEN]);
    }

    /// Swaps the source and destination selections. Amounts stay where they are.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.source_chain, &mut self.destination_chain);
        std::mem::swap(&mut self.source_token, &mut self.destination_token);
    }

    pub fn receipt(&self) -> SwapReceipt {
        SwapReceipt {
            source_amount: self.source_amount.clone(),
            source_symbol: self.source_token.symbol.to_string(),
            destination_amount: self.destination_amount.clone(),
            destination_symbol: self.destination_token.symbol.to_string(),
        }
    }
}

/// Snapshot of a completed swap, for the success dialog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SwapReceipt {
    pub source_amount: String,
    pub source_symbol: String,
    pub destination_amount: String,
    pub destination_symbol: String,
}

impl std::fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Successfully swapped {} {} for {} {}",
            self.source_amount, self.source_symbol, self.destination_amount, self.destination_symbol
        )
    }
}
