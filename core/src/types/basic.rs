use crate::constants::{CHAINS, TOKENS};
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub symbol: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

impl Token {
    pub fn by_symbol(symbol: &str) -> Option<Token> {
        TOKENS.iter().find(|token| token.symbol == symbol).copied()
    }

    /// Selectors show symbols in lowercase.
    pub fn display_symbol(&self) -> String {
        self.symbol.to_lowercase()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chain {
    pub name: &'static str,
    pub icon: &'static str,
}

impl Chain {
    pub fn by_name(name: &str) -> Option<Chain> {
        CHAINS.iter().find(|chain| chain.name == name).copied()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
