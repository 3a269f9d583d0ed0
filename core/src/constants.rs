use crate::types::{Chain, Token};
use std::time::Duration;

pub static TOKENS: [Token; 3] = [
    Token {
        symbol: "ETH",
        name: "Ethereum",
        icon: "/base.webp",
    },
    Token {
        symbol: "USDC",
        name: "USD Coin",
        icon: "/usdc.png",
    },
    Token {
        symbol: "OP",
        name: "Optimism",
        icon: "/op.png",
    },
];

pub static CHAINS: [Chain; 3] = [
    Chain {
        name: "optimism",
        icon: "/op.png",
    },
    Chain {
        name: "base",
        icon: "/base.webp",
    },
    Chain {
        name: "mainnet",
        icon: "/unichain.png",
    },
];

// Unknown selections fall back to these, which are also the initial form values.
pub const DEFAULT_SOURCE_CHAIN: usize = 0;
pub const DEFAULT_DESTINATION_CHAIN: usize = 1;
pub const DEFAULT_SOURCE_TOKEN: usize = 0;
pub const DEFAULT_DESTINATION_TOKEN: usize = 2;

pub const DEFAULT_SOURCE_AMOUNT: &str = "10000";

/// Output = input × this. Stands in for a 5% fee until there is a real quote.
pub const DISCOUNT_MULTIPLIER: f64 = 0.95;

/// How long the simulated swap waits before reporting success.
pub const SETTLEMENT_DELAY: Duration = Duration::from_secs(5);

pub const TOAST_DURATION: Duration = Duration::from_secs(5);
pub const TOAST_LIMIT: usize = 3;

pub const SWAP_FAILED_TITLE: &str = "Swap Failed";
pub const SWAP_SUCCEEDED_TITLE: &str = "Swap Successful";
