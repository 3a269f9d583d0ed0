pub mod constants;
mod error;
pub mod state;
pub mod types;
pub mod utils;

pub use constants::{CHAINS, DISCOUNT_MULTIPLIER, TOKENS};
pub use error::Error;
pub use state::{SwapConfig, Toasts};
pub use types::{
    Chain, OperationStatus, SwapIntent, SwapPhase, SwapReceipt, Toast, ToastQueue,
    ToastSeverity, Token,
};

pub const BASE_URL: &str = "/superswap";
