mod orchestrator;
mod selectors;
mod success_dialog;
mod swap;

pub use orchestrator::{Settlement, SwapOrchestrator, TimerSettlement};
pub use selectors::{ChainSelect, TokenSelect};
pub use success_dialog::SuccessDialog;
pub use swap::Swap;
