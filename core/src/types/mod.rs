mod basic;
mod intent;
mod status;
mod toast;

pub use basic::{Chain, Token};
pub use intent::{SwapIntent, SwapReceipt};
pub use status::{OperationStatus, SwapPhase};
pub use toast::{Toast, ToastQueue, ToastSeverity};
