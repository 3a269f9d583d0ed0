use super::SwapReceipt;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Where the swap flow currently is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum SwapPhase {
    #[default]
    Idle,
    CheckingProvider,
    RequestingAccounts,
    Waiting,
    Succeeded(SwapReceipt),
    Failed(Error),
}

/// The coarse view of [`SwapPhase`] that the form renders from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum OperationStatus {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl SwapPhase {
    pub fn status(&self) -> OperationStatus {
        match self {
            SwapPhase::Idle => OperationStatus::Idle,
            SwapPhase::CheckingProvider | SwapPhase::RequestingAccounts | SwapPhase::Waiting => {
                OperationStatus::InFlight
            }
            SwapPhase::Succeeded(_) => OperationStatus::Succeeded,
            SwapPhase::Failed(error) => OperationStatus::Failed(error.message()),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.status() == OperationStatus::InFlight
    }

    /// The first step of a new attempt, or `None` if one is already running.
    pub fn begin(&self) -> Option<SwapPhase> {
        match self.is_in_flight() {
            true => None,
            false => Some(SwapPhase::CheckingProvider),
        }
    }

    /// Closing the success dialog resets to `Idle`. Other phases are unaffected.
    pub fn dismiss(self) -> SwapPhase {
        match self {
            SwapPhase::Succeeded(_) => SwapPhase::Idle,
            other => other,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            SwapPhase::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn receipt(&self) -> Option<&SwapReceipt> {
        match self {
            SwapPhase::Succeeded(receipt) => Some(receipt),
            _ => None,
        }
    }
}

impl std::fmt::Display for SwapPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapPhase::Idle => write!(f, "idle"),
            SwapPhase::CheckingProvider => write!(f, "checking provider"),
            SwapPhase::RequestingAccounts => write!(f, "requesting accounts"),
            SwapPhase::Waiting => write!(f, "waiting"),
            SwapPhase::Succeeded(_) => write!(f, "succeeded"),
            SwapPhase::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SwapIntent;

    #[test]
    fn phases_project_onto_status() {
        assert_eq!(SwapPhase::Idle.status(), OperationStatus::Idle);
        assert_eq!(SwapPhase::CheckingProvider.status(), OperationStatus::InFlight);
        assert_eq!(SwapPhase::RequestingAccounts.status(), OperationStatus::InFlight);
        assert_eq!(SwapPhase::Waiting.status(), OperationStatus::InFlight);
        assert_eq!(
            SwapPhase::Succeeded(SwapIntent::default().receipt()).status(),
            OperationStatus::Succeeded
        );
        assert_eq!(
            SwapPhase::Failed(Error::ProviderNotDetected).status(),
            OperationStatus::Failed(Error::ProviderNotDetected.message())
        );
    }

    #[test]
    fn cannot_begin_while_in_flight() {
        assert_eq!(SwapPhase::Idle.begin(), Some(SwapPhase::CheckingProvider));
        assert_eq!(
            SwapPhase::Failed(Error::settlement("boom")).begin(),
            Some(SwapPhase::CheckingProvider)
        );
        assert_eq!(SwapPhase::Waiting.begin(), None);
        assert_eq!(SwapPhase::RequestingAccounts.begin(), None);
    }

    #[test]
    fn dismiss_only_resets_success() {
        let receipt = SwapIntent::default().receipt();
        assert_eq!(SwapPhase::Succeeded(receipt).dismiss(), SwapPhase::Idle);
        assert_eq!(SwapPhase::Waiting.dismiss(), SwapPhase::Waiting);

        let failed = SwapPhase::Failed(Error::settlement("boom"));
        assert_eq!(failed.clone().dismiss(), failed);
    }
}
