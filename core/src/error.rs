// The Serialize and Deserialize traits are derived to ensure that Errors can be
// stored in action values and signals alongside the rest of the swap state.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Ethereum provider not detected. Please install MetaMask or another web3 wallet.")]
    ProviderNotDetected,

    #[error("{0}")]
    Wallet(String),

    #[error("{0}")]
    Settlement(String),
}

impl Error {
    pub fn settlement(message: impl ToString) -> Self {
        let message = message.to_string();
        Error::Settlement(message)
    }

    /// The text shown in the error banner and the failure toast.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            eip1193::UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<eip1193::Error> for Error {
    fn from(error: eip1193::Error) -> Self {
        match error {
            eip1193::Error::ProviderUnavailable => Error::ProviderNotDetected,
            other => Error::Wallet(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_provider_maps_to_fixed_message() {
        let error = Error::from(eip1193::Error::ProviderUnavailable);
        assert_eq!(error, Error::ProviderNotDetected);
        assert_eq!(
            error.message(),
            "Ethereum provider not detected. Please install MetaMask or another web3 wallet."
        );
    }

    #[test]
    fn wallet_errors_keep_their_message() {
        let error = Error::from(eip1193::Error::Rpc {
            code: 4001,
            message: "User rejected the request.".into(),
        });
        assert_eq!(error, Error::Wallet("User rejected the request.".into()));
        assert_eq!(error.message(), "User rejected the request.");
    }

    #[test]
    fn empty_messages_fall_back() {
        assert_eq!(Error::Wallet(String::new()).message(), "An unknown error occurred");
        assert_eq!(Error::settlement("").message(), "An unknown error occurred");
    }
}
