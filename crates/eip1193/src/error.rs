use serde::{Deserialize, Serialize};
use web_sys::{js_sys, wasm_bindgen};

pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Ethereum provider not detected. Please install MetaMask or another web3 wallet.")]
    ProviderUnavailable,

    #[error("Provider does not expose a request method!")]
    NotCallable,

    /// An error object returned by the provider, as described in EIP-1193.
    #[error("{message}")]
    Rpc { code: i64, message: String },

    #[error("{0}")]
    Js(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

impl Error {
    /// Code 4001 means the user rejected the request.
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Error::Rpc { code: 4001, .. })
    }
}

impl From<wasm_bindgen::JsValue> for Error {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        if let Some(message) = error.as_string() {
            return Error::Js(message);
        }

        let message = js_sys::Reflect::get(&error, &"message".into())
            .ok()
            .and_then(|message| message.as_string())
            .filter(|message| !message.is_empty())
            .unwrap_or(UNKNOWN_ERROR.to_string());

        let code = js_sys::Reflect::get(&error, &"code".into())
            .ok()
            .and_then(|code| code.as_f64());

        match code {
            Some(code) => Error::Rpc {
                code: code as i64,
                message,
            },
            None => Error::Js(message),
        }
    }
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(error: serde_wasm_bindgen::Error) -> Self {
        let message = error.to_string();
        Error::Serialization(message)
    }
}
