use async_trait::async_trait;
use send_wrapper::SendWrapper;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    js_sys,
    wasm_bindgen::{JsCast, JsValue},
};

mod error;

pub use error::{Error, UNKNOWN_ERROR};

pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";

/// Arguments to an EIP-1193 `request` call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RequestArguments {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl RequestArguments {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }
}

/// Anything that can answer EIP-1193 style requests.
///
/// The browser binding is [`Ethereum`]. Other implementations are free to
/// answer however they like, which keeps code that only needs "a wallet"
/// independent of `window`.
#[async_trait(?Send)]
pub trait WalletCapability {
    async fn request(&self, args: RequestArguments) -> Result<serde_json::Value, Error>;
}

/// The provider injected at `window.ethereum` by browser wallets.
#[derive(Debug)]
pub struct Ethereum {
    inner: SendWrapper<JsValue>,
}

impl Clone for Ethereum {
    fn clone(&self) -> Self {
        Ethereum {
            inner: SendWrapper::new((*self.inner).clone()),
        }
    }
}

impl From<JsValue> for Ethereum {
    fn from(value: JsValue) -> Self {
        Self {
            inner: SendWrapper::new(value),
        }
    }
}

impl Ethereum {
    fn injected() -> Option<JsValue> {
        web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok())
            .filter(|ethereum| !ethereum.is_undefined() && !ethereum.is_null())
    }

    pub fn is_available() -> bool {
        Self::injected().is_some()
    }

    /// Looks up the injected provider, if any.
    pub fn detect() -> Option<Self> {
        Self::injected().map(Into::into)
    }
}

#[async_trait(?Send)]
impl WalletCapability for Ethereum {
    async fn request(&self, args: RequestArguments) -> Result<serde_json::Value, Error> {
        debug!("ethereum.request({})", args.method);

        let request = js_sys::Reflect::get(&self.inner, &JsValue::from_str("request"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| Error::NotCallable)?;

        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_args = args.serialize(&serializer)?;

        let promise = request.call1(&self.inner, &js_args)?;
        let response = JsFuture::from(js_sys::Promise::resolve(&promise)).await?;

        trace!("{:?}", response);

        Ok(serde_wasm_bindgen::from_value(response)?)
    }
}
