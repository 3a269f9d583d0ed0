mod error_banner;
mod modal;
mod spinner2;
mod toaster;

pub use error_banner::ErrorBanner;
pub use modal::Modal;
pub use spinner2::Spinner2;
pub use toaster::Toaster;
