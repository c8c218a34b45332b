//! Session orchestration: screen navigation, the storefront event loop, and logging setup.

pub mod navigation;
pub mod storefront;
pub mod logging;

pub use navigation::*;
pub use storefront::*;
pub use logging::*;
