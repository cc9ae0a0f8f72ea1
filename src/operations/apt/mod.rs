//! apt package pinning and installation

pub mod install;
pub mod pin;

pub use install::{AptInstallOperation, AptInstallOptions};
pub use pin::{AptPinOperation, AptPinOptions};
