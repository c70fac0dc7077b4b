// lib.rs

pub use log::*;
pub use serde::{Deserialize, Serialize};

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
pub use error::*;

mod bytes;
pub use bytes::*;

mod convert;
pub use convert::*;

mod config;
pub use config::*;

mod frame;
pub use frame::*;

mod diag;
pub use diag::*;

mod decoder;
pub use decoder::*;

// EOF
