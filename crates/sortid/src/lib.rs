#![doc = include_str!("../README.md")]

mod base32;
mod error;
mod generator;
mod id;
mod rand;
mod record;
#[cfg(feature = "serde")]
mod serde;
mod service;
mod time;

pub use crate::base32::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::record::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::service::*;
pub use crate::time::*;
