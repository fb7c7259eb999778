//! Core business logic abstractions

pub mod cache;
pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod provider;

// Re-export main types for cleaner imports
pub use cache::{CacheConfig, CacheError, RateCache};
pub use currency::{Conversion, Currency, RateKey};
pub use error::{ConversionError, ConversionResult, ErrorKind};
pub use provider::{RateProvider, RatesResponse};
