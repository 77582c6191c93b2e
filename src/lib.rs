//! ecg_classifieds library: typed decoding of eBay Classifieds XML responses
//!
//! This library turns the XML bodies returned by the eBay Classifieds (ECG)
//! API into owned records: a single advert, a category listing with
//! pagination, or the recursive category taxonomy.
//!
//! Decoding never panics and never gives up on a record because of one bad
//! optional field. Such fields fall back to a documented default and the
//! failure is reported next to the record, tagged with its wire path. Only an
//! unusable document, a wrong root element or a missing record identifier
//! aborts a call.
//!
//! # Example
//!
//! ```no_run
//! use ecg_classifieds::parse_listing;
//!
//! let body = std::fs::read_to_string("page.xml").unwrap();
//! let decoded = parse_listing(&body);
//!
//! match decoded.into_result() {
//!     Ok((listing, fallbacks)) => {
//!         println!("{} adverts", listing.adverts.len());
//!         for error in fallbacks {
//!             println!("fallback: {error}");
//!         }
//!     }
//!     Err(error) => eprintln!("listing unusable: {error}"),
//! }
//! ```

#![warn(missing_docs)]

mod app;
mod build;
pub mod config;
mod error_handling;
mod extract;
pub mod initialization;
pub mod models;
mod parse;
mod xml;

// Re-export public API
pub use app::{run_decode, DecodeSummary};
pub use build::{DescriptionTransform, HtmlToPlainText};
pub use config::{Config, EntityKind, FailOn, LogFormat, LogLevel};
pub use error_handling::{
    ConfigValidationError, CriticalType, DecodeError, DecodeStats, FieldErrorKind, InfoType,
    InitializationError, QualifiedName, TransformError, WarningType,
};
pub use parse::{
    parse_advert, parse_api_error, parse_categories, parse_listing, ApiError, Decoded, Decoder,
};
