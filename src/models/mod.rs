//! Decoded domain records.
//!
//! All records are plain owned data, serializable with `serde`. Optional
//! wire fields that could not be read hold their documented default
//! (`None`, `0`, empty string) and must be treated as unknown.

mod advert;
mod category;
mod listing;

// Re-export public API
pub use advert::{
    Advert, Attribute, CategoryRef, Contact, Coordinate, Location, Picture, Position, Price,
    Timestamps,
};
pub use category::Category;
pub use listing::{CategoryListing, Pagination};
