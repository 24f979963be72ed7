//! Catalog records as stored by the document database.

mod article;
mod category;
mod group;
mod inquiry;
pub(crate) mod lenient;
mod property;

pub use article::Article;
pub use category::{Category, DEFAULT_CATEGORIES};
pub use group::{Group, GroupMember};
pub use inquiry::{Inquiry, InquirySource, InquiryStatus};
pub use property::{
    AreaSpan, Builder, CarpetArea, FeaturedDevelopment, GalleryItem, KeyHighlights,
    LocationAdvantage, PriceBound, PriceRange, PriceUnit, Property, StructuredPrice, VideoItem,
    AREA_UNITS,
};
