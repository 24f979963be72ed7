//! Search, ranking and paging over an in-memory snapshot of the catalog.
//!
//! Nothing here mutates its input: every function borrows the snapshot and returns a new view
//! of references into it.

mod filter;
mod matcher;
mod paginate;
mod sort;
mod trending;
mod types;

pub use filter::{
    by_category, filter_inquiries, filter_properties, price_range_options, InquiryFilter,
    PriceOption,
};
pub use matcher::{quick_search, search_members, search_or_all, TextSearchable};
pub use paginate::{paginate, Page};
pub use sort::{sort_by_price, PriceOrder};
pub use trending::{home_property, rank_trending};
pub use types::{
    FilterState, ARTICLES_PAGE_SIZE, GROUP_PAGE_SIZE, SEARCH_PAGE_SIZE, STATUS_TAGS,
    TRENDING_LIMIT,
};
