//! Where catalog records come from and how they are written back.

mod catalog;
mod handle;
mod http;
mod memory;
mod records;
mod traits;

pub use catalog::{
    ensure_default_categories, load_or_empty, set_inquiry_status, shared_catalog, Catalog,
    Snapshot,
};
pub use handle::SharedHandle;
pub use http::{build_client, HttpCollection};
pub use memory::MemoryCollection;
pub use traits::{Collection, Record, SourceError, WriteRoute};
