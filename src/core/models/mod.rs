//! Model catalog: descriptors, fetching, and capability filters.

mod error;
mod fetch;
mod filter;
mod info;

pub use error::CatalogError;
pub use fetch::{CatalogSource, GeminiCatalog};
pub use filter::{GENERATE_CONTENT, generation_capable, multimodal};
pub use info::ModelDescriptor;
