mod command;
mod query;

pub use self::command::{PRODUCT_HAS_SALES, ProductCommandService};
pub use self::query::ProductQueryService;
