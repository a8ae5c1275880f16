mod command;
mod query;

pub use self::command::{CUSTOMER_HAS_SALES, CustomerCommandService};
pub use self::query::CustomerQueryService;
