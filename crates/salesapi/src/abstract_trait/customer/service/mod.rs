mod command;
mod query;

pub use self::command::{CustomerCommandServiceTrait, DynCustomerCommandService};
pub use self::query::{CustomerQueryServiceTrait, DynCustomerQueryService};
