mod command;
mod query;

pub use self::command::{SaleCommandServiceTrait, DynSaleCommandService};
pub use self::query::{SaleQueryServiceTrait, DynSaleQueryService};
