mod command;
mod query;

pub use self::command::{SaleCommandRepositoryTrait, DynSaleCommandRepository};
pub use self::query::{SaleQueryRepositoryTrait, DynSaleQueryRepository};
