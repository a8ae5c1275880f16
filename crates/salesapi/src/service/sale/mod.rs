mod command;
mod query;

pub use self::command::SaleCommandService;
pub use self::query::SaleQueryService;
