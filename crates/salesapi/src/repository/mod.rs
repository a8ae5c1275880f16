mod customer;
mod paging;
mod product;
mod sale;

pub use self::customer::{CustomerCommandRepository, CustomerQueryRepository};
pub use self::paging::{OrderBy, push_page};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::sale::{SaleCommandRepository, SaleQueryRepository};
