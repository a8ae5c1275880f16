mod customer;
mod product;
mod sale;

pub use self::customer::{CUSTOMER_HAS_SALES, CustomerCommandService, CustomerQueryService};
pub use self::product::{PRODUCT_HAS_SALES, ProductCommandService, ProductQueryService};
pub use self::sale::{SaleCommandService, SaleQueryService};
