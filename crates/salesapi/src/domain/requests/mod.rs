pub mod customer;
pub mod pagination;
pub mod product;
pub mod sale;
