pub mod customer;
pub mod product;
pub mod sale;
