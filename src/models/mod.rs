pub mod customer;
pub mod sales;
