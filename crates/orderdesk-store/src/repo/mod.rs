//! Repository layer for the order table

pub mod order_repo;

pub use order_repo::OrderRepo;
