//! Dispatch controllers

pub mod order;
pub mod user;

pub use order::OrderController;
pub use user::UserController;
