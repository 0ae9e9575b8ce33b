pub mod core;
pub mod items;
pub mod catalog;
pub mod checkout;
pub mod gateway;
pub mod shell;
pub mod utils;
