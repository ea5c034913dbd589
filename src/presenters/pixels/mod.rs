pub mod adapter;
pub mod errors;
pub mod factory;
pub mod presenter;
