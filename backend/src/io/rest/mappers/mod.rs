pub mod balance_mapper;
pub mod transaction_mapper;
