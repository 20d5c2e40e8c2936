pub mod connection_provider;
pub mod trading_connection;
