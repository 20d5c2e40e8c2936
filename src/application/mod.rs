pub mod historical_trades;
