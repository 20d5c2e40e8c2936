pub mod deal_type;
pub mod entry_type;
pub mod history_range;
pub mod order_state;
pub mod relative_time;
pub mod time_window;
