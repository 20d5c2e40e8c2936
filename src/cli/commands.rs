use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradelens", about = "Closed-trade history for connected trading accounts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch closed trades for an account
    Trades {
        /// Terminal account id
        account: String,
        /// History range (today, week, month)
        #[arg(long, default_value = "today")]
        range: String,
        /// Page offset into the history-order listing
        #[arg(long)]
        offset: Option<usize>,
    },
    /// Show the concrete time window a range resolves to
    Window {
        /// History range (today, week, month)
        range: String,
    },
}
