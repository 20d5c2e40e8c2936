use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tradelens::cli::commands::{Cli, Commands};
use tradelens::domain::error::DomainError;
use tradelens::domain::values::history_range::HistoryRange;
use tradelens::domain::values::time_window::TimeWindow;
use tradelens::TradeLens;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradelens=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let lens = TradeLens::new();

    if let Err(e) = run_command(lens, cli.command).await {
        eprintln!("Error ({}): {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run_command(lens: TradeLens, cmd: Commands) -> Result<(), DomainError> {
    match cmd {
        Commands::Trades {
            account,
            range,
            offset,
        } => {
            let range: HistoryRange = range.parse()?;
            let trades = lens.historical_trades(&account, range, offset).await?;
            println!("{}", serde_json::to_string_pretty(&trades).unwrap());
        }
        Commands::Window { range } => {
            let range: HistoryRange = range.parse()?;
            let window = TimeWindow::resolve(range, chrono::Utc::now());
            println!("{}", serde_json::to_string_pretty(&window).unwrap());
        }
    }
    Ok(())
}
