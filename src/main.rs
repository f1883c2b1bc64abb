use anyhow::Result;
use clap::Parser;
use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Terminal snake with bonus food")]
struct Cli {
    /// Side length of the square grid, in cells
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u64).range(2..))]
    grid_size: u64,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// A bonus food appears every this many points
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(1..))]
    bonus_period: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.grid_size as usize,
        tick_interval_ms: cli.tick_ms,
        bonus_period: cli.bonus_period,
        ..Default::default()
    };

    let mut app = App::new(config)?;
    app.run().await
}
