use clap::Parser;
use dotenv::dotenv;

/// Check a hotel room's availability from the terminal.
#[derive(Parser, Debug)]
#[command(name = "roomcheck", version, about)]
struct Cli {
    /// Identifier of the room to check
    room_id: String,

    /// CSRF token forwarded with the availability request
    #[arg(long, env = "ROOMCHECK_CSRF_TOKEN", default_value = "")]
    csrf_token: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    roomcheck_tui::tui_main(cli.room_id, cli.csrf_token).await
}
