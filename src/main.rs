use occurrence::commands::Cli;
use occurrence::libs::{logger, messages::macros::is_debug_mode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        logger::init_cli_logger();
    }

    Cli::menu().await
}
