//! The methodik binary: bind port 3000 and serve method-dispatch responses.

use log::error;

use methodik::{HttpServer, ServerConfig};

#[tokio::main]
async fn main() {
    // Initialize the logger
    env_logger::init();

    let server = HttpServer::new(ServerConfig::default());

    // A bind failure is fatal: report it and exit non-zero, no retry.
    if let Err(e) = server.start().await {
        error!("{e}");
        std::process::exit(1);
    }
}
