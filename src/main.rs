use agencia_autos::config::Config;
use agencia_autos::db::init_db;
use agencia_autos::router::{respond, AppContext};
use astra::Server;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let ctx = AppContext::from_config(&config);

    if let Err(e) = init_db(&ctx.db) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = match config.listen_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid listen address: {e}");
            std::process::exit(1);
        }
    };
    info!(%addr, db = %config.db_path, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let result = server.serve(move |req, _info| respond(req, &ctx));

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down");
}
