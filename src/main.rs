use storefront::config::{self, Config};
use storefront::logger;
use storefront::server::{self, Server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg.logging)?;

    // Worker threads default to the number of CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let server = Server::bind(cfg)?;
    let addr = server.local_addr()?;
    logger::log_server_start(&addr, server.config(), server.upstream());

    server.run(server::wait_for_shutdown()).await;

    logger::log_server_stopped();
    Ok(())
}
