use api_ok::{
    config::{AppConfig, defaults::DEFAULT_RUST_LOG},
    logging::init_tracing,
    server::{app, bind, serve, shutdown_signal},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            // no configured filter yet; report through the default one
            init_tracing(DEFAULT_RUST_LOG)?;
            return Err(err.context("failed to load config"));
        }
    };
    init_tracing(&cfg.logging.rust_log)?;

    let listener = bind(&cfg.general).await?;
    tracing::info!(base_path = %cfg.general.base_path, "mounting routes");
    serve(listener, app(&cfg), shutdown_signal()).await
}
