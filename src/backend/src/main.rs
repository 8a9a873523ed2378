use actix_files::Files;
use actix_server::ServerHandle;
use actix_web::{
    App, HttpServer,
    web::{self, Data},
};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info};
use std::io::Write;
use twinwatch::{api::Api, config::AppConfig, scanner::PlatformScanner};

type UiApi = Api<PlatformScanner>;

#[actix_web::main]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = AppConfig::init().context("failed to load configuration")?;
    let scanner = PlatformScanner::from_config(&config.scanner);

    let (server_handle, server_task) = run_server(config, scanner)?;

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            debug!("ctrl-c received");
        },
        result = terminate_signal() => {
            result?;
            debug!("SIGTERM received");
        },
        result = server_task => {
            match result {
                Ok(Ok(())) => debug!("server stopped normally"),
                Ok(Err(e)) => error!("server stopped with error: {e}"),
                Err(e) => error!("server task panicked: {e}"),
            }
        },
    };

    info!("shutting down");
    server_handle.stop(true).await;
    info!("shutdown complete");

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!(
        "module version: {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_SHORT_REV")
    );
}

#[cfg(unix)]
async fn terminate_signal() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;
    sigterm.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate_signal() -> Result<()> {
    std::future::pending().await
}

fn run_server(
    config: &'static AppConfig,
    scanner: PlatformScanner,
) -> Result<(
    ServerHandle,
    tokio::task::JoinHandle<Result<(), std::io::Error>>,
)> {
    let api = UiApi::new(scanner, config.paths.index_html());
    let static_dir = config.paths.static_dir.clone();

    info!(
        "serving ui on {}:{} from {}",
        config.ui.bind_addr,
        config.ui.port,
        static_dir.display()
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(api.clone()))
            .route("/", web::get().to(UiApi::index))
            .route("/api/scan", web::get().to(UiApi::scan))
            .route("/api/simulate_attack", web::get().to(UiApi::simulate_attack))
            .route("/version", web::get().to(UiApi::version))
            .service(Files::new("/static", &static_dir))
    })
    .bind((config.ui.bind_addr.as_str(), config.ui.port))
    .context("failed to bind server")?
    .disable_signals()
    .run();

    Ok((server.handle(), tokio::spawn(server)))
}
