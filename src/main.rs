use std::io;

use actix_cors::Cors;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use school_dashboard::config::AppConfig;
use school_dashboard::models::AppStartTime;
use school_dashboard::routes;
use school_dashboard::runtime::lifetime;
use school_dashboard::utils::{json_error_handler, path_error_handler, query_error_handler};

fn build_cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.cors.max_age);

    if config.cors.allowed_origins.iter().any(|o| o == "*") {
        cors.allow_any_origin()
    } else {
        config
            .cors
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

/// 开发环境输出带源码位置的文本日志，其余环境输出 JSON
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(io::stdout());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.app.log_level))
        .with_writer(writer)
        .with_level(true);

    if config.is_development() {
        builder
            .with_ansi(true)
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        builder.with_ansi(false).json().init();
    }
    guard
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    setup_panic!();
    AppConfig::init().map_err(io::Error::other)?;
    let config = AppConfig::get();

    let _log_guard = init_tracing(config);

    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        System: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.app.system_name
    );

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(io::Error::other)?;

    let storage = startup.storage.clone();
    let cache = startup.cache.clone();
    let gradebooks = startup.gradebooks.clone();

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    warn!("Using {} CPU cores for the server", config.server.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(config))
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler)) // 查询参数错误处理器
            .app_data(web::JsonConfig::default().error_handler(json_error_handler)) // JSON 错误处理器
            .app_data(web::PathConfig::default().error_handler(path_error_handler)) // 路径参数错误处理器
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(web::Data::new(gradebooks.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            ))
            .configure(routes::configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(
        config.server.timeouts.keep_alive,
    ))
    .client_request_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_request,
    ))
    .client_disconnect_timeout(std::time::Duration::from_millis(
        config.server.timeouts.client_disconnect,
    ))
    .workers(config.server.workers);

    #[cfg(unix)]
    let server = if let Some(socket_path) = config.unix_socket_path() {
        warn!("Starting server on Unix socket: {}", socket_path);
        if std::path::Path::new(socket_path).exists() {
            std::fs::remove_file(socket_path)?;
        }
        server.bind_uds(socket_path)?
    } else {
        let bind_address = config.server_bind_address();
        warn!("Starting server at http://{}", bind_address);
        server.bind(bind_address)?
    };

    #[cfg(not(unix))]
    let server = {
        let bind_address = config.server_bind_address();
        warn!("Starting server at http://{}", bind_address);
        server.bind(bind_address)?
    };

    let server = server.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
