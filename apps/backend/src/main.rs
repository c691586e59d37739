use actix_web::{web, App, HttpServer};
use archive_backend::config::AppConfig;
use archive_backend::db::txn_policy::{self, TxnPolicy};
use archive_backend::infra::state::build_state;
use archive_backend::middleware::{
    cors_middleware, RequestTrace, StructuredLogger, TraceSpan,
};
use archive_backend::routes;
use db_infra::db::RuntimeEnv;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();
    txn_policy::set_txn_policy(TxnPolicy::CommitOnOk);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_env(RuntimeEnv::Prod)
        .with_db(config.db_kind)
        .with_tracker_config(config.tracker.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup.state_failed");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        db_kind = ?config.db_kind,
        stage_seconds = config.tracker.stage_seconds,
        "startup.listening"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
