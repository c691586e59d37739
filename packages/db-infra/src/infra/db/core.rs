use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{info, trace, warn};

use crate::config::db::{make_conn_spec, validate_db_config, DbKind, DbOwner, RuntimeEnv};
use crate::error::DbInfraError;

const PG_CONNECT_ATTEMPTS: u32 = 5;
const PG_CONNECT_INTERVAL_MS: u64 = 500;

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(
                    attempt,
                    max_attempts, interval_ms, "connection_retry=failed"
                );
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(url: &str, db_kind: DbKind, owner: DbOwner) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_string());
    match (db_kind, owner) {
        // A second connection to `sqlite::memory:` would see an empty database.
        (DbKind::SqliteMemory, _) => {
            opt.min_connections(1).max_connections(1);
        }
        (_, DbOwner::Owner) => {
            opt.min_connections(1).max_connections(1);
        }
        (_, DbOwner::App) => {
            opt.min_connections(1).max_connections(16);
        }
    }
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opt
}

/// Open a connection pool. Postgres connects are retried; SQLite fails fast.
/// This function does NOT run any migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, owner)?;
    let opt = connect_options(&url, db_kind, owner);

    info!(
        env = ?env,
        db_kind = ?db_kind,
        url = %sanitize_db_url(&url),
        "db.connect"
    );

    let connect = || {
        let opt = opt.clone();
        async move {
            Database::connect(opt)
                .await
                .map_err(|e| DbInfraError::Connect {
                    message: format!("failed to connect to {db_kind:?}: {e}"),
                })
        }
    };

    match db_kind {
        DbKind::Postgres => retry_connection(connect, PG_CONNECT_ATTEMPTS, PG_CONNECT_INTERVAL_MS).await,
        DbKind::SqliteFile | DbKind::SqliteMemory => connect().await,
    }
}

/// Connect and bring the schema up to date.
///
/// Postgres and SQLite files migrate over a separate owner connection. In-memory
/// SQLite has to migrate on the same connection the app will use.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;

    if db_kind == DbKind::SqliteMemory {
        let conn = connect_db(env, db_kind, DbOwner::App).await?;
        migrate_up_if_needed(&conn).await?;
        return Ok(conn);
    }

    let owner = connect_db(env, db_kind, DbOwner::Owner).await?;
    migrate_up_if_needed(&owner).await?;
    if let Err(e) = owner.close().await {
        warn!(error = %e, "failed to close owner pool after migration");
    }

    connect_db(env, db_kind, DbOwner::App).await
}

async fn migrate_up_if_needed(conn: &DatabaseConnection) -> Result<(), DbInfraError> {
    if schema_up_to_date(conn).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }
    migrate(conn, MigrationCommand::Up)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })
}

/// True when the applied migrations match the defined list exactly.
async fn schema_up_to_date(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected: Vec<String> = Migrator::migrations()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    let applied: Vec<String> = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => migrations.iter().map(|m| m.name().to_string()).collect(),
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::Migration {
                message: format!("failed to get applied migrations: {e}"),
            });
        }
    };

    let up_to_date = applied == expected;
    trace!(
        fastpath = if up_to_date { "hit" } else { "miss" },
        applied = applied.len(),
        expected = expected.len()
    );
    Ok(up_to_date)
}

/// Entry point for the migration CLI.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    if db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "in-memory SQLite is discarded when the CLI exits; use sqlite-file or postgres",
        ));
    }

    let conn = connect_db(env, db_kind, DbOwner::Owner).await?;
    info!(env = ?env, db_kind = ?db_kind, command = ?command, "migrate=start");

    let result = migrate(&conn, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        });

    if let Err(e) = conn.close().await {
        warn!(error = %e, "failed to close owner pool");
    }

    info!(ok = result.is_ok(), "migrate=done");
    result
}

/// Mask the password in a connection string for logs.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth, host)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    let Some((scheme, rest)) = auth.split_once("://") else {
        return url.to_string();
    };
    match rest.split_once(':') {
        Some((user, _password)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}
