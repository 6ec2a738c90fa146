use crate::errors::{AppError, AppResult};
use chrono::Local;
use log::info;
use rusqlite::{Connection, OptionalExtension, params};

/// Ensure that the `log` table exists. Applied migrations are recorded in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

/// Ordered schema history. Never edit an entry once released; append.
const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261001_0001_create_kv",
        description: "Create key/value state table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS kv (
                key        TEXT PRIMARY KEY,
                value      TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20261001_0002_log_operation_index",
        description: "Index log rows by operation",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target);
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    info!(
        "event=migration_applied module=db version={} description={:?}",
        m.version, m.description
    );
    Ok(())
}

/// Public entry point: run all pending migrations. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
            applied += 1;
        }
    }

    Ok(applied)
}
