use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use domain::DomainError;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// Idempotent DDL applied on startup. The composite primary key on the join
/// table is what turns a duplicate association into a unique violation, and
/// the cascading foreign keys remove join rows when either side is deleted.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS person (
    person_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name      TEXT NOT NULL,
    last_name       TEXT NOT NULL,
    email_address   TEXT NOT NULL,
    street_address  TEXT NOT NULL,
    city            TEXT NOT NULL,
    state           TEXT NOT NULL,
    zip_code        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS client (
    client_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    company_name    TEXT NOT NULL,
    website         TEXT NOT NULL,
    phone           TEXT NOT NULL,
    street_address  TEXT NOT NULL,
    city            TEXT NOT NULL,
    state           TEXT NOT NULL,
    zip_code        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS client_person_associations (
    client_id  INTEGER NOT NULL REFERENCES client (client_id) ON DELETE CASCADE,
    person_id  INTEGER NOT NULL REFERENCES person (person_id) ON DELETE CASCADE,
    PRIMARY KEY (client_id, person_id)
);
";

/// SQLite does not enforce foreign keys unless the pragma is set on every
/// connection, so it has to run through a pool customizer rather than once.
#[derive(Debug)]
struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the SQLite database at `database_path` and applies
    /// the schema.
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .connection_customizer(Box::new(ConnectionSetup))
            .build(manager)
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        apply_schema(&pool)?;
        Ok(Database { pool })
    }

    /// In-memory database for tests. The pool is capped at a single
    /// connection because every SQLite `:memory:` connection is its own
    /// database.
    pub fn new_in_memory() -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(ConnectionSetup))
            .build(manager)
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        apply_schema(&pool)?;
        Ok(Database { pool })
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn apply_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    let mut conn = pool
        .get()
        .map_err(|e| DomainError::StorageError(e.to_string()))?;
    conn.batch_execute(SCHEMA_SQL)
        .map_err(|e| DomainError::StorageError(e.to_string()))
}
