//! Store connection and schema bootstrap.
//!
//! [`connect`] opens the sea-orm connection pool from [`DatabaseConfig`];
//! [`create_schema`] creates the tables of every enabled capability from the
//! entity definitions, parents before children.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, Schema,
};
use tracing::{debug, info};

use crate::config::{Capabilities, DatabaseConfig};
use crate::entities::{
    department, division, employee, employee_title, payroll_history, project, project_employee,
    project_milestone, time_entry, works_on,
};

/// Opens a connection pool using the configured limits.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), "Database connection established");
    Ok(db)
}

/// Creates every table the enabled capabilities need, if it does not exist.
///
/// On SQLite this also turns on foreign-key enforcement for the connection.
pub async fn create_schema(
    db: &DatabaseConnection,
    capabilities: &Capabilities,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    if backend == DatabaseBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }

    let schema = Schema::new(backend);

    create_table(db, &schema, employee_title::Entity).await?;
    create_table(db, &schema, division::Entity).await?;
    create_table(db, &schema, department::Entity).await?;
    create_table(db, &schema, employee::Entity).await?;
    create_table(db, &schema, project::Entity).await?;
    create_table(db, &schema, works_on::Entity).await?;

    if capabilities.hr {
        create_table(db, &schema, project_employee::Entity).await?;
        create_table(db, &schema, time_entry::Entity).await?;
        create_table(db, &schema, payroll_history::Entity).await?;
    }

    if capabilities.project_management {
        create_table(db, &schema, project_milestone::Entity).await?;
    }

    info!(
        hr = capabilities.hr,
        project_management = capabilities.project_management,
        "Schema ready"
    );
    Ok(())
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let table = entity.table_name().to_string();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(db.get_database_backend().build(&stmt)).await?;
    debug!(table = %table, "Table ensured");
    Ok(())
}
