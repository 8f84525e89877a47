use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Table name and its CREATE statement, created when missing
const SCHEMA: &[(&str, &str)] = &[
    (
        "customers",
        r#"
        CREATE TABLE customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            gstin TEXT NOT NULL DEFAULT '',
            contact_person TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            billing_address TEXT NOT NULL DEFAULT '',
            shipping_address TEXT NOT NULL DEFAULT '',
            credit_days INTEGER NOT NULL DEFAULT 30,
            created_at TEXT
        );
        "#,
    ),
    (
        "employees",
        r#"
        CREATE TABLE employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_code TEXT NOT NULL DEFAULT '',
            name TEXT NOT NULL,
            role TEXT NOT NULL,
            department TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            shift TEXT NOT NULL DEFAULT 'A',
            skill_level TEXT NOT NULL DEFAULT 'Beginner',
            status TEXT NOT NULL DEFAULT 'active',
            created_at TEXT
        );
        "#,
    ),
    (
        "parts",
        r#"
        CREATE TABLE parts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            part_no TEXT NOT NULL UNIQUE,
            rev TEXT NOT NULL DEFAULT 'A',
            description TEXT NOT NULL DEFAULT '',
            material TEXT NOT NULL DEFAULT '',
            client_part_no TEXT NOT NULL DEFAULT '',
            drawing_url TEXT NOT NULL DEFAULT '',
            created_at TEXT
        );
        "#,
    ),
    (
        "machines",
        r#"
        CREATE TABLE machines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            model TEXT NOT NULL DEFAULT '',
            location TEXT NOT NULL DEFAULT '',
            last_pm_date TEXT,
            created_at TEXT
        );
        "#,
    ),
    (
        "jobs",
        r#"
        CREATE TABLE jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_id TEXT NOT NULL UNIQUE,
            customer_id INTEGER NOT NULL,
            part_no TEXT NOT NULL,
            rev TEXT NOT NULL DEFAULT 'A',
            qty_ordered INTEGER NOT NULL,
            qty_completed INTEGER NOT NULL DEFAULT 0,
            due_date TEXT NOT NULL,
            route TEXT NOT NULL DEFAULT '[]',
            job_type TEXT NOT NULL DEFAULT 'CNC',
            status TEXT NOT NULL DEFAULT 'pending',
            current_operation TEXT,
            total_cost REAL NOT NULL DEFAULT 0,
            created_at TEXT
        );
        "#,
    ),
    (
        "challans",
        r#"
        CREATE TABLE challans (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            challan_no TEXT NOT NULL UNIQUE,
            job_id TEXT NOT NULL,
            customer_id INTEGER NOT NULL,
            qty_sent INTEGER NOT NULL,
            process_type TEXT NOT NULL,
            thickness TEXT NOT NULL DEFAULT '10-15 microns',
            params_json TEXT NOT NULL DEFAULT '{}',
            date_sent TEXT NOT NULL,
            expected_return_date TEXT,
            date_received TEXT,
            status TEXT NOT NULL DEFAULT 'sent',
            created_at TEXT
        );
        "#,
    ),
    (
        "invoices",
        r#"
        CREATE TABLE invoices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            invoice_no TEXT NOT NULL UNIQUE,
            job_id TEXT NOT NULL,
            customer_id INTEGER NOT NULL,
            invoice_date TEXT NOT NULL,
            taxable_amount REAL NOT NULL,
            gst_amount REAL NOT NULL,
            total_amount REAL NOT NULL,
            payment_status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT
        );
        "#,
    ),
    (
        "attendance",
        r#"
        CREATE TABLE attendance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            emp_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            in_time TEXT NOT NULL DEFAULT '',
            out_time TEXT NOT NULL DEFAULT '',
            worked_hours REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "attendance_records",
        r#"
        CREATE TABLE attendance_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'present',
            ot_hours REAL NOT NULL DEFAULT 0,
            notes TEXT NOT NULL DEFAULT '',
            UNIQUE (employee_id, date)
        );
        "#,
    ),
    (
        "attendance_summary",
        r#"
        CREATE TABLE attendance_summary (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL,
            month INTEGER NOT NULL,
            year INTEGER NOT NULL,
            total_working_days INTEGER NOT NULL DEFAULT 0,
            total_present_days REAL NOT NULL DEFAULT 0,
            total_absent_days INTEGER NOT NULL DEFAULT 0,
            total_leaves INTEGER NOT NULL DEFAULT 0,
            total_ot_hours REAL NOT NULL DEFAULT 0,
            UNIQUE (employee_id, month, year)
        );
        "#,
    ),
    (
        "enquiries",
        r#"
        CREATE TABLE enquiries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            enquiry_id TEXT NOT NULL,
            customer_id INTEGER NOT NULL,
            part_no TEXT NOT NULL DEFAULT '',
            qty INTEGER NOT NULL DEFAULT 0,
            estimated_cost REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'open'
        );
        "#,
    ),
    (
        "operations",
        r#"
        CREATE TABLE operations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            part_no TEXT NOT NULL,
            op_seq INTEGER NOT NULL,
            op_name TEXT NOT NULL,
            machine_type TEXT NOT NULL DEFAULT '',
            setup_time_min REAL NOT NULL DEFAULT 0,
            run_time_per_piece_min REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "inventory",
        r#"
        CREATE TABLE inventory (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_id TEXT NOT NULL,
            name TEXT NOT NULL,
            batch_no TEXT NOT NULL DEFAULT '',
            qty_on_hand REAL NOT NULL DEFAULT 0,
            location TEXT NOT NULL DEFAULT '',
            reorder_point REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "tooling",
        r#"
        CREATE TABLE tooling (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tool_id TEXT NOT NULL,
            name TEXT NOT NULL,
            last_purchase_cost REAL NOT NULL DEFAULT 0,
            useful_life_hours REAL NOT NULL DEFAULT 0,
            current_usage_hours REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "inspections",
        r#"
        CREATE TABLE inspections (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            insp_id TEXT NOT NULL,
            job_id TEXT NOT NULL,
            insp_type TEXT NOT NULL DEFAULT '',
            result TEXT NOT NULL DEFAULT '',
            remarks TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "maintenance",
        r#"
        CREATE TABLE maintenance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            maintenance_id TEXT NOT NULL,
            machine_id INTEGER NOT NULL,
            type TEXT NOT NULL DEFAULT '',
            scheduled_date TEXT,
            completed_date TEXT,
            downtime_hours REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "purchase_orders",
        r#"
        CREATE TABLE purchase_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            po_no TEXT NOT NULL,
            supplier_name TEXT NOT NULL DEFAULT '',
            item_description TEXT NOT NULL DEFAULT '',
            qty REAL NOT NULL DEFAULT 0,
            total_amount REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'open'
        );
        "#,
    ),
    (
        "dispatch",
        r#"
        CREATE TABLE dispatch (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dispatch_id TEXT NOT NULL,
            job_id TEXT NOT NULL,
            lr_no TEXT NOT NULL DEFAULT '',
            eway_bill_no TEXT NOT NULL DEFAULT '',
            dispatch_date TEXT,
            transporter_name TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "expenses",
        r#"
        CREATE TABLE expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            expense_id TEXT NOT NULL,
            date TEXT,
            category TEXT NOT NULL DEFAULT '',
            amount REAL NOT NULL DEFAULT 0,
            vendor TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT ''
        );
        "#,
    ),
    (
        "sys_users",
        r#"
        CREATE TABLE sys_users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            full_name TEXT NOT NULL DEFAULT '',
            role TEXT NOT NULL DEFAULT 'Administrator',
            password_hash TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT
        );
        "#,
    ),
    (
        "sys_settings",
        r#"
        CREATE TABLE sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT,
            updated_at TEXT
        );
        "#,
    ),
];

/// Builds the sqlite URL for a database file, creating its directory
fn database_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Windows paths need a leading slash in the URL
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

/// Creates every missing table
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in SCHEMA {
        if table_exists(conn, table).await? {
            continue;
        }
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let db_url = database_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Empty database file with the full schema, one per test name
#[cfg(test)]
pub async fn open_scratch_database(name: &str) -> anyhow::Result<DatabaseConnection> {
    let db_file = std::env::temp_dir().join(format!(
        "shop-console-{}-{}.db",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&db_file);
    let conn = Database::connect(&database_url(&db_file)?).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_are_unique() {
        let mut names: Vec<&str> = SCHEMA.iter().map(|(name, _)| *name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SCHEMA.len());
    }

    #[test]
    fn every_statement_creates_its_table() {
        for (name, ddl) in SCHEMA {
            assert!(
                ddl.contains(&format!("CREATE TABLE {} (", name)),
                "{} has mismatched DDL",
                name
            );
        }
    }
}
