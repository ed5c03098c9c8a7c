//! Idempotent schema bootstrap and additive column migrations.
//!
//! Safe to run on every startup: tables are created with
//! `CREATE TABLE IF NOT EXISTS`, seed rows with `INSERT OR IGNORE`, and
//! column evolution only ever adds columns. A legacy free-text
//! `selected_tutor` column, if present, is backfilled into the
//! `selected_tutor_id` foreign key once.
//!
//! Note: `students.course_id` and `students.selected_tutor_id` carry no
//! foreign-key constraint. A stale selection must degrade to an "Unknown"
//! name at display time rather than fail the final commit.

use sqlx::Row;

use crate::DbPool;

/// Table definitions, ordered so referenced tables come first.
const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS courses (
        course_id INTEGER PRIMARY KEY AUTOINCREMENT,
        course_name TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS tutors (
        tutor_id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        bio TEXT,
        photo TEXT
    )",
    "CREATE TABLE IF NOT EXISTS traits (
        trait_id INTEGER PRIMARY KEY AUTOINCREMENT,
        trait_name TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS tutor_traits (
        tutor_id INTEGER NOT NULL REFERENCES tutors(tutor_id),
        trait_id INTEGER NOT NULL REFERENCES traits(trait_id),
        PRIMARY KEY (tutor_id, trait_id)
    )",
    "CREATE TABLE IF NOT EXISTS students (
        student_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        course_id INTEGER,
        time_slot TEXT,
        selected_tutor_id INTEGER,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
];

/// Seed rows for the static reference tables.
const SEED_STATEMENTS: &[&str] = &[
    "INSERT OR IGNORE INTO courses (course_id, course_name) VALUES
        (1, 'Mathematics'),
        (2, 'Physics'),
        (3, 'Chemistry'),
        (4, 'Biology'),
        (5, 'English')",
    "INSERT OR IGNORE INTO tutors (tutor_id, full_name, bio, photo) VALUES
        (1, 'Aisha Khan', 'Applied mathematician with eight years of tutoring experience.', 'aisha.jpg'),
        (2, 'Marcus Lee', 'Former physics olympiad coach, focuses on problem-solving.', 'marcus.jpg'),
        (3, 'Sofia Rossi', 'Chemistry PhD candidate who loves lab analogies.', 'sofia.jpg'),
        (4, 'David Okafor', 'Biology teacher specialising in exam preparation.', 'david.jpg'),
        (5, 'Emma Wright', 'Linguist and essay-writing mentor.', 'emma.jpg')",
    "INSERT OR IGNORE INTO traits (trait_id, trait_name) VALUES
        (1, 'Patient'),
        (2, 'Energetic'),
        (3, 'Structured'),
        (4, 'Humorous'),
        (5, 'Encouraging'),
        (6, 'Detail-oriented')",
    "INSERT OR IGNORE INTO tutor_traits (tutor_id, trait_id) VALUES
        (1, 1), (1, 3),
        (2, 2), (2, 4),
        (3, 3), (3, 6),
        (4, 1), (4, 5),
        (5, 5), (5, 6)",
];

/// Run the full bootstrap sequence.
///
/// Any error aborts startup; the application must not serve requests
/// against a partially migrated store.
pub async fn run(pool: &DbPool) -> Result<(), sqlx::Error> {
    initialize_schema(pool).await?;
    ensure_students_columns(pool).await?;
    backfill_selected_tutor(pool).await?;
    tracing::info!("Schema bootstrap complete");
    Ok(())
}

/// Apply table creation and seed statements. Idempotent.
pub async fn initialize_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in CREATE_TABLES.iter().chain(SEED_STATEMENTS) {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// List the column names of `table` via `PRAGMA table_info`.
async fn table_columns(pool: &DbPool, table: &str) -> Result<Vec<String>, sqlx::Error> {
    // PRAGMA arguments cannot be bound; `table` is an internal constant.
    let rows = sqlx::query(&format!("PRAGMA table_info({table})"))
        .fetch_all(pool)
        .await?;
    rows.iter().map(|row| row.try_get("name")).collect()
}

/// Add any missing `students` columns introduced after the initial schema.
///
/// Only ever adds columns; never drops or renames, so a database created by
/// an older deployment keeps its data.
pub async fn ensure_students_columns(pool: &DbPool) -> Result<(), sqlx::Error> {
    // SQLite forbids a CURRENT_TIMESTAMP default in ALTER TABLE ADD
    // COLUMN, so created_at is added nullable and backfilled below.
    const ADDED_COLUMNS: &[(&str, &str)] = &[
        ("course_id", "INTEGER"),
        ("time_slot", "TEXT"),
        ("selected_tutor_id", "INTEGER"),
        ("created_at", "TEXT"),
    ];

    let existing = table_columns(pool, "students").await?;

    for (column, column_type) in ADDED_COLUMNS {
        if !existing.iter().any(|name| name == column) {
            tracing::info!(column, "Adding missing students column");
            sqlx::query(&format!(
                "ALTER TABLE students ADD COLUMN {column} {column_type}"
            ))
            .execute(pool)
            .await?;
        }
    }

    sqlx::query("UPDATE students SET created_at = CURRENT_TIMESTAMP WHERE created_at IS NULL")
        .execute(pool)
        .await?;
    Ok(())
}

/// One-time migration from the legacy free-text `selected_tutor` column.
///
/// Maps tutor names to `selected_tutor_id` for rows where the id is still
/// unset. A no-op when the legacy column does not exist.
pub async fn backfill_selected_tutor(pool: &DbPool) -> Result<(), sqlx::Error> {
    let existing = table_columns(pool, "students").await?;
    if !existing.iter().any(|name| name == "selected_tutor") {
        return Ok(());
    }

    let result = sqlx::query(
        "UPDATE students
         SET selected_tutor_id = (
             SELECT tutor_id FROM tutors
             WHERE tutors.full_name = students.selected_tutor
         )
         WHERE selected_tutor_id IS NULL AND selected_tutor IS NOT NULL",
    )
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        tracing::info!(
            rows = result.rows_affected(),
            "Backfilled selected_tutor_id from legacy selected_tutor column"
        );
    }
    Ok(())
}
