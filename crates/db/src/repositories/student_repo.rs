//! Repository for the `students` table.

use sqlx::SqlitePool;

use crate::models::profile::StudentProfile;
use crate::models::student::{NewStudent, Student};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "student_id, name, email, username, password_hash, \
                       course_id, time_slot, selected_tutor_id, created_at";

/// Provides the registration insert and lookup queries for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert the complete student row assembled by the final wizard step,
    /// returning the created row.
    ///
    /// The `UNIQUE` constraints on `username` and `email` are the
    /// authoritative duplicate guard: two racing registrations can both pass
    /// the application pre-check, but only one insert can succeed.
    pub async fn create(pool: &SqlitePool, input: &NewStudent) -> Result<Student, sqlx::Error> {
        // created_at is written explicitly: a students table migrated from
        // an older deployment has the column without its default.
        let query = format!(
            "INSERT INTO students
                 (name, email, username, password_hash, course_id, time_slot, selected_tutor_id,
                  created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.course_id)
            .bind(&input.time_slot)
            .bind(input.selected_tutor_id)
            .fetch_one(pool)
            .await
    }

    /// Find a student by username (case-sensitive).
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE username = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Duplicate pre-check: find a student holding either the username or
    /// the email.
    pub async fn find_by_username_or_email(
        pool: &SqlitePool,
        username: &str,
        email: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE username = $1 OR email = $2");
        sqlx::query_as::<_, Student>(&query)
            .bind(username)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the joined profile view (student + course name + tutor name)
    /// for the account summary.
    pub async fn profile_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<StudentProfile>, sqlx::Error> {
        sqlx::query_as::<_, StudentProfile>(
            "SELECT students.student_id, students.name, students.email, students.username,
                    students.time_slot, courses.course_name AS course_name,
                    tutors.full_name AS tutor_name, students.created_at
             FROM students
             LEFT JOIN courses ON students.course_id = courses.course_id
             LEFT JOIN tutors ON students.selected_tutor_id = tutors.tutor_id
             WHERE students.username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Total number of student rows.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await
    }
}
