//! Repository tests for student inserts, duplicate handling, and the joined
//! profile view.

use assert_matches::assert_matches;
use sqlx::error::ErrorKind;
use tutormatch_db::models::student::NewStudent;
use tutormatch_db::repositories::{CourseRepo, StudentRepo, TraitRepo, TutorRepo};
use tutormatch_db::{bootstrap, create_memory_pool, DbPool};

async fn setup_pool() -> DbPool {
    let pool = create_memory_pool().await.expect("in-memory pool");
    bootstrap::run(&pool).await.expect("bootstrap");
    pool
}

fn new_student(username: &str) -> NewStudent {
    NewStudent {
        name: "Ana".to_string(),
        email: format!("{username}@test.com"),
        username: username.to_string(),
        password_hash: "$argon2id$fake-hash".to_string(),
        course_id: Some(2),
        time_slot: Some("Mon 3pm".to_string()),
        selected_tutor_id: Some(5),
    }
}

#[tokio::test]
async fn test_create_and_find_student() {
    let pool = setup_pool().await;

    let created = StudentRepo::create(&pool, &new_student("ana1")).await.unwrap();
    assert!(created.student_id > 0);
    assert_eq!(created.username, "ana1");
    assert_eq!(created.course_id, Some(2));

    let found = StudentRepo::find_by_username(&pool, "ana1")
        .await
        .unwrap()
        .expect("student should exist");
    assert_eq!(found.student_id, created.student_id);
    assert_eq!(found.password_hash, "$argon2id$fake-hash");

    assert!(StudentRepo::find_by_username(&pool, "ghost")
        .await
        .unwrap()
        .is_none());
}

/// The UNIQUE constraint on username is the race backstop: a second insert
/// with the same username fails with a unique violation and leaves exactly
/// one row.
#[tokio::test]
async fn test_duplicate_username_violates_constraint() {
    let pool = setup_pool().await;

    StudentRepo::create(&pool, &new_student("dup")).await.unwrap();

    let mut second = new_student("dup");
    second.email = "other@test.com".to_string();
    let err = StudentRepo::create(&pool, &second).await.unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::UniqueViolation)
    );

    assert_eq!(StudentRepo::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_email_violates_constraint() {
    let pool = setup_pool().await;

    StudentRepo::create(&pool, &new_student("first")).await.unwrap();

    let mut second = new_student("second");
    second.email = "first@test.com".to_string();
    let err = StudentRepo::create(&pool, &second).await.unwrap_err();
    assert_matches!(
        err,
        sqlx::Error::Database(db_err) if matches!(db_err.kind(), ErrorKind::UniqueViolation)
    );
}

/// The pre-check query matches on either username or email.
#[tokio::test]
async fn test_find_by_username_or_email() {
    let pool = setup_pool().await;
    StudentRepo::create(&pool, &new_student("ana1")).await.unwrap();

    let by_username = StudentRepo::find_by_username_or_email(&pool, "ana1", "nobody@test.com")
        .await
        .unwrap();
    assert!(by_username.is_some());

    let by_email = StudentRepo::find_by_username_or_email(&pool, "someone", "ana1@test.com")
        .await
        .unwrap();
    assert!(by_email.is_some());

    let neither = StudentRepo::find_by_username_or_email(&pool, "someone", "nobody@test.com")
        .await
        .unwrap();
    assert!(neither.is_none());
}

/// The profile view joins course and tutor names.
#[tokio::test]
async fn test_profile_joins_course_and_tutor() {
    let pool = setup_pool().await;
    StudentRepo::create(&pool, &new_student("ana1")).await.unwrap();

    let profile = StudentRepo::profile_by_username(&pool, "ana1")
        .await
        .unwrap()
        .expect("profile should exist");
    assert_eq!(profile.course_name.as_deref(), Some("Physics"));
    assert_eq!(profile.tutor_name.as_deref(), Some("Emma Wright"));
    assert_eq!(profile.time_slot.as_deref(), Some("Mon 3pm"));
}

/// Stale course/tutor references degrade to NULL names in the profile view
/// and to "Unknown" via the resolvers, never to an error.
#[tokio::test]
async fn test_stale_references_resolve_to_unknown() {
    let pool = setup_pool().await;

    let mut input = new_student("stale");
    input.course_id = Some(999);
    input.selected_tutor_id = Some(999);
    StudentRepo::create(&pool, &input).await.unwrap();

    let profile = StudentRepo::profile_by_username(&pool, "stale")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.course_name, None);
    assert_eq!(profile.tutor_name, None);

    assert_eq!(
        CourseRepo::resolve_name(&pool, Some(999)).await.unwrap(),
        "Unknown"
    );
    assert_eq!(
        TutorRepo::resolve_name(&pool, None).await.unwrap(),
        "Unknown"
    );
    assert_eq!(
        CourseRepo::resolve_name(&pool, Some(2)).await.unwrap(),
        "Physics"
    );
}

/// Reference data queries used by the wizard pages.
#[tokio::test]
async fn test_reference_data_queries() {
    let pool = setup_pool().await;

    let courses = CourseRepo::list(&pool).await.unwrap();
    assert_eq!(courses.len(), 5);
    assert_eq!(courses[0].course_name, "Mathematics");

    let tutors = TutorRepo::list(&pool).await.unwrap();
    assert_eq!(tutors.len(), 5);
    assert!(tutors[0].bio.is_some());

    let traits = TraitRepo::list(&pool).await.unwrap();
    assert_eq!(traits.len(), 6);

    let with_traits = TutorRepo::list_with_traits(&pool).await.unwrap();
    assert_eq!(with_traits.len(), 5);
    let aisha = &with_traits[0];
    assert_eq!(aisha.full_name, "Aisha Khan");
    assert!(aisha.traits.contains("Patient"));
    assert!(aisha.traits.contains(", "));
}
