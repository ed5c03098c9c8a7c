//! Handlers for the four-step registration wizard.
//!
//! The wizard is strictly linear: Account -> Class -> Quiz -> Final. The
//! in-progress state travels with the client as a signed token issued at
//! each completed step and verified at the next, so no server-side session
//! exists. The password is hashed at the first transition and only the hash
//! is carried forward.
//!
//! The duplicate pre-checks here give early, friendly errors; the UNIQUE
//! constraints on `students` remain the authoritative guard at commit time.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tutormatch_core::error::CoreError;
use tutormatch_core::registration::{self, RegistrationStep, TOTAL_STEPS};
use tutormatch_core::types::{DbId, Timestamp};
use tutormatch_db::models::course::Course;
use tutormatch_db::models::student::NewStudent;
use tutormatch_db::models::traits::Trait;
use tutormatch_db::models::tutor::TutorWithTraits;
use tutormatch_db::repositories::{CourseRepo, StudentRepo, TraitRepo, TutorRepo};

use crate::auth::password::hash_password;
use crate::auth::wizard_token::{self, WizardState};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Describes a wizard step to the client.
#[derive(Debug, Serialize)]
pub struct StepInfo {
    pub step: u8,
    pub label: &'static str,
    pub total_steps: u8,
}

impl StepInfo {
    fn for_step(step: RegistrationStep) -> Self {
        Self {
            step: step.to_number(),
            label: step.label(),
            total_steps: TOTAL_STEPS,
        }
    }
}

/// Response for `GET /account`: the step-1 form descriptor.
#[derive(Debug, Serialize)]
pub struct AccountFormResponse {
    #[serde(flatten)]
    pub step: StepInfo,
    pub required_fields: &'static [&'static str],
}

/// Request body for `POST /class` (submits the account step).
#[derive(Debug, Deserialize)]
pub struct AccountSubmission {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Non-sensitive echo of the registration in progress.
#[derive(Debug, Serialize)]
pub struct RegistrationSummary {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Response for `POST /class`: course options plus the signed state token.
#[derive(Debug, Serialize)]
pub struct ClassStepResponse {
    #[serde(flatten)]
    pub step: StepInfo,
    pub registration: RegistrationSummary,
    pub courses: Vec<Course>,
    pub state_token: String,
}

/// Request body for `POST /quiz` (submits the class step).
#[derive(Debug, Deserialize)]
pub struct ClassSubmission {
    pub state_token: String,
    pub course_id: DbId,
    pub time_slot: String,
}

/// Tutor/trait picker data shown on the quiz step.
#[derive(Debug, Serialize)]
pub struct QuizOptions {
    pub tutors: Vec<TutorWithTraits>,
    pub traits: Vec<Trait>,
}

/// Response for `POST /quiz`: picker data plus the advanced state token.
#[derive(Debug, Serialize)]
pub struct QuizStepResponse {
    #[serde(flatten)]
    pub step: StepInfo,
    pub registration: RegistrationSummary,
    #[serde(flatten)]
    pub options: QuizOptions,
    pub state_token: String,
}

/// Request body for `POST /final` (submits the quiz step and commits).
#[derive(Debug, Deserialize)]
pub struct FinalSubmission {
    pub state_token: String,
    pub selected_tutor_id: DbId,
}

/// Confirmation view rendered after the single commit.
#[derive(Debug, Serialize)]
pub struct RegistrationComplete {
    pub student_id: DbId,
    pub name: String,
    pub email: String,
    pub username: String,
    pub course: String,
    pub time_slot: Option<String>,
    pub tutor: String,
    pub registered_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /account
///
/// Step-1 form descriptor.
pub async fn account_form() -> Json<AccountFormResponse> {
    Json(AccountFormResponse {
        step: StepInfo::for_step(RegistrationStep::Account),
        required_fields: &["name", "email", "username", "password"],
    })
}

/// GET /class
///
/// Course and time-slot options for a client browsing the step directly.
pub async fn class_options(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// POST /class
///
/// Validates the account step, rejects duplicate username/email, hashes the
/// password (the plaintext is dropped here), and issues the first state
/// token alongside the course options for step 2.
pub async fn submit_account(
    State(state): State<AppState>,
    Json(input): Json<AccountSubmission>,
) -> AppResult<Json<ClassStepResponse>> {
    let fields =
        registration::validate_account(&input.name, &input.email, &input.username, &input.password)?;

    if let Some(existing) =
        StudentRepo::find_by_username_or_email(&state.pool, &fields.username, &fields.email).await?
    {
        let message = if existing.username == fields.username {
            "That username is already taken."
        } else {
            "That email is already registered."
        };
        return Err(AppError::Core(CoreError::Conflict(message.to_string())));
    }

    let password_hash = hash_password(&fields.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let wizard_state = WizardState {
        step: RegistrationStep::Account,
        name: fields.name.clone(),
        email: fields.email.clone(),
        username: fields.username.clone(),
        password_hash,
        course_id: None,
        time_slot: None,
        iat: chrono::Utc::now().timestamp(),
    };
    let state_token = wizard_token::issue(&wizard_state, &state.config.wizard)?;

    let courses = CourseRepo::list(&state.pool).await?;

    Ok(Json(ClassStepResponse {
        step: StepInfo::for_step(RegistrationStep::Class),
        registration: RegistrationSummary {
            name: fields.name,
            email: fields.email,
            username: fields.username,
        },
        courses,
        state_token,
    }))
}

/// GET /quiz
///
/// Tutor/trait picker data for a client browsing the step directly.
pub async fn quiz_options(State(state): State<AppState>) -> AppResult<Json<QuizOptions>> {
    Ok(Json(load_quiz_options(&state).await?))
}

/// POST /quiz
///
/// Verifies the account-step token, records the course and time slot, and
/// issues the advanced token alongside the tutor/trait picker for step 3.
pub async fn submit_class(
    State(state): State<AppState>,
    Json(input): Json<ClassSubmission>,
) -> AppResult<Json<QuizStepResponse>> {
    let mut wizard_state = wizard_token::verify(&input.state_token, &state.config.wizard)?;
    wizard_token::require_step(&wizard_state, RegistrationStep::Account)?;

    let time_slot = registration::require_field(&input.time_slot, "Time slot")?.to_string();

    wizard_state.step = RegistrationStep::Class;
    wizard_state.course_id = Some(input.course_id);
    wizard_state.time_slot = Some(time_slot);
    let state_token = wizard_token::issue(&wizard_state, &state.config.wizard)?;

    let options = load_quiz_options(&state).await?;

    Ok(Json(QuizStepResponse {
        step: StepInfo::for_step(RegistrationStep::Quiz),
        registration: RegistrationSummary {
            name: wizard_state.name,
            email: wizard_state.email,
            username: wizard_state.username,
        },
        options,
        state_token,
    }))
}

/// POST /final
///
/// Verifies the class-step token, re-checks the duplicate guard (another
/// registration may have committed since step 1), then performs the single
/// insert. The UNIQUE constraints catch the remaining race window: a
/// violating insert surfaces as 409 and writes nothing.
pub async fn submit_final(
    State(state): State<AppState>,
    Json(input): Json<FinalSubmission>,
) -> AppResult<Json<RegistrationComplete>> {
    let wizard_state = wizard_token::verify(&input.state_token, &state.config.wizard)?;
    wizard_token::require_step(&wizard_state, RegistrationStep::Class)?;

    if StudentRepo::find_by_username_or_email(
        &state.pool,
        &wizard_state.username,
        &wizard_state.email,
    )
    .await?
    .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "That username was just taken. Please try a different one.".to_string(),
        )));
    }

    let student = StudentRepo::create(
        &state.pool,
        &NewStudent {
            name: wizard_state.name,
            email: wizard_state.email,
            username: wizard_state.username,
            password_hash: wizard_state.password_hash,
            course_id: wizard_state.course_id,
            time_slot: wizard_state.time_slot,
            selected_tutor_id: Some(input.selected_tutor_id),
        },
    )
    .await?;

    let course = CourseRepo::resolve_name(&state.pool, student.course_id).await?;
    let tutor = TutorRepo::resolve_name(&state.pool, student.selected_tutor_id).await?;

    tracing::info!(username = %student.username, "Registration completed");

    Ok(Json(RegistrationComplete {
        student_id: student.student_id,
        name: student.name,
        email: student.email,
        username: student.username,
        course,
        time_slot: student.time_slot,
        tutor,
        registered_at: student.created_at,
    }))
}

async fn load_quiz_options(state: &AppState) -> Result<QuizOptions, AppError> {
    Ok(QuizOptions {
        tutors: TutorRepo::list_with_traits(&state.pool).await?,
        traits: TraitRepo::list(&state.pool).await?,
    })
}
