//! Handlers for the public landing pages.

use axum::extract::State;
use axum::Json;
use tutormatch_db::models::tutor::{Tutor, TutorWithTraits};
use tutormatch_db::repositories::TutorRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /
///
/// Landing page data: the tutor roster with their trait lists.
pub async fn home(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TutorWithTraits>>>> {
    let tutors = TutorRepo::list_with_traits(&state.pool).await?;
    Ok(Json(DataResponse { data: tutors }))
}

/// GET /about
///
/// Tutor bios.
pub async fn about(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Tutor>>>> {
    let tutors = TutorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tutors }))
}
