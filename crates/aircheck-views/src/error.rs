//! Error taxonomy for the view-load layer.

use aircheck_api::ApiError;
use thiserror::Error;

/// Errors surfaced by view-load functions.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The addressed page does not exist: malformed hour-bucket id, unknown
    /// station, or unknown track. Never retried.
    #[error("not found")]
    NotFound,

    /// A newer navigation superseded this load; the result must be discarded.
    #[error("navigation superseded")]
    Superseded,

    /// The underlying API call failed.
    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        // A missing resource is a page-level "not found", not a fetch failure.
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::Api(err)
        }
    }
}
