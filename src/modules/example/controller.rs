use tracing::instrument;

use heavyweight_core::{PaginatedResponse, PaginationParams};
use heavyweight_core::response::ErrorResponse;

use crate::middleware::validator::ValidatedQuery;
use crate::modules::example::model::{Name, NameResponse};
use crate::modules::example::service::ExampleService;

/// Example Endpoint
///
/// Lists the seeded names one page at a time.
#[utoipa::path(
    get,
    path = "/example",
    params(PaginationParams),
    responses(
        (status = 200, description = "The paginated list of names", body = PaginatedResponse<Name>),
        (status = 422, description = "Invalid pagination parameters", body = ErrorResponse)
    ),
    tag = "Example Docs"
)]
#[instrument]
pub async fn route_example_endpoint(
    ValidatedQuery(pagination): ValidatedQuery<PaginationParams>,
) -> NameResponse {
    ExampleService::list_names(&Name::seeded(), &pagination)
}
