use utoipa::OpenApi;

use heavyweight_core::response::{ErrorResponse, ResponseStatus};
use heavyweight_core::{PaginationMeta, PaginationParams, SortOrder};

use crate::modules::example::model::Name;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Heavyweight API",
        contact(
            name = "GrandGale Technologies",
            url = "https://github.com/GrandGaleTechnologies",
            email = "contact@grandgale.tech"
        )
    ),
    paths(crate::modules::example::controller::route_example_endpoint),
    components(
        schemas(
            Name,
            PaginationMeta,
            PaginationParams,
            SortOrder,
            ResponseStatus,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Example Docs", description = "Example endpoints"),
    )
)]
pub struct ApiDoc;
