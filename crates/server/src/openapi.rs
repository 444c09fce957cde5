use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// A stored post. Fields besides `id` and `title` are passed through as sent.
#[derive(ToSchema)]
pub struct PostDoc {
    pub id: u64,
    pub title: String,
    pub date: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
}

/// Create/update payload. An `id` sent here is ignored.
#[derive(ToSchema)]
pub struct PostInputDoc {
    pub title: String,
    pub date: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub status: u16,
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::posts::list,
        crate::routes::posts::get,
        crate::routes::posts::create,
        crate::routes::posts::update,
        crate::routes::posts::delete,
    ),
    components(
        schemas(
            HealthResponse,
            PostDoc,
            PostInputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "posts")
    )
)]
pub struct ApiDoc;
