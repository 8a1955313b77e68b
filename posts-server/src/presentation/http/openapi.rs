use utoipa::OpenApi;

use crate::presentation::http::handlers::posts::{AuthorDto, CreatePostDto, PostDto, UpdatePostDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::health::health_handler,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::update_post,
        crate::presentation::http::handlers::posts::delete_post
    ),
    components(
        schemas(
            AuthorDto,
            CreatePostDto,
            UpdatePostDto,
            PostDto
        )
    ),
    tags(
        (name = "posts", description = "Blog post endpoints"),
        (name = "health", description = "Liveness check")
    )
)]
pub(crate) struct ApiDoc;
