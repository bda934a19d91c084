//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use blog_core::Outcome;
use blog_core::domain::Post;
use blog_shared::dto::{PostIdQuery, PostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Render a service outcome as an HTTP response.
fn respond<T: Serialize>(outcome: Outcome<T>, post_id: Option<i32>) -> AppResult<HttpResponse> {
    match outcome {
        Outcome::Success(payload) => Ok(HttpResponse::Ok().json(payload)),
        Outcome::Done => Ok(HttpResponse::Ok().finish()),
        Outcome::NotFound => Err(AppError::NotFound(match post_id {
            Some(id) => format!("Post {} not found", id),
            None => "Post not found".to_string(),
        })),
        Outcome::BadRequest(reason) => Err(reason.into()),
    }
}

/// GET /api/posts
pub async fn get_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let outcome = state.post_service().get_all().await?;
    respond(outcome, None)
}

/// GET /api/post?post_id={id}
pub async fn get_post(
    state: web::Data<AppState>,
    query: web::Query<PostIdQuery>,
) -> AppResult<HttpResponse> {
    let post_id = query.post_id;
    let outcome = state.post_service().get_by_id(post_id).await?;
    respond(outcome, post_id)
}

/// POST /api/post - responds with the number of records written.
pub async fn add_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post: Post = body.into_inner().into();
    let outcome = state.post_service().add(post).await?;
    respond(outcome, None)
}

/// PUT /api/post
pub async fn update_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post: Post = body.into_inner().into();
    let post_id = post.id;
    let outcome = state.post_service().update(post).await?;
    respond(outcome, Some(post_id))
}

/// DELETE /api/post?post_id={id}
pub async fn delete_post(
    state: web::Data<AppState>,
    query: web::Query<PostIdQuery>,
) -> AppResult<HttpResponse> {
    let post_id = query.post_id;
    let outcome = state.post_service().delete(post_id).await?;
    respond(outcome, post_id)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use blog_core::PostRules;
    use blog_core::domain::PostView;
    use blog_infra::seed::seed_demo_data;
    use blog_shared::ErrorResponse;

    use super::*;
    use crate::handlers::configure_routes;

    async fn seeded_state() -> AppState {
        let state = AppState::in_memory(PostRules::default());
        seed_demo_data(state.posts.as_ref(), state.categories.as_ref())
            .await
            .unwrap();
        state
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_post_returns_view() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get()
            .uri("/api/post?post_id=1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let view: PostView = test::read_body_json(resp).await;
        assert_eq!(view.title, "Test Title 1");
        assert_eq!(view.description, "Test Description 1");
    }

    #[actix_web::test]
    async fn test_get_post_status_codes() {
        let app = app!(seeded_state().await);

        let missing = test::TestRequest::get()
            .uri("/api/post?post_id=3")
            .to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.status, 404);
        assert_eq!(problem.detail.as_deref(), Some("Post 3 not found"));

        let no_id = test::TestRequest::get().uri("/api/post").to_request();
        let resp = test::call_service(&app, no_id).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let not_a_number = test::TestRequest::get()
            .uri("/api/post?post_id=abc")
            .to_request();
        let resp = test::call_service(&app, not_a_number).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_posts_lists_all() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let views: Vec<PostView> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].title, "Test Title 1");
        assert_eq!(views[1].title, "Test Title 2");
    }

    #[actix_web::test]
    async fn test_add_post_returns_written_count() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({
                "title": "Test Title 3",
                "description": "Test Description 3",
                "category_id": 2,
                "created_date": "2019-01-01T00:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let written: u64 = test::read_body_json(resp).await;
        assert_eq!(written, 1);

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let views: Vec<PostView> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(views.len(), 3);
    }

    #[actix_web::test]
    async fn test_add_post_with_long_title_is_bad_request() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({
                "title": "Test Title More Than 20 Characteres",
                "description": "Test Description 3",
                "category_id": 3
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let problem: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(problem.title, "Bad Request");
    }

    #[actix_web::test]
    async fn test_update_post_status_codes() {
        let app = app!(seeded_state().await);

        let updated = test::TestRequest::put()
            .uri("/api/post")
            .set_json(json!({
                "post_id": 2,
                "title": "Test Title 2 Updated",
                "description": "Test Description 2",
                "category_id": 3
            }))
            .to_request();
        let resp = test::call_service(&app, updated).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/post?post_id=2")
            .to_request();
        let view: PostView = test::call_and_read_body_json(&app, req).await;
        assert_eq!(view.title, "Test Title 2 Updated");

        let too_long = test::TestRequest::put()
            .uri("/api/post")
            .set_json(json!({
                "post_id": 5,
                "title": "Test Title More Than 20 Characteres"
            }))
            .to_request();
        let resp = test::call_service(&app, too_long).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let missing = test::TestRequest::put()
            .uri("/api/post")
            .set_json(json!({ "post_id": 5, "title": "Fine Title" }))
            .to_request();
        let resp = test::call_service(&app, missing).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_post_status_codes() {
        let app = app!(seeded_state().await);

        let req = test::TestRequest::delete()
            .uri("/api/post?post_id=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let again = test::TestRequest::delete()
            .uri("/api/post?post_id=2")
            .to_request();
        let resp = test::call_service(&app, again).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let no_id = test::TestRequest::delete().uri("/api/post").to_request();
        let resp = test::call_service(&app, no_id).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_reports_storage() {
        let app = app!(AppState::in_memory(PostRules::default()));

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "up");
    }
}
