pub mod health;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /auth/login                                login (public)
///
/// GET    /projects                                  list
/// POST   /projects                                  create (admin)
/// GET    /projects/{id}                             get
/// PATCH  /projects/{id}                             partial update (admin)
/// DELETE /projects/{id}                             delete (admin)
///
/// POST   /projects/{id}/comments                    add comment (authed)
/// PATCH  /projects/{id}/comments/{cid}              edit comment (author/admin)
/// DELETE /projects/{id}/comments/{cid}              delete comment (author/admin)
/// POST   /projects/{id}/comments/{cid}/reactions    add reaction (authed)
///
/// GET    /export                                    whole-store snapshot (authed)
/// POST   /import                                    atomic replace (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/projects",
            get(handlers::project::list).post(handlers::project::create),
        )
        .route(
            "/projects/{id}",
            get(handlers::project::get_by_id)
                .patch(handlers::project::update)
                .delete(handlers::project::delete),
        )
        .route("/projects/{id}/comments", post(handlers::comment::add))
        .route(
            "/projects/{id}/comments/{cid}",
            patch(handlers::comment::update).delete(handlers::comment::delete),
        )
        .route(
            "/projects/{id}/comments/{cid}/reactions",
            post(handlers::comment::add_reaction),
        )
        .route("/export", get(handlers::transfer::export))
        .route("/import", post(handlers::transfer::import))
}
