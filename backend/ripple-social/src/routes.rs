/// URL routing: maps paths/verbs onto the handlers.
use crate::handlers;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .route("/ready", web::get().to(handlers::ready))
        .service(
            web::scope("/api/v1")
                .route("/users", web::post().to(handlers::users::create_user))
                .route("/users/{id}", web::get().to(handlers::users::get_user))
                .route(
                    "/users/{id}/follow",
                    web::post().to(handlers::follows::follow),
                )
                .route(
                    "/users/{id}/follow",
                    web::delete().to(handlers::follows::unfollow),
                )
                .route("/posts", web::post().to(handlers::posts::create_post))
                .route("/posts", web::get().to(handlers::posts::list_posts))
                .route("/posts/{id}", web::get().to(handlers::posts::get_post))
                .route("/posts/{id}", web::put().to(handlers::posts::update_post))
                .route(
                    "/posts/{id}",
                    web::delete().to(handlers::posts::delete_post),
                )
                .route("/posts/{id}/like", web::post().to(handlers::likes::like))
                .route(
                    "/posts/{id}/like",
                    web::delete().to(handlers::likes::unlike),
                )
                .route(
                    "/posts/{id}/comments",
                    web::post().to(handlers::comments::create_comment),
                )
                .route(
                    "/posts/{id}/comments",
                    web::get().to(handlers::comments::list_comments),
                )
                .route(
                    "/comments/{id}",
                    web::put().to(handlers::comments::update_comment),
                )
                .route(
                    "/comments/{id}",
                    web::delete().to(handlers::comments::delete_comment),
                )
                .route("/feed", web::get().to(handlers::feed::get_feed))
                .route(
                    "/notifications",
                    web::get().to(handlers::notifications::list_notifications),
                )
                .route(
                    "/notifications/mark-all-read",
                    web::post().to(handlers::notifications::mark_all_read),
                ),
        );
}
