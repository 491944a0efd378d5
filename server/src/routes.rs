use axum::{
	Router,
	body::Body,
	extract::DefaultBodyLimit,
	http::Request,
	middleware::{self, Next},
	response::Response,
	routing::{delete, get, patch, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::extract::Session;
use crate::prelude::*;
use crate::{auth, estimate, resource, settings, ui};

/// Rejects the request unless it carries the token of a logged-in operator
pub async fn require_admin(_session: Session, req: Request<Body>, next: Next) -> Response {
	next.run(req).await
}

pub fn init(app: App) -> Router {
	let protected_router = Router::new()
		.route("/api/settings", patch(settings::handler::patch_settings))
		.route("/api/resources", post(resource::handler::post_resource))
		.route("/api/resources/{id}", delete(resource::handler::delete_resource))
		.layer(DefaultBodyLimit::max(app.opts.max_upload_size))
		.route_layer(middleware::from_fn_with_state(app.clone(), require_admin));

	let public_router = Router::new()
		.route("/api/settings", get(settings::handler::get_settings))
		.route("/api/resources", get(resource::handler::list_resources))
		.route("/api/blob/{blob_id}", get(resource::handler::get_blob))
		.route("/api/auth/login", post(auth::handler::post_login))
		.route("/api/auth/logout", post(auth::handler::post_logout))
		.route("/api/auth/status", get(auth::handler::get_status))
		.route("/api/nav", get(ui::handler::get_nav))
		.route("/api/admin/tabs", get(ui::handler::get_admin_tabs))
		.route("/api/estimate", post(estimate::handler::post_estimate));

	let router = Router::new().merge(public_router).merge(protected_router);
	let router = match &app.opts.dist_dir {
		Some(dist_dir) => router.fallback_service(ServeDir::new(dist_dir)),
		None => router,
	};

	router.layer(TraceLayer::new_for_http()).with_state(app)
}

// vim: ts=4
