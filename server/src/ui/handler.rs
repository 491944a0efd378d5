use axum::{
	Json,
	extract::Query,
	http::StatusCode,
};
use serde::{Deserialize, Serialize};

use costcalc_core::draft::AdminTab;
use costcalc_core::nav::{self, NavLink};

use crate::extract::OptionalSession;
use crate::prelude::*;
use crate::types::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct NavQuery {
	/// Current location, used to mark the active link
	pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NavItem {
	#[serde(flatten)]
	pub link: NavLink,
	pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct AdminTabItem {
	pub id: AdminTab,
	pub label: &'static str,
}

/// GET /api/nav?path=/current/location
pub async fn get_nav(
	OptionalSession(session): OptionalSession,
	Query(query): Query<NavQuery>,
) -> ClResult<(StatusCode, Json<ApiResponse<Vec<NavItem>>>)> {
	let is_authenticated = session.is_some();
	let current = query.path.as_deref().unwrap_or_default();

	let items = nav::links(is_authenticated)
		.into_iter()
		.map(|link| NavItem { active: link.is_active(current), link })
		.collect();

	Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /api/admin/tabs
pub async fn get_admin_tabs() -> ClResult<(StatusCode, Json<ApiResponse<Vec<AdminTabItem>>>)> {
	let tabs = AdminTab::ALL.iter().map(|&id| AdminTabItem { id, label: id.label() }).collect();
	Ok((StatusCode::OK, Json(ApiResponse::new(tabs))))
}

// vim: ts=4
