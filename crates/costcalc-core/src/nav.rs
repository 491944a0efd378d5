//! Navigation bar links
//!
//! The public pages are always listed. The tail depends on the session: an
//! authenticated operator sees the admin page and a logout action, anybody
//! else a login link.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum NavTarget {
	Route(&'static str),
	Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
	pub label: &'static str,
	pub target: NavTarget,
}

const fn route(label: &'static str, path: &'static str) -> NavLink {
	NavLink { label, target: NavTarget::Route(path) }
}

pub const PUBLIC_LINKS: [NavLink; 5] = [
	route("Calculator", "/calculator/advanced"),
	route("About", "/about"),
	route("Factors", "/factors"),
	route("Tools", "/tools"),
	route("Contact", "/contact"),
];

pub fn links(is_authenticated: bool) -> Vec<NavLink> {
	let mut links = PUBLIC_LINKS.to_vec();
	if is_authenticated {
		links.push(route("Admin", "/admin"));
		links.push(NavLink { label: "Logout", target: NavTarget::Logout });
	} else {
		links.push(route("Login", "/login"));
	}
	links
}

impl NavLink {
	/// A link is highlighted when its path equals the current location
	pub fn is_active(&self, current_path: &str) -> bool {
		matches!(self.target, NavTarget::Route(path) if path == current_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn labels(links: &[NavLink]) -> Vec<&'static str> {
		links.iter().map(|link| link.label).collect()
	}

	#[test]
	fn test_anonymous_links() {
		assert_eq!(
			labels(&links(false)),
			vec!["Calculator", "About", "Factors", "Tools", "Contact", "Login"]
		);
	}

	#[test]
	fn test_authenticated_links() {
		let links = links(true);
		assert_eq!(
			labels(&links),
			vec!["Calculator", "About", "Factors", "Tools", "Contact", "Admin", "Logout"]
		);
		assert_eq!(links.last().map(|l| l.target), Some(NavTarget::Logout));
	}

	#[test]
	fn test_is_active() {
		let about = route("About", "/about");
		assert!(about.is_active("/about"));
		assert!(!about.is_active("/about/team"));
		assert!(!NavLink { label: "Logout", target: NavTarget::Logout }.is_active("/"));
	}

	#[test]
	fn test_serialize() {
		let value = serde_json::to_value(links(true)).unwrap();
		assert_eq!(value[0]["target"]["kind"], "route");
		assert_eq!(value[0]["target"]["path"], "/calculator/advanced");
		assert_eq!(value[6]["target"]["kind"], "logout");
	}
}

// vim: ts=4
