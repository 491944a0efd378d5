//! Settings & resource store
//!
//! Single source of truth for the calculator configuration, the resource
//! list and the admin session flag. All mutation goes through the methods
//! below; the store is owned by the application root and lent out by
//! reference.

use std::collections::HashSet;

use crate::auth::{AdminCredentials, Credentials};
use crate::persist::Snapshot;
use crate::prelude::*;
use crate::resource::{Resource, ResourceInput};
use crate::settings::{FieldChange, Settings, SettingsPatch};

#[derive(Debug)]
pub struct SettingsStore {
	settings: Settings,
	is_authenticated: bool,
	next_resource_id: u64,
	admin: Option<AdminCredentials>,
}

impl SettingsStore {
	/// Creates a store around `settings`
	///
	/// Resources already present keep their ids; a repeated id keeps only its
	/// first occurrence. New ids continue after the highest existing one.
	pub fn new(mut settings: Settings) -> Self {
		let mut seen = HashSet::new();
		settings.resources.retain(|resource| {
			let fresh = seen.insert(resource.id);
			if !fresh {
				warn!("Dropping resource with duplicate id {}", resource.id);
			}
			fresh
		});
		// An id of u64::MAX leaves the counter at the exhausted mark
		let next_resource_id = settings
			.resources
			.iter()
			.map(|resource| resource.id.0.saturating_add(1))
			.max()
			.unwrap_or(1);

		Self { settings, is_authenticated: false, next_resource_id, admin: None }
	}

	/// Restores a store from a saved snapshot
	pub fn from_snapshot(snapshot: Snapshot) -> Self {
		let mut store = Self::new(snapshot.settings);
		store.next_resource_id = store.next_resource_id.max(snapshot.next_resource_id);
		store
	}

	/// Configures the operator account accepted by [`SettingsStore::login`]
	pub fn with_admin(mut self, admin: AdminCredentials) -> Self {
		self.admin = Some(admin);
		self
	}

	pub fn get_settings(&self) -> &Settings {
		&self.settings
	}

	/// Merges a partial update into the settings
	///
	/// Never fails. Values are not range checked; negative ones are only
	/// reported in the log.
	pub fn update_settings(&mut self, patch: &SettingsPatch) -> Vec<FieldChange> {
		let changes = self.settings.apply(patch);
		for change in &changes {
			debug!("Setting '{}' changed: {} -> {}", change.path, change.old, change.new);
			if change.new < 0.0 {
				warn!("Setting '{}' set to a negative value: {}", change.path, change.new);
			}
		}
		changes
	}

	pub fn resources(&self) -> &[Resource] {
		&self.settings.resources
	}

	pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
		self.settings.resources.iter().find(|resource| resource.id == id)
	}

	/// Appends a resource under a fresh id
	///
	/// Ids come from a counter that only grows, so an id is never handed out
	/// twice, even after the resource holding it was removed. `u64::MAX` is
	/// never issued; once the counter reaches it the store refuses new
	/// resources instead of wrapping around.
	pub fn add_resource(&mut self, input: ResourceInput) -> ClResult<ResourceId> {
		if self.next_resource_id == u64::MAX {
			warn!("Resource ids exhausted, not adding '{}'", input.title);
			return Err(Error::ValidationError("No resource ids left".into()));
		}
		let id = ResourceId(self.next_resource_id);
		self.next_resource_id += 1;

		info!("Adding resource {} '{}'", id, input.title);
		self.settings.resources.push(Resource::new(id, input));
		Ok(id)
	}

	/// Removes the resource with the given id
	///
	/// Returns false when there was nothing to remove.
	pub fn remove_resource(&mut self, id: ResourceId) -> bool {
		let before = self.settings.resources.len();
		self.settings.resources.retain(|resource| resource.id != id);
		let removed = self.settings.resources.len() != before;
		if removed {
			info!("Removed resource {}", id);
		} else {
			debug!("Resource {} not present, nothing to remove", id);
		}
		removed
	}

	pub fn is_authenticated(&self) -> bool {
		self.is_authenticated
	}

	/// Checks the credentials and marks the session authenticated
	///
	/// A rejected login leaves the current flag untouched.
	pub fn login(&mut self, credentials: &Credentials) -> ClResult<()> {
		let Some(admin) = &self.admin else {
			warn!("Login attempt for '{}' but no admin account is configured", credentials.username);
			return Err(Error::Unauthorized);
		};
		if !admin.verify(credentials) {
			warn!("Failed login attempt for '{}'", credentials.username);
			return Err(Error::Unauthorized);
		}

		info!("Admin '{}' logged in", admin.username());
		self.is_authenticated = true;
		Ok(())
	}

	pub fn logout(&mut self) {
		if self.is_authenticated {
			info!("Admin logged out");
		}
		self.is_authenticated = false;
	}

	/// Everything needed to restore the store later, except the session flag
	pub fn snapshot(&self) -> Snapshot {
		Snapshot { settings: self.settings.clone(), next_resource_id: self.next_resource_id }
	}
}

impl Default for SettingsStore {
	fn default() -> Self {
		Self::new(Settings::default())
	}
}


// vim: ts=4
