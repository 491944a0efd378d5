//! Admin panel models: the "new resource" draft and the panel tabs

use serde::Serialize;

use costcalc_types::blob_adapter::UploadHandle;

use crate::prelude::*;
use crate::resource::{ResourceInput, ResourceType};
use crate::store::SettingsStore;

/// Local state of the "Add New Resource" form
///
/// Lives outside the store until the operator confirms creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceDraft {
	pub title: String,
	pub description: String,
	pub category: String,
	pub resource_type: ResourceType,
	pub file: Option<UploadHandle>,
}

impl ResourceDraft {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn select_file(&mut self, file: UploadHandle) {
		self.file = Some(file);
	}

	/// A resource needs a title and an uploaded file
	///
	/// Unlike the browser form, a title made only of whitespace does not count.
	pub fn can_submit(&self) -> bool {
		!self.title.trim().is_empty() && self.file.is_some()
	}

	/// Adds the drafted resource to the store and clears the draft
	///
	/// Returns `Ok(None)` and leaves everything as is while `can_submit` is
	/// false. The draft is kept when the store refuses the resource.
	pub fn submit(&mut self, store: &mut SettingsStore) -> ClResult<Option<ResourceId>> {
		let Some(file) = self.file.as_ref().filter(|_| self.can_submit()) else {
			debug!("Resource draft incomplete, not submitting");
			return Ok(None);
		};

		let id = store.add_resource(ResourceInput {
			title: self.title.clone(),
			description: self.description.clone(),
			category: self.category.clone(),
			resource_type: self.resource_type,
			url: file.url.to_string(),
		})?;
		self.clear();
		Ok(Some(id))
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
	Calculators,
	Pricing,
	Factors,
	Resources,
}

impl AdminTab {
	pub const ALL: [AdminTab; 4] =
		[AdminTab::Calculators, AdminTab::Pricing, AdminTab::Factors, AdminTab::Resources];

	pub fn label(self) -> &'static str {
		match self {
			AdminTab::Calculators => "Calculators",
			AdminTab::Pricing => "Pricing",
			AdminTab::Factors => "Factors",
			AdminTab::Resources => "Resources",
		}
	}
}


// vim: ts=4
