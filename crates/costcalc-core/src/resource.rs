//! Downloadable resources managed from the admin panel

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
	#[default]
	Pdf,
	Document,
	Spreadsheet,
	Image,
	Other,
}

impl ResourceType {
	pub fn as_str(self) -> &'static str {
		match self {
			ResourceType::Pdf => "pdf",
			ResourceType::Document => "document",
			ResourceType::Spreadsheet => "spreadsheet",
			ResourceType::Image => "image",
			ResourceType::Other => "other",
		}
	}
}

impl std::str::FromStr for ResourceType {
	type Err = Error;

	fn from_str(s: &str) -> ClResult<Self> {
		match s {
			"pdf" => Ok(ResourceType::Pdf),
			"document" => Ok(ResourceType::Document),
			"spreadsheet" => Ok(ResourceType::Spreadsheet),
			"image" => Ok(ResourceType::Image),
			"other" => Ok(ResourceType::Other),
			_ => Err(Error::ValidationError(format!("Unknown resource type: {}", s))),
		}
	}
}

/// Resource fields supplied by the caller; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInput {
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub category: String,
	#[serde(rename = "type", default)]
	pub resource_type: ResourceType,
	pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
	pub id: ResourceId,
	pub title: String,
	pub description: String,
	pub category: String,
	#[serde(rename = "type")]
	pub resource_type: ResourceType,
	pub url: String,
}

impl Resource {
	pub fn new(id: ResourceId, input: ResourceInput) -> Self {
		Self {
			id,
			title: input.title,
			description: input.description,
			category: input.category,
			resource_type: input.resource_type,
			url: input.url,
		}
	}
}


// vim: ts=4
