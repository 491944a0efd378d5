//! Partial settings updates
//!
//! Every nesting level has its own patch type and its own merge step:
//! - scalar fields present in the patch overwrite the stored value
//! - absent fields keep their value
//! - factor table patches touch only the tiers they name
//!
//! No range checks happen here; zero and negative values are stored as given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::factors::{FactorTable, FactorTablePatch, LocationTier, QualityTier, Tier};
use super::types::{Assumptions, Settings};

/// One leaf written by a merge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
	/// Dotted path using the serialized field names, e.g. `assumptions.doorCost`
	pub path: String,
	pub old: f64,
	pub new: f64,
}

/// Partial update of [`Settings`]
///
/// Resources and the authentication flag are not part of it: they change only
/// through their own store operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_per_sq_ft: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labor_cost_per_day: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub brick_price: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cement_price: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub steel_price: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub plumbing_cost_per_sq_ft: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub electrical_cost_per_sq_ft: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub assumptions: Option<AssumptionsPatch>,
}

/// Partial update of [`Assumptions`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AssumptionsPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_plot_size: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub built_up_area_factor: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub large_plot_factor: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub material_cost_factor: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labor_cost_factor: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub full_escape_premium: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub window_cost: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub door_cost: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bricks_per_sq_ft: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cement_bags_per_sq_ft: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub steel_per_sq_ft: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labor_productivity_per_day: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timeline_base_cost: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timeline_factor_per_month: Option<f64>,
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub quality_factors: FactorTablePatch<QualityTier>,
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub location_factors: FactorTablePatch<LocationTier>,
}

impl SettingsPatch {
	/// Patch touching only the assumptions
	pub fn assumptions(patch: AssumptionsPatch) -> Self {
		Self { assumptions: Some(patch), ..Default::default() }
	}
}

fn merge_leaf(changes: &mut Vec<FieldChange>, path: &str, target: &mut f64, value: Option<f64>) {
	if let Some(new) = value {
		let old = std::mem::replace(target, new);
		changes.push(FieldChange { path: path.to_string(), old, new });
	}
}

fn merge_table<K: Tier>(
	changes: &mut Vec<FieldChange>,
	prefix: &str,
	table: &mut FactorTable<K>,
	patch: &FactorTablePatch<K>,
) {
	for (&tier, &new) in patch {
		let old = table.set(tier, new);
		changes.push(FieldChange { path: format!("{}.{}", prefix, tier.name()), old, new });
	}
}

impl Settings {
	/// Merges `patch` into the settings and returns the leaves written
	pub fn apply(&mut self, patch: &SettingsPatch) -> Vec<FieldChange> {
		let mut changes = Vec::new();
		let c = &mut changes;
		merge_leaf(c, "pricePerSqFt", &mut self.price_per_sq_ft, patch.price_per_sq_ft);
		merge_leaf(c, "laborCostPerDay", &mut self.labor_cost_per_day, patch.labor_cost_per_day);
		merge_leaf(c, "brickPrice", &mut self.brick_price, patch.brick_price);
		merge_leaf(c, "cementPrice", &mut self.cement_price, patch.cement_price);
		merge_leaf(c, "steelPrice", &mut self.steel_price, patch.steel_price);
		merge_leaf(
			c,
			"plumbingCostPerSqFt",
			&mut self.plumbing_cost_per_sq_ft,
			patch.plumbing_cost_per_sq_ft,
		);
		merge_leaf(
			c,
			"electricalCostPerSqFt",
			&mut self.electrical_cost_per_sq_ft,
			patch.electrical_cost_per_sq_ft,
		);
		if let Some(assumptions) = &patch.assumptions {
			self.assumptions.merge_into(c, assumptions);
		}
		changes
	}
}

impl Assumptions {
	/// Merges `patch` into the assumptions and returns the leaves written
	pub fn apply(&mut self, patch: &AssumptionsPatch) -> Vec<FieldChange> {
		let mut changes = Vec::new();
		self.merge_into(&mut changes, patch);
		changes
	}

	fn merge_into(&mut self, c: &mut Vec<FieldChange>, patch: &AssumptionsPatch) {
		let a = self;
		merge_leaf(c, "assumptions.defaultPlotSize", &mut a.default_plot_size, patch.default_plot_size);
		merge_leaf(
			c,
			"assumptions.builtUpAreaFactor",
			&mut a.built_up_area_factor,
			patch.built_up_area_factor,
		);
		merge_leaf(c, "assumptions.largePlotFactor", &mut a.large_plot_factor, patch.large_plot_factor);
		merge_leaf(
			c,
			"assumptions.materialCostFactor",
			&mut a.material_cost_factor,
			patch.material_cost_factor,
		);
		merge_leaf(c, "assumptions.laborCostFactor", &mut a.labor_cost_factor, patch.labor_cost_factor);
		merge_leaf(
			c,
			"assumptions.fullEscapePremium",
			&mut a.full_escape_premium,
			patch.full_escape_premium,
		);
		merge_leaf(c, "assumptions.windowCost", &mut a.window_cost, patch.window_cost);
		merge_leaf(c, "assumptions.doorCost", &mut a.door_cost, patch.door_cost);
		merge_leaf(c, "assumptions.bricksPerSqFt", &mut a.bricks_per_sq_ft, patch.bricks_per_sq_ft);
		merge_leaf(
			c,
			"assumptions.cementBagsPerSqFt",
			&mut a.cement_bags_per_sq_ft,
			patch.cement_bags_per_sq_ft,
		);
		merge_leaf(c, "assumptions.steelPerSqFt", &mut a.steel_per_sq_ft, patch.steel_per_sq_ft);
		merge_leaf(
			c,
			"assumptions.laborProductivityPerDay",
			&mut a.labor_productivity_per_day,
			patch.labor_productivity_per_day,
		);
		merge_leaf(
			c,
			"assumptions.timelineBaseCost",
			&mut a.timeline_base_cost,
			patch.timeline_base_cost,
		);
		merge_leaf(
			c,
			"assumptions.timelineFactorPerMonth",
			&mut a.timeline_factor_per_month,
			patch.timeline_factor_per_month,
		);
		merge_table(c, "assumptions.qualityFactors", &mut a.quality_factors, &patch.quality_factors);
		merge_table(c, "assumptions.locationFactors", &mut a.location_factors, &patch.location_factors);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_empty_patch_changes_nothing() {
		let mut settings = Settings::default();
		let changes = settings.apply(&SettingsPatch::default());
		assert!(changes.is_empty());
		assert_eq!(settings, Settings::default());
	}

	#[test]
	fn test_top_level_field() {
		let mut settings = Settings::default();
		let changes =
			settings.apply(&SettingsPatch { brick_price: Some(9.5), ..Default::default() });

		assert_eq!(settings.brick_price, 9.5);
		assert_eq!(
			changes,
			vec![FieldChange { path: "brickPrice".into(), old: 8.0, new: 9.5 }]
		);

		let mut expected = Settings::default();
		expected.brick_price = 9.5;
		assert_eq!(settings, expected);
	}

	#[test]
	fn test_nested_field_keeps_siblings_and_tables() {
		let mut settings = Settings::default();
		settings.apply(&SettingsPatch::assumptions(AssumptionsPatch {
			door_cost: Some(15_000.0),
			..Default::default()
		}));

		let defaults = Assumptions::default();
		assert_eq!(settings.assumptions.door_cost, 15_000.0);
		assert_eq!(settings.assumptions.window_cost, defaults.window_cost);
		assert_eq!(settings.assumptions.quality_factors, defaults.quality_factors);
		assert_eq!(settings.assumptions.location_factors, defaults.location_factors);
	}

	#[test]
	fn test_single_table_key() {
		let mut assumptions = Assumptions::default();
		let changes = assumptions.apply(&AssumptionsPatch {
			location_factors: BTreeMap::from([(LocationTier::Rural, 0.85)]),
			..Default::default()
		});

		assert_eq!(changes.len(), 1);
		assert_eq!(changes[0].path, "assumptions.locationFactors.rural");
		assert_eq!(assumptions.location_factors.get(LocationTier::Rural), 0.85);
		assert_eq!(assumptions.location_factors.get(LocationTier::Urban), 1.2);
		assert_eq!(assumptions.location_factors.get(LocationTier::Suburban), 1.0);
	}

	#[test]
	fn test_negative_and_zero_are_accepted() {
		let mut settings = Settings::default();
		settings.apply(&SettingsPatch {
			steel_price: Some(-5.0),
			cement_price: Some(0.0),
			..Default::default()
		});
		assert_eq!(settings.steel_price, -5.0);
		assert_eq!(settings.cement_price, 0.0);
	}

	#[test]
	fn test_deserialize_nested_patch() {
		let patch: SettingsPatch = serde_json::from_value(json!({
			"laborCostPerDay": 750,
			"assumptions": { "qualityFactors": { "premium": 1.6 } }
		}))
		.unwrap();

		assert_eq!(patch.labor_cost_per_day, Some(750.0));
		let assumptions = patch.assumptions.unwrap();
		assert_eq!(assumptions.quality_factors.get(&QualityTier::Premium), Some(&1.6));
		assert!(assumptions.location_factors.is_empty());
		assert_eq!(assumptions.door_cost, None);
	}

	#[test]
	fn test_deserialize_rejects_unknown_fields() {
		let res: Result<SettingsPatch, _> = serde_json::from_value(json!({ "pricePerSqM": 10 }));
		assert!(res.is_err());

		let res: Result<SettingsPatch, _> =
			serde_json::from_value(json!({ "resources": [], "isAuthenticated": true }));
		assert!(res.is_err());
	}

	#[test]
	fn test_serialize_skips_absent_fields() {
		let patch = SettingsPatch::assumptions(AssumptionsPatch {
			quality_factors: BTreeMap::from([(QualityTier::Basic, 0.9)]),
			..Default::default()
		});
		assert_eq!(
			serde_json::to_value(&patch).unwrap(),
			json!({ "assumptions": { "qualityFactors": { "basic": 0.9 } } })
		);
	}
}

// vim: ts=4
