//! Settings record and its built-in defaults

use serde::{Deserialize, Serialize};

use super::factors::{FactorTable, LocationTier, QualityTier};
use crate::resource::Resource;

/// Plot size the calculator starts from when none is given (sq. yards)
pub const DEFAULT_PLOT_SIZE: f64 = 120.0;

/// Numeric multipliers and per-unit costs used to derive an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
	/// Plot size in sq. yards
	pub default_plot_size: f64,
	/// Built-up area per sq. ft of plot
	pub built_up_area_factor: f64,
	/// Area multiplier for plots above the default size
	pub large_plot_factor: f64,
	pub material_cost_factor: f64,
	pub labor_cost_factor: f64,
	/// Fractional premium for a full escape (turnkey) finish
	pub full_escape_premium: f64,
	pub window_cost: f64,
	pub door_cost: f64,
	pub bricks_per_sq_ft: f64,
	pub cement_bags_per_sq_ft: f64,
	/// Steel in kg per sq. ft
	pub steel_per_sq_ft: f64,
	/// Sq. ft completed per labor day
	pub labor_productivity_per_day: f64,
	pub timeline_base_cost: f64,
	pub timeline_factor_per_month: f64,
	pub quality_factors: FactorTable<QualityTier>,
	pub location_factors: FactorTable<LocationTier>,
}

impl Default for Assumptions {
	fn default() -> Self {
		Self {
			default_plot_size: DEFAULT_PLOT_SIZE,
			built_up_area_factor: 0.8,
			large_plot_factor: 0.95,
			material_cost_factor: 1.0,
			labor_cost_factor: 1.0,
			full_escape_premium: 0.15,
			window_cost: 8_000.0,
			door_cost: 12_000.0,
			bricks_per_sq_ft: 8.0,
			cement_bags_per_sq_ft: 0.4,
			steel_per_sq_ft: 4.0,
			labor_productivity_per_day: 50.0,
			timeline_base_cost: 50_000.0,
			timeline_factor_per_month: 0.02,
			quality_factors: FactorTable::from_fn(|tier| match tier {
				QualityTier::Basic => 1.0,
				QualityTier::Standard => 1.2,
				QualityTier::Premium => 1.5,
			}),
			location_factors: FactorTable::from_fn(|tier| match tier {
				LocationTier::Urban => 1.2,
				LocationTier::Suburban => 1.0,
				LocationTier::Rural => 0.9,
			}),
		}
	}
}

/// The whole mutable configuration edited from the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
	pub price_per_sq_ft: f64,
	pub labor_cost_per_day: f64,
	/// Price per brick
	pub brick_price: f64,
	/// Price per cement bag
	pub cement_price: f64,
	/// Price per kg of steel
	pub steel_price: f64,
	pub plumbing_cost_per_sq_ft: f64,
	pub electrical_cost_per_sq_ft: f64,
	pub assumptions: Assumptions,
	#[serde(default)]
	pub resources: Vec<Resource>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			price_per_sq_ft: 1_800.0,
			labor_cost_per_day: 700.0,
			brick_price: 8.0,
			cement_price: 400.0,
			steel_price: 70.0,
			plumbing_cost_per_sq_ft: 150.0,
			electrical_cost_per_sq_ft: 120.0,
			assumptions: Assumptions::default(),
			resources: Vec::new(),
		}
	}
}


// vim: ts=4
