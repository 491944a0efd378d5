//! Construction cost estimate derived from the stored assumptions
//!
//! All amounts are in the same currency as the configured prices. The
//! estimate is itemized so the calculator page can show each component.

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::settings::{LocationTier, QualityTier, Settings};

pub const SQ_FT_PER_SQ_YARD: f64 = 9.0;
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimateRequest {
	/// Plot size in sq. yards, the configured default when absent
	pub plot_size: Option<f64>,
	pub quality: QualityTier,
	pub location: LocationTier,
	pub floors: u32,
	pub windows: u32,
	pub doors: u32,
	pub full_escape: bool,
}

impl Default for EstimateRequest {
	fn default() -> Self {
		Self {
			plot_size: None,
			quality: QualityTier::default(),
			location: LocationTier::default(),
			floors: 1,
			windows: 0,
			doors: 0,
			full_escape: false,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
	pub plot_size: f64,
	/// Built-up area in sq. ft
	pub built_up_area: f64,
	pub construction_cost: f64,
	pub material_cost: f64,
	pub labor_days: f64,
	pub labor_cost: f64,
	pub services_cost: f64,
	pub fittings_cost: f64,
	pub quality_factor: f64,
	pub location_factor: f64,
	pub subtotal: f64,
	pub full_escape_premium: f64,
	pub timeline_months: u32,
	pub timeline_cost: f64,
	pub total: f64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn months(labor_days: f64) -> u32 {
	(labor_days / DAYS_PER_MONTH).ceil() as u32
}

pub fn estimate(settings: &Settings, req: &EstimateRequest) -> ClResult<Estimate> {
	let a = &settings.assumptions;

	let plot_size = req.plot_size.unwrap_or(a.default_plot_size);
	if !plot_size.is_finite() || plot_size <= 0.0 {
		return Err(Error::ValidationError(format!("Invalid plot size: {}", plot_size)));
	}
	if req.floors == 0 {
		return Err(Error::ValidationError("At least one floor is required".into()));
	}

	let mut built_up_area =
		plot_size * SQ_FT_PER_SQ_YARD * a.built_up_area_factor * f64::from(req.floors);
	if plot_size > a.default_plot_size {
		built_up_area *= a.large_plot_factor;
	}

	let construction_cost = built_up_area * settings.price_per_sq_ft;

	let material_per_sq_ft = a.bricks_per_sq_ft * settings.brick_price
		+ a.cement_bags_per_sq_ft * settings.cement_price
		+ a.steel_per_sq_ft * settings.steel_price;
	let material_cost = built_up_area * material_per_sq_ft * a.material_cost_factor;

	let labor_days = if a.labor_productivity_per_day > 0.0 {
		built_up_area / a.labor_productivity_per_day
	} else {
		0.0
	};
	let labor_cost = labor_days * settings.labor_cost_per_day * a.labor_cost_factor;

	let services_cost =
		built_up_area * (settings.plumbing_cost_per_sq_ft + settings.electrical_cost_per_sq_ft);
	let fittings_cost =
		f64::from(req.windows) * a.window_cost + f64::from(req.doors) * a.door_cost;

	let quality_factor = a.quality_factors.get(req.quality);
	let location_factor = a.location_factors.get(req.location);
	let subtotal = (construction_cost + material_cost + labor_cost + services_cost + fittings_cost)
		* quality_factor
		* location_factor;

	let full_escape_premium = if req.full_escape { subtotal * a.full_escape_premium } else { 0.0 };

	let timeline_months = months(labor_days);
	let timeline_cost =
		a.timeline_base_cost * (1.0 + a.timeline_factor_per_month * f64::from(timeline_months));

	let total = subtotal + full_escape_premium + timeline_cost;
	debug!(
		"Estimate: plot={} area={} quality={:?} location={:?} total={}",
		plot_size, built_up_area, req.quality, req.location, total
	);

	Ok(Estimate {
		plot_size,
		built_up_area,
		construction_cost,
		material_cost,
		labor_days,
		labor_cost,
		services_cost,
		fittings_cost,
		quality_factor,
		location_factor,
		subtotal,
		full_escape_premium,
		timeline_months,
		timeline_cost,
		total,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::{AssumptionsPatch, SettingsPatch};

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-3
	}

	#[test]
	fn test_default_plot() {
		let est = estimate(&Settings::default(), &EstimateRequest::default()).unwrap();

		assert!(close(est.plot_size, 120.0));
		assert!(close(est.built_up_area, 864.0));
		assert!(close(est.construction_cost, 1_555_200.0));
		assert!(close(est.material_cost, 435_456.0));
		assert!(close(est.labor_days, 17.28));
		assert!(close(est.labor_cost, 12_096.0));
		assert!(close(est.services_cost, 233_280.0));
		assert!(close(est.fittings_cost, 0.0));
		assert!(close(est.subtotal, 2_683_238.4));
		assert_eq!(est.timeline_months, 1);
		assert!(close(est.timeline_cost, 51_000.0));
		assert!(close(est.total, 2_734_238.4));
	}

	#[test]
	fn test_large_plot_factor() {
		let req = EstimateRequest { plot_size: Some(240.0), ..Default::default() };
		let est = estimate(&Settings::default(), &req).unwrap();
		assert!(close(est.built_up_area, 240.0 * 9.0 * 0.8 * 0.95));
	}

	#[test]
	fn test_tiers_fittings_and_premium() {
		let req = EstimateRequest {
			quality: QualityTier::Premium,
			location: LocationTier::Urban,
			windows: 4,
			doors: 2,
			full_escape: true,
			..Default::default()
		};
		let est = estimate(&Settings::default(), &req).unwrap();

		assert!(close(est.quality_factor, 1.5));
		assert!(close(est.location_factor, 1.2));
		assert!(close(est.fittings_cost, 4.0 * 8_000.0 + 2.0 * 12_000.0));
		assert!(close(est.full_escape_premium, est.subtotal * 0.15));
		assert!(close(est.total, est.subtotal + est.full_escape_premium + est.timeline_cost));
	}

	#[test]
	fn test_follows_updated_settings() {
		let mut settings = Settings::default();
		let before = estimate(&settings, &EstimateRequest::default()).unwrap();
		settings.apply(&SettingsPatch::assumptions(AssumptionsPatch {
			quality_factors: [(QualityTier::Standard, 2.4)].into(),
			..Default::default()
		}));
		let after = estimate(&settings, &EstimateRequest::default()).unwrap();
		assert!(close(after.subtotal, before.subtotal * 2.0));
	}

	#[test]
	fn test_zero_productivity() {
		let mut settings = Settings::default();
		settings.assumptions.labor_productivity_per_day = 0.0;
		let est = estimate(&settings, &EstimateRequest::default()).unwrap();
		assert!(close(est.labor_days, 0.0));
		assert_eq!(est.timeline_months, 0);
		assert!(close(est.timeline_cost, 50_000.0));
	}

	#[test]
	fn test_invalid_requests() {
		let settings = Settings::default();
		let req = EstimateRequest { plot_size: Some(0.0), ..Default::default() };
		assert!(matches!(estimate(&settings, &req), Err(Error::ValidationError(_))));

		let req = EstimateRequest { plot_size: Some(f64::NAN), ..Default::default() };
		assert!(estimate(&settings, &req).is_err());

		let req = EstimateRequest { floors: 0, ..Default::default() };
		assert!(estimate(&settings, &req).is_err());
	}
}

// vim: ts=4
