//! Factor tables keyed by a closed set of tiers
//!
//! Tiers are declared once as enums. A table always holds a multiplier for
//! every tier of its kind and iterates in declaration order. Tables cannot
//! grow: an update naming an unknown tier fails to deserialize.

use serde::{
	Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned, de::Error as _,
	ser::SerializeMap,
};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A closed, pre-declared set of tier names
pub trait Tier: Copy + Ord + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
	/// All tiers, in declaration order
	const ALL: &'static [Self];

	fn name(self) -> &'static str;
}

#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
	Basic,
	#[default]
	Standard,
	Premium,
}

impl Tier for QualityTier {
	const ALL: &'static [Self] = &[QualityTier::Basic, QualityTier::Standard, QualityTier::Premium];

	fn name(self) -> &'static str {
		match self {
			QualityTier::Basic => "basic",
			QualityTier::Standard => "standard",
			QualityTier::Premium => "premium",
		}
	}
}

#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LocationTier {
	Urban,
	#[default]
	Suburban,
	Rural,
}

impl Tier for LocationTier {
	const ALL: &'static [Self] = &[LocationTier::Urban, LocationTier::Suburban, LocationTier::Rural];

	fn name(self) -> &'static str {
		match self {
			LocationTier::Urban => "urban",
			LocationTier::Suburban => "suburban",
			LocationTier::Rural => "rural",
		}
	}
}

/// Partial update of a factor table: only the listed tiers change
pub type FactorTablePatch<K> = BTreeMap<K, f64>;

/// Multiplier per tier. Every tier of `K` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable<K: Tier> {
	factors: BTreeMap<K, f64>,
}

impl<K: Tier> FactorTable<K> {
	/// Builds a complete table by asking `f` for every tier
	pub fn from_fn(f: impl Fn(K) -> f64) -> Self {
		Self { factors: K::ALL.iter().map(|&tier| (tier, f(tier))).collect() }
	}

	pub fn get(&self, tier: K) -> f64 {
		// Completeness is guaranteed by every constructor
		self.factors.get(&tier).copied().unwrap_or(1.0)
	}

	/// Overwrites one tier, returning the previous multiplier
	pub fn set(&mut self, tier: K, value: f64) -> f64 {
		self.factors.insert(tier, value).unwrap_or(1.0)
	}

	/// Tiers with their multipliers, in declaration order
	pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
		self.factors.iter().map(|(&tier, &value)| (tier, value))
	}

	pub fn len(&self) -> usize {
		self.factors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.factors.is_empty()
	}
}

impl<K: Tier> Serialize for FactorTable<K> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.factors.len()))?;
		for (tier, value) in self.iter() {
			map.serialize_entry(tier.name(), &value)?;
		}
		map.end()
	}
}

impl<'de, K: Tier> Deserialize<'de> for FactorTable<K> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let factors = BTreeMap::<K, f64>::deserialize(deserializer)?;
		if let Some(missing) = K::ALL.iter().find(|tier| !factors.contains_key(tier)) {
			return Err(D::Error::custom(format!("missing factor for tier '{}'", missing.name())));
		}
		Ok(Self { factors })
	}
}


// vim: ts=4
