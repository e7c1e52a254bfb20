//! The fixed input schema of the prediction pipeline.
//!
//! Wire names are identifier-safe (`Body_Type`); the fitted artifacts know the
//! same columns by their original labels (`Body Type`). [`FEATURE_SCHEMA`] is
//! the single renaming table between the two.

use serde::{Deserialize, Serialize};

/// Sentinel substituted for an absent categorical value before encoding.
pub const MISSING_CATEGORY: &str = "missing";

pub const FEATURE_COUNT: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Categorical,
    Numeric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    /// JSON key in requests and history snapshots
    pub wire_name: &'static str,
    /// Column label the artifacts were fitted with
    pub label: &'static str,
    pub kind: FeatureKind,
}

const fn categorical(wire_name: &'static str, label: &'static str) -> FeatureSpec {
    FeatureSpec {
        wire_name,
        label,
        kind: FeatureKind::Categorical,
    }
}

const fn numeric(wire_name: &'static str, label: &'static str) -> FeatureSpec {
    FeatureSpec {
        wire_name,
        label,
        kind: FeatureKind::Numeric,
    }
}

/// Canonical column order. Must match the field order of [`FeatureRecord`].
pub const FEATURE_SCHEMA: [FeatureSpec; FEATURE_COUNT] = [
    categorical("Body_Type", "Body Type"),
    categorical("Sex", "Sex"),
    categorical("Diet", "Diet"),
    categorical("How_Often_Shower", "How Often Shower"),
    categorical("Heating_Energy_Source", "Heating Energy Source"),
    categorical("Transport", "Transport"),
    categorical("Vehicle_Type", "Vehicle Type"),
    categorical("Social_Activity", "Social Activity"),
    numeric("Monthly_Grocery_Bill", "Monthly Grocery Bill"),
    categorical(
        "Frequency_of_Traveling_by_Air",
        "Frequency of Traveling by Air",
    ),
    numeric("Vehicle_Monthly_Distance_Km", "Vehicle Monthly Distance Km"),
    categorical("Waste_Bag_Size", "Waste Bag Size"),
    numeric("Waste_Bag_Weekly_Count", "Waste Bag Weekly Count"),
    numeric("How_Long_TV_PC_Daily_Hour", "How Long TV PC Daily Hour"),
    numeric("How_Many_New_Clothes_Monthly", "How Many New Clothes Monthly"),
    numeric("How_Long_Internet_Daily_Hour", "How Long Internet Daily Hour"),
    categorical("Energy_efficiency", "Energy efficiency"),
    numeric("Recycle_Plastic", "Recycle_Plastic"),
    numeric("Recycle_Glass", "Recycle_Glass"),
    numeric("Recycle_Paper", "Recycle_Paper"),
    numeric("Recycle_Metal", "Recycle_Metal"),
    numeric("Cook_Oven", "Cook_Oven"),
    numeric("Cook_Airfryer", "Cook_Airfryer"),
    numeric("Cook_Grill", "Cook_Grill"),
    numeric("Cook_Microwave", "Cook_Microwave"),
    numeric("Cook_Stove", "Cook_Stove"),
];

impl FeatureSpec {
    /// Look up a column by its artifact label
    pub fn by_label(label: &str) -> Option<(usize, &'static FeatureSpec)> {
        FEATURE_SCHEMA
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.label == label)
    }
}

/// A single field value, borrowed from a [`FeatureRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Category(Option<&'a str>),
    Number(f64),
}

impl<'a> FeatureValue<'a> {
    /// Category string with absent values replaced by [`MISSING_CATEGORY`].
    /// `None` for numeric values.
    pub fn category_or_missing(&self) -> Option<&'a str> {
        match self {
            Self::Category(value) => Some(value.unwrap_or(MISSING_CATEGORY)),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Category(_) => None,
        }
    }
}

/// Lifestyle answers submitted for a carbon footprint estimate.
///
/// Every field is required except `vehicle_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "Body_Type")]
    pub body_type: String,
    #[serde(rename = "Sex")]
    pub sex: String,
    #[serde(rename = "Diet")]
    pub diet: String,
    #[serde(rename = "How_Often_Shower")]
    pub how_often_shower: String,
    #[serde(rename = "Heating_Energy_Source")]
    pub heating_energy_source: String,
    #[serde(rename = "Transport")]
    pub transport: String,
    #[serde(rename = "Vehicle_Type", default)]
    pub vehicle_type: Option<String>,
    #[serde(rename = "Social_Activity")]
    pub social_activity: String,
    #[serde(rename = "Monthly_Grocery_Bill")]
    pub monthly_grocery_bill: f64,
    #[serde(rename = "Frequency_of_Traveling_by_Air")]
    pub frequency_of_traveling_by_air: String,
    #[serde(rename = "Vehicle_Monthly_Distance_Km")]
    pub vehicle_monthly_distance_km: f64,
    #[serde(rename = "Waste_Bag_Size")]
    pub waste_bag_size: String,
    #[serde(rename = "Waste_Bag_Weekly_Count")]
    pub waste_bag_weekly_count: i64,
    #[serde(rename = "How_Long_TV_PC_Daily_Hour")]
    pub how_long_tv_pc_daily_hour: f64,
    #[serde(rename = "How_Many_New_Clothes_Monthly")]
    pub how_many_new_clothes_monthly: i64,
    #[serde(rename = "How_Long_Internet_Daily_Hour")]
    pub how_long_internet_daily_hour: f64,
    #[serde(rename = "Energy_efficiency")]
    pub energy_efficiency: String,
    #[serde(rename = "Recycle_Plastic")]
    pub recycle_plastic: i64,
    #[serde(rename = "Recycle_Glass")]
    pub recycle_glass: i64,
    #[serde(rename = "Recycle_Paper")]
    pub recycle_paper: i64,
    #[serde(rename = "Recycle_Metal")]
    pub recycle_metal: i64,
    #[serde(rename = "Cook_Oven")]
    pub cook_oven: i64,
    #[serde(rename = "Cook_Airfryer")]
    pub cook_airfryer: i64,
    #[serde(rename = "Cook_Grill")]
    pub cook_grill: i64,
    #[serde(rename = "Cook_Microwave")]
    pub cook_microwave: i64,
    #[serde(rename = "Cook_Stove")]
    pub cook_stove: i64,
}

impl FeatureRecord {
    /// All values in [`FEATURE_SCHEMA`] order
    pub fn values(&self) -> [FeatureValue<'_>; FEATURE_COUNT] {
        use FeatureValue::{Category, Number};

        [
            Category(Some(&self.body_type)),
            Category(Some(&self.sex)),
            Category(Some(&self.diet)),
            Category(Some(&self.how_often_shower)),
            Category(Some(&self.heating_energy_source)),
            Category(Some(&self.transport)),
            Category(self.vehicle_type.as_deref()),
            Category(Some(&self.social_activity)),
            Number(self.monthly_grocery_bill),
            Category(Some(&self.frequency_of_traveling_by_air)),
            Number(self.vehicle_monthly_distance_km),
            Category(Some(&self.waste_bag_size)),
            Number(self.waste_bag_weekly_count as f64),
            Number(self.how_long_tv_pc_daily_hour),
            Number(self.how_many_new_clothes_monthly as f64),
            Number(self.how_long_internet_daily_hour),
            Category(Some(&self.energy_efficiency)),
            Number(self.recycle_plastic as f64),
            Number(self.recycle_glass as f64),
            Number(self.recycle_paper as f64),
            Number(self.recycle_metal as f64),
            Number(self.cook_oven as f64),
            Number(self.cook_airfryer as f64),
            Number(self.cook_grill as f64),
            Number(self.cook_microwave as f64),
            Number(self.cook_stove as f64),
        ]
    }

    /// JSON snapshot stored alongside a history entry
    pub fn to_details_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
