use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        }
    }

    /// Key of the unit every factor in this category is relative to.
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Weight => "kg",
            Category::Temperature => "c",
        }
    }

    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length" => Ok(Category::Length),
            "weight" => Ok(Category::Weight),
            "temperature" | "temp" => Ok(Category::Temperature),
            other => Err(ToolError::malformed(format!("unknown category '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDef {
    pub key: &'static str,
    pub name: &'static str,
    /// Ratio to the category base unit. Unused for temperature.
    pub factor: f64,
    pub category: Category,
}

const fn unit(key: &'static str, name: &'static str, factor: f64, category: Category) -> UnitDef {
    UnitDef {
        key,
        name,
        factor,
        category,
    }
}

const LENGTH: &[UnitDef] = &[
    unit("km", "Kilometers", 1000.0, Category::Length),
    unit("m", "Meters", 1.0, Category::Length),
    unit("cm", "Centimeters", 0.01, Category::Length),
    unit("mm", "Millimeters", 0.001, Category::Length),
    unit("mi", "Miles", 1609.34, Category::Length),
    unit("ft", "Feet", 0.3048, Category::Length),
    unit("in", "Inches", 0.0254, Category::Length),
];

const WEIGHT: &[UnitDef] = &[
    unit("kg", "Kilograms", 1.0, Category::Weight),
    unit("g", "Grams", 0.001, Category::Weight),
    unit("lb", "Pounds", 0.453592, Category::Weight),
    unit("oz", "Ounces", 0.0283495, Category::Weight),
];

const TEMPERATURE: &[UnitDef] = &[
    unit("c", "Celsius", 1.0, Category::Temperature),
    unit("f", "Fahrenheit", 1.0, Category::Temperature),
    unit("k", "Kelvin", 1.0, Category::Temperature),
];

pub fn units_for(category: Category) -> &'static [UnitDef] {
    match category {
        Category::Length => LENGTH,
        Category::Weight => WEIGHT,
        Category::Temperature => TEMPERATURE,
    }
}

/// Look a unit key up across all categories. Keys are unique, so the
/// category falls out of the match. Temperature keys accept upper case
/// ("C", "F", "K") as well.
pub fn find_unit(key: &str) -> Option<&'static UnitDef> {
    let key = match key {
        "C" | "F" | "K" => key.to_ascii_lowercase(),
        _ => key.to_string(),
    };
    Category::ALL
        .iter()
        .flat_map(|c| units_for(*c).iter())
        .find(|u| u.key == key)
}
