use crate::units::types::{LengthUnit, Unit};
use serde::Serialize;

/// Feet in one meter, as used by the two-unit meter/foot converter
pub const FEET_PER_METER: f64 = 3.28084;

/// A fixed set of units sharing the meter as base unit
#[derive(Debug, Serialize)]
pub struct UnitTable {
    pub name: &'static str,
    units: &'static [Unit],
    #[serde(skip)]
    default_from: Unit,
    #[serde(skip)]
    default_to: Unit,
}

const MILLIMETER: Unit = Unit::new(LengthUnit::Millimeter, 0.001);
const CENTIMETER: Unit = Unit::new(LengthUnit::Centimeter, 0.01);
const METER: Unit = Unit::new(LengthUnit::Meter, 1.0);
const KILOMETER: Unit = Unit::new(LengthUnit::Kilometer, 1000.0);
const INCH: Unit = Unit::new(LengthUnit::Inch, 0.0254);
const FOOT: Unit = Unit::new(LengthUnit::Foot, 0.3048);
const FOOT_BY_RATIO: Unit = Unit::new(LengthUnit::Foot, 1.0 / FEET_PER_METER);

/// Millimeters through kilometers plus inches and feet
pub static LENGTH: UnitTable = UnitTable {
    name: "length",
    units: &[MILLIMETER, CENTIMETER, METER, KILOMETER, INCH, FOOT],
    default_from: CENTIMETER,
    default_to: METER,
};

/// Meters and feet only
pub static METER_FOOT: UnitTable = UnitTable {
    name: "meter-foot",
    units: &[METER, FOOT_BY_RATIO],
    default_from: METER,
    default_to: FOOT_BY_RATIO,
};

/// Every table selectable by name
pub static TABLES: [&UnitTable; 2] = [&LENGTH, &METER_FOOT];

impl UnitTable {
    /// Look up a table by its name ("length" or "meter-foot")
    pub fn by_name(name: &str) -> Option<&'static UnitTable> {
        let name = name.trim();
        TABLES
            .iter()
            .copied()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn units(&self) -> &'static [Unit] {
        self.units
    }

    /// The entry for `kind`, if this table defines it
    pub fn unit(&self, kind: LengthUnit) -> Option<Unit> {
        self.units.iter().copied().find(|u| u.kind == kind)
    }

    /// Find a unit by label or symbol, case-insensitively ("Meter", "m", "FOOT")
    pub fn find(&self, name: &str) -> Option<Unit> {
        let name = name.trim();
        self.units.iter().copied().find(|u| {
            u.label().eq_ignore_ascii_case(name) || u.symbol().eq_ignore_ascii_case(name)
        })
    }

    pub fn contains(&self, unit: &Unit) -> bool {
        self.units.contains(unit)
    }

    /// Source and target selected before the user picks anything
    pub fn default_units(&self) -> (Unit, Unit) {
        (self.default_from, self.default_to)
    }
}
