use serde::Serialize;
use std::fmt;

use crate::units::formatter::{format_value, format_with_label};

/// Identifies a length unit independently of the table it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
}

impl LengthUnit {
    /// Display label used in rendered results (e.g. "Meter")
    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "Millimeter",
            LengthUnit::Centimeter => "Centimeter",
            LengthUnit::Meter => "Meter",
            LengthUnit::Kilometer => "Kilometer",
            LengthUnit::Inch => "Inch",
            LengthUnit::Foot => "Foot",
        }
    }

    /// Short symbol accepted on the command line (e.g. "m")
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit as defined by a table: its kind plus how many meters one of it equals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub kind: LengthUnit,
    pub scale_to_base: f64,
}

impl Unit {
    pub const fn new(kind: LengthUnit, scale_to_base: f64) -> Self {
        Self {
            kind,
            scale_to_base,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn symbol(&self) -> &'static str {
        self.kind.symbol()
    }
}

/// A single conversion attempt with an already-parsed value
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    pub fn new(value: f64, from: Unit, to: Unit) -> Self {
        Self { value, from, to }
    }

    /// Route the value through meters into the target unit
    pub fn evaluate(&self) -> Conversion {
        let base_value = self.value * self.from.scale_to_base;
        Conversion {
            value: base_value / self.to.scale_to_base,
            unit: self.to,
        }
    }
}

/// Successful outcome of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    /// Unrounded value in the target unit
    pub value: f64,
    pub unit: Unit,
}

impl Conversion {
    /// Value rendered with exactly four fractional digits
    pub fn formatted_value(&self) -> String {
        format_value(self.value)
    }

    pub fn label(&self) -> &'static str {
        self.unit.label()
    }

    /// The `(formatted value, unit label)` pair handed to the UI shell
    pub fn parts(&self) -> (String, &'static str) {
        (self.formatted_value(), self.label())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_with_label(self.value, self.label()))
    }
}
