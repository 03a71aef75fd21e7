// Length conversion routed through meters as the common base unit

pub mod detector;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use detector::{looks_like_number, parse_numeric};
pub use engine::{ConversionEngine, ConversionResult};
pub use error::{ConvertError, INVALID_INPUT_MESSAGE};
pub use formatter::{format_value, format_with_label};
pub use table::{UnitTable, LENGTH, METER_FOOT, TABLES};
pub use types::{Conversion, ConversionRequest, LengthUnit, Unit};
