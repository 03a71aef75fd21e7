use crate::units::detector::parse_numeric;
use crate::units::error::ConvertError;
use crate::units::table::{UnitTable, LENGTH};
use crate::units::types::{Conversion, ConversionRequest, Unit};

/// Outcome of converting raw user input
pub type ConversionResult = Result<Conversion, ConvertError>;

/// Converts text input between the units of one table
#[derive(Debug, Clone, Copy)]
pub struct ConversionEngine {
    table: &'static UnitTable,
}

impl ConversionEngine {
    pub fn new(table: &'static UnitTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'static UnitTable {
        self.table
    }

    /// Source and target used when nothing has been selected yet
    pub fn default_units(&self) -> (Unit, Unit) {
        self.table.default_units()
    }

    /// Parse `raw` and convert it from `from` to `to` via meters.
    /// Unparsable text yields `InvalidNumericInput`; blank text is not zero.
    pub fn convert(&self, raw: &str, from: Unit, to: Unit) -> ConversionResult {
        let value = match parse_numeric(raw) {
            Some(v) => v,
            None => {
                tracing::debug!(input = raw, "rejected non-numeric input");
                return Err(ConvertError::InvalidNumericInput);
            }
        };

        let conversion = ConversionRequest::new(value, from, to).evaluate();
        if !conversion.value.is_finite() {
            tracing::debug!(input = raw, from = from.label(), to = to.label(), "result out of range");
            return Err(ConvertError::InvalidNumericInput);
        }

        tracing::debug!(
            value,
            from = from.label(),
            to = to.label(),
            result = conversion.value,
            "converted"
        );
        Ok(conversion)
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new(&LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::table::METER_FOOT;
    use crate::units::types::LengthUnit;

    fn unit(kind: LengthUnit) -> Unit {
        LENGTH.unit(kind).unwrap()
    }

    #[test]
    fn test_convert_simple() {
        let engine = ConversionEngine::default();
        let result = engine
            .convert("250", unit(LengthUnit::Millimeter), unit(LengthUnit::Centimeter))
            .unwrap();
        assert_eq!(result.to_string(), "25.0000 Centimeter");
    }

    #[test]
    fn test_convert_kilometers_to_feet() {
        let engine = ConversionEngine::default();
        let result = engine
            .convert("1", unit(LengthUnit::Kilometer), unit(LengthUnit::Foot))
            .unwrap();
        assert_eq!(result.to_string(), "3280.8399 Foot");
    }

    #[test]
    fn test_convert_negative_value() {
        let engine = ConversionEngine::default();
        let result = engine
            .convert("-2", unit(LengthUnit::Meter), unit(LengthUnit::Centimeter))
            .unwrap();
        assert_eq!(result.to_string(), "-200.0000 Centimeter");
    }

    #[test]
    fn test_convert_trims_whitespace() {
        let engine = ConversionEngine::default();
        let result = engine
            .convert(" 12 ", unit(LengthUnit::Inch), unit(LengthUnit::Foot))
            .unwrap();
        assert_eq!(result.to_string(), "1.0000 Foot");
    }

    #[test]
    fn test_convert_rejects_garbage() {
        let engine = ConversionEngine::default();
        let (from, to) = engine.default_units();
        for raw in ["", "   ", "abc", "1,5", "12m", "NaN", "-"] {
            assert_eq!(
                engine.convert(raw, from, to),
                Err(ConvertError::InvalidNumericInput),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_convert_rejects_overflowing_result() {
        let engine = ConversionEngine::default();
        assert_eq!(
            engine.convert("1e307", unit(LengthUnit::Kilometer), unit(LengthUnit::Millimeter)),
            Err(ConvertError::InvalidNumericInput)
        );

        // The same magnitude fits when converting downward
        let result = engine
            .convert("1e307", unit(LengthUnit::Millimeter), unit(LengthUnit::Kilometer))
            .unwrap();
        assert!(result.value.is_finite());
        assert!(result.formatted_value().ends_with(".0000"));
    }

    #[test]
    fn test_meter_foot_engine() {
        let engine = ConversionEngine::new(&METER_FOOT);
        let (from, to) = engine.default_units();

        let result = engine.convert("10", from, to).unwrap();
        assert_eq!(result.to_string(), "32.8084 Foot");

        let back = engine.convert("32.8084", to, from).unwrap();
        assert_eq!(back.to_string(), "10.0000 Meter");
    }
}
