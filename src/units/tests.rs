#[cfg(test)]
mod tests {
    use super::super::engine::ConversionEngine;
    use super::super::error::ConvertError;
    use super::super::table::{LENGTH, METER_FOOT, TABLES};
    use super::super::types::LengthUnit;

    const SAMPLES: [&str; 7] = ["0", "1", "2.5", "-7.25", "100", "0.0001", "123456.789"];

    fn fraction_digits(rendered: &str) -> usize {
        let number = rendered.split_whitespace().next().unwrap();
        number.split('.').nth(1).map(str::len).unwrap_or(0)
    }

    #[test]
    fn test_identity_conversion() {
        for table in TABLES {
            let engine = ConversionEngine::new(table);
            for unit in table.units() {
                for raw in SAMPLES {
                    let x: f64 = raw.parse().unwrap();
                    let result = engine.convert(raw, *unit, *unit).unwrap();
                    assert_eq!(
                        result.to_string(),
                        format!("{:.4} {}", x, unit.label()),
                        "{} in {}",
                        raw,
                        table.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for table in TABLES {
            let engine = ConversionEngine::new(table);
            for a in table.units() {
                for b in table.units() {
                    for raw in SAMPLES {
                        let x: f64 = raw.parse().unwrap();
                        let there = engine.convert(raw, *a, *b).unwrap();
                        let back = engine
                            .convert(&there.value.to_string(), *b, *a)
                            .unwrap();
                        let tolerance = 1e-9 * x.abs().max(1.0);
                        assert!(
                            (back.value - x).abs() <= tolerance,
                            "{} {} -> {} -> {}: got {}",
                            raw,
                            a.label(),
                            b.label(),
                            a.label(),
                            back.value
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_invalid_input_for_every_pair() {
        for table in TABLES {
            let engine = ConversionEngine::new(table);
            for a in table.units() {
                for b in table.units() {
                    assert_eq!(
                        engine.convert("abc", *a, *b),
                        Err(ConvertError::InvalidNumericInput)
                    );
                    assert_eq!(
                        engine.convert("", *a, *b),
                        Err(ConvertError::InvalidNumericInput)
                    );
                }
            }
        }
    }

    #[test]
    fn test_known_conversions() {
        let engine = ConversionEngine::default();
        let cm = LENGTH.unit(LengthUnit::Centimeter).unwrap();
        let m = LENGTH.unit(LengthUnit::Meter).unwrap();
        let inch = LENGTH.unit(LengthUnit::Inch).unwrap();
        let ft = LENGTH.unit(LengthUnit::Foot).unwrap();

        assert_eq!(engine.convert("0", cm, m).unwrap().to_string(), "0.0000 Meter");
        assert_eq!(engine.convert("100", cm, m).unwrap().to_string(), "1.0000 Meter");
        assert_eq!(
            engine.convert("1", inch, cm).unwrap().to_string(),
            "2.5400 Centimeter"
        );
        assert_eq!(engine.convert("1", m, ft).unwrap().to_string(), "3.2808 Foot");
    }

    #[test]
    fn test_meter_to_foot_in_both_tables() {
        for table in [&LENGTH, &METER_FOOT] {
            let engine = ConversionEngine::new(table);
            let m = table.unit(LengthUnit::Meter).unwrap();
            let ft = table.unit(LengthUnit::Foot).unwrap();
            assert_eq!(engine.convert("1", m, ft).unwrap().to_string(), "3.2808 Foot");
        }
    }

    #[test]
    fn test_always_four_fraction_digits() {
        let engine = ConversionEngine::default();
        for a in LENGTH.units() {
            for b in LENGTH.units() {
                for raw in ["1", "1e6", "0.000001", "-3", "42.123456789"] {
                    let rendered = engine.convert(raw, *a, *b).unwrap().to_string();
                    assert_eq!(fraction_digits(&rendered), 4, "{}", rendered);
                    assert!(rendered.ends_with(b.label()));
                }
            }
        }
    }
}
