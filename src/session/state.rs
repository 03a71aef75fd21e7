use crate::units::{format_with_label, ConversionEngine, Unit, INVALID_INPUT_MESSAGE};

/// Everything a converter screen needs between redraws.
/// Owned by the UI shell; the engine itself stays stateless.
#[derive(Debug, Clone)]
pub struct ConverterState {
    engine: ConversionEngine,
    input: String,
    from: Unit,
    to: Unit,
    result_text: String,
    input_error: bool,
}

impl ConverterState {
    pub fn new(engine: ConversionEngine) -> Self {
        let (from, to) = engine.default_units();
        Self::with_units(engine, from, to)
    }

    /// Start with explicit selections instead of the table defaults
    pub fn with_units(engine: ConversionEngine, from: Unit, to: Unit) -> Self {
        Self {
            engine,
            input: String::new(),
            from,
            to,
            result_text: format_with_label(0.0, to.label()),
            input_error: false,
        }
    }

    pub fn engine(&self) -> &ConversionEngine {
        &self.engine
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from(&self) -> Unit {
        self.from
    }

    pub fn to(&self) -> Unit {
        self.to
    }

    /// Last successful result, or the initial "0.0000 <unit>" placeholder
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn input_error(&self) -> bool {
        self.input_error
    }

    /// Inline message to show under the input field, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.input_error.then_some(INVALID_INPUT_MESSAGE)
    }

    /// Replace the input text; editing clears any pending error
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.input_error = false;
    }

    pub fn select_from(&mut self, unit: Unit) {
        debug_assert!(self.engine.table().contains(&unit), "{} not in table", unit.label());
        self.from = unit;
    }

    pub fn select_to(&mut self, unit: Unit) {
        debug_assert!(self.engine.table().contains(&unit), "{} not in table", unit.label());
        self.to = unit;
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Run the conversion for the current input and selections.
    /// On invalid input the previous result is kept and the error flag is set.
    /// Returns whether the conversion succeeded.
    pub fn submit(&mut self) -> bool {
        match self.engine.convert(&self.input, self.from, self.to) {
            Ok(conversion) => {
                self.result_text = conversion.to_string();
                self.input_error = false;
                true
            }
            Err(e) => {
                tracing::debug!(input = %self.input, error = %e, "conversion refused");
                self.input_error = true;
                false
            }
        }
    }
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(ConversionEngine::default())
    }
}
