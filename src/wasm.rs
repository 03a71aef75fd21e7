// WebAssembly bindings for a browser converter screen
use crate::config::{resolve_unit, Config};
use crate::session::ConverterState;
use crate::units::UnitTable;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConverterWasm {
    state: ConverterState,
}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    /// Converter over the full length table, Centimeter -> Meter
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: ConverterState::default(),
        }
    }

    /// Build a converter from TOML config contents
    #[wasm_bindgen]
    pub fn from_config(config_content: &str) -> Result<ConverterWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        let engine = config
            .engine()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let (from, to) = config
            .default_units()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            state: ConverterState::with_units(engine, from, to),
        })
    }

    /// Units of the active table as a JSON string
    #[wasm_bindgen]
    pub fn units_json(&self) -> Result<String, JsValue> {
        let table: &UnitTable = self.state.engine().table();
        serde_json::to_string(table)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, text: &str) {
        self.state.set_input(text);
    }

    /// Select the source unit by label or symbol
    #[wasm_bindgen]
    pub fn select_from(&mut self, name: &str) -> Result<(), JsValue> {
        let unit = resolve_unit(self.state.engine().table(), name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.state.select_from(unit);
        Ok(())
    }

    /// Select the target unit by label or symbol
    #[wasm_bindgen]
    pub fn select_to(&mut self, name: &str) -> Result<(), JsValue> {
        let unit = resolve_unit(self.state.engine().table(), name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.state.select_to(unit);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn swap_units(&mut self) {
        self.state.swap_units();
    }

    /// Convert the current input; false means the input was not numeric
    #[wasm_bindgen]
    pub fn convert(&mut self) -> bool {
        self.state.submit()
    }

    #[wasm_bindgen]
    pub fn result_text(&self) -> String {
        self.state.result_text().to_string()
    }

    #[wasm_bindgen]
    pub fn error_message(&self) -> Option<String> {
        self.state.error_message().map(str::to_string)
    }
}
