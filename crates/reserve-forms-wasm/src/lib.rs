//! Reservation form validation for the browser
//!
//! WebAssembly bindings over `reserve-validation`, so the page validates
//! keystrokes and submissions with exactly the rules the server and CLI use.
//!
//! ```javascript
//! const engine = new FormEngine();
//! engine.validateField('first', 'A');   // "Vous devez saisir au minimum 2 caractères"
//! engine.validateField('first', 'Al');  // null
//! engine.validateField('other', 'x');   // undefined: no validator
//! const { fields, allValid } = engine.validateAll(Object.fromEntries(new FormData(form)));
//! ```

use std::collections::BTreeMap;

use reserve_validation as engine;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validators for one form, built once when the page loads.
#[wasm_bindgen]
pub struct FormEngine {
    form: engine::FormValidator,
}

#[wasm_bindgen]
impl FormEngine {
    /// Engine for the built-in reservation form
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<FormEngine, JsValue> {
        let form = engine::reservation_form().map_err(to_js_error)?;
        Ok(FormEngine { form })
    }

    /// Engine for a form described in TOML
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(source: &str) -> Result<FormEngine, JsValue> {
        let form = engine::FormConfig::from_toml(source)
            .and_then(|config| config.build())
            .map_err(to_js_error)?;
        Ok(FormEngine { form })
    }

    /// Live check of one field.
    ///
    /// Returns the error message, `null` when valid, or `undefined` when no
    /// validator is registered for `field`.
    #[wasm_bindgen(js_name = validateField)]
    pub fn validate_field(&self, field: &str, value: Option<String>) -> JsValue {
        match self.form.validate_field(field, value.as_deref()) {
            Some(Some(message)) => JsValue::from_str(&message),
            Some(None) => JsValue::NULL,
            None => JsValue::UNDEFINED,
        }
    }

    /// Submit check over a plain `{ name: value }` object.
    ///
    /// Returns `{ fields: [{ field, error }], allValid }`. Keys missing from
    /// the object are validated as absent values.
    #[wasm_bindgen(js_name = validateAll)]
    pub fn validate_all(&self, values: JsValue) -> Result<JsValue, JsValue> {
        let values: BTreeMap<String, String> = serde_wasm_bindgen::from_value(values)
            .map_err(|e| JsValue::from_str(&format!("Failed to read form values: {}", e)))?;
        let report = self.form.validate_all(&values);
        to_js(&report)
    }

    /// Registered field names in registration order
    #[wasm_bindgen(js_name = fieldNames)]
    pub fn field_names(&self) -> Vec<String> {
        self.form.field_names().map(str::to_string).collect()
    }
}

/// Quick email shape check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(value: &str) -> bool {
    engine::is_valid_email(value)
}

/// Quick numeric coercion check
#[wasm_bindgen(js_name = isNumeric)]
pub fn is_numeric_js(value: &str) -> bool {
    engine::is_numeric(value)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn to_js_error(err: engine::ConfigError) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
    JsValue::from_str(&err.to_string())
}
