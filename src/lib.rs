#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
use pyo3::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod builder;
pub mod codec;
mod depth;
pub mod error;
mod number;
pub mod ssr;
pub mod types;

pub use builder::{
    ModifierBuilder, NodeBuilder, TableCellBuilder, TableColumnBuilder, TextStyleBuilder,
};
pub use codec::{
    encode, from_json, from_value, to_json, to_json_compact, to_value, EncodeOptions, Format,
    JsonDecoder, NodeDecoder,
};
pub use depth::MAX_NESTING_DEPTH;
pub use error::{ParseError, Result, SsrError};
pub use types::{Modifier, Node, TableCell, TableColumn, TextStyle};

/// Decodes `json` and encodes it again, dropping unknown keys and nulls.
pub fn normalize_json(json: &str, format: Format) -> Result<String> {
    let node = from_json(json)?;
    encode(&node, &EncodeOptions { format })
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
#[pyo3(name = "normalize_json", signature = (json, pretty = true))]
fn normalize_json_py(json: String, pretty: bool) -> PyResult<String> {
    let format = if pretty { Format::Pretty } else { Format::Compact };
    normalize_json(&json, format)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pyfunction]
fn compact_json(json: String) -> PyResult<String> {
    normalize_json(&json, Format::Compact)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn normalize_json_wasm(json: &str, pretty: bool) -> std::result::Result<String, JsValue> {
    let format = if pretty { Format::Pretty } else { Format::Compact };
    normalize_json(json, format).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(all(feature = "python", not(target_arch = "wasm32")))]
#[pymodule]
fn ssr_simple(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize_json_py, m)?)?;
    m.add_function(wrap_pyfunction!(compact_json, m)?)?;
    Ok(())
}
