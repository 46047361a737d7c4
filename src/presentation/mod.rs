pub mod line_chart;
pub mod wasm_api;
