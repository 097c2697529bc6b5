//! WASM-facing API for browser integration.
//!
//! Takes a JS array of `{ id, members, score }` objects and returns the
//! selection result as a plain object. Runs with no time limit because
//! `std::time::Instant` is unavailable in the browser; pass a node
//! budget to bound the search instead.

use wasm_bindgen::prelude::*;

use crate::deck::Deck;
use crate::select::{SelectConfig, SelectRunner};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Selects the best five disjoint decks.
///
/// `node_budget` of `undefined` runs the search to completion.
#[wasm_bindgen(js_name = selectBestFive)]
pub fn select_best_five_js(decks: JsValue, node_budget: Option<u32>) -> Result<JsValue, JsValue> {
    let pool: Vec<Deck> = serde_wasm_bindgen::from_value(decks).map_err(to_js_error)?;

    let mut config = SelectConfig::default();
    if let Some(budget) = node_budget {
        config = config.with_node_budget(u64::from(budget));
    }
    config.validate().map_err(to_js_error)?;

    let result = SelectRunner::run(&pool, &config);
    serde_wasm_bindgen::to_value(&result).map_err(to_js_error)
}
