//! Bidirectional synchronization between UI state and URL query
//! parameters, so order-table views stay shareable and bookmarkable.
//!
//! Encoding and decoding are pure (`BTreeMap` keeps the output stable);
//! the thin `web_sys` wrappers below push the result into the history.

use std::collections::BTreeMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

pub type QueryParams = BTreeMap<String, String>;

pub fn decode_query(search: &str) -> QueryParams {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn encode_query(params: &QueryParams) -> String {
    serde_qs::to_string(params).unwrap_or_default()
}

/// Current query parameters from `window.location.search`.
pub fn query_params() -> QueryParams {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    decode_query(&search)
}

pub fn get_param(key: &str) -> Option<String> {
    query_params().get(key).cloned()
}

/// Replace the current history entry's query string.
pub fn replace_query(params: &QueryParams) {
    apply_query(params, false);
}

/// Push a new history entry with the given query string, for
/// user-initiated navigation (preset selection, opening the editor).
pub fn push_query(params: &QueryParams) {
    apply_query(params, true);
}

/// Whether the browser's current search string already encodes `encoded`.
/// `location.search` carries a leading `?` except when empty.
fn search_matches(current_search: &str, encoded: &str) -> bool {
    current_search.trim_start_matches('?') == encoded
}

fn apply_query(params: &QueryParams, push: bool) {
    let encoded = encode_query(params);
    let current = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if search_matches(&current, &encoded) {
        return;
    }

    let new_url = if encoded.is_empty() {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    } else {
        format!("?{}", encoded)
    };

    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let result = if push {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            } else {
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            };
            if let Err(e) = result {
                log::warn!("failed to update history: {:?}", e);
            }
        }
    }
}

pub fn set_param(key: &str, value: &str) {
    let mut params = query_params();
    params.insert(key.to_string(), value.to_string());
    replace_query(&params);
}

pub fn remove_param(key: &str) {
    let mut params = query_params();
    if params.remove(key).is_some() {
        replace_query(&params);
    }
}

/// Register a `popstate` listener for the lifetime of the page, so
/// back/forward navigation re-resolves URL-derived state.
pub fn on_popstate(callback: impl Fn() + 'static) {
    let closure = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_event| callback());
    if let Some(w) = window() {
        if let Err(e) =
            w.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach popstate listener: {:?}", e);
        }
    }
    // Listener lives as long as the app; intentionally leaked.
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_tolerates_leading_question_mark() {
        let params = decode_query("?preset=-101&search=rush");
        assert_eq!(params.get("preset").map(String::as_str), Some("-101"));
        assert_eq!(params.get("search").map(String::as_str), Some("rush"));
    }

    #[test]
    fn decode_of_garbage_is_empty() {
        assert!(decode_query("").is_empty());
    }

    #[test]
    fn encode_is_deterministic_and_sorted() {
        let mut params = QueryParams::new();
        params.insert("search".into(), "rush".into());
        params.insert("preset".into(), "-100".into());
        assert_eq!(encode_query(&params), "preset=-100&search=rush");
    }

    #[test]
    fn search_match_handles_the_empty_query() {
        // Removing the last parameter must be a no-op against an already
        // empty search string, not a fresh history write.
        assert!(search_matches("", ""));
        assert!(search_matches("?preset=-100", "preset=-100"));
        assert!(!search_matches("?preset=-100", ""));
        assert!(!search_matches("", "preset=-100"));
    }

    #[test]
    fn round_trip() {
        let mut params = QueryParams::new();
        params.insert("detail".into(), "42".into());
        params.insert("cdl".into(), "true".into());
        assert_eq!(decode_query(&encode_query(&params)), params);
    }
}
