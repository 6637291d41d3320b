//! Address Bar Access
//!
//! Reads and rewrites the shareable-link query parameter without a
//! navigation, via `history.replaceState`. While a shared view is
//! active the parameter tracks every edit, so copying the address bar
//! always shares exactly what is on screen. All failures are silent;
//! the address bar is a convenience surface, never a source of errors.

use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

/// The single query parameter carrying the wire string
pub const STATE_PARAM: &str = "state";

/// Current value of the state parameter, if any
pub fn read_param() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get(STATE_PARAM)
}

/// Set or remove the state parameter in place
pub fn rewrite(encoded: Option<&str>) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let (Ok(pathname), Ok(search)) = (location.pathname(), location.search()) else {
        return;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return;
    };
    match encoded {
        Some(wire) => params.set(STATE_PARAM, wire),
        None => params.delete(STATE_PARAM),
    }
    let query = String::from(params.to_string());
    let url = if query.is_empty() {
        pathname
    } else {
        format!("{}?{}", pathname, query)
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Drop the state parameter entirely (keep/eject transitions)
pub fn clear() {
    rewrite(None);
}

/// Build a full shareable URL for the given wire string
pub fn share_url(wire: &str) -> Option<String> {
    let location = web_sys::window()?.location();
    let origin = location.origin().ok()?;
    let pathname = location.pathname().ok()?;
    let params = UrlSearchParams::new().ok()?;
    params.set(STATE_PARAM, wire);
    Some(format!("{}{}?{}", origin, pathname, String::from(params.to_string())))
}
