//! Deep-link recovery for static hosting.
//!
//! The host serves `404.html` for unknown paths; that page stores the
//! requested path under [`REDIRECT_KEY`] in session storage and loads `/`.
//! On boot the app puts the stored path back into the address bar before the
//! router reads it.

use log::{info, warn};
use wasm_bindgen::JsValue;

pub const REDIRECT_KEY: &str = "redirect";

/// Accepts same-origin absolute paths only. Protocol-relative (`//host`) and
/// anything not starting with `/` is rejected; `/` itself needs no redirect.
pub fn sanitize_redirect(raw: &str) -> Option<String> {
    let path = raw.trim();
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return None;
    }
    if path == "/" {
        return None;
    }
    Some(path.to_string())
}

pub fn restore() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let storage = match window.session_storage() {
        Ok(Some(storage)) => storage,
        _ => return,
    };
    let raw = match storage.get_item(REDIRECT_KEY) {
        Ok(Some(raw)) => raw,
        _ => return,
    };
    let _ = storage.remove_item(REDIRECT_KEY);

    let Some(path) = sanitize_redirect(&raw) else {
        warn!("ignoring stored redirect {:?}", raw);
        return;
    };
    match window.history() {
        Ok(history) => match history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
            Ok(()) => info!("Restored deep link {}", path),
            Err(err) => warn!("could not restore deep link {}: {:?}", path, err),
        },
        Err(err) => warn!("history unavailable: {:?}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_site_paths() {
        assert_eq!(
            sanitize_redirect("/blog/design-systems?ref=x#top"),
            Some("/blog/design-systems?ref=x#top".to_string())
        );
        assert_eq!(sanitize_redirect(" /careers "), Some("/careers".to_string()));
    }

    #[test]
    fn rejects_foreign_targets() {
        assert_eq!(sanitize_redirect("//evil.example"), None);
        assert_eq!(sanitize_redirect("https://evil.example/"), None);
        assert_eq!(sanitize_redirect("/\\evil.example"), None);
        assert_eq!(sanitize_redirect("javascript:alert(1)"), None);
        assert_eq!(sanitize_redirect(""), None);
        assert_eq!(sanitize_redirect("/"), None);
    }
}
