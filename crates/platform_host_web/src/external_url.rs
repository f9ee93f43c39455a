//! External URL adapter that opens search results in a new tab.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter backed by `window.open(url, "_blank")`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_new_context(url) })
    }
}

fn open_in_new_context(url: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err("popup blocked".to_string()),
            Err(err) => Err(format!("window.open failed: {err:?}")),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
        Err("external URLs can only be opened when compiled for wasm32".to_string())
    }
}
