//! Image-load probe backed by a detached `HtmlImageElement`.

use platform_host::{ResourceProbe, ResourceProbeFuture};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, Copy, Default)]
/// Probes a URL by loading it into an image element that never enters the document.
pub struct WebImageProbe;

impl ResourceProbe for WebImageProbe {
    fn probe<'a>(&'a self, url: &'a str) -> ResourceProbeFuture<'a, Result<(), String>> {
        Box::pin(async move { load_image(url).await })
    }
}

async fn load_image(url: &str) -> Result<(), String> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(format!(
            "image probing is only available when compiled for wasm32: {url}"
        ))
    }

    #[cfg(target_arch = "wasm32")]
    {
        let image = web_sys::HtmlImageElement::new()
            .map_err(|err| format!("failed to create image element: {err:?}"))?;
        let (tx, rx) = oneshot::channel::<Result<(), String>>();
        let sender = Rc::new(RefCell::new(Some(tx)));

        let load_sender = sender.clone();
        let on_load = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            if let Some(tx) = load_sender.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        }));
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));

        let error_sender = sender.clone();
        let failed_url = url.to_string();
        let on_error = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            if let Some(tx) = error_sender.borrow_mut().take() {
                let _ = tx.send(Err(format!("image failed to load: {failed_url}")));
            }
        }));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        image.set_src(url);

        let result = rx
            .await
            .map_err(|_| format!("image probe was interrupted: {url}"))?;
        image.set_onload(None);
        image.set_onerror(None);
        drop(on_load);
        drop(on_error);
        result
    }
}
