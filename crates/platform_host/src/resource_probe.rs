//! Resource probing contracts used by fallback chains.
//!
//! A probe answers one question: does this URL load as an image? The browser adapter creates a
//! detached image element and waits for its `load` or `error` event. There is no timeout beyond
//! the browser's own network failure signalling.

use std::{cell::RefCell, collections::HashSet, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`ResourceProbe`].
pub type ResourceProbeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that attempts to load one remote image resource.
pub trait ResourceProbe {
    /// Resolves `Ok(())` when `url` loads and `Err` with a reason when it fails.
    fn probe<'a>(&'a self, url: &'a str) -> ResourceProbeFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Probe that fails every URL. Used where no network is available.
pub struct NoopResourceProbe;

impl ResourceProbe for NoopResourceProbe {
    fn probe<'a>(&'a self, url: &'a str) -> ResourceProbeFuture<'a, Result<(), String>> {
        Box::pin(async move { Err(format!("no resource loader available for `{url}`")) })
    }
}

#[derive(Debug, Clone, Default)]
/// Probe with a fixed set of reachable URLs that records every attempt in order.
pub struct ScriptedResourceProbe {
    reachable: Rc<HashSet<String>>,
    attempts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedResourceProbe {
    /// Builds a probe where exactly the given URLs load.
    pub fn reachable<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reachable: Rc::new(urls.into_iter().map(Into::into).collect()),
            attempts: Rc::default(),
        }
    }

    /// Returns every URL probed so far, in attempt order.
    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }
}

impl ResourceProbe for ScriptedResourceProbe {
    fn probe<'a>(&'a self, url: &'a str) -> ResourceProbeFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.attempts.borrow_mut().push(url.to_string());
            if self.reachable.contains(url) {
                Ok(())
            } else {
                Err(format!("unreachable: {url}"))
            }
        })
    }
}
