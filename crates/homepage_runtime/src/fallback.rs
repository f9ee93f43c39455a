//! Sequential "try each candidate, advance on failure" resolution for remote resources.

use platform_host::ResourceProbe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Ordered candidate URLs for one logical resource, consumed front to back.
pub struct FallbackChain {
    candidates: Vec<String>,
}

impl FallbackChain {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// `url` loaded after `attempts` probes (including the successful one).
    Resolved { url: String, attempts: usize },
    /// Every candidate failed.
    Exhausted { attempts: usize },
}

impl FallbackOutcome {
    pub fn attempts(&self) -> usize {
        match self {
            Self::Resolved { attempts, .. } | Self::Exhausted { attempts } => *attempts,
        }
    }

    pub fn resolved_url(&self) -> Option<&str> {
        match self {
            Self::Resolved { url, .. } => Some(url),
            Self::Exhausted { .. } => None,
        }
    }
}

/// Probes candidates strictly in order and stops at the first that loads.
///
/// At most `chain.len()` probes are issued, and probe N+1 is not started until probe N has
/// settled.
pub async fn resolve_fallback_chain<P>(probe: &P, chain: &FallbackChain) -> FallbackOutcome
where
    P: ResourceProbe + ?Sized,
{
    let mut attempts = 0;
    for candidate in chain.candidates() {
        attempts += 1;
        match probe.probe(candidate).await {
            Ok(()) => {
                return FallbackOutcome::Resolved {
                    url: candidate.clone(),
                    attempts,
                }
            }
            Err(_) => continue,
        }
    }
    FallbackOutcome::Exhausted { attempts }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{NoopResourceProbe, ScriptedResourceProbe};
    use pretty_assertions::assert_eq;

    use super::*;

    fn chain() -> FallbackChain {
        FallbackChain::new(["https://a/1", "https://b/2", "https://c/3"])
    }

    #[test]
    fn last_candidate_wins_after_every_earlier_one_fails() {
        let probe = ScriptedResourceProbe::reachable(["https://c/3"]);
        let outcome = block_on(resolve_fallback_chain(&probe, &chain()));

        assert_eq!(
            outcome,
            FallbackOutcome::Resolved {
                url: "https://c/3".to_string(),
                attempts: 3
            }
        );
        assert_eq!(probe.attempts(), chain().candidates().to_vec());
        assert_eq!(outcome.resolved_url(), Some("https://c/3"));
    }

    #[test]
    fn first_success_stops_the_chain() {
        let probe = ScriptedResourceProbe::reachable(["https://a/1", "https://b/2"]);
        let outcome = block_on(resolve_fallback_chain(&probe, &chain()));
        assert_eq!(outcome.attempts(), 1);
        assert_eq!(probe.attempts(), vec!["https://a/1".to_string()]);
    }

    #[test]
    fn exhausted_chain_probes_each_candidate_once() {
        let outcome = block_on(resolve_fallback_chain(&NoopResourceProbe, &chain()));
        assert_eq!(outcome, FallbackOutcome::Exhausted { attempts: 3 });
        assert_eq!(outcome.resolved_url(), None);
    }

    #[test]
    fn empty_chain_goes_straight_to_terminal() {
        let probe = ScriptedResourceProbe::default();
        let outcome = block_on(resolve_fallback_chain(&probe, &FallbackChain::default()));
        assert_eq!(outcome, FallbackOutcome::Exhausted { attempts: 0 });
        assert!(probe.attempts().is_empty());
    }
}
