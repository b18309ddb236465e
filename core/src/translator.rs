//! Translator contract consumed from the host engine.
//!
//! Translation itself lives outside this crate; filters only need a way to
//! query a translator for candidates over a segment. The trait is object
//! safe so filters can hold `Box<dyn Translator>` without pulling host
//! generics through every signature.

use crate::candidate::Candidate;
use crate::composition::Segment;
use crate::error::SetupError;
use tracing::warn;

/// A queryable translation component.
///
/// `query` returns a lazy candidate sequence; implementations should avoid
/// materializing the full result set so unbounded upstream translators stay
/// cheap to consume.
pub trait Translator {
    /// Query candidates for `input` over `segment`.
    fn query<'a>(
        &'a self,
        input: &str,
        segment: &Segment,
    ) -> Box<dyn Iterator<Item = Candidate> + 'a>;
}

/// Instantiate a translator from a fallible factory, degrading to `None`
/// on failure.
///
/// Secondary translators are optional features: when construction fails at
/// session start the dependent behavior is disabled for the session and a
/// warning is logged, nothing more.
pub fn try_create<F>(name: &str, factory: F) -> Option<Box<dyn Translator>>
where
    F: FnOnce() -> Result<Box<dyn Translator>, SetupError>,
{
    match factory() {
        Ok(t) => Some(t),
        Err(err) => {
            warn!(translator = name, %err, "translator unavailable, feature disabled");
            None
        }
    }
}
