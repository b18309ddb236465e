//! Key processor trait and the interceptor chain.
//!
//! Composition editing is a chain of independent interceptors applied in
//! fixed order to each key-down event. The first one that accepts the key
//! has done its (single) buffer or selection mutation and the chain stops;
//! if none accepts, the event falls through to default handling. That
//! first-accept rule is also the mutual-exclusion discipline: exactly one
//! writer per key event, no locking.

use crate::config::Config;
use crate::context::EditContext;
use crate::key_event::KeyEvent;
use tracing::debug;

/// Outcome of offering a key to a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// Key consumed; state was mutated
    Accepted,
    /// Not this processor's key; try the next one
    Declined,
}

/// A single composition-editing interceptor.
pub trait KeyProcessor {
    /// Name for diagnostics.
    fn name(&self) -> &'static str;

    /// Examine a key-down event against the current editing state and
    /// either perform one mutation or decline.
    fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult;
}

/// Ordered chain of interceptors with first-accept short-circuit.
pub struct ProcessorChain {
    processors: Vec<Box<dyn KeyProcessor>>,
}

impl ProcessorChain {
    /// Assemble the standard chain from configuration: quick-select,
    /// forced re-segmentation, auxiliary-code steal/return, shift-driven
    /// letter append, and (when enabled) shorthand expansion.
    pub fn from_config(config: &Config) -> Self {
        use crate::processors::{
            QuickSelect, Resegment, ShiftAppend, Shorthand, Steal,
        };

        let shift_append = if config.enable_shorthand {
            ShiftAppend::with_reserved(Shorthand::bound_keys())
        } else {
            ShiftAppend::new()
        };
        let mut processors: Vec<Box<dyn KeyProcessor>> = vec![
            Box::new(QuickSelect::from_config(config)),
            Box::new(Resegment::from_config(config)),
            Box::new(Steal::from_config(config)),
            Box::new(shift_append),
        ];
        if config.enable_shorthand {
            processors.push(Box::new(Shorthand::new()));
        }
        ProcessorChain { processors }
    }

    /// A chain over an explicit processor list.
    pub fn with_processors(processors: Vec<Box<dyn KeyProcessor>>) -> Self {
        ProcessorChain { processors }
    }

    /// Offer a key event to the chain.
    ///
    /// Key-up events are always declined; key-down events go to each
    /// processor in order until one accepts.
    pub fn process_key(&mut self, key: &KeyEvent, ctx: &mut EditContext) -> ProcessResult {
        if key.release {
            return ProcessResult::Declined;
        }
        for processor in &mut self.processors {
            if processor.process_key(key, ctx) == ProcessResult::Accepted {
                debug!(processor = processor.name(), ch = %key.ch, "key accepted");
                return ProcessResult::Accepted;
            }
        }
        ProcessResult::Declined
    }
}
