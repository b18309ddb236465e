//! libshengbi-core
//!
//! Candidate post-processing and composition-editing key processors for
//! syllable-based Chinese input methods. This crate sits between a
//! phonetic/table translator (which turns typed romanization into
//! candidate text) and the UI layer that displays and commits candidates:
//! it observes and rewrites the candidate stream, and edits the raw input
//! buffer in response to specific keys. Translation, segmentation and
//! ranking stay in the host engine and are consumed through small
//! contracts.
//!
//! Public API:
//! - `Candidate` / `CandidateList` - conversion candidates and the paged menu
//! - `Composition` / `Segment` - segmentation over the input buffer
//! - `InputBuffer` - raw typed input, mutable during one key event
//! - `EditContext` - the per-session state handed to processors
//! - `EnglishFilter` - typed-case normalization with dual-stream dedup
//! - `CharsetFilter` - charset membership filtering with a session memo
//! - `ProcessorChain` - the composition-editing interceptor chain
//! - `Config` - schema-level switches and key bindings

pub mod candidate;
pub use candidate::{Candidate, CandidateList};

pub mod composition;
pub use composition::{Composition, Segment, SegmentStatus, StealState};

pub mod input_buffer;
pub use input_buffer::{InputBuffer, DELIMITERS};

pub mod key_event;
pub use key_event::KeyEvent;

pub mod context;
pub use context::EditContext;

pub mod translator;
pub use translator::Translator;

pub mod casefix;

pub mod english;
pub use english::EnglishFilter;

pub mod charset;
pub use charset::CharsetFilter;

pub mod processor;
pub use processor::{KeyProcessor, ProcessResult, ProcessorChain};

pub mod processors;

pub mod config;
pub use config::Config;

pub mod error;
pub use error::SetupError;
