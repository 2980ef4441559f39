//! Service layer module.
//!
//! Contains the generation pipeline and session management.

pub mod combinator;
pub mod generator;
pub mod input;
pub mod postprocess;
pub mod session;
pub mod view;

pub use combinator::{Decoration, generate};
pub use generator::{GenerationResult, GenerationSummary, GeneratorService};
pub use postprocess::postprocess;
pub use session::{Session, SessionService, SharedSession};
