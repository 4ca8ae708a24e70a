//! Shotview report library
//!
//! Turns a stream of test lifecycle events into a static two-pane HTML
//! report: a navigation tree mirroring suite nesting on the left, and a
//! screenshot gallery per test on the right.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  ViewerReporter                                             │
//! │    ├── EventReader (JSON lines) -> Event                    │
//! │    ├── ReportAccumulator                                    │
//! │    │     ├── NavigationBuilder  -> Vec<NavNode>             │
//! │    │     └── GalleryBuilder     -> Vec<GallerySection>      │
//! │    │                  run_end   -> DocumentModel            │
//! │    ├── markup::document(model)  -> Node                     │
//! │    ├── Renderer (HtmlRenderer)  -> String                   │
//! │    └── writer::write_atomic()   -> viewer.html              │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod accumulator;
pub mod anchor;
pub mod config;
pub mod error;
pub mod event;
pub mod gallery;
pub mod markup;
pub mod nav;
pub mod render;
pub mod reporter;
pub mod writer;

pub use accumulator::{DocumentModel, ReportAccumulator, RunState, RunStats};
pub use config::ReportConfig;
pub use error::{ReportError, ReportResult};
pub use event::{Event, EventReader, Outcome, TestReport};
pub use reporter::{RunSummary, ViewerReporter};
