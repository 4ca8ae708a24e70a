//! Report accumulator
//!
//! Consumes lifecycle events one at a time and owns everything accumulated
//! for the run: the navigation forest under construction, the gallery
//! sections built so far and the run statistics.
//!
//! ```text
//!   Idle ──run_begin / first event──▶ Running ──run_end──▶ Finalized
//! ```
//!
//! `Finalized` is terminal. Events after it are rejected.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{ReportError, ReportResult};
use crate::event::{Event, Outcome, TestReport};
use crate::gallery::{GalleryBuilder, GallerySection};
use crate::nav::{NavNode, NavigationBuilder};

/// Lifecycle of an accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Finalized,
}

/// Counters collected over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub suites: usize,
    pub passed: usize,
    pub failed: usize,
    pub sections: usize,
    pub missing_screenshots: usize,
}

impl RunStats {
    pub fn tests(&self) -> usize {
        self.passed + self.failed
    }
}

/// Finalized, render-ready output of one run
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentModel {
    pub navigation: Vec<NavNode>,
    pub gallery: Vec<GallerySection>,
    pub stats: RunStats,
}

/// Accumulates one run's events into a [`DocumentModel`]
#[derive(Debug)]
pub struct ReportAccumulator {
    state: RunState,
    nav: NavigationBuilder,
    gallery: GalleryBuilder,
    sections: Vec<GallerySection>,
    stats: RunStats,
}

impl Default for ReportAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportAccumulator {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
            nav: NavigationBuilder::new(),
            gallery: GalleryBuilder::new(),
            sections: Vec::new(),
            stats: RunStats::default(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Feed the next event.
    ///
    /// Returns the finalized model when `event` is the run end, `None`
    /// otherwise.
    pub fn ingest(&mut self, event: Event) -> ReportResult<Option<DocumentModel>> {
        if self.state == RunState::Finalized {
            return Err(ReportError::AlreadyFinalized(event.name()));
        }

        match event {
            Event::RunBegin => {
                if self.state == RunState::Running {
                    debug!("Run already started, ignoring run begin");
                } else {
                    info!("Run started");
                    self.state = RunState::Running;
                }
            }
            Event::SuiteEntered { title } => {
                self.start();
                if !title.is_empty() {
                    self.stats.suites += 1;
                    info!("{}", title);
                }
                self.nav.enter_suite(&title);
            }
            Event::SuiteExited { title } => {
                self.start();
                self.nav.exit_suite(&title)?;
            }
            Event::TestPassed { test } => {
                self.start();
                self.stats.passed += 1;
                info!("✓ {}", test.title);
                self.record(test, Outcome::Passed);
            }
            Event::TestFailed { test, error: reason } => {
                self.start();
                self.stats.failed += 1;
                error!("✗ {}: {}", test.title, reason);
                self.record(test, Outcome::Failed);
            }
            Event::RunEnd => return self.finalize().map(Some),
        }

        Ok(None)
    }

    /// Any event before run begin implicitly starts the run
    fn start(&mut self) {
        if self.state == RunState::Idle {
            debug!("Run started implicitly");
            self.state = RunState::Running;
        }
    }

    fn record(&mut self, test: TestReport, outcome: Outcome) {
        self.nav.push_test(&test.full_title, &test.title, outcome);

        let Some(screenshots) = test.screenshots else {
            return;
        };

        let section = self.gallery.build(
            &test.full_title,
            &test.title,
            &screenshots,
            test.expected_screenshots,
            outcome,
        );

        let missing = section.missing_count();
        if missing > 0 {
            warn!(
                "{} of {} screenshot(s) not generated for '{}' ({} captured)",
                missing,
                section.tiles.len(),
                test.full_title,
                section.real_count()
            );
        }

        self.stats.sections += 1;
        self.stats.missing_screenshots += missing;
        self.sections.push(section);
    }

    fn finalize(&mut self) -> ReportResult<DocumentModel> {
        if self.nav.depth() > 0 {
            return Err(ReportError::UnclosedSuites(self.nav.depth()));
        }

        let navigation = std::mem::take(&mut self.nav).finish()?;
        let gallery = std::mem::take(&mut self.sections);
        self.state = RunState::Finalized;

        info!(
            "Run finished: {} test(s), {} passed, {} failed, {} gallery section(s), {} missing screenshot(s)",
            self.stats.tests(),
            self.stats.passed,
            self.stats.failed,
            self.stats.sections,
            self.stats.missing_screenshots
        );
        debug!(
            "Navigation: {} entries, nested {} level(s) deep",
            navigation.iter().map(|node| node.entries().len()).sum::<usize>(),
            navigation.iter().map(NavNode::depth).max().unwrap_or(0)
        );

        Ok(DocumentModel {
            navigation,
            gallery,
            stats: self.stats.clone(),
        })
    }
}
