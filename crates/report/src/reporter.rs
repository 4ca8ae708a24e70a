//! Reporter that drives the accumulator, renders and persists the document

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncRead;
use tracing::debug;

use crate::accumulator::{DocumentModel, ReportAccumulator, RunStats};
use crate::config::ReportConfig;
use crate::error::{ReportError, ReportResult};
use crate::event::{Event, EventReader};
use crate::markup;
use crate::render::{HtmlRenderer, Renderer};
use crate::writer;

/// What a finished run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub document: PathBuf,
    pub generated_at: DateTime<Utc>,
    pub stats: RunStats,
}

/// Screenshot viewer reporter for one run
pub struct ViewerReporter<R = HtmlRenderer> {
    config: ReportConfig,
    accumulator: ReportAccumulator,
    renderer: R,
}

impl ViewerReporter<HtmlRenderer> {
    /// Create a reporter with the HTML renderer
    pub fn new(config: ReportConfig) -> Self {
        Self::with_renderer(config, HtmlRenderer::new())
    }
}

impl<R: Renderer> ViewerReporter<R> {
    /// Create a reporter with a custom renderer
    pub fn with_renderer(config: ReportConfig, renderer: R) -> Self {
        Self {
            config,
            accumulator: ReportAccumulator::new(),
            renderer,
        }
    }

    /// Handle one event. On run end the document is rendered and written
    /// before this returns.
    pub async fn handle(&mut self, event: Event) -> ReportResult<Option<RunSummary>> {
        match self.accumulator.ingest(event)? {
            Some(model) => self.publish(&model).await.map(Some),
            None => Ok(None),
        }
    }

    /// Consume a whole JSON-lines event stream.
    ///
    /// Fails if the stream ends before run end or carries events after it.
    pub async fn run<S: AsyncRead + Unpin>(
        mut self,
        mut events: EventReader<S>,
    ) -> ReportResult<RunSummary> {
        let mut summary = None;

        while let Some(event) = events.next_event().await? {
            debug!("Event: {}", event.name());
            if let Some(done) = self.handle(event).await? {
                summary = Some(done);
            }
        }

        summary.ok_or(ReportError::Truncated)
    }

    /// Render a finalized model to a document string
    pub fn render(&self, model: &DocumentModel) -> String {
        let page = markup::document(model, &self.config.page_options());
        self.renderer.render(&page)
    }

    async fn publish(&self, model: &DocumentModel) -> ReportResult<RunSummary> {
        let html = self.render(model);
        writer::write_atomic(&self.config.output, &html).await?;

        let summary = RunSummary {
            document: self.config.output.clone(),
            generated_at: Utc::now(),
            stats: model.stats.clone(),
        };

        if let Some(path) = &self.config.summary {
            let json = serde_json::to_string_pretty(&summary)?;
            writer::write_atomic(path, &json).await?;
        }

        Ok(summary)
    }
}
