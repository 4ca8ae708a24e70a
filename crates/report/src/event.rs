//! Test lifecycle events and the JSON-lines stream they arrive on

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::error::{ReportError, ReportResult};

/// Verdict carried by a test event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
}

/// Fields shared by passed and failed tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    /// Title including every enclosing suite title
    pub full_title: String,

    /// The test's own title
    pub title: String,

    /// Screenshot locators in capture order. `None` means the test carried
    /// no screenshot data at all.
    #[serde(default)]
    pub screenshots: Option<Vec<String>>,

    /// Number of screenshots the test meant to produce
    #[serde(default)]
    pub expected_screenshots: Option<usize>,
}

impl TestReport {
    pub fn new(full_title: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            full_title: full_title.into(),
            title: title.into(),
            screenshots: None,
            expected_screenshots: None,
        }
    }

    pub fn with_screenshots<I, S>(mut self, screenshots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.screenshots = Some(screenshots.into_iter().map(Into::into).collect());
        self
    }

    pub fn expecting(mut self, expected: usize) -> Self {
        self.expected_screenshots = Some(expected);
        self
    }
}

/// A single lifecycle event emitted by the test engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    RunBegin,

    SuiteEntered {
        title: String,
    },

    SuiteExited {
        title: String,
    },

    TestPassed {
        #[serde(flatten)]
        test: TestReport,
    },

    TestFailed {
        #[serde(flatten)]
        test: TestReport,
        #[serde(default)]
        error: String,
    },

    RunEnd,
}

impl Event {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            Event::RunBegin => "run_begin",
            Event::SuiteEntered { .. } => "suite_entered",
            Event::SuiteExited { .. } => "suite_exited",
            Event::TestPassed { .. } => "test_passed",
            Event::TestFailed { .. } => "test_failed",
            Event::RunEnd => "run_end",
        }
    }

    /// Parse one JSON event
    pub fn from_json(json: &str) -> ReportResult<Self> {
        serde_json::from_str(json).map_err(ReportError::from)
    }
}

/// Reads events from a JSON-lines stream, one event object per line
pub struct EventReader<R> {
    lines: Lines<BufReader<R>>,
    line: usize,
}

impl<R: AsyncRead + Unpin> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            line: 0,
        }
    }

    /// Next event, or `None` once the stream is exhausted. Blank lines are skipped.
    ///
    /// A line that is not valid UTF-8 is reported as an invalid event on that
    /// line; other read failures surface as `Io`.
    pub async fn next_event(&mut self) -> ReportResult<Option<Event>> {
        while let Some(line) = self.next_line().await? {
            self.line += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Event::from_json(trimmed)
                .map(Some)
                .map_err(|e| ReportError::InvalidEvent {
                    line: self.line,
                    reason: e.to_string(),
                });
        }
        Ok(None)
    }

    async fn next_line(&mut self) -> ReportResult<Option<String>> {
        self.lines.next_line().await.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => ReportError::InvalidEvent {
                line: self.line + 1,
                reason: e.to_string(),
            },
            _ => ReportError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suite_events() {
        let event = Event::from_json(r#"{"event":"suite_entered","title":"Login"}"#).unwrap();
        assert_eq!(event, Event::SuiteEntered { title: "Login".to_string() });

        let event = Event::from_json(r#"{"event":"run_end"}"#).unwrap();
        assert_eq!(event, Event::RunEnd);
    }

    #[test]
    fn test_parse_failed_test() {
        let json = r#"{
            "event": "test_failed",
            "full_title": "Login submits",
            "title": "submits",
            "error": "timeout",
            "screenshots": [],
            "expected_screenshots": 2
        }"#;
        let event = Event::from_json(json).unwrap();
        match event {
            Event::TestFailed { test, error } => {
                assert_eq!(test.full_title, "Login submits");
                assert_eq!(error, "timeout");
                assert_eq!(test.screenshots, Some(vec![]));
                assert_eq!(test.expected_screenshots, Some(2));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_screenshots_absent_is_none() {
        let json = r#"{"event":"test_passed","full_title":"a b","title":"b"}"#;
        let event = Event::from_json(json).unwrap();
        assert_eq!(
            event,
            Event::TestPassed {
                test: TestReport::new("a b", "b")
            }
        );
    }

    #[tokio::test]
    async fn test_reader_skips_blank_lines() {
        let input = b"{\"event\":\"run_begin\"}\n\n   \n{\"event\":\"run_end\"}\n";
        let mut reader = EventReader::new(&input[..]);

        assert_eq!(reader.next_event().await.unwrap(), Some(Event::RunBegin));
        assert_eq!(reader.next_event().await.unwrap(), Some(Event::RunEnd));
        assert_eq!(reader.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reader_reports_line_number() {
        let input = b"{\"event\":\"run_begin\"}\n{\"event\":\"bogus\"}\n";
        let mut reader = EventReader::new(&input[..]);

        reader.next_event().await.unwrap();
        match reader.next_event().await {
            Err(ReportError::InvalidEvent { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected invalid event, got {:?}", other),
        }
    }

    #[test]
    fn test_passed_round_trips_flat() {
        let event = Event::TestPassed {
            test: TestReport::new("Login renders", "renders").with_screenshots(["/a/1.png"]),
        };
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "test_passed");
        assert_eq!(json["full_title"], "Login renders");
        assert_eq!(json["screenshots"][0], "/a/1.png");
        assert_eq!(Event::from_json(&json.to_string()).unwrap(), event);
    }

    #[tokio::test]
    async fn test_reader_reports_invalid_utf8_line() {
        let input = b"{\"event\":\"run_begin\"}\n\xff\xfe\n{\"event\":\"run_end\"}\n";
        let mut reader = EventReader::new(&input[..]);

        reader.next_event().await.unwrap();
        match reader.next_event().await {
            Err(ReportError::InvalidEvent { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected invalid event, got {:?}", other),
        }
    }
}
