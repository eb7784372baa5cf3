//! Ties windowing, the two selectors and the outcome report together.

use crate::interactive::KeySelector;
use crate::render;
use crate::selector::{SelectError, Selector};
use crate::simple::NumberedSelector;
use crate::window::DisplayModel;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Result of one invocation.
///
/// `NoCandidates` and `Declined` both map to `None` through [`PickOutcome::date`];
/// callers that care about the difference match on the enum instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    NoCandidates,
    Declined,
    Selected(NaiveDate),
}

impl PickOutcome {
    pub fn date(self) -> Option<NaiveDate> {
        match self {
            PickOutcome::Selected(date) => Some(date),
            PickOutcome::NoCandidates | PickOutcome::Declined => None,
        }
    }
}

/// What an observer is told after every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickReport {
    pub target: NaiveDate,
    pub filter: String,
    pub outcome: PickOutcome,
}

pub trait PickObserver {
    fn on_pick(&self, report: &PickReport);
}

/// Reports outcomes as tracing events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl PickObserver for TracingObserver {
    fn on_pick(&self, report: &PickReport) {
        let target = report.target.format("%Y-%m-%d");
        match report.outcome {
            PickOutcome::NoCandidates => {
                debug!("No candidate flat dates to display for {} (filter: {})", target, report.filter)
            }
            PickOutcome::Declined => {
                info!("User selected 'rig changed' for {} (filter: {})", target, report.filter)
            }
            PickOutcome::Selected(date) => info!(
                "User selected flat date {} for {} (filter: {})",
                date.format("%Y-%m-%d"),
                target,
                report.filter
            ),
        }
    }
}

pub struct Picker {
    primary: Option<Box<dyn Selector>>,
    fallback: Box<dyn Selector>,
    observer: Box<dyn PickObserver>,
}

impl Picker {
    pub fn new(
        primary: Option<Box<dyn Selector>>,
        fallback: Box<dyn Selector>,
        observer: Box<dyn PickObserver>,
    ) -> Self {
        Self {
            primary,
            fallback,
            observer,
        }
    }

    /// Arrow keys when the terminal allows it, numbered input otherwise.
    pub fn terminal() -> Self {
        Self::new(
            Some(Box::new(KeySelector)),
            Box::new(NumberedSelector),
            Box::new(TracingObserver),
        )
    }

    /// Numbered input only.
    pub fn simple() -> Self {
        Self::new(None, Box::new(NumberedSelector), Box::new(TracingObserver))
    }

    /// Let the user pick among `older` and `newer` around `target`.
    ///
    /// Both sequences must be sorted ascending, `older` strictly before
    /// `target` and `newer` strictly after it.
    pub fn pick_outcome(
        &mut self,
        target: NaiveDate,
        filter: &str,
        older: &[NaiveDate],
        newer: &[NaiveDate],
        limit: usize,
    ) -> PickOutcome {
        let outcome = if older.is_empty() && newer.is_empty() {
            PickOutcome::NoCandidates
        } else {
            let model = DisplayModel::build(target, older, newer, limit);
            let header = render::header(&target.format("%Y-%m-%d").to_string(), filter);
            let index = self.choose(&header, &model);
            match model.value(index) {
                Some(date) => PickOutcome::Selected(date),
                None => PickOutcome::Declined,
            }
        };

        self.observer.on_pick(&PickReport {
            target,
            filter: filter.to_string(),
            outcome,
        });
        outcome
    }

    /// Same as [`Picker::pick_outcome`], collapsed to the chosen date.
    pub fn pick(
        &mut self,
        target: NaiveDate,
        filter: &str,
        older: &[NaiveDate],
        newer: &[NaiveDate],
        limit: usize,
    ) -> Option<NaiveDate> {
        self.pick_outcome(target, filter, older, newer, limit).date()
    }

    fn choose(&mut self, header: &str, model: &DisplayModel) -> usize {
        let attempt = match self.primary.as_mut() {
            Some(primary) => primary.select(header, model),
            None => Err(SelectError::Unavailable("simple mode".to_string())),
        };
        let result = match attempt {
            Err(SelectError::Unavailable(reason)) => {
                debug!("Falling back to numbered selection: {}", reason);
                self.fallback.select(header, model)
            }
            other => other,
        };
        match result {
            Ok(index) => index,
            Err(e) => {
                warn!("Selection failed, treating as no selection: {}", e);
                model.none_index()
            }
        }
    }
}

/// Pick a flat date on the process terminal, logging the outcome via tracing.
pub fn pick_flat_date(
    target: NaiveDate,
    filter: &str,
    older: &[NaiveDate],
    newer: &[NaiveDate],
    limit: usize,
) -> Option<NaiveDate> {
    Picker::terminal().pick(target, filter, older, newer, limit)
}
