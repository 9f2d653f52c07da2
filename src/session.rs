//! Per-session analysis state.
//!
//! A front end keeps one [`SessionSlot`] per user session instead of any
//! global mutable state. The slot holds the most recent validated profile
//! together with its result bundle, so the report can be regenerated later
//! without re-running the form.

use crate::config::ReportConfig;
use crate::engine;
use crate::report;
use crate::types::{Profile, ResultBundle};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// A completed analysis: the profile as submitted plus its results
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub profile: Profile,
    pub bundle: ResultBundle,
    pub completed_at: DateTime<Utc>,
}

/// Holds at most one completed analysis for a session
#[derive(Clone, Debug, Default)]
pub struct SessionSlot {
    current: Option<Analysis>,
}

impl SessionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and analyze a profile, replacing any previous analysis
    ///
    /// The profile is normalized (duplicate symptoms, conditions and
    /// medications collapsed) before analysis. A blank name is reported as
    /// [`Error::MissingField`] so a front end can prompt for it; fields
    /// outside their domain are reported as [`Error::InvalidProfile`].
    /// Either failure leaves the slot untouched.
    pub fn submit(&mut self, mut profile: Profile) -> Result<&Analysis> {
        profile.normalize();
        if profile.name.trim().is_empty() {
            return Err(Error::MissingField("name".into()));
        }
        let problems = profile.validate();
        if !problems.is_empty() {
            return Err(Error::InvalidProfile(problems.join("; ")));
        }

        let bundle = engine::analyze(&profile);
        self.current = Some(Analysis {
            profile,
            bundle,
            completed_at: Utc::now(),
        });
        self.current
            .as_ref()
            .ok_or_else(|| Error::InvalidProfile("analysis missing after submit".into()))
    }

    /// The current analysis, if one has completed
    pub fn analysis(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.current.is_some()
    }

    /// Discard the current analysis, returning the slot to its empty state
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Render the stored analysis as a PDF report
    ///
    /// Fails with [`Error::Report`] when no analysis has completed yet.
    pub fn render_report(&self, config: &ReportConfig) -> Result<Vec<u8>> {
        let analysis = self
            .current
            .as_ref()
            .ok_or_else(|| Error::Report("no completed analysis in this session".into()))?;
        report::render_report(
            &analysis.profile,
            &analysis.bundle,
            analysis.completed_at,
            config,
        )
    }
}
