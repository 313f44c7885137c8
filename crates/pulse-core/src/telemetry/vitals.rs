// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core-UX-Metric identities, published thresholds, and ratings.
//!
//! The engine recognizes a small fixed set of standardized user-experience
//! measurements, each rated against published good/needs-improvement/poor
//! thresholds. Ratings are transient classification results; the engine
//! persists only raw values.

use serde::Serialize;
use std::fmt::{self, Display};

/// Three-tier rating of a measurement against its published thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UxRating {
    /// Within the published "good" budget.
    Good,
    /// Above "good" but within the needs-improvement budget.
    NeedsImprovement,
    /// Above the needs-improvement budget.
    Poor,
}

impl Display for UxRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UxRating::Good => write!(f, "good"),
            UxRating::NeedsImprovement => write!(f, "needs-improvement"),
            UxRating::Poor => write!(f, "poor"),
        }
    }
}

/// The fixed set of recognized Core-UX-Metric codes.
///
/// Three of these are wired to continuous instrumentation subscriptions
/// ([`Lcp`](UxMetricId::Lcp), [`Fid`](UxMetricId::Fid),
/// [`Cls`](UxMetricId::Cls)); the other two are recognized names with
/// published thresholds that call sites record manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UxMetricId {
    /// Largest rendered content paint time, in milliseconds.
    Lcp,
    /// First interaction response delay, in milliseconds.
    Fid,
    /// Cumulative unexpected layout movement, unitless.
    Cls,
    /// First rendered content paint time, in milliseconds.
    Fcp,
    /// Time to first response byte, in milliseconds.
    Ttfb,
}

impl UxMetricId {
    /// The code this metric is recorded under.
    pub fn code(&self) -> &'static str {
        match self {
            UxMetricId::Lcp => "LCP",
            UxMetricId::Fid => "FID",
            UxMetricId::Cls => "CLS",
            UxMetricId::Fcp => "FCP",
            UxMetricId::Ttfb => "TTFB",
        }
    }

    /// Published upper bounds `(good, needs_improvement)` for this metric.
    /// Values above the second bound rate [`UxRating::Poor`].
    pub fn thresholds(&self) -> (f64, f64) {
        match self {
            UxMetricId::Lcp => (2500.0, 4000.0),
            UxMetricId::Fid => (100.0, 300.0),
            UxMetricId::Cls => (0.1, 0.25),
            UxMetricId::Fcp => (1800.0, 3000.0),
            UxMetricId::Ttfb => (800.0, 1800.0),
        }
    }

    /// Rates a raw value against this metric's published thresholds.
    pub fn rate(&self, value: f64) -> UxRating {
        let (good, needs_improvement) = self.thresholds();
        match value {
            v if v <= good => UxRating::Good,
            v if v <= needs_improvement => UxRating::NeedsImprovement,
            _ => UxRating::Poor,
        }
    }

    /// Builds the full transient classification result for a raw value.
    pub fn classify(&self, value: f64) -> UxMetric {
        UxMetric {
            id: *self,
            value,
            rating: self.rate(value),
        }
    }
}

impl Display for UxMetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A transient classification result for one raw instrumentation event.
///
/// Produced by a classifier and returned to its caller; the engine never
/// persists the rating, only the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UxMetric {
    /// Which Core-UX-Metric this result belongs to.
    #[serde(rename = "name")]
    pub id: UxMetricId,
    /// The derived raw value.
    pub value: f64,
    /// The three-tier rating of `value`.
    pub rating: UxRating,
}
