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

//! The uniform record type every observation is normalized into.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::time::SystemTime;

/// How a recorded value should conceptually be interpreted by consumers.
///
/// The kind never changes storage mechanics: every sample is stored and
/// averaged identically regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleKind {
    /// A duration, in milliseconds.
    Timing,
    /// An occurrence count.
    Counter,
    /// A point-in-time magnitude that can move in either direction.
    Gauge,
}

impl Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleKind::Timing => write!(f, "timing"),
            SampleKind::Counter => write!(f, "counter"),
            SampleKind::Gauge => write!(f, "gauge"),
        }
    }
}

/// One immutable recorded observation.
///
/// Samples are never mutated after creation; the store only appends them,
/// and insertion order is the only implicit ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSample {
    /// Identifier: a phase label (e.g. `"DNS Lookup"`), `"Long Task"`,
    /// a `"Resource: …"` entry, or a Core-UX-Metric code such as `"LCP"`.
    pub name: String,
    /// Magnitude; the unit depends on `name` (milliseconds for timings,
    /// unitless score for layout-shift style metrics). Stored as given,
    /// without validation of sign or range.
    pub value: f64,
    /// Interpretation hint, preserved for consumers.
    pub kind: SampleKind,
    /// Wall-clock creation time of the sample; used only for ordering and
    /// debugging, never for aggregation.
    pub timestamp: SystemTime,
}

impl MetricSample {
    /// Creates a new sample stamped with the current time.
    pub fn new(name: impl Into<String>, value: f64, kind: SampleKind) -> Self {
        Self {
            name: name.into(),
            value,
            kind,
            timestamp: SystemTime::now(),
        }
    }

    /// Convenience constructor for a [`SampleKind::Timing`] sample.
    pub fn timing(name: impl Into<String>, value_ms: f64) -> Self {
        Self::new(name, value_ms, SampleKind::Timing)
    }
}
