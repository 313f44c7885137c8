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

use pulse_core::MetricSample;
use std::fmt::{self, Debug, Display};

/// A specialized `Result` type for storage operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// An error that can occur within the telemetry storage layer.
#[derive(Debug, Clone)]
pub enum TelemetryError {
    /// An error originating from the backend storage layer.
    Storage(String),
}

impl Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for TelemetryError {}

/// Trait defining the interface for sample storage backends.
///
/// A backend is an append-only log: samples are immutable once appended,
/// insertion order is preserved, and it is the only implicit ordering.
/// Snapshots hand back copies, so a caller can never mutate the log through
/// a returned value.
pub trait SampleBackend: Send + Sync + Debug + 'static {
    /// Get a reference to this object as Any for downcasting
    fn as_any(&self) -> &dyn std::any::Any;

    /// Append one sample to the end of the log.
    fn append(&self, sample: MetricSample) -> TelemetryResult<()>;

    /// Snapshot copy of the full log, in insertion order.
    fn snapshot(&self) -> Vec<MetricSample>;

    /// Snapshot copy filtered by exact name match (case-sensitive, no
    /// normalization), in insertion order.
    fn snapshot_named(&self, name: &str) -> Vec<MetricSample>;

    /// Discard all samples. Subscriptions are a separate lifecycle and are
    /// unaffected.
    fn clear(&self) -> TelemetryResult<()>;

    /// The number of samples currently stored.
    fn sample_count(&self) -> usize;
}
