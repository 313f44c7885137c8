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

//! # Pulse Telemetry
//!
//! The runtime performance telemetry engine. A [`PerformanceMonitor`]
//! subscribes to whatever instrumentation categories its host supports,
//! normalizes the delivered events into an append-only sample log,
//! classifies the standardized user-experience metrics against their
//! published thresholds, and aggregates the log into a report with derived
//! recommendations.

pub mod classify;
pub mod monitor;
pub mod report;
pub mod storage;
pub mod subscription;

pub use monitor::PerformanceMonitor;
pub use report::PerformanceReport;
pub use storage::backend::{SampleBackend, TelemetryError, TelemetryResult};
pub use storage::memory_backend::InMemoryBackend;
