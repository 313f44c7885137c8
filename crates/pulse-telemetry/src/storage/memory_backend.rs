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

use crate::storage::backend::{SampleBackend, TelemetryError, TelemetryResult};
use pulse_core::MetricSample;
use std::sync::RwLock;

/// In-memory append-only sample log using `RwLock<Vec>`.
///
/// This implementation provides:
/// - Thread-safe concurrent access (multiple readers, single writer)
/// - O(1) amortized appends
/// - Strict preservation of insertion order
#[derive(Debug)]
pub struct InMemoryBackend {
    /// The core storage - RwLock allows concurrent reads
    log: RwLock<Vec<MetricSample>>,
}

impl InMemoryBackend {
    /// Create a new in-memory backend
    pub fn new() -> Self {
        Self {
            log: RwLock::new(Vec::new()),
        }
    }

    /// Create a new in-memory backend with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            log: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// The distinct sample names currently present, in first-seen order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        if let Ok(log) = self.log.read() {
            for sample in log.iter() {
                if !names.iter().any(|n| n == &sample.name) {
                    names.push(sample.name.clone());
                }
            }
        }
        names
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleBackend for InMemoryBackend {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn append(&self, sample: MetricSample) -> TelemetryResult<()> {
        let mut log = self
            .log
            .write()
            .map_err(|_| TelemetryError::Storage("Failed to acquire write lock".to_string()))?;

        log.push(sample);
        Ok(())
    }

    fn snapshot(&self) -> Vec<MetricSample> {
        if let Ok(log) = self.log.read() {
            log.clone()
        } else {
            Vec::new()
        }
    }

    fn snapshot_named(&self, name: &str) -> Vec<MetricSample> {
        if let Ok(log) = self.log.read() {
            log.iter().filter(|s| s.name == name).cloned().collect()
        } else {
            Vec::new()
        }
    }

    fn clear(&self) -> TelemetryResult<()> {
        let mut log = self
            .log
            .write()
            .map_err(|_| TelemetryError::Storage("Failed to acquire write lock".to_string()))?;

        log.clear();
        Ok(())
    }

    fn sample_count(&self) -> usize {
        if let Ok(log) = self.log.read() {
            log.len()
        } else {
            0
        }
    }
}
