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

//! Aggregated reporting over the recorded sample log.

use pulse_core::telemetry::event::LONG_TASK_NAME;
use pulse_core::telemetry::vitals::{UxMetric, UxMetricId};
use pulse_core::MetricSample;
use serde::Serialize;
use std::collections::HashMap;

/// Average long-task duration (ms) above which main-thread work is flagged.
const LONG_TASK_BUDGET_MS: f64 = 50.0;
/// Average largest-paint time (ms) above which the critical path is flagged.
const LARGEST_PAINT_BUDGET_MS: f64 = 2500.0;
/// Average input delay (ms) above which script execution is flagged.
const INPUT_DELAY_BUDGET_MS: f64 = 100.0;

/// An aggregated view over the full recorded history.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    /// Arithmetic mean of all recorded values, keyed by sample name. Names
    /// with no samples are simply absent.
    pub summary: HashMap<String, f64>,
    /// Classified Core-UX-Metric results. Ratings are not persisted by the
    /// engine, so this list is empty today; the field is part of the report
    /// shape for consumers.
    pub core_metrics: Vec<UxMetric>,
    /// Tuning suggestions derived from `summary`. Rules are independent and
    /// non-exclusive.
    pub recommendations: Vec<String>,
}

impl PerformanceReport {
    /// Aggregates a snapshot of the sample log. Never fails; an empty
    /// snapshot yields an empty report.
    pub fn from_samples(samples: &[MetricSample]) -> Self {
        let mut totals: HashMap<String, (f64, usize)> = HashMap::new();
        for sample in samples {
            let entry = totals.entry(sample.name.clone()).or_insert((0.0, 0));
            entry.0 += sample.value;
            entry.1 += 1;
        }

        // Only names with at least one sample reach the map, so the count
        // is never zero here.
        let summary: HashMap<String, f64> = totals
            .into_iter()
            .map(|(name, (sum, count))| (name, sum / count as f64))
            .collect();

        let recommendations = recommend(&summary);

        Self {
            summary,
            core_metrics: Vec::new(),
            recommendations,
        }
    }
}

fn recommend(summary: &HashMap<String, f64>) -> Vec<String> {
    let mut recommendations = Vec::new();

    if exceeds(summary, LONG_TASK_NAME, LONG_TASK_BUDGET_MS) {
        recommendations.push(format!(
            "Reduce main-thread blocking work: long tasks average above {LONG_TASK_BUDGET_MS} ms"
        ));
    }
    if exceeds(summary, UxMetricId::Lcp.code(), LARGEST_PAINT_BUDGET_MS) {
        recommendations.push(format!(
            "Optimize critical-path resources: largest content paint averages above {LARGEST_PAINT_BUDGET_MS} ms"
        ));
    }
    if exceeds(summary, UxMetricId::Fid.code(), INPUT_DELAY_BUDGET_MS) {
        recommendations.push(format!(
            "Reduce main-thread script execution: input responses average above {INPUT_DELAY_BUDGET_MS} ms"
        ));
    }

    recommendations
}

fn exceeds(summary: &HashMap<String, f64>, name: &str, budget: f64) -> bool {
    summary.get(name).is_some_and(|avg| *avg > budget)
}
