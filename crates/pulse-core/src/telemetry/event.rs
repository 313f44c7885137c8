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

//! Normalized event shapes delivered by instrumentation sources.
//!
//! Hosting runtimes expose timing data in heterogeneous entry formats; the
//! types here are the narrow, runtime-agnostic shapes the engine consumes.
//! All timestamps and durations are in milliseconds relative to whatever
//! clock the host provides.

use crate::telemetry::instrument::InstrumentCategory;

/// Sample name used for long-running main-thread tasks.
pub const LONG_TASK_NAME: &str = "Long Task";

/// Prefix for per-resource sample names.
pub const RESOURCE_PREFIX: &str = "Resource: ";

/// Raw phase timestamps of a single navigation record.
///
/// Each phase duration is an end-timestamp minus a start-timestamp from this
/// one record; no cross-record correlation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationTiming {
    /// Start of the name-resolution phase.
    pub domain_lookup_start: f64,
    /// End of the name-resolution phase.
    pub domain_lookup_end: f64,
    /// Start of the transport-connect phase.
    pub connect_start: f64,
    /// End of the transport-connect phase.
    pub connect_end: f64,
    /// Moment the request was issued.
    pub request_start: f64,
    /// Moment the first response byte arrived.
    pub response_start: f64,
    /// Moment the last response byte arrived.
    pub response_end: f64,
    /// Moment the document became interactive.
    pub dom_interactive: f64,
    /// Moment document processing completed.
    pub dom_complete: f64,
    /// Start of the load-complete phase.
    pub load_event_start: f64,
    /// End of the load-complete phase.
    pub load_event_end: f64,
}

impl NavigationTiming {
    /// Duration of the name-resolution phase.
    pub fn dns_lookup_ms(&self) -> f64 {
        self.domain_lookup_end - self.domain_lookup_start
    }

    /// Duration of the transport-connect phase.
    pub fn tcp_connect_ms(&self) -> f64 {
        self.connect_end - self.connect_start
    }

    /// Time from issuing the request to the first response byte.
    pub fn request_ms(&self) -> f64 {
        self.response_start - self.request_start
    }

    /// Time spent receiving the response body.
    pub fn response_ms(&self) -> f64 {
        self.response_end - self.response_start
    }

    /// Time spent processing the document after it became interactive.
    pub fn dom_processing_ms(&self) -> f64 {
        self.dom_complete - self.dom_interactive
    }

    /// Duration of the load-complete phase.
    pub fn load_complete_ms(&self) -> f64 {
        self.load_event_end - self.load_event_start
    }

    /// The six navigation phases as `(label, duration_ms)` pairs, in
    /// chronological order.
    pub fn phases(&self) -> [(&'static str, f64); 6] {
        [
            ("DNS Lookup", self.dns_lookup_ms()),
            ("TCP Connect", self.tcp_connect_ms()),
            ("Request", self.request_ms()),
            ("Response", self.response_ms()),
            ("DOM Processing", self.dom_processing_ms()),
            ("Load Complete", self.load_complete_ms()),
        ]
    }
}

/// One resource-load entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTiming {
    /// Name of the loaded resource, typically its URL.
    pub name: String,
    /// Total load duration.
    pub duration_ms: f64,
}

impl ResourceTiming {
    /// The sample name this entry is recorded under.
    pub fn sample_name(&self) -> String {
        format!("{RESOURCE_PREFIX}{}", self.name)
    }
}

/// One long-running main-thread task occurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongTaskTiming {
    /// How long the task blocked the main thread.
    pub duration_ms: f64,
}

/// A largest-content paint candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintTiming {
    /// When the paint happened, relative to navigation start.
    pub start_ms: f64,
}

/// A first user-interaction entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputTiming {
    /// When the input was received.
    pub start_ms: f64,
    /// When the handler started processing it.
    pub processing_start_ms: f64,
}

/// One unexpected layout movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutShift {
    /// Magnitude of the shift (unitless score).
    pub value: f64,
    /// Whether the shift followed recent user input. Shifts caused by input
    /// are expected and are not counted against layout stability.
    pub had_recent_input: bool,
}

/// A raw instrumentation event from one of the continuous categories.
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentEvent {
    /// A resource finished loading.
    Resource(ResourceTiming),
    /// A long-running main-thread task completed.
    LongTask(LongTaskTiming),
    /// A new largest-content paint candidate was observed.
    LargestPaint(PaintTiming),
    /// The first user interaction was handled.
    FirstInput(InputTiming),
    /// The layout moved unexpectedly.
    LayoutShift(LayoutShift),
}

impl InstrumentEvent {
    /// The instrumentation category this event belongs to.
    pub fn category(&self) -> InstrumentCategory {
        match self {
            InstrumentEvent::Resource(_) => InstrumentCategory::Resource,
            InstrumentEvent::LongTask(_) => InstrumentCategory::LongTask,
            InstrumentEvent::LargestPaint(_) => InstrumentCategory::LargestContentfulPaint,
            InstrumentEvent::FirstInput(_) => InstrumentCategory::FirstInputDelay,
            InstrumentEvent::LayoutShift(_) => InstrumentCategory::LayoutShift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_navigation() -> NavigationTiming {
        NavigationTiming {
            domain_lookup_start: 5.0,
            domain_lookup_end: 25.0,
            connect_start: 25.0,
            connect_end: 65.0,
            request_start: 65.0,
            response_start: 180.0,
            response_end: 260.0,
            dom_interactive: 300.0,
            dom_complete: 720.0,
            load_event_start: 720.0,
            load_event_end: 735.0,
        }
    }

    #[test]
    fn test_phase_durations_are_end_minus_start() {
        let nav = sample_navigation();
        assert_relative_eq!(nav.dns_lookup_ms(), 20.0);
        assert_relative_eq!(nav.tcp_connect_ms(), 40.0);
        assert_relative_eq!(nav.request_ms(), 115.0);
        assert_relative_eq!(nav.response_ms(), 80.0);
        assert_relative_eq!(nav.dom_processing_ms(), 420.0);
        assert_relative_eq!(nav.load_complete_ms(), 15.0);
    }

    #[test]
    fn test_phases_are_labelled_in_order() {
        let labels: Vec<&str> = sample_navigation()
            .phases()
            .iter()
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "DNS Lookup",
                "TCP Connect",
                "Request",
                "Response",
                "DOM Processing",
                "Load Complete"
            ]
        );
    }

    #[test]
    fn test_resource_sample_name() {
        let entry = ResourceTiming {
            name: "https://cdn.example/app.js".to_string(),
            duration_ms: 31.0,
        };
        assert_eq!(entry.sample_name(), "Resource: https://cdn.example/app.js");
    }

    #[test]
    fn test_event_category_mapping() {
        let event = InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 80.0 });
        assert_eq!(event.category(), InstrumentCategory::LongTask);

        let event = InstrumentEvent::LayoutShift(LayoutShift {
            value: 0.02,
            had_recent_input: false,
        });
        assert_eq!(event.category(), InstrumentCategory::LayoutShift);
    }
}
