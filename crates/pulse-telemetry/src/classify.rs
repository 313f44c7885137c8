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

//! Pure classification rules for the wired Core-UX-Metrics.
//!
//! Each function derives the metric's raw value from one instrumentation
//! event and rates it against the published thresholds. Classifiers never
//! touch storage; recording the raw value is the subscription worker's job.

use pulse_core::telemetry::event::{InputTiming, LayoutShift, PaintTiming};
use pulse_core::telemetry::vitals::{UxMetric, UxMetricId};

/// Classifies a largest-content paint candidate. The derived value is the
/// paint's start time.
pub fn classify_largest_paint(entry: &PaintTiming) -> UxMetric {
    UxMetricId::Lcp.classify(entry.start_ms)
}

/// Classifies a first user-interaction entry. The derived value is the
/// delay between receiving the input and starting to process it.
pub fn classify_first_input(entry: &InputTiming) -> UxMetric {
    UxMetricId::Fid.classify(entry.processing_start_ms - entry.start_ms)
}

/// Classifies one layout movement. Shifts that followed recent user input
/// are expected and return `None`: they count neither toward the rating nor
/// toward the recorded samples.
pub fn classify_layout_shift(entry: &LayoutShift) -> Option<UxMetric> {
    if entry.had_recent_input {
        return None;
    }
    Some(UxMetricId::Cls.classify(entry.value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::telemetry::vitals::UxRating;

    #[test]
    fn test_largest_paint_uses_start_time() {
        let metric = classify_largest_paint(&PaintTiming { start_ms: 1900.0 });
        assert_eq!(metric.id, UxMetricId::Lcp);
        assert_eq!(metric.value, 1900.0);
        assert_eq!(metric.rating, UxRating::Good);

        let slow = classify_largest_paint(&PaintTiming { start_ms: 4100.0 });
        assert_eq!(slow.rating, UxRating::Poor);
    }

    #[test]
    fn test_first_input_uses_processing_delay() {
        let metric = classify_first_input(&InputTiming {
            start_ms: 1000.0,
            processing_start_ms: 1150.0,
        });
        assert_eq!(metric.id, UxMetricId::Fid);
        assert_eq!(metric.value, 150.0);
        assert_eq!(metric.rating, UxRating::NeedsImprovement);
    }

    #[test]
    fn test_layout_shift_skips_recent_input() {
        let ignored = classify_layout_shift(&LayoutShift {
            value: 0.5,
            had_recent_input: true,
        });
        assert!(ignored.is_none());

        let counted = classify_layout_shift(&LayoutShift {
            value: 0.08,
            had_recent_input: false,
        })
        .unwrap();
        assert_eq!(counted.id, UxMetricId::Cls);
        assert_eq!(counted.rating, UxRating::Good);
    }
}
