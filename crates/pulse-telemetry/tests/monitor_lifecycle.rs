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

use approx::assert_relative_eq;
use pulse_core::telemetry::event::{
    InputTiming, InstrumentEvent, LayoutShift, LongTaskTiming, NavigationTiming, PaintTiming,
    ResourceTiming,
};
use pulse_core::telemetry::instrument::InstrumentCategory;
use pulse_infra::{ChannelHost, NullHost};
use pulse_telemetry::PerformanceMonitor;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn wait_for_samples(monitor: &PerformanceMonitor, expected: usize) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while monitor.sample_count() < expected {
        assert!(
            Instant::now() < deadline,
            "Timed out waiting for {expected} samples, have {}",
            monitor.sample_count()
        );
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn demo_navigation() -> NavigationTiming {
    NavigationTiming {
        domain_lookup_start: 2.0,
        domain_lookup_end: 20.0,
        connect_start: 20.0,
        connect_end: 55.0,
        request_start: 55.0,
        response_start: 175.0,
        response_end: 240.0,
        dom_interactive: 280.0,
        dom_complete: 650.0,
        load_event_start: 650.0,
        load_event_end: 662.0,
    }
}

#[test]
fn test_published_events_become_samples_and_report() {
    // --- 1. ARRANGE ---
    let host = Arc::new(ChannelHost::new());
    host.set_navigation_timing(demo_navigation());
    let monitor = PerformanceMonitor::new(host.clone());

    // --- 2. ACT ---
    monitor.start_monitoring();
    assert_eq!(monitor.active_subscriptions(), 5);

    host.publish(InstrumentEvent::Resource(ResourceTiming {
        name: "app.js".to_string(),
        duration_ms: 48.0,
    }));
    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 70.0 }));
    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 50.0 }));
    host.publish(InstrumentEvent::LargestPaint(PaintTiming { start_ms: 2100.0 }));
    host.publish(InstrumentEvent::FirstInput(InputTiming {
        start_ms: 3000.0,
        processing_start_ms: 3040.0,
    }));
    host.publish(InstrumentEvent::LayoutShift(LayoutShift {
        value: 0.04,
        had_recent_input: false,
    }));

    // 6 navigation phases recorded synchronously at start + 6 events.
    wait_for_samples(&monitor, 12);
    monitor.stop_monitoring();

    // --- 3. ASSERT ---
    assert_eq!(monitor.samples_named("Resource: app.js").len(), 1);
    assert_eq!(monitor.samples_named("Long Task").len(), 2);
    assert_relative_eq!(monitor.samples_named("DNS Lookup")[0].value, 18.0);

    let report = monitor.generate_report();
    assert_relative_eq!(report.summary["Long Task"], 60.0);
    assert_relative_eq!(report.summary["LCP"], 2100.0);
    assert_relative_eq!(report.summary["FID"], 40.0);
    assert_relative_eq!(report.summary["CLS"], 0.04);

    // Long tasks average above budget; paint and input do not.
    assert_eq!(report.recommendations.len(), 1);
    assert!(report.recommendations[0].contains("main-thread blocking"));

    // Ratings are never persisted.
    assert!(report.core_metrics.is_empty());
}

#[test]
fn test_stop_monitoring_halts_delivery() {
    let host = Arc::new(ChannelHost::new());
    let monitor = PerformanceMonitor::new(host.clone());

    monitor.start_monitoring();
    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 64.0 }));
    wait_for_samples(&monitor, 1);

    monitor.stop_monitoring();
    assert_eq!(monitor.active_subscriptions(), 0);

    // Events after stop stay in the host's channel and never reach the log.
    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 99.0 }));
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(monitor.sample_count(), 1);

    // Stopping again is a no-op.
    monitor.stop_monitoring();
}

#[test]
fn test_partial_host_degrades_gracefully() {
    let host = Arc::new(ChannelHost::with_categories(&[InstrumentCategory::Resource]));
    let monitor = PerformanceMonitor::new(host.clone());

    monitor.start_monitoring();
    assert_eq!(monitor.active_subscriptions(), 1);

    host.publish(InstrumentEvent::Resource(ResourceTiming {
        name: "logo.svg".to_string(),
        duration_ms: 9.0,
    }));
    // Dropped: the host does not support the long-task category.
    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 80.0 }));

    wait_for_samples(&monitor, 1);
    std::thread::sleep(Duration::from_millis(50));
    monitor.stop_monitoring();

    assert_eq!(monitor.sample_count(), 1);
    assert_eq!(monitor.samples()[0].name, "Resource: logo.svg");
}

#[test]
fn test_null_host_lifecycle_leaves_store_untouched() {
    let monitor = PerformanceMonitor::new(Arc::new(NullHost));

    monitor.start_monitoring();
    assert_eq!(monitor.active_subscriptions(), 0);
    monitor.stop_monitoring();

    assert_eq!(monitor.sample_count(), 0);
    let report = monitor.generate_report();
    assert!(report.summary.is_empty());
    assert!(report.recommendations.is_empty());
}

#[test]
fn test_duplicate_start_does_not_duplicate_subscriptions() {
    let host = Arc::new(ChannelHost::new());
    let monitor = PerformanceMonitor::new(host);

    monitor.start_monitoring();
    monitor.start_monitoring();
    assert_eq!(monitor.active_subscriptions(), 5);

    monitor.stop_monitoring();
    assert_eq!(monitor.active_subscriptions(), 0);

    // After a stop, monitoring can be restarted cleanly.
    monitor.start_monitoring();
    assert_eq!(monitor.active_subscriptions(), 5);
    monitor.stop_monitoring();
}

#[test]
fn test_manual_records_mix_with_subscription_samples() {
    let host = Arc::new(ChannelHost::new());
    let monitor = PerformanceMonitor::new(host.clone());

    monitor.start_monitoring();
    monitor.record("TTFB", 420.0);
    monitor.record("FCP", 1500.0);
    host.publish(InstrumentEvent::LargestPaint(PaintTiming { start_ms: 2800.0 }));
    wait_for_samples(&monitor, 3);
    monitor.stop_monitoring();

    let report = monitor.generate_report();
    assert_relative_eq!(report.summary["TTFB"], 420.0);
    assert_relative_eq!(report.summary["FCP"], 1500.0);
    // Average paint time above the critical-path budget.
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("critical-path")));
}
