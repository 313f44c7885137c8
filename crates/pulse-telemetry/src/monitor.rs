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

//! The engine facade owning the sample store and the subscriptions.

use crate::report::PerformanceReport;
use crate::storage::backend::SampleBackend;
use crate::storage::memory_backend::InMemoryBackend;
use crate::subscription::SubscriptionSet;
use pulse_core::telemetry::instrument::InstrumentHost;
use pulse_core::{MetricSample, SampleKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide performance monitor.
///
/// One instance is expected per running process. Construct it explicitly
/// and inject it (typically behind an `Arc`) into every call site that
/// records or reads metrics; the instance exclusively owns its store and
/// its subscriptions. The caller is responsible for calling
/// [`stop_monitoring`](PerformanceMonitor::stop_monitoring) before the
/// instance is replaced or the process exits.
///
/// Every operation on the public surface is synchronous, non-suspending,
/// and infallible; internal failures are logged and swallowed.
#[derive(Debug)]
pub struct PerformanceMonitor {
    host: Arc<dyn InstrumentHost>,
    backend: Arc<dyn SampleBackend>,
    subscriptions: SubscriptionSet,
    monitoring: AtomicBool,
}

impl PerformanceMonitor {
    /// Creates a monitor over `host` with the default in-memory store.
    pub fn new(host: Arc<dyn InstrumentHost>) -> Self {
        Self::with_backend(host, Arc::new(InMemoryBackend::new()))
    }

    /// Creates a monitor over `host` with a custom storage backend.
    pub fn with_backend(host: Arc<dyn InstrumentHost>, backend: Arc<dyn SampleBackend>) -> Self {
        Self {
            host,
            backend,
            subscriptions: SubscriptionSet::new(),
            monitoring: AtomicBool::new(false),
        }
    }

    /// Attaches every instrumentation category the host supports.
    ///
    /// Performs a one-shot read of the navigation record, recording one
    /// timing sample per navigation phase, then subscribes to each
    /// continuous category independently; unsupported categories are
    /// skipped. Calling this while monitoring is already active is a
    /// logged no-op.
    pub fn start_monitoring(&self) {
        if self.monitoring.swap(true, Ordering::SeqCst) {
            log::debug!("Monitoring already active, ignoring duplicate start");
            return;
        }

        if let Some(navigation) = self.host.navigation_timing() {
            for (label, duration_ms) in navigation.phases() {
                self.record(label, duration_ms);
            }
        }

        self.subscriptions
            .attach_all(self.host.as_ref(), self.backend.clone());
    }

    /// Disconnects every active subscription.
    ///
    /// Safe to call when nothing is active. Recorded samples are kept.
    pub fn stop_monitoring(&self) {
        self.subscriptions.disconnect_all();
        self.monitoring.store(false, Ordering::SeqCst);
    }

    /// Whether monitoring is currently active.
    pub fn is_monitoring(&self) -> bool {
        self.monitoring.load(Ordering::SeqCst)
    }

    /// The number of live instrumentation subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.active_count()
    }

    /// Appends a timing sample. Never fails; any numeric value is stored
    /// as given, without validation.
    pub fn record(&self, name: impl Into<String>, value: f64) {
        self.record_kind(name, value, SampleKind::Timing);
    }

    /// Appends a sample of an explicit kind.
    pub fn record_kind(&self, name: impl Into<String>, value: f64, kind: SampleKind) {
        if let Err(e) = self.backend.append(MetricSample::new(name, value, kind)) {
            log::warn!("Failed to record sample: {e}");
        }
    }

    /// Snapshot copy of all recorded samples, in insertion order.
    pub fn samples(&self) -> Vec<MetricSample> {
        self.backend.snapshot()
    }

    /// Snapshot copy filtered by exact, case-sensitive name match.
    pub fn samples_named(&self, name: &str) -> Vec<MetricSample> {
        self.backend.snapshot_named(name)
    }

    /// The number of samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.backend.sample_count()
    }

    /// Discards every recorded sample. Active subscriptions keep running.
    ///
    /// When the monitor is shared across call sites, this wipes the log for
    /// all of them; no caller may assume exclusive ownership of the store.
    pub fn clear(&self) {
        if let Err(e) = self.backend.clear() {
            log::warn!("Failed to clear sample log: {e}");
        }
    }

    /// Aggregates the full recorded history into a report. Read-only and
    /// infallible: generating a report never mutates the store.
    pub fn generate_report(&self) -> PerformanceReport {
        PerformanceReport::from_samples(&self.backend.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::telemetry::event::{InstrumentEvent, NavigationTiming};
    use pulse_core::telemetry::instrument::InstrumentCategory;
    use approx::assert_relative_eq;

    /// Host exposing only the one-shot navigation record.
    #[derive(Debug)]
    struct NavigationOnlyHost {
        navigation: NavigationTiming,
    }

    impl InstrumentHost for NavigationOnlyHost {
        fn navigation_timing(&self) -> Option<NavigationTiming> {
            Some(self.navigation)
        }

        fn subscribe(
            &self,
            _category: InstrumentCategory,
        ) -> Option<flume::Receiver<InstrumentEvent>> {
            None
        }
    }

    /// Host with no instrumentation support at all.
    #[derive(Debug)]
    struct BareHost;

    impl InstrumentHost for BareHost {
        fn navigation_timing(&self) -> Option<NavigationTiming> {
            None
        }

        fn subscribe(
            &self,
            _category: InstrumentCategory,
        ) -> Option<flume::Receiver<InstrumentEvent>> {
            None
        }
    }

    fn bare_monitor() -> PerformanceMonitor {
        PerformanceMonitor::new(Arc::new(BareHost))
    }

    #[test]
    fn test_record_and_list_in_call_order() {
        let monitor = bare_monitor();
        monitor.record("A", 1.0);
        monitor.record("B", 2.0);
        monitor.record("A", 3.0);

        let all = monitor.samples();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "A");
        assert_eq!(all[1].name, "B");
        assert_eq!(all[2].value, 3.0);

        let named = monitor.samples_named("A");
        assert_eq!(named.len(), 2);
        assert_eq!(named[0].value, 1.0);
        assert_eq!(named[1].value, 3.0);
    }

    #[test]
    fn test_queries_are_read_only() {
        let monitor = bare_monitor();
        monitor.record("A", 1.0);

        let first = monitor.generate_report();
        let second = monitor.generate_report();
        assert_eq!(first.summary, second.summary);
        assert_eq!(monitor.sample_count(), 1);

        let _ = monitor.samples();
        assert_eq!(monitor.sample_count(), 1);
    }

    #[test]
    fn test_summary_average() {
        let monitor = bare_monitor();
        monitor.record("A", 1.0);
        monitor.record("B", 2.0);
        monitor.record("A", 3.0);

        let report = monitor.generate_report();
        assert_relative_eq!(report.summary["A"], 2.0);
    }

    #[test]
    fn test_clear_resets_samples_only() {
        let monitor = bare_monitor();
        monitor.record("x", 1.0);
        monitor.clear();

        assert!(monitor.samples().is_empty());
        assert!(monitor.samples_named("x").is_empty());

        let report = monitor.generate_report();
        assert!(report.summary.is_empty());
        assert!(report.core_metrics.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_bare_host_lifecycle_is_harmless() {
        let monitor = bare_monitor();
        monitor.start_monitoring();
        assert!(monitor.is_monitoring());
        assert_eq!(monitor.active_subscriptions(), 0);

        monitor.stop_monitoring();
        assert!(!monitor.is_monitoring());
        assert_eq!(monitor.sample_count(), 0);
    }

    #[test]
    fn test_navigation_phases_recorded_at_start() {
        let host = NavigationOnlyHost {
            navigation: NavigationTiming {
                domain_lookup_start: 0.0,
                domain_lookup_end: 12.0,
                connect_start: 12.0,
                connect_end: 40.0,
                request_start: 40.0,
                response_start: 160.0,
                response_end: 220.0,
                dom_interactive: 260.0,
                dom_complete: 600.0,
                load_event_start: 600.0,
                load_event_end: 612.0,
            },
        };
        let monitor = PerformanceMonitor::new(Arc::new(host));
        monitor.start_monitoring();

        assert_eq!(monitor.sample_count(), 6);
        let dns = monitor.samples_named("DNS Lookup");
        assert_eq!(dns.len(), 1);
        assert_relative_eq!(dns[0].value, 12.0);
        let dom = monitor.samples_named("DOM Processing");
        assert_relative_eq!(dom[0].value, 340.0);

        monitor.stop_monitoring();
    }

    #[test]
    fn test_duplicate_start_is_ignored() {
        let host = NavigationOnlyHost {
            navigation: NavigationTiming::default(),
        };
        let monitor = PerformanceMonitor::new(Arc::new(host));
        monitor.start_monitoring();
        let after_first = monitor.sample_count();

        // A second start must not re-read navigation or re-subscribe.
        monitor.start_monitoring();
        assert_eq!(monitor.sample_count(), after_first);

        monitor.stop_monitoring();
    }

    #[test]
    fn test_permissive_record_accepts_garbage() {
        let monitor = bare_monitor();
        monitor.record("weird", f64::NAN);
        monitor.record("weird", -10.0);

        assert_eq!(monitor.sample_count(), 2);
        let report = monitor.generate_report();
        // NaN propagates into the average, as accepted policy.
        assert!(report.summary["weird"].is_nan());
    }
}
