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

//! Lifecycle management for instrumentation subscriptions.
//!
//! Each supported category gets one live subscription: a worker thread
//! draining the host's event channel and forwarding normalized samples into
//! the store. Subscriptions are created together at monitoring start and
//! torn down together at stop; there is no per-subscription cancel.

use crate::classify;
use crate::storage::backend::SampleBackend;
use pulse_core::telemetry::event::{InstrumentEvent, LONG_TASK_NAME};
use pulse_core::telemetry::instrument::{InstrumentCategory, InstrumentHost};
use pulse_core::{MetricSample, SampleKind};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// One live registration on an instrumentation category.
#[derive(Debug)]
struct Subscription {
    category: InstrumentCategory,
    shutdown: flume::Sender<()>,
    worker: JoinHandle<()>,
}

/// A thread-safe registry owning every active subscription.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl SubscriptionSet {
    /// Creates a new, empty subscription set.
    pub fn new() -> Self {
        Self {
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Probes every continuous category on `host` and attaches a worker for
    /// each supported one.
    ///
    /// Categories are independent: an unsupported category is skipped
    /// without affecting the others.
    pub fn attach_all(&self, host: &dyn InstrumentHost, backend: Arc<dyn SampleBackend>) {
        for category in InstrumentCategory::ALL {
            match host.subscribe(category) {
                Some(events) => self.attach(category, events, backend.clone()),
                None => {
                    log::debug!("Instrumentation category {category} unsupported by host, skipping")
                }
            }
        }
    }

    fn attach(
        &self,
        category: InstrumentCategory,
        events: flume::Receiver<InstrumentEvent>,
        backend: Arc<dyn SampleBackend>,
    ) {
        let (shutdown_tx, shutdown_rx) = flume::bounded(1);
        let spawned = std::thread::Builder::new()
            .name(format!("pulse-sub-{category}"))
            .spawn(move || run_worker(category, events, shutdown_rx, backend));

        match spawned {
            Ok(worker) => {
                let mut subscriptions = self.subscriptions.lock().unwrap();
                subscriptions.push(Subscription {
                    category,
                    shutdown: shutdown_tx,
                    worker,
                });
                log::info!("Attached {category} subscription");
            }
            Err(e) => log::warn!("Failed to spawn worker for {category}: {e}"),
        }
    }

    /// Signals every worker to stop, joins it, and clears the list.
    ///
    /// Safe to call when no subscriptions are active (no-op).
    pub fn disconnect_all(&self) {
        let drained: Vec<Subscription> = {
            let mut subscriptions = self.subscriptions.lock().unwrap();
            subscriptions.drain(..).collect()
        };

        for subscription in drained {
            let _ = subscription.shutdown.send(());
            if subscription.worker.join().is_err() {
                log::warn!(
                    "Worker for {} panicked during shutdown",
                    subscription.category
                );
            }
        }
    }

    /// The number of currently active subscriptions.
    pub fn active_count(&self) -> usize {
        self.subscriptions.lock().unwrap().len()
    }
}

enum Wake {
    Event(InstrumentEvent),
    Stop,
}

fn run_worker(
    category: InstrumentCategory,
    events: flume::Receiver<InstrumentEvent>,
    shutdown: flume::Receiver<()>,
    backend: Arc<dyn SampleBackend>,
) {
    loop {
        let wake = flume::Selector::new()
            .recv(&events, |res| match res {
                Ok(event) => Wake::Event(event),
                Err(_) => Wake::Stop,
            })
            .recv(&shutdown, |_| Wake::Stop)
            .wait();

        match wake {
            Wake::Event(event) => deliver(event, backend.as_ref()),
            Wake::Stop => break,
        }
    }
    log::trace!("Worker for {category} stopped");
}

/// Normalizes one event into a sample and appends it.
///
/// Only the raw value reaches the store; classifier ratings stay with this
/// caller and are not persisted.
fn deliver(event: InstrumentEvent, backend: &dyn SampleBackend) {
    let sample = match event {
        InstrumentEvent::Resource(entry) => {
            Some(MetricSample::timing(entry.sample_name(), entry.duration_ms))
        }
        InstrumentEvent::LongTask(entry) => {
            Some(MetricSample::timing(LONG_TASK_NAME, entry.duration_ms))
        }
        InstrumentEvent::LargestPaint(entry) => {
            let metric = classify::classify_largest_paint(&entry);
            Some(MetricSample::timing(metric.id.code(), metric.value))
        }
        InstrumentEvent::FirstInput(entry) => {
            let metric = classify::classify_first_input(&entry);
            Some(MetricSample::timing(metric.id.code(), metric.value))
        }
        InstrumentEvent::LayoutShift(entry) => {
            classify::classify_layout_shift(&entry).map(|metric| {
                log::debug!("{} rated {}", metric.id.code(), metric.rating);
                MetricSample::new(metric.id.code(), metric.value, SampleKind::Gauge)
            })
        }
    };

    if let Some(sample) = sample {
        if let Err(e) = backend.append(sample) {
            log::warn!("Failed to record sample: {e}");
        }
    }
}
