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

//! Demo wiring: a channel host fed with a synthetic browsing session,
//! reported as JSON on stdout. Run with `RUST_LOG=debug` to watch the
//! classifier ratings go by.

use anyhow::Result;
use pulse_core::telemetry::event::{
    InputTiming, InstrumentEvent, LayoutShift, LongTaskTiming, NavigationTiming, PaintTiming,
    ResourceTiming,
};
use pulse_infra::ChannelHost;
use pulse_telemetry::{InMemoryBackend, PerformanceMonitor};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    env_logger::init();

    let host = Arc::new(ChannelHost::new());
    host.set_navigation_timing(NavigationTiming {
        domain_lookup_start: 3.0,
        domain_lookup_end: 27.0,
        connect_start: 27.0,
        connect_end: 71.0,
        request_start: 71.0,
        response_start: 198.0,
        response_end: 275.0,
        dom_interactive: 320.0,
        dom_complete: 810.0,
        load_event_start: 810.0,
        load_event_end: 828.0,
    });

    let backend = Arc::new(InMemoryBackend::new());
    let monitor = PerformanceMonitor::with_backend(host.clone(), backend.clone());
    monitor.start_monitoring();
    log::info!(
        "Monitoring started with {} subscriptions",
        monitor.active_subscriptions()
    );

    let producer = {
        let host = host.clone();
        thread::spawn(move || replay_session(&host))
    };
    if producer.join().is_err() {
        log::warn!("Session producer panicked");
    }

    // Give the subscription workers a moment to drain their channels.
    thread::sleep(Duration::from_millis(100));
    log::info!(
        "Recorded {} samples across {} distinct names",
        monitor.sample_count(),
        backend.names().len()
    );

    let report = monitor.generate_report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    monitor.stop_monitoring();
    Ok(())
}

/// Replays a small synthetic browsing session into the host.
fn replay_session(host: &ChannelHost) {
    let resources = [
        ("https://cdn.example/app.js", 142.0),
        ("https://cdn.example/styles.css", 38.0),
        ("https://img.example/hero.webp", 210.0),
    ];
    for (name, duration_ms) in resources {
        host.publish(InstrumentEvent::Resource(ResourceTiming {
            name: name.to_string(),
            duration_ms,
        }));
        thread::sleep(Duration::from_millis(5));
    }

    host.publish(InstrumentEvent::LargestPaint(PaintTiming { start_ms: 2350.0 }));
    host.publish(InstrumentEvent::LargestPaint(PaintTiming { start_ms: 2750.0 }));

    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 86.0 }));
    host.publish(InstrumentEvent::LongTask(LongTaskTiming { duration_ms: 61.0 }));

    host.publish(InstrumentEvent::FirstInput(InputTiming {
        start_ms: 3400.0,
        processing_start_ms: 3472.0,
    }));

    host.publish(InstrumentEvent::LayoutShift(LayoutShift {
        value: 0.02,
        had_recent_input: false,
    }));
    host.publish(InstrumentEvent::LayoutShift(LayoutShift {
        value: 0.31,
        had_recent_input: true,
    }));
}
