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

//! Channel-backed instrument host for embedders.

use pulse_core::event::EventBus;
use pulse_core::telemetry::event::{InstrumentEvent, NavigationTiming};
use pulse_core::telemetry::instrument::{InstrumentCategory, InstrumentHost};
use std::collections::HashMap;
use std::sync::Mutex;

/// An [`InstrumentHost`] backed by one event channel per supported category.
///
/// This is the bridge between whatever runtime actually produces timing
/// events and the telemetry engine: the embedder publishes raw events into
/// the host, and the engine subscribes to the categories it finds
/// supported. Events published before (or after) a subscription exists stay
/// queued in their category channel.
#[derive(Debug)]
pub struct ChannelHost {
    buses: HashMap<InstrumentCategory, EventBus<InstrumentEvent>>,
    navigation: Mutex<Option<NavigationTiming>>,
}

impl ChannelHost {
    /// Creates a host supporting every continuous category.
    pub fn new() -> Self {
        Self::with_categories(&InstrumentCategory::ALL)
    }

    /// Creates a host supporting exactly `categories`.
    ///
    /// Probes for any other category will report unsupported, which is how
    /// partial runtimes are modelled.
    pub fn with_categories(categories: &[InstrumentCategory]) -> Self {
        let buses = categories
            .iter()
            .map(|&category| (category, EventBus::new()))
            .collect();
        Self {
            buses,
            navigation: Mutex::new(None),
        }
    }

    /// Sets the navigation record returned by the one-shot probe.
    pub fn set_navigation_timing(&self, timing: NavigationTiming) {
        *self.navigation.lock().unwrap() = Some(timing);
    }

    /// Routes an event to its category channel.
    ///
    /// Events for categories this host does not support are dropped.
    pub fn publish(&self, event: InstrumentEvent) {
        match self.buses.get(&event.category()) {
            Some(bus) => bus.publish(event),
            None => log::trace!("Dropping event for unsupported category {}", event.category()),
        }
    }
}

impl Default for ChannelHost {
    fn default() -> Self {
        Self::new()
    }
}

impl InstrumentHost for ChannelHost {
    fn navigation_timing(&self) -> Option<NavigationTiming> {
        *self.navigation.lock().unwrap()
    }

    fn subscribe(&self, category: InstrumentCategory) -> Option<flume::Receiver<InstrumentEvent>> {
        self.buses.get(&category).map(|bus| bus.subscribe())
    }
}
