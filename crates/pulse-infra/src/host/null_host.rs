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

//! A host with no instrumentation capabilities.

use pulse_core::telemetry::event::{InstrumentEvent, NavigationTiming};
use pulse_core::telemetry::instrument::{InstrumentCategory, InstrumentHost};

/// An [`InstrumentHost`] that supports nothing.
///
/// For embedding the engine in environments without any instrumentation:
/// every probe reports unsupported, so the engine degrades to manual
/// `record` calls only.
#[derive(Debug, Default)]
pub struct NullHost;

impl InstrumentHost for NullHost {
    fn navigation_timing(&self) -> Option<NavigationTiming> {
        None
    }

    fn subscribe(&self, _category: InstrumentCategory) -> Option<flume::Receiver<InstrumentEvent>> {
        None
    }
}
