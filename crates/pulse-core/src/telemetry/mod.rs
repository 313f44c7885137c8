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

//! Provides the foundational traits and data structures for telemetry.
//!
//! This module defines the "common language" of the performance telemetry
//! engine: the sample record every observation is normalized into, the raw
//! event shapes delivered by instrumentation sources, the user-experience
//! metric ratings with their published thresholds, and the capability
//! contract a hosting runtime exposes. The abstract "what" lives here;
//! `pulse-telemetry` provides the engine that aggregates it and
//! `pulse-infra` the concrete hosts that collect it.

pub mod event;
pub mod instrument;
pub mod sample;
pub mod vitals;

pub use self::event::{
    InputTiming, InstrumentEvent, LayoutShift, LongTaskTiming, NavigationTiming, PaintTiming,
    ResourceTiming,
};
pub use self::instrument::{InstrumentCategory, InstrumentHost};
pub use self::sample::{MetricSample, SampleKind};
pub use self::vitals::{UxMetric, UxMetricId, UxRating};
