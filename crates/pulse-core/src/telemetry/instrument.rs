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

//! The capability contract between the engine and a hosting runtime.
//!
//! Instrumentation support varies by runtime and version, so nothing here is
//! guaranteed to exist: every capability is probed explicitly, once, at
//! subscription-setup time, and an unsupported category is simply absent
//! rather than an error.

use crate::telemetry::event::{InstrumentEvent, NavigationTiming};
use std::fmt::{self, Debug, Display};

/// A class of continuous low-level runtime event a host may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentCategory {
    /// Resource-load timing entries.
    Resource,
    /// Long-running main-thread task detection.
    LongTask,
    /// Largest-content paint candidates.
    LargestContentfulPaint,
    /// First user-interaction delay entries.
    FirstInputDelay,
    /// Unexpected layout movement entries.
    LayoutShift,
}

impl InstrumentCategory {
    /// Every continuous category, in the order subscriptions are attempted.
    pub const ALL: [InstrumentCategory; 5] = [
        InstrumentCategory::Resource,
        InstrumentCategory::LongTask,
        InstrumentCategory::LargestContentfulPaint,
        InstrumentCategory::FirstInputDelay,
        InstrumentCategory::LayoutShift,
    ];
}

impl Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentCategory::Resource => write!(f, "resource"),
            InstrumentCategory::LongTask => write!(f, "long-task"),
            InstrumentCategory::LargestContentfulPaint => write!(f, "largest-contentful-paint"),
            InstrumentCategory::FirstInputDelay => write!(f, "first-input-delay"),
            InstrumentCategory::LayoutShift => write!(f, "layout-shift"),
        }
    }
}

/// The surface a hosting runtime exposes to the engine.
///
/// A host delivers instrumentation events asynchronously through channels;
/// it never invokes the engine synchronously during subscription setup.
/// Implementations live in `pulse-infra`.
pub trait InstrumentHost: Send + Sync + Debug {
    /// One-shot read of the navigation record, if the host has one.
    ///
    /// Returns `None` when no navigation has been observed or the host does
    /// not support navigation timing at all.
    fn navigation_timing(&self) -> Option<NavigationTiming>;

    /// Probes for `category` support and, when supported, returns the
    /// channel on which the host will deliver that category's events.
    ///
    /// `None` means the category is unsupported; callers skip it silently.
    /// Called once per category when monitoring starts.
    fn subscribe(&self, category: InstrumentCategory) -> Option<flume::Receiver<InstrumentEvent>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_category_once() {
        let all = InstrumentCategory::ALL;
        assert_eq!(all.len(), 5);
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(InstrumentCategory::LongTask.to_string(), "long-task");
        assert_eq!(
            InstrumentCategory::LargestContentfulPaint.to_string(),
            "largest-contentful-paint"
        );
    }
}
