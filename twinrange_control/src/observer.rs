// Copyright 2026 the Twinrange Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use twinrange_track::RangeValues;

/// Handle returned by [`RangeSlider::add_observer`](crate::RangeSlider::add_observer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(RangeValues)>;

/// Value-changed listeners, notified in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next: u64,
    entries: Vec<(ObserverId, Callback)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next", &self.next)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl Observers {
    pub(crate) fn add(&mut self, callback: Callback) -> ObserverId {
        let id = ObserverId(self.next);
        self.next += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, values: RangeValues) {
        for (_, callback) in &mut self.entries {
            callback(values);
        }
    }
}
