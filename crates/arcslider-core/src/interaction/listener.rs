//! Value-change notifications sent to the host.

use serde::{Deserialize, Serialize};

/// Receives the notifications of a gesture.
///
/// `on_before_change` and `on_after_change` fire exactly once per gesture and
/// default to doing nothing. `on_change` fires zero or more times in between.
pub trait SliderListener {
    fn on_before_change(&mut self, _value: f64) {}

    fn on_change(&mut self, value: f64);

    fn on_after_change(&mut self, _value: f64) {}
}

/// A recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SliderEvent {
    BeforeChange(f64),
    Change(f64),
    AfterChange(f64),
}

/// Records every notification, in order.
impl SliderListener for Vec<SliderEvent> {
    fn on_before_change(&mut self, value: f64) {
        self.push(SliderEvent::BeforeChange(value));
    }

    fn on_change(&mut self, value: f64) {
        self.push(SliderEvent::Change(value));
    }

    fn on_after_change(&mut self, value: f64) {
        self.push(SliderEvent::AfterChange(value));
    }
}
