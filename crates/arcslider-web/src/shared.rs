//! A slider that host callbacks may call back into.
//!
//! Notifications are buffered while the slider is borrowed and delivered
//! only after the borrow ends, so a callback can re-render through the same
//! slider (or even feed it another event) without a borrow conflict.

use std::cell::{Cell, RefCell};

use arcslider_core::{
    CircularSlider, ConfigResult, Pointer, PressTarget, SliderConfig, SliderEvent, SliderLayout,
};
use kurbo::Point;

use crate::transform::ScreenTransform;

/// A [`CircularSlider`] behind interior mutability, driven in client
/// coordinates.
#[derive(Debug)]
pub struct SharedSlider {
    slider: RefCell<CircularSlider>,
    transform: Cell<ScreenTransform>,
}

impl SharedSlider {
    pub fn new(slider: CircularSlider) -> Self {
        Self {
            slider: RefCell::new(slider),
            transform: Cell::new(ScreenTransform::identity()),
        }
    }

    pub fn set_transform(&self, transform: ScreenTransform) {
        self.transform.set(transform);
    }

    /// Replace the configuration. Invalid configurations leave the old one.
    pub fn set_config(&self, config: SliderConfig) -> ConfigResult<()> {
        self.slider.borrow_mut().set_config(config)
    }

    pub fn is_dragging(&self) -> bool {
        self.slider.borrow().is_dragging()
    }

    pub fn layout(&self, value: f64) -> SliderLayout {
        self.slider.borrow().layout(value)
    }

    /// Press at a client position. `target` comes from the host's own hit
    /// testing.
    pub fn press(
        &self,
        pointer: Pointer,
        client: Point,
        target: PressTarget,
        value: f64,
        notify: impl FnMut(SliderEvent),
    ) -> bool {
        let position = self.transform.get().to_local(client);
        self.dispatch(notify, |slider, events| {
            slider.press(pointer, position, target, value, events)
        })
    }

    pub fn drag(
        &self,
        pointer: Pointer,
        client: Point,
        value: f64,
        notify: impl FnMut(SliderEvent),
    ) -> bool {
        let position = self.transform.get().to_local(client);
        self.dispatch(notify, |slider, events| {
            slider.pointer_move(pointer, position, value, events)
        })
    }

    pub fn release(&self, pointer: Pointer, value: f64, notify: impl FnMut(SliderEvent)) -> bool {
        self.dispatch(notify, |slider, events| slider.pointer_up(pointer, value, events))
    }

    pub fn cancel(&self, value: f64, notify: impl FnMut(SliderEvent)) -> bool {
        self.dispatch(notify, |slider, events| slider.cancel(value, events))
    }

    fn dispatch(
        &self,
        notify: impl FnMut(SliderEvent),
        apply: impl FnOnce(&mut CircularSlider, &mut Vec<SliderEvent>) -> bool,
    ) -> bool {
        let mut events = Vec::new();
        let consumed = apply(&mut self.slider.borrow_mut(), &mut events);
        events.into_iter().for_each(notify);
        consumed
    }
}
