//! A configured slider with its gesture state.

use crate::config::SliderConfig;
use crate::error::ConfigResult;
use crate::interaction::{DragInteraction, Pointer, PointerEvent, PressTarget, SliderListener};
use crate::layout::SliderLayout;
use kurbo::Point;

/// One slider instance, as a host holds it.
///
/// Bundles a validated [`SliderConfig`] with a [`DragInteraction`]. The value
/// is still passed in on every call.
#[derive(Debug, Clone)]
pub struct CircularSlider {
    config: SliderConfig,
    interaction: DragInteraction,
}

impl CircularSlider {
    /// Create a slider, rejecting configurations the geometry cannot handle.
    pub fn new(config: SliderConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            interaction: DragInteraction::new(),
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the configuration (e.g. new props). A gesture in progress
    /// continues under the new configuration.
    pub fn set_config(&mut self, config: SliderConfig) -> ConfigResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn interaction(&self) -> &DragInteraction {
        &self.interaction
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Geometry for rendering `value`.
    pub fn layout(&self, value: f64) -> SliderLayout {
        SliderLayout::compute(&self.config, value)
    }

    /// Press with the target already known to the host.
    pub fn press<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        position: Point,
        target: PressTarget,
        value: f64,
        listener: &mut L,
    ) -> bool {
        self.interaction
            .press(pointer, position, target, &self.config, value, listener)
    }

    /// Press at a local position, hit testing the handle to find the target.
    pub fn pointer_down<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        position: Point,
        value: f64,
        listener: &mut L,
    ) -> bool {
        let target = if self.layout(value).hits_handle(position) {
            PressTarget::Handle
        } else {
            PressTarget::Elsewhere
        };
        self.press(pointer, position, target, value, listener)
    }

    pub fn pointer_move<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        position: Point,
        value: f64,
        listener: &mut L,
    ) -> bool {
        self.interaction
            .move_to(pointer, position, &self.config, value, listener)
    }

    pub fn pointer_up<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        value: f64,
        listener: &mut L,
    ) -> bool {
        self.interaction.release(pointer, &self.config, value, listener)
    }

    pub fn cancel<L: SliderListener + ?Sized>(&mut self, value: f64, listener: &mut L) -> bool {
        self.interaction.cancel(&self.config, value, listener)
    }

    pub fn handle_event<L: SliderListener + ?Sized>(
        &mut self,
        event: PointerEvent,
        value: f64,
        listener: &mut L,
    ) -> bool {
        self.interaction
            .handle_event(event, &self.config, value, listener)
    }
}
