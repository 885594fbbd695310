//! The press/drag/release state machine.

use super::listener::SliderListener;
use super::pointer::{Pointer, PointerEvent, PressTarget};
use super::state::{DragSession, DragState};
use crate::config::SliderConfig;
use crate::geometry::position_to_angle;
use crate::mapping::angle_to_value;
use crate::step::trim_align_value;
use kurbo::Point;

/// Aligned value under a local position: position -> angle -> raw value ->
/// clamped, step-aligned value.
pub fn aligned_value_at(position: Point, config: &SliderConfig) -> f64 {
    let range = config.range();
    let angle = position_to_angle(position, config.svg_size, config.angle_type);
    let raw = angle_to_value(angle, &range, &config.span());
    trim_align_value(raw, &range)
}

/// Drives one slider's gestures.
///
/// The machine never stores the slider value. Every entry point takes the
/// host's current value and proposes changes through a [`SliderListener`].
/// Each entry point returns whether the event was consumed, in which case
/// the host should suppress the platform's default handling of it.
#[derive(Debug, Clone, Default)]
pub struct DragInteraction {
    state: DragState,
}

impl DragInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Start a gesture if `pointer` pressed the handle while idle.
    ///
    /// Fires `on_before_change` with the aligned current value, then treats
    /// the press position as the first move.
    pub fn press<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        position: Point,
        target: PressTarget,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) -> bool {
        if let Some(session) = self.state.session() {
            log::debug!(
                "Ignoring press from {:?}: gesture owned by {:?}",
                pointer,
                session.pointer
            );
            return false;
        }
        if !pointer.can_start_gesture() || target != PressTarget::Handle {
            return false;
        }

        let aligned = trim_align_value(value, &config.range());
        log::debug!("Drag started by {:?} at value {}", pointer, aligned);
        self.state = DragState::Dragging(DragSession::new(pointer));
        listener.on_before_change(aligned);
        self.process_position(position, config, value, listener);
        true
    }

    /// Follow the owning pointer to `position`.
    ///
    /// Fires `on_change` when the aligned value under the pointer differs from
    /// the host's value, unless the slider is disabled or the same value was
    /// already proposed. Reaching the host's value again clears the proposal,
    /// so a value the host ignored can be proposed anew.
    pub fn move_to<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        position: Point,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) -> bool {
        if !self.owned_by(pointer) {
            return false;
        }
        self.process_position(position, config, value, listener);
        true
    }

    /// End the gesture if `pointer` owns it. Fires `on_after_change`.
    ///
    /// Releases while idle, or by other pointers, are ignored.
    pub fn release<L: SliderListener + ?Sized>(
        &mut self,
        pointer: Pointer,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) -> bool {
        if !self.owned_by(pointer) {
            return false;
        }
        self.finish(config, value, listener);
        true
    }

    /// End any gesture in progress, whichever pointer owns it.
    pub fn cancel<L: SliderListener + ?Sized>(
        &mut self,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        self.finish(config, value, listener);
        true
    }

    /// Dispatch a host event to the matching entry point.
    pub fn handle_event<L: SliderListener + ?Sized>(
        &mut self,
        event: PointerEvent,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) -> bool {
        match event {
            PointerEvent::Down {
                pointer,
                position,
                target,
            } => self.press(pointer, position, target, config, value, listener),
            PointerEvent::Move { pointer, position } => {
                self.move_to(pointer, position, config, value, listener)
            }
            PointerEvent::Up { pointer } => self.release(pointer, config, value, listener),
            PointerEvent::Cancel => self.cancel(config, value, listener),
        }
    }

    fn owned_by(&self, pointer: Pointer) -> bool {
        self.state
            .session()
            .is_some_and(|session| session.pointer.same_source(pointer))
    }

    fn process_position<L: SliderListener + ?Sized>(
        &mut self,
        position: Point,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };

        let aligned = aligned_value_at(position, config);
        log::trace!("Drag moved to {:?}: aligned value {}", position, aligned);
        if aligned == value {
            session.last_notified = None;
        } else if !config.disabled && session.last_notified != Some(aligned) {
            session.last_notified = Some(aligned);
            listener.on_change(aligned);
        }
    }

    fn finish<L: SliderListener + ?Sized>(
        &mut self,
        config: &SliderConfig,
        value: f64,
        listener: &mut L,
    ) {
        self.state = DragState::Idle;
        let aligned = trim_align_value(value, &config.range());
        log::debug!("Drag ended at value {}", aligned);
        listener.on_after_change(aligned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::angle_to_position;
    use crate::interaction::listener::SliderEvent;
    use crate::interaction::pointer::MouseButton;
    use crate::layout::track_radius;
    use crate::mapping::value_to_angle;
    use crate::range::{AngleSpan, SliderRange};

    const MOUSE: Pointer = Pointer::Mouse(MouseButton::Left);

    fn thermostat() -> SliderConfig {
        SliderConfig::default()
            .with_range(SliderRange::new(16.0, 30.0, 1.0).unwrap())
            .with_span(AngleSpan::new(50.0, 310.0).unwrap())
            .with_svg_size(220.0)
            .with_handle_radius(16.0)
    }

    /// Local position of `value` on the track.
    fn position_of(value: f64, config: &SliderConfig) -> Point {
        let angle = value_to_angle(value, &config.range(), &config.span());
        let radius = track_radius(config.svg_size);
        angle_to_position(angle, config.angle_type, radius, config.svg_size)
    }

    /// Press the handle of a slider showing `value` with `pointer`.
    fn grab(
        machine: &mut DragInteraction,
        pointer: Pointer,
        config: &SliderConfig,
        value: f64,
        events: &mut Vec<SliderEvent>,
    ) -> bool {
        let handle = position_of(value, config);
        machine.press(pointer, handle, PressTarget::Handle, config, value, events)
    }

    #[test]
    fn test_drag_to_new_value() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        assert!(grab(&mut machine, MOUSE, &config, 23.0, &mut events));
        assert!(machine.is_dragging());
        let target = position_of(28.0, &config);
        assert!(machine.move_to(MOUSE, target, &config, 23.0, &mut events));
        // The host accepted the change.
        assert!(machine.release(MOUSE, &config, 28.0, &mut events));

        assert!(!machine.is_dragging());
        assert_eq!(
            events,
            vec![
                SliderEvent::BeforeChange(23.0),
                SliderEvent::Change(28.0),
                SliderEvent::AfterChange(28.0),
            ]
        );
    }

    #[test]
    fn test_press_position_counts_as_move() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        let off_center = position_of(20.0, &config);
        machine.press(MOUSE, off_center, PressTarget::Handle, &config, 23.0, &mut events);

        assert_eq!(
            events,
            vec![SliderEvent::BeforeChange(23.0), SliderEvent::Change(20.0)]
        );
    }

    #[test]
    fn test_press_proposes_aligned_host_value() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        // Host holds an off-step value; pressing the handle snaps it.
        grab(&mut machine, MOUSE, &config, 23.4, &mut events);
        let handle = position_of(23.4, &config);
        machine.move_to(MOUSE, handle, &config, 23.4, &mut events);

        assert_eq!(
            events,
            vec![SliderEvent::BeforeChange(23.0), SliderEvent::Change(23.0)]
        );
    }

    #[test]
    fn test_disabled_fires_only_before_and_after() {
        // Disabled sliders still report gesture start and end. Possibly
        // unintended, so keep it pinned here.
        let config = thermostat().with_disabled(true);
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        assert!(grab(&mut machine, MOUSE, &config, 23.0, &mut events));
        machine.move_to(MOUSE, position_of(28.0, &config), &config, 23.0, &mut events);
        machine.move_to(MOUSE, position_of(17.0, &config), &config, 23.0, &mut events);
        machine.release(MOUSE, &config, 23.0, &mut events);

        assert_eq!(
            events,
            vec![SliderEvent::BeforeChange(23.0), SliderEvent::AfterChange(23.0)]
        );
    }

    #[test]
    fn test_enabling_mid_gesture_notifies() {
        let disabled = thermostat().with_disabled(true);
        let enabled = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        grab(&mut machine, MOUSE, &disabled, 23.0, &mut events);
        machine.move_to(MOUSE, position_of(28.0, &disabled), &disabled, 23.0, &mut events);
        // Re-enabled while the pointer stays within the same step.
        machine.move_to(MOUSE, position_of(28.2, &enabled), &enabled, 23.0, &mut events);

        assert_eq!(
            events,
            vec![SliderEvent::BeforeChange(23.0), SliderEvent::Change(28.0)]
        );
    }

    #[test]
    fn test_repeated_value_notifies_once() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();
        grab(&mut machine, MOUSE, &config, 23.0, &mut events);

        // Two positions within the same step, host value not yet updated.
        machine.move_to(MOUSE, position_of(27.9, &config), &config, 23.0, &mut events);
        machine.move_to(MOUSE, position_of(28.2, &config), &config, 23.0, &mut events);

        let changes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, SliderEvent::Change(_)))
            .collect();
        assert_eq!(changes, vec![&SliderEvent::Change(28.0)]);
    }

    #[test]
    fn test_returning_to_rejected_value_notifies_again() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();
        grab(&mut machine, MOUSE, &config, 23.0, &mut events);

        // The host ignores every change and keeps 23.
        machine.move_to(MOUSE, position_of(28.0, &config), &config, 23.0, &mut events);
        machine.move_to(MOUSE, position_of(23.0, &config), &config, 23.0, &mut events);
        machine.move_to(MOUSE, position_of(28.0, &config), &config, 23.0, &mut events);

        assert_eq!(
            events,
            vec![
                SliderEvent::BeforeChange(23.0),
                SliderEvent::Change(28.0),
                SliderEvent::Change(28.0),
            ]
        );
    }

    #[test]
    fn test_press_on_track_is_ignored() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        let on_track = position_of(28.0, &config);
        let consumed =
            machine.press(MOUSE, on_track, PressTarget::Elsewhere, &config, 23.0, &mut events);

        assert!(!consumed);
        assert!(!machine.is_dragging());
        assert!(events.is_empty());
    }

    #[test]
    fn test_secondary_buttons_do_not_start() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();
        let right = Pointer::Mouse(MouseButton::Right);

        assert!(!grab(&mut machine, right, &config, 23.0, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn test_second_touch_is_ignored() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();
        let first = Pointer::Touch(1);
        let second = Pointer::Touch(2);

        grab(&mut machine, first, &config, 23.0, &mut events);
        assert!(!grab(&mut machine, second, &config, 23.0, &mut events));
        let elsewhere = position_of(18.0, &config);
        assert!(!machine.move_to(second, elsewhere, &config, 23.0, &mut events));
        assert!(!machine.release(second, &config, 23.0, &mut events));
        assert!(machine.is_dragging());

        let target = position_of(25.0, &config);
        assert!(machine.move_to(first, target, &config, 23.0, &mut events));
        assert!(machine.release(first, &config, 25.0, &mut events));
        assert_eq!(
            events,
            vec![
                SliderEvent::BeforeChange(23.0),
                SliderEvent::Change(25.0),
                SliderEvent::AfterChange(25.0),
            ]
        );
    }

    #[test]
    fn test_release_without_move_ends_gesture() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        grab(&mut machine, MOUSE, &config, 23.0, &mut events);
        assert!(machine.release(MOUSE, &config, 23.0, &mut events));
        // A second release is a no-op.
        assert!(!machine.release(MOUSE, &config, 23.0, &mut events));

        assert_eq!(
            events,
            vec![SliderEvent::BeforeChange(23.0), SliderEvent::AfterChange(23.0)]
        );
    }

    #[test]
    fn test_idle_moves_and_cancel_are_ignored() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        let target = position_of(28.0, &config);
        assert!(!machine.move_to(MOUSE, target, &config, 23.0, &mut events));
        assert!(!machine.cancel(&config, 23.0, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn test_cancel_ends_any_gesture() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        grab(&mut machine, Pointer::Touch(4), &config, 23.0, &mut events);
        assert!(machine.cancel(&config, 23.0, &mut events));
        assert_eq!(machine.state(), &DragState::Idle);
        assert_eq!(events.last(), Some(&SliderEvent::AfterChange(23.0)));
    }

    #[test]
    fn test_before_and_after_report_aligned_value() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();

        // Host holds an off-step value.
        grab(&mut machine, MOUSE, &config, 23.4, &mut events);
        machine.release(MOUSE, &config, 23.4, &mut events);

        assert_eq!(events.first(), Some(&SliderEvent::BeforeChange(23.0)));
        assert_eq!(events.last(), Some(&SliderEvent::AfterChange(23.0)));
    }

    #[test]
    fn test_dead_zone_clamps_by_side_of_seam() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();
        grab(&mut machine, MOUSE, &config, 23.0, &mut events);

        // Bottom-left of the dial (angle 20), before the start.
        let before_start = angle_to_position(20.0, config.angle_type, 90.0, 220.0);
        machine.move_to(MOUSE, before_start, &config, 23.0, &mut events);
        // Bottom-right (angle 340), past the end.
        let past_end = angle_to_position(340.0, config.angle_type, 90.0, 220.0);
        machine.move_to(MOUSE, past_end, &config, 16.0, &mut events);

        assert_eq!(
            &events[1..],
            &[SliderEvent::Change(16.0), SliderEvent::Change(30.0)]
        );
    }

    #[test]
    fn test_handle_event_dispatch() {
        let config = thermostat();
        let mut machine = DragInteraction::new();
        let mut events: Vec<SliderEvent> = Vec::new();
        let touch = Pointer::Touch(9);

        let sequence = [
            PointerEvent::Down {
                pointer: touch,
                position: position_of(23.0, &config),
                target: PressTarget::Handle,
            },
            PointerEvent::Move {
                pointer: touch,
                position: position_of(19.0, &config),
            },
            PointerEvent::Up { pointer: touch },
        ];
        let consumed: Vec<bool> = sequence
            .into_iter()
            .map(|event| machine.handle_event(event, &config, 23.0, &mut events))
            .collect();

        assert_eq!(consumed, vec![true, true, true]);
        assert_eq!(
            events,
            vec![
                SliderEvent::BeforeChange(23.0),
                SliderEvent::Change(19.0),
                SliderEvent::AfterChange(23.0),
            ]
        );
    }

    #[test]
    fn test_center_crossing_is_deterministic() {
        let config = thermostat();
        // The center resolves to angle 0, which lies before the start (50)
        // of a span that does not reach the seam.
        assert_eq!(aligned_value_at(Point::new(110.0, 110.0), &config), 16.0);
    }
}
