//! WebAssembly entry point and the `WebSlider` class.

use std::cell::RefCell;

use arcslider_core::{
    CircularSlider, MouseButton, Pointer, PressTarget, SliderConfig, SliderEvent, SliderLayout,
};
use js_sys::Function;
use kurbo::Point;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::shared::SharedSlider;
use crate::transform::ScreenTransform;

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    // Another module may have installed a logger already.
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// JavaScript callbacks for value notifications.
#[derive(Default, Clone)]
struct Callbacks {
    on_change: Option<Function>,
    on_before_change: Option<Function>,
    on_after_change: Option<Function>,
}

impl Callbacks {
    fn notify(&self, event: SliderEvent) {
        let (callback, name, value) = match event {
            SliderEvent::BeforeChange(value) => {
                (self.on_before_change.as_ref(), "onBeforeChange", value)
            }
            SliderEvent::Change(value) => (self.on_change.as_ref(), "onChange", value),
            SliderEvent::AfterChange(value) => {
                (self.on_after_change.as_ref(), "onAfterChange", value)
            }
        };
        let Some(callback) = callback else {
            return;
        };
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_f64(value)) {
            log::error!("{} callback threw: {:?}", name, err);
        }
    }
}

/// Layout handed to JavaScript for rendering.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutView {
    aligned_value: f64,
    track_radius: f64,
    handle_angle: f64,
    handle_x: f64,
    handle_y: f64,
    handle_radius: f64,
    track: String,
    fill: String,
}

impl From<&SliderLayout> for LayoutView {
    fn from(layout: &SliderLayout) -> Self {
        Self {
            aligned_value: layout.aligned_value,
            track_radius: layout.track_radius,
            handle_angle: layout.handle_angle,
            handle_x: layout.handle_center.x,
            handle_y: layout.handle_center.y,
            handle_radius: layout.handle_radius,
            track: layout.track.to_string(),
            fill: layout.fill.to_string(),
        }
    }
}

fn parse_config(config: JsValue) -> Result<SliderConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(SliderConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|err| JsError::new(&err.to_string()))
}

/// DOM `MouseEvent.button` codes.
fn mouse_button(code: i16) -> Option<MouseButton> {
    match code {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

/// A circular slider driven from DOM events.
///
/// The page attaches move/end listeners after a `mouseDown`/`touchStart`
/// call returns `true`, detaches them after the gesture ends, and calls
/// `preventDefault()` whenever a method returns `true`. Callbacks run after
/// the slider's own state is updated and may call any method again.
#[wasm_bindgen]
pub struct WebSlider {
    shared: SharedSlider,
    callbacks: RefCell<Callbacks>,
}

#[wasm_bindgen]
impl WebSlider {
    /// Create a slider from a props object (missing fields take defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WebSlider, JsError> {
        let config = parse_config(config)?;
        let slider = CircularSlider::new(config).map_err(|err| JsError::new(&err.to_string()))?;
        Ok(Self {
            shared: SharedSlider::new(slider),
            callbacks: RefCell::default(),
        })
    }

    /// Replace the props. Invalid props are rejected and the old ones kept.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: JsValue) -> Result<(), JsError> {
        let config = parse_config(config)?;
        self.shared.set_config(config).map_err(|err| {
            log::warn!("Rejected slider config: {}", err);
            JsError::new(&err.to_string())
        })
    }

    #[wasm_bindgen(js_name = setCallbacks)]
    pub fn set_callbacks(
        &self,
        on_change: Option<Function>,
        on_before_change: Option<Function>,
        on_after_change: Option<Function>,
    ) {
        *self.callbacks.borrow_mut() = Callbacks {
            on_change,
            on_before_change,
            on_after_change,
        };
    }

    /// Set the surface's screen CTM (`svg.getScreenCTM()`), used to map
    /// client coordinates into the slider's local space.
    #[wasm_bindgen(js_name = setScreenCtm)]
    pub fn set_screen_ctm(
        &self,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    ) -> Result<(), JsError> {
        let transform = ScreenTransform::from_screen_ctm([a, b, c, d, e, f])
            .map_err(|err| JsError::new(&err.to_string()))?;
        self.shared.set_transform(transform);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = isDragging)]
    pub fn is_dragging(&self) -> bool {
        self.shared.is_dragging()
    }

    /// `on_handle` is whether the event target is the handle element.
    #[wasm_bindgen(js_name = mouseDown)]
    pub fn mouse_down(
        &self,
        button: i16,
        client_x: f64,
        client_y: f64,
        on_handle: bool,
        value: f64,
    ) -> bool {
        let Some(button) = mouse_button(button) else {
            return false;
        };
        self.press(Pointer::Mouse(button), client_x, client_y, on_handle, value)
    }

    #[wasm_bindgen(js_name = mouseMove)]
    pub fn mouse_move(&self, client_x: f64, client_y: f64, value: f64) -> bool {
        let client = Point::new(client_x, client_y);
        let callbacks = self.callbacks();
        self.shared.drag(MOUSE, client, value, |event| callbacks.notify(event))
    }

    #[wasm_bindgen(js_name = mouseUp)]
    pub fn mouse_up(&self, value: f64) -> bool {
        let callbacks = self.callbacks();
        self.shared.release(MOUSE, value, |event| callbacks.notify(event))
    }

    /// `touches` is `event.touches.length`; multi-finger starts are ignored.
    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(
        &self,
        identifier: u32,
        touches: u32,
        client_x: f64,
        client_y: f64,
        on_handle: bool,
        value: f64,
    ) -> bool {
        if touches > 1 {
            return false;
        }
        self.press(touch(identifier), client_x, client_y, on_handle, value)
    }

    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(&self, identifier: u32, client_x: f64, client_y: f64, value: f64) -> bool {
        let client = Point::new(client_x, client_y);
        let callbacks = self.callbacks();
        self.shared
            .drag(touch(identifier), client, value, |event| callbacks.notify(event))
    }

    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&self, identifier: u32, value: f64) -> bool {
        let callbacks = self.callbacks();
        self.shared
            .release(touch(identifier), value, |event| callbacks.notify(event))
    }

    /// End any gesture (touchcancel, lost pointer capture, unmount).
    pub fn cancel(&self, value: f64) -> bool {
        let callbacks = self.callbacks();
        self.shared.cancel(value, |event| callbacks.notify(event))
    }

    #[wasm_bindgen(js_name = trackPath)]
    pub fn track_path(&self, value: f64) -> String {
        self.shared.layout(value).track.to_string()
    }

    #[wasm_bindgen(js_name = fillPath)]
    pub fn fill_path(&self, value: f64) -> String {
        self.shared.layout(value).fill.to_string()
    }

    /// Everything needed to render `value`, as a plain object.
    pub fn layout(&self, value: f64) -> Result<JsValue, JsError> {
        let view = LayoutView::from(&self.shared.layout(value));
        serde_wasm_bindgen::to_value(&view).map_err(|err| JsError::new(&err.to_string()))
    }
}

const MOUSE: Pointer = Pointer::Mouse(MouseButton::Left);

fn touch(identifier: u32) -> Pointer {
    Pointer::Touch(u64::from(identifier))
}

impl WebSlider {
    /// Snapshot of the callbacks, so none of them runs under a borrow.
    fn callbacks(&self) -> Callbacks {
        self.callbacks.borrow().clone()
    }

    fn press(
        &self,
        pointer: Pointer,
        client_x: f64,
        client_y: f64,
        on_handle: bool,
        value: f64,
    ) -> bool {
        let target = if on_handle {
            PressTarget::Handle
        } else {
            PressTarget::Elsewhere
        };
        let client = Point::new(client_x, client_y);
        let callbacks = self.callbacks();
        self.shared
            .press(pointer, client, target, value, |event| callbacks.notify(event))
    }
}
