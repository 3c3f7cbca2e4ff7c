use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// A running `setTimeout`/`setInterval`. Dropping it clears the browser
/// timer and releases the callback.
pub(crate) struct Timer {
    window: Window,
    handle: i32,
    repeating: bool,
    _callback: Closure<dyn FnMut()>,
}

impl Timer {
    pub(crate) fn start(
        window: &Window,
        delay_ms: u32,
        repeating: bool,
        callback: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let function = callback.as_ref().unchecked_ref();
        let handle = if repeating {
            window.set_interval_with_callback_and_timeout_and_arguments_0(function, delay)?
        } else {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(function, delay)?
        };
        Ok(Self {
            window: window.clone(),
            handle,
            repeating,
            _callback: callback,
        })
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if self.repeating {
            self.window.clear_interval_with_handle(self.handle);
        } else {
            self.window.clear_timeout_with_handle(self.handle);
        }
    }
}
