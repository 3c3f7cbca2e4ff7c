mod dom;
mod logger;
mod page;
mod timer;

use std::cell::RefCell;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use crate::page::App;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Module entry point: set up logging and attach to the current page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    attach()
}

/// Bind all page behavior. Does nothing if already attached.
#[wasm_bindgen]
pub fn attach() -> Result<(), JsValue> {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(App::attach()?);
        }
        Ok(())
    })
}

/// Unbind all page behavior, cancel timers and remove the scroll-to-top
/// button.
#[wasm_bindgen]
pub fn detach() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if let Some(app) = app {
        app.detach();
    }
}
