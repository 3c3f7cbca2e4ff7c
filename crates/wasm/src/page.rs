use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use folio_core::{PortfolioConfig, UiController};
use folio_protocol::{DomCommand, PageEvent, ScrollBehavior, TimerId};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::dom::{DomHandles, field_value};
use crate::timer::Timer;

const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Browser-side state shared by every listener: the controller plus the
/// DOM resources its commands act on.
pub(crate) struct Page {
    window: Window,
    document: Document,
    dom: DomHandles,
    controller: RefCell<UiController>,
    timers: RefCell<HashMap<TimerId, Timer>>,
    observer: RefCell<Option<IntersectionObserver>>,
    scroll_top: RefCell<Option<HtmlElement>>,
}

impl Page {
    /// Feed one event through the controller and apply the result.
    fn dispatch(self: &Rc<Self>, event: PageEvent, source: Option<&Event>) {
        let commands = self.controller.borrow_mut().handle(event);
        self.apply(&commands, source);
    }

    fn apply(self: &Rc<Self>, commands: &[DomCommand], source: Option<&Event>) {
        for command in commands {
            if let Err(e) = self.apply_one(command, source) {
                warn!("failed to apply {command:?}: {e:?}");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, command: &DomCommand, source: Option<&Event>) -> Result<(), JsValue> {
        match command {
            DomCommand::SetClass {
                target,
                class,
                enabled,
            } => {
                let scroll_top = self.scroll_top.borrow();
                if let Some(el) = self.dom.element(target, scroll_top.as_ref()) {
                    el.class_list()
                        .toggle_with_force(class.class_name(), *enabled)?;
                }
            }
            DomCommand::SetStyle {
                target,
                property,
                value,
            } => {
                let scroll_top = self.scroll_top.borrow();
                if let Some(el) = self.dom.element(target, scroll_top.as_ref()) {
                    el.style().set_property(property.css_name(), value)?;
                }
            }
            DomCommand::SetImageSource { target, src } => {
                let scroll_top = self.scroll_top.borrow();
                if let Some(el) = self.dom.element(target, scroll_top.as_ref()) {
                    el.set_attribute("src", src)?;
                }
            }
            DomCommand::CreateScrollTopButton { id, label, css } => {
                let button = self
                    .document
                    .create_element("button")?
                    .dyn_into::<HtmlElement>()?;
                button.set_id(id);
                button.set_inner_text(label);
                button.set_attribute("style", css)?;
                self.document
                    .body()
                    .ok_or_else(|| JsValue::from_str("document has no body"))?
                    .append_child(&button)?;
                *self.scroll_top.borrow_mut() = Some(button);
            }
            DomCommand::RemoveScrollTopButton => {
                if let Some(button) = self.scroll_top.borrow_mut().take() {
                    button.remove();
                }
            }
            DomCommand::ScrollIntoView { id, behavior } => {
                if let Some(el) = self.document.get_element_by_id(id) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(web_behavior(*behavior));
                    options.set_block(ScrollLogicalPosition::Start);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
            DomCommand::ScrollToTop { behavior } => {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_behavior(*behavior));
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            DomCommand::PreventDefault => {
                if let Some(event) = source {
                    event.prevent_default();
                }
            }
            DomCommand::Alert { message } => self.window.alert_with_message(message)?,
            DomCommand::Unobserve { index } => {
                if let (Some(observer), Some(el)) =
                    (self.observer.borrow().as_ref(), self.dom.revealables.get(*index))
                {
                    observer.unobserve(el);
                }
            }
            DomCommand::StartTimer {
                timer,
                generation,
                delay_ms,
                repeating,
            } => {
                let (timer, generation) = (*timer, *generation);
                // Drop the superseded timer first so it cannot fire in between.
                self.timers.borrow_mut().remove(&timer);
                let page = Rc::downgrade(self);
                let running = Timer::start(&self.window, *delay_ms, *repeating, move || {
                    if let Some(page) = Weak::upgrade(&page) {
                        page.dispatch(PageEvent::TimerFired { timer, generation }, None);
                    }
                })?;
                self.timers.borrow_mut().insert(timer, running);
            }
            DomCommand::CancelTimer { timer } => {
                self.timers.borrow_mut().remove(timer);
            }
        }
        Ok(())
    }

    fn scroll_event(&self) -> PageEvent {
        PageEvent::Scroll {
            offset: self.window.scroll_y().unwrap_or(0.0),
            sections: self.dom.section_boxes(),
        }
    }

    fn submit_event(&self) -> PageEvent {
        PageEvent::Submit {
            name: field_value(&self.document, "name"),
            email: field_value(&self.document, "email"),
            message: field_value(&self.document, "message"),
        }
    }
}

fn web_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
    }
}

/// A bound event listener. Dropping it unbinds it.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// The attached page: owns every listener and the observer callback, so
/// dropping it (via [`App::detach`]) releases all of them.
pub(crate) struct App {
    page: Rc<Page>,
    listeners: Vec<Listener>,
    _observer_callback: Option<ObserverCallback>,
}

impl App {
    pub fn attach() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = load_config(&document);
        let dom = DomHandles::discover(&document)?;
        let controller = UiController::new(config, dom.outline(), StdRng::from_entropy())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let page = Rc::new(Page {
            window,
            document,
            dom,
            controller: RefCell::new(controller),
            timers: RefCell::new(HashMap::new()),
            observer: RefCell::new(None),
            scroll_top: RefCell::new(None),
        });
        let created = page.controller.borrow_mut().attach();
        page.apply(&created, None);

        let mut app = Self {
            page,
            listeners: Vec::new(),
            _observer_callback: None,
        };
        if let Err(e) = app.bind_listeners() {
            app.detach();
            return Err(e);
        }
        if let Err(e) = app.observe_revealables() {
            warn!("reveal animations disabled: {e:?}");
        }

        let ready = app.page.document.ready_state();
        if ready == "complete" {
            // `load` already fired before we attached.
            app.page.dispatch(PageEvent::Load, None);
        }
        debug!("page attached (document {ready})");
        Ok(app)
    }

    pub fn detach(mut self) {
        let commands = self.page.controller.borrow_mut().detach();
        self.page.apply(&commands, None);
        if let Some(observer) = self.page.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.page.timers.borrow_mut().clear();
        self.listeners.clear();
        self._observer_callback = None;
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        to_event: impl Fn(&Page, &Event) -> Option<PageEvent> + 'static,
    ) -> Result<(), JsValue> {
        let page = Rc::clone(&self.page);
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Some(page_event) = to_event(&page, &event) {
                page.dispatch(page_event, Some(&event));
            }
        }) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    fn bind_listeners(&mut self) -> Result<(), JsValue> {
        let page = Rc::clone(&self.page);
        let dom = &page.dom;

        if let Some(el) = &dom.hamburger {
            self.listen(el, "click", |_, _| Some(PageEvent::HamburgerClick))?;
        }
        if let Some(el) = &dom.mobile_close {
            self.listen(el, "click", |_, _| Some(PageEvent::MobileCloseClick))?;
        }
        for (index, link) in dom.nav_links.iter().enumerate() {
            self.listen(link, "click", move |_, _| {
                Some(PageEvent::NavLinkClick { index })
            })?;
        }
        for anchor in &dom.anchors {
            let href = anchor.get_attribute("href").unwrap_or_default();
            self.listen(anchor, "click", move |_, _| {
                Some(PageEvent::AnchorClick { href: href.clone() })
            })?;
        }
        if let Some(form) = &dom.contact_form {
            self.listen(form, "submit", |page, _| Some(page.submit_event()))?;
        }

        self.listen(&page.window, "scroll", |page, _| Some(page.scroll_event()))?;
        self.listen(&page.window, "resize", |page, _| {
            let width = page.window.inner_width().ok()?.as_f64()?;
            Some(PageEvent::Resize { width })
        })?;
        self.listen(&page.window, "load", |_, _| Some(PageEvent::Load))?;
        self.listen(&page.document, "keydown", |_, event| {
            let key = event.dyn_ref::<KeyboardEvent>()?.key();
            Some(PageEvent::KeyDown { key })
        })?;

        let button = page.scroll_top.borrow().clone();
        if let Some(button) = button {
            self.listen(&button, "click", |_, _| Some(PageEvent::ScrollTopClick))?;
            self.listen(&button, "mouseenter", |_, _| {
                Some(PageEvent::ScrollTopHover { hovered: true })
            })?;
            self.listen(&button, "mouseleave", |_, _| {
                Some(PageEvent::ScrollTopHover { hovered: false })
            })?;
        }
        Ok(())
    }

    fn observe_revealables(&mut self) -> Result<(), JsValue> {
        if self.page.dom.revealables.is_empty() {
            return Ok(());
        }
        let (threshold, root_margin) = {
            let controller = self.page.controller.borrow();
            let config = controller.config();
            (config.reveal_threshold, config.reveal_root_margin.clone())
        };

        let page = Rc::clone(&self.page);
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Some(index) = page.dom.revealable_index(&entry.target()) {
                        page.dispatch(
                            PageEvent::Intersection {
                                index,
                                is_intersecting: entry.is_intersecting(),
                            },
                            None,
                        );
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(&root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for el in &self.page.dom.revealables {
            observer.observe(el);
        }
        *self.page.observer.borrow_mut() = Some(observer);
        self._observer_callback = Some(callback);
        Ok(())
    }
}

/// Read the optional JSON config block. A malformed block is reported and
/// the defaults are used instead.
fn load_config(document: &Document) -> PortfolioConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PortfolioConfig::default();
    };
    match PortfolioConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            PortfolioConfig::default()
        }
    }
}
