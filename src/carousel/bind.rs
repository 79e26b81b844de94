//! DOM wiring for carousels.
//!
//! Each instance owns its controller behind `Rc<RefCell<_>>`; listener
//! closures borrow it only for the duration of one event, then check the
//! selected slide's input and arm the unlock timer.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent};

use super::gesture::ClickTarget;
use super::{CarouselBehavior, CarouselController};
use crate::config::CarouselConfig;
use crate::dom;
use crate::error::SiteError;

impl ClickTarget for Element {
    fn inside_link(&self) -> bool {
        match self.closest("a") {
            Ok(link) => link.is_some(),
            Err(_) => false,
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }
}

#[derive(Clone)]
struct Instance {
    controller: Rc<RefCell<CarouselController>>,
    slides: Rc<Vec<HtmlInputElement>>,
    transition_ms: u32,
}

impl Instance {
    fn new(slides: Vec<HtmlInputElement>, behavior: CarouselBehavior) -> Option<Self> {
        let transition_ms = behavior.transition_ms;
        let controller = CarouselController::new(slides.len(), behavior)?;
        Some(Self {
            controller: Rc::new(RefCell::new(controller)),
            slides: Rc::new(slides),
            transition_ms,
        })
    }

    /// Run `f` against the controller and show whatever slide it selects.
    fn update(&self, f: impl FnOnce(&mut CarouselController) -> Option<usize>) {
        let changed = f(&mut *self.controller.borrow_mut());
        let Some(index) = changed else {
            return;
        };
        if let Some(slide) = self.slides.get(index) {
            slide.set_checked(true);
        }
        let controller = Rc::clone(&self.controller);
        Timeout::new(self.transition_ms, move || {
            controller.borrow_mut().finish_transition();
        })
        .forget();
    }

    fn bind_dots(&self, dots: Vec<Element>) -> Result<(), SiteError> {
        for (index, dot) in dots.into_iter().enumerate() {
            let inst = self.clone();
            dom::listen(&dot, "click", move |_: Event| {
                inst.update(|c| c.dot(index));
            })?;
        }
        Ok(())
    }

    fn bind_wrapper(&self, wrapper: &Element) -> Result<(), SiteError> {
        let inst = self.clone();
        dom::listen(wrapper, "mousedown", move |e: MouseEvent| {
            inst.controller.borrow_mut().mouse_down(f64::from(e.client_x()));
        })?;

        let inst = self.clone();
        dom::listen(wrapper, "mousemove", move |e: MouseEvent| {
            inst.controller.borrow_mut().mouse_move(f64::from(e.client_x()));
        })?;

        let inst = self.clone();
        dom::listen(wrapper, "mouseup", move |e: MouseEvent| {
            inst.update(|c| c.mouse_up(f64::from(e.client_x())));
        })?;

        let inst = self.clone();
        dom::listen(wrapper, "mouseleave", move |_: MouseEvent| {
            inst.controller.borrow_mut().mouse_leave();
        })?;

        let inst = self.clone();
        let body = wrapper.clone();
        dom::listen(wrapper, "click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
                return;
            };
            let rect = body.get_bounding_client_rect();
            inst.update(|c| c.click(&target, f64::from(e.client_x()), rect.left(), rect.width()));
        })?;

        if self.controller.borrow().behavior().touch {
            let inst = self.clone();
            dom::listen(wrapper, "touchstart", move |e: TouchEvent| {
                if let Some(touch) = e.changed_touches().get(0) {
                    inst.controller.borrow_mut().touch_start(f64::from(touch.client_x()));
                }
            })?;

            let inst = self.clone();
            dom::listen(wrapper, "touchend", move |e: TouchEvent| {
                if let Some(touch) = e.changed_touches().get(0) {
                    inst.update(|c| c.touch_end(f64::from(touch.client_x())));
                }
            })?;
        }
        Ok(())
    }
}

fn slide_selector(group: &str) -> String {
    format!("input[name=\"{group}\"]")
}

/// Wire the homepage carousel. Inert when the wrapper or slides are missing.
///
/// # Errors
///
/// Returns an error if a selector is invalid or a listener cannot be attached.
pub fn init_primary(doc: &Document, config: &CarouselConfig) -> Result<(), SiteError> {
    let primary = &config.primary;
    let slides = dom::inputs(&doc.query_selector_all(&slide_selector(&primary.slide_group))?);
    let Some(wrapper) = doc.query_selector(&primary.wrapper_selector)? else {
        log::debug!("no {} on page; primary carousel inactive", primary.wrapper_selector);
        return Ok(());
    };
    let Some(inst) = Instance::new(slides, CarouselBehavior::primary(config)) else {
        log::debug!("primary carousel has no slides");
        return Ok(());
    };

    let keys = inst.clone();
    dom::listen(doc, "keydown", move |e: KeyboardEvent| {
        keys.update(|c| c.key(&e.key()));
    })?;

    inst.bind_dots(dom::elements(&doc.query_selector_all(&primary.dot_selector)?))?;
    inst.bind_wrapper(&wrapper)?;
    log::debug!("primary carousel ready with {} slides", inst.slides.len());
    Ok(())
}

/// Wire every design carousel on the page, each with its own state.
///
/// Instance `k` binds the slide inputs named `{prefix}{k + 1}` and the dots
/// inside its own wrapper. A wrapper without slides is skipped.
///
/// # Errors
///
/// Returns an error if a selector is invalid or a listener cannot be attached.
pub fn init_design(doc: &Document, config: &CarouselConfig) -> Result<(), SiteError> {
    let design = &config.design;
    let wrappers = dom::elements(&doc.query_selector_all(&design.wrapper_selector)?);
    for (index, wrapper) in wrappers.iter().enumerate() {
        let group = design.slide_group(index);
        let slides = dom::inputs(&wrapper.query_selector_all(&slide_selector(&group))?);
        let Some(inst) = Instance::new(slides, CarouselBehavior::design(config)) else {
            log::debug!("design carousel {group} has no slides");
            continue;
        };
        inst.bind_dots(dom::elements(&wrapper.query_selector_all(&format!(".{}", design.dot_class))?))?;
        inst.bind_wrapper(wrapper)?;
        log::debug!("design carousel {group} ready with {} slides", inst.slides.len());
    }
    Ok(())
}
