use super::{Setup, StyleSurface};
use crate::dom;
use crate::error::WebError;
use atelier_core::{MenuConfig, MenuEvent, MenuState};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Node};

/// Hamburger menu: open/close state plus the body scroll lock it owns.
pub struct MobileMenu {
    toggle: Element,
    menu: Element,
    scroll_lock: StyleSurface,
    state: Cell<MenuState>,
}

impl MobileMenu {
    #[must_use]
    pub const fn new(toggle: Element, menu: Element, scroll_lock: StyleSurface) -> Self {
        Self {
            toggle,
            menu,
            scroll_lock,
            state: Cell::new(MenuState::Closed),
        }
    }

    /// Apply an event and render the resulting state.
    ///
    /// # Errors
    /// Returns an error if the DOM rejects a class or style update.
    pub fn dispatch(&self, event: MenuEvent) -> Result<MenuState, WebError> {
        let previous = self.state.get();
        let next = previous.apply(event);
        self.state.set(next);
        // Outside clicks while closed fire constantly; only closing needs rendering.
        if next != previous || matches!(event, MenuEvent::LinkClicked) {
            self.render(next)?;
        }
        Ok(next)
    }

    fn render(&self, state: MenuState) -> Result<(), WebError> {
        let open = state.is_open();
        dom::set_class(&self.toggle, MenuState::ACTIVE_CLASS, open)?;
        dom::set_class(&self.menu, MenuState::ACTIVE_CLASS, open)?;
        self.scroll_lock.set("overflow", state.body_overflow())
    }

    fn classify_document_click(&self, event: &Event) -> MenuEvent {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = |region: &Element| {
            target
                .as_ref()
                .is_some_and(|node| region.contains(Some(node)))
        };
        MenuEvent::DocumentClick {
            in_toggle: inside(&self.toggle),
            in_menu: inside(&self.menu),
        }
    }
}

fn report(result: Result<MenuState, WebError>) {
    if let Err(err) = result {
        log::warn!("Failed to update mobile menu: {err}");
    }
}

/// Wire the hamburger toggle, the menu links and outside clicks.
///
/// # Errors
/// Returns an error if a selector is invalid or a listener cannot be attached.
pub fn init_mobile_menu(document: &Document, config: &MenuConfig) -> Result<Setup, WebError> {
    let toggle = document.query_selector(&config.toggle_selector)?;
    let menu = document.query_selector(&config.menu_selector)?;
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return Ok(Setup::Skipped("menu toggle or panel not found"));
    };

    let controller = Rc::new(MobileMenu::new(
        toggle.clone(),
        menu,
        StyleSurface::body(document)?,
    ));

    {
        let controller = Rc::clone(&controller);
        dom::listen(&toggle, "click", move |_event| {
            report(controller.dispatch(MenuEvent::Toggle));
        })?;
    }

    for link in dom::query_all(document, &config.link_selector)? {
        let controller = Rc::clone(&controller);
        dom::listen(&link, "click", move |_event| {
            report(controller.dispatch(MenuEvent::LinkClicked));
        })?;
    }

    dom::listen(document, "click", move |event| {
        let click = controller.classify_document_click(&event);
        report(controller.dispatch(click));
    })?;

    Ok(Setup::Installed)
}
