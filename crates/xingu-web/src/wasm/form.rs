//! Contact form: validation notices and the WhatsApp hand-off.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement, Node};
use xingu_core::InitError;
use xingu_core::contact::{
    ContactConfig, ContactForm, ContactRequest, SUCCESS_BODY, SUCCESS_ICON, SUCCESS_TITLE,
};
use xingu_core::logging::targets;
use xingu_core::styles::{
    ERROR_BANNER, ERROR_BANNER_CLASS, SUCCESS_MODAL, SUCCESS_MODAL_CLASS, SUCCESS_MODAL_CONTENT,
};

use super::dom::{Dom, Listener, listen};
use super::timer::Timer;

pub(crate) struct ContactMount {
    _shared: Rc<Shared>,
    _listeners: Vec<Listener>,
}

struct Shared {
    dom: Dom,
    config: ContactConfig,
    form: HtmlFormElement,
    banner: RefCell<Option<Element>>,
    modal: RefCell<Option<Element>>,
    banner_timer: Timer,
    modal_timer: Timer,
}

/// Remove whatever element `slot` holds.
fn clear(slot: &RefCell<Option<Element>>) {
    if let Some(el) = slot.borrow_mut().take() {
        el.remove();
    }
}

type Slot = fn(&Shared) -> &RefCell<Option<Element>>;

fn banner_slot(shared: &Shared) -> &RefCell<Option<Element>> {
    &shared.banner
}

fn modal_slot(shared: &Shared) -> &RefCell<Option<Element>> {
    &shared.modal
}

/// Timer callback that clears one notice slot.
fn clear_on_fire(weak: &Weak<Shared>, pick: Slot) -> impl FnMut() + 'static {
    let weak = weak.clone();
    move || {
        if let Some(shared) = weak.upgrade() {
            clear(pick(&shared));
        }
    }
}

pub(crate) fn mount(dom: &Dom, config: &ContactConfig) -> Result<ContactMount, InitError> {
    let form = dom
        .require_id(&config.form_id)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| InitError::missing(format!("form#{}", config.form_id)))?;

    let shared = Rc::new_cyclic(|weak: &Weak<Shared>| Shared {
        dom: dom.clone(),
        config: config.clone(),
        form: form.clone(),
        banner: RefCell::new(None),
        modal: RefCell::new(None),
        banner_timer: Timer::new(&dom.window, clear_on_fire(weak, banner_slot)),
        modal_timer: Timer::new(&dom.window, clear_on_fire(weak, modal_slot)),
    });

    let mut listeners = Vec::new();
    let weak = Rc::downgrade(&shared);
    listen(&mut listeners, &form, "submit", move |event| {
        event.prevent_default();
        if let Some(shared) = weak.upgrade() {
            shared.submit();
        }
    });

    Ok(ContactMount {
        _shared: shared,
        _listeners: listeners,
    })
}

impl Shared {
    fn read(&self) -> ContactForm {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return ContactForm::default();
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        ContactForm {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            company: field("company"),
            message: field("message"),
        }
    }

    fn submit(&self) {
        match self.read().validate(&self.config) {
            Ok(request) => {
                self.send(&request);
                self.show_success();
                self.form.reset();
            }
            Err(err) => {
                tracing::debug!(target: targets::CONTACT, field = ?err.field, "form rejected");
                self.show_error(&err.to_string());
            }
        }
    }

    fn send(&self, request: &ContactRequest) {
        let url = request.whatsapp_url(&self.config);
        tracing::info!(target: targets::CONTACT, "opening WhatsApp");
        if self
            .dom
            .window
            .open_with_url_and_target(&url, "_blank")
            .is_err()
        {
            tracing::warn!(target: targets::CONTACT, "window.open failed");
        }
    }

    fn show_error(&self, message: &str) {
        clear(&self.banner);
        // A banner left by other page code counts too.
        if let Some(stale) = self.dom.query(None, &format!(".{ERROR_BANNER_CLASS}")) {
            stale.remove();
        }
        let Ok(banner) = self.dom.document.create_element("div") else {
            return;
        };
        banner.set_class_name(ERROR_BANNER_CLASS);
        let _ = banner.set_attribute("style", ERROR_BANNER);
        banner.set_text_content(Some(message));
        let Some(parent) = self.form.parent_node() else {
            return;
        };
        let anchor: &Node = &self.form;
        if parent.insert_before(&banner, Some(anchor)).is_ok() {
            self.banner.replace(Some(banner));
            self.banner_timer.arm(self.config.error_notice());
        }
    }

    fn show_success(&self) {
        clear(&self.modal);
        let document = &self.dom.document;
        let (Ok(modal), Some(body)) = (document.create_element("div"), document.body()) else {
            return;
        };
        modal.set_class_name(SUCCESS_MODAL_CLASS);
        let _ = modal.set_attribute("style", SUCCESS_MODAL);
        modal.set_inner_html(&format!(
            "<div class=\"modal-content\" style=\"{SUCCESS_MODAL_CONTENT}\">\
             <div class=\"modal-icon\">{SUCCESS_ICON}</div>\
             <h3>{SUCCESS_TITLE}</h3>\
             <p>{SUCCESS_BODY}</p>\
             </div>"
        ));
        if body.append_child(&modal).is_ok() {
            self.modal.replace(Some(modal));
            self.modal_timer.arm(self.config.success_notice());
        }
    }
}
