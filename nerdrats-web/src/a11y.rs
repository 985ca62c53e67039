// Accessibility helpers

use wasm_bindgen::JsCast;

const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), input:not([disabled]), select, textarea, [tabindex]:not([tabindex='-1'])";

/// Update the live region status for screen readers
///
/// Updates the text content of the #status-helper element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-helper"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus to the first focusable element inside a container.
///
/// Called when a dialog opens so keyboard users land inside it instead of
/// behind the backdrop.
pub fn trap_focus_in(container_id: &str) {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    let Some(container) = doc.get_element_by_id(container_id) else {
        return;
    };
    if let Ok(Some(el)) = container.query_selector(FOCUSABLE_SELECTOR) {
        let _ = el.dyn_into::<web_sys::HtmlElement>().map(|el| el.focus());
    }
}

/// Return keyboard focus to the element that opened a dialog.
pub fn restore_focus(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(element_id))
    {
        let _ = el.dyn_into::<web_sys::HtmlElement>().map(|el| el.focus());
    }
}
