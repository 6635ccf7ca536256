//! Input error styling

use tracing::debug;

use crate::element::{lock, ElementRef, EventType};

/// Class marking an input whose value was rejected
pub const DEFAULT_ERROR_CLASS: &str = "is-invalid";

/// Flag `input` as invalid and focus it.
///
/// The class is removed by the element's next `input` event; the listener
/// doing so unregisters itself after firing once.
pub fn mark_input_error(input: Option<&ElementRef>, error_class: &str) {
    let Some(input) = input else {
        debug!(error_class, "mark_input_error called without an element");
        return;
    };

    let mut element = lock(input);
    element.class_list_mut().add(error_class);
    element.focus();

    let class = error_class.to_string();
    element.add_event_listener(EventType::Input, true, move |el| {
        el.class_list_mut().remove(&class);
    });
}

/// Remove the error class from `input`; no-op when absent or not marked
pub fn clear_input_error(input: Option<&ElementRef>, error_class: &str) {
    if let Some(input) = input {
        lock(input).class_list_mut().remove(error_class);
    }
}

/// Remove the error class from every element inside `form`
pub fn clear_form_errors(form: Option<&ElementRef>, error_class: &str) {
    if let Some(form) = form {
        let cleared = lock(form).remove_class_from_descendants(error_class);
        debug!(cleared, "cleared form errors");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    #[test]
    fn test_mark_input_error() {
        let input = Element::new("input").with_id("placa").into_ref();
        mark_input_error(Some(&input), DEFAULT_ERROR_CLASS);

        let element = lock(&input);
        assert!(element.class_list().contains("is-invalid"));
        assert!(element.is_focused());
        assert_eq!(element.listener_count(EventType::Input), 1);
    }

    #[test]
    fn test_error_cleared_by_first_input_only() {
        let input = Element::new("input").into_ref();
        mark_input_error(Some(&input), "erro");

        lock(&input).type_text("A");
        assert!(!lock(&input).class_list().contains("erro"));
        assert_eq!(lock(&input).listener_count(EventType::Input), 0);

        // Re-marking without a new listener firing keeps the class
        lock(&input).class_list_mut().add("erro");
        lock(&input).type_text("AB");
        assert!(lock(&input).class_list().contains("erro"));
    }

    #[test]
    fn test_other_events_do_not_clear() {
        let input = Element::new("input").into_ref();
        mark_input_error(Some(&input), DEFAULT_ERROR_CLASS);
        lock(&input).dispatch(EventType::Click);
        assert!(lock(&input).class_list().contains(DEFAULT_ERROR_CLASS));
    }

    #[test]
    fn test_clear_input_error_idempotent() {
        let input = Element::new("input").with_class("field").into_ref();
        mark_input_error(Some(&input), DEFAULT_ERROR_CLASS);
        clear_input_error(Some(&input), DEFAULT_ERROR_CLASS);
        clear_input_error(Some(&input), DEFAULT_ERROR_CLASS);
        clear_input_error(None, DEFAULT_ERROR_CLASS);
        mark_input_error(None, DEFAULT_ERROR_CLASS);
        assert_eq!(lock(&input).class_list().class_name(), "field");
    }

    #[test]
    fn test_clear_form_errors() {
        let plate = Element::new("input").with_class("is-invalid").into_ref();
        let year = Element::new("input").with_class("is-invalid").into_ref();
        let model = Element::new("input").with_class("field").into_ref();
        let fieldset = Element::new("fieldset")
            .with_class("is-invalid")
            .with_child(year.clone())
            .into_ref();
        let form = Element::new("form")
            .with_class("is-invalid")
            .with_child(plate.clone())
            .with_child(model.clone())
            .with_child(fieldset.clone())
            .into_ref();

        clear_form_errors(Some(&form), DEFAULT_ERROR_CLASS);

        for element in [&plate, &year, &fieldset] {
            assert!(!lock(element).class_list().contains(DEFAULT_ERROR_CLASS));
        }
        assert!(lock(&model).class_list().contains("field"));
        // Only descendants are touched
        assert!(lock(&form).class_list().contains(DEFAULT_ERROR_CLASS));

        clear_form_errors(None, DEFAULT_ERROR_CLASS);
    }
}
