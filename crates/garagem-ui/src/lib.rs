//! UI glue for garagem
//!
//! The page is modelled as a tree of [`Element`]s owned by a [`Document`].
//! Helpers here only touch ids, text, classes and the `data-target`
//! attribute, which is the whole styling contract with the stylesheet.

pub mod element;
pub mod feedback;
pub mod navigation;
pub mod status;

pub use element::{ClassList, Document, Element, ElementRef, EventType};
pub use feedback::{clear_form_errors, clear_input_error, mark_input_error, DEFAULT_ERROR_CLASS};
pub use navigation::{set_active_section, ACTIVE_LINK_CLASS, ACTIVE_SECTION_CLASS, NAV_TARGET_ATTR};
pub use status::{StatusDisplay, STATUS_ELEMENT_ID};
