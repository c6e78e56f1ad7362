//! Identity tokens and object references.
//!
//! The token comes from the object's handle number, never from any
//! user-defined string conversion, so rendering a reference cannot run
//! user code.

use replview_types::ObjectRef;

use crate::markup::{self, Tag};
use crate::mode::Mode;

pub fn identity_token(object: &ObjectRef) -> String {
    object.id().to_string()
}

/// `<Class #token>`, or its marked-up form in color mode.
pub fn present_object_ref(object: &ObjectRef, mode: Mode) -> String {
    let class = object.class_name();
    let token = identity_token(object);

    match mode {
        Mode::Plain => format!("<{} #{}>", class, token),
        Mode::Color => {
            let inner = format!(
                "\\<{} {}>",
                markup::wrap(Tag::Class, &markup::escape(class)),
                markup::wrap(Tag::Strong, &format!("#{}", token)),
            );
            markup::wrap(Tag::Object, &inner)
        }
    }
}
