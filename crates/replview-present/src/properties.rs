//! Public property extraction.

use std::cell::Cell;
use std::rc::Rc;

use replview_types::diagnostic::{self, Diagnostic, Disposition};
use replview_types::{Fault, ObjectRef, Value};

/// Public properties of `object` with their current values, in declaration
/// order.
///
/// A property whose read raises a deprecation is left out; the diagnostic
/// itself is swallowed. Any other diagnostic, or a thrown fault, aborts the
/// extraction. The previous diagnostic handler is back in place either way.
pub fn extract_properties(object: &ObjectRef) -> Result<Vec<(String, Value)>, Fault> {
    let deprecated = Rc::new(Cell::new(false));
    let flag = deprecated.clone();
    let _scope = diagnostic::install(move |diagnostic: &Diagnostic| {
        if diagnostic.kind.is_deprecation() {
            flag.set(true);
            Disposition::Handled
        } else {
            Disposition::Pass
        }
    });

    let mut props = Vec::new();
    for decl in object.properties() {
        if !decl.visibility.is_public() {
            continue;
        }

        deprecated.set(false);
        let value = object.read_property(&decl.name)?;

        if deprecated.get() {
            tracing::debug!(
                class = object.class_name(),
                property = %decl.name,
                "skipping deprecated property"
            );
            continue;
        }
        props.push((decl.name, value));
    }

    Ok(props)
}
