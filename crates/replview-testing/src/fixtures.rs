//! Sample object graphs.

use std::rc::Rc;

use replview_types::diagnostic::{self, Diagnostic};
use replview_types::{Fault, Instance, ObjectRef, Value};

/// `Foo { a: 1, b: "x" }`
pub fn foo() -> ObjectRef {
    Instance::new("Foo")
        .with_property("a", 1)
        .with_property("b", "x")
        .into_ref()
}

/// An object with no public state: only protected and private slots.
pub fn opaque() -> ObjectRef {
    Instance::new("Opaque")
        .with_protected("cache", Value::Array(Vec::new()))
        .with_private("secret", "hunter2")
        .into_ref()
}

/// `Outer { inner: Inner { a: 1 } }`
pub fn outer_inner() -> ObjectRef {
    let inner = Instance::new("Inner").with_property("a", 1).into_ref();
    Instance::new("Outer").with_property("inner", inner).into_ref()
}

/// `Legacy { current: 1, old: <deprecated getter>, next: 2 }`
pub fn legacy() -> ObjectRef {
    Instance::new("Legacy")
        .with_property("current", 1)
        .with_getter("old", || {
            diagnostic::raise(Diagnostic::deprecated("Legacy::$old is deprecated"))?;
            Ok(Value::from("stale"))
        })
        .with_property("next", 2)
        .into_ref()
}

/// An object whose second property raises a warning when read.
pub fn noisy() -> ObjectRef {
    Instance::new("Noisy")
        .with_property("fine", true)
        .with_getter("loud", || {
            diagnostic::raise(Diagnostic::warning("Noisy::$loud is unhappy"))?;
            Ok(Value::Null)
        })
        .into_ref()
}

/// An object whose getter throws.
pub fn broken() -> ObjectRef {
    Instance::new("Broken")
        .with_getter("value", || {
            Err(Fault::thrown("RuntimeException", "cannot compute value"))
        })
        .into_ref()
}

/// A node that points back at itself through `next`.
pub fn self_loop() -> ObjectRef {
    let node = Rc::new(Instance::new("Node").with_property("label", "loop"));
    let handle = ObjectRef::from_rc(node.clone());
    node.set("next", handle.clone());
    handle
}
