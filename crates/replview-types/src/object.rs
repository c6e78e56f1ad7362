//! Object instances and the introspection surface presenters rely on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::diagnostic::{self, Diagnostic, DiagnosticKind};
use crate::error::Result;
use crate::value::Value;

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique handle number of an object instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh id. Ids are never reused within a process.
    pub fn next() -> Self {
        ObjectId(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub name: String,
    pub visibility: Visibility,
}

/// Introspection surface of a runtime object.
///
/// `properties` must report declarations in declaration order; presenters
/// render them in exactly that order.
pub trait Object {
    fn object_id(&self) -> ObjectId;

    fn class_name(&self) -> &str;

    fn properties(&self) -> Vec<PropertyDecl>;

    /// Read the current value of a property. Reads may raise diagnostics
    /// through [`diagnostic::raise`] or fail outright.
    fn read_property(&self, name: &str) -> Result<Value>;
}

/// Shared handle to an object instance
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn Object>);

impl ObjectRef {
    pub fn new(object: impl Object + 'static) -> Self {
        ObjectRef(Rc::new(object))
    }

    /// Wrap an already shared object, keeping the caller's handle usable
    /// (e.g. to wire up a cycle after construction).
    pub fn from_rc<T: Object + 'static>(object: Rc<T>) -> Self {
        ObjectRef(object)
    }

    pub fn id(&self) -> ObjectId {
        self.0.object_id()
    }

    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    pub fn properties(&self) -> Vec<PropertyDecl> {
        self.0.properties()
    }

    pub fn read_property(&self, name: &str) -> Result<Value> {
        self.0.read_property(name)
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({} #{})", self.class_name(), self.id())
    }
}

type Getter = Rc<dyn Fn() -> Result<Value>>;

#[derive(Clone)]
enum SlotValue {
    Stored(Value),
    Computed(Getter),
}

struct Slot {
    decl: PropertyDecl,
    value: SlotValue,
}

/// General-purpose object: a class name plus an ordered set of slots.
///
/// A slot either stores a value or computes it on every read. Slots live
/// behind a `RefCell` so that graphs (including cycles) can be wired up
/// after the instance has been shared.
pub struct Instance {
    id: ObjectId,
    class: String,
    slots: RefCell<Vec<Slot>>,
}

impl Instance {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            id: ObjectId::next(),
            class: class.into(),
            slots: RefCell::new(Vec::new()),
        }
    }

    pub fn with_property(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_slot(name, Visibility::Public, SlotValue::Stored(value.into()))
    }

    pub fn with_protected(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_slot(name, Visibility::Protected, SlotValue::Stored(value.into()))
    }

    pub fn with_private(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_slot(name, Visibility::Private, SlotValue::Stored(value.into()))
    }

    /// Public property whose value is computed by `getter` on every read.
    pub fn with_getter<F>(self, name: impl Into<String>, getter: F) -> Self
    where
        F: Fn() -> Result<Value> + 'static,
    {
        self.with_slot(name, Visibility::Public, SlotValue::Computed(Rc::new(getter)))
    }

    fn with_slot(self, name: impl Into<String>, visibility: Visibility, value: SlotValue) -> Self {
        self.slots.borrow_mut().push(Slot {
            decl: PropertyDecl {
                name: name.into(),
                visibility,
            },
            value,
        });
        self
    }

    /// Overwrite a slot in place, or append a new public one.
    pub fn set(&self, name: &str, value: impl Into<Value>) {
        let value = SlotValue::Stored(value.into());
        let mut slots = self.slots.borrow_mut();
        match slots.iter_mut().find(|slot| slot.decl.name == name) {
            Some(slot) => slot.value = value,
            None => slots.push(Slot {
                decl: PropertyDecl {
                    name: name.to_string(),
                    visibility: Visibility::Public,
                },
                value,
            }),
        }
    }

    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }
}

impl Object for Instance {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn class_name(&self) -> &str {
        &self.class
    }

    fn properties(&self) -> Vec<PropertyDecl> {
        self.slots
            .borrow()
            .iter()
            .map(|slot| slot.decl.clone())
            .collect()
    }

    fn read_property(&self, name: &str) -> Result<Value> {
        let value = self
            .slots
            .borrow()
            .iter()
            .find(|slot| slot.decl.name == name)
            .map(|slot| slot.value.clone());

        // The slot borrow is released here; getters may touch this instance.
        match value {
            Some(SlotValue::Stored(value)) => Ok(value),
            Some(SlotValue::Computed(getter)) => getter(),
            None => {
                diagnostic::raise(Diagnostic::new(
                    DiagnosticKind::Warning,
                    format!("Undefined property: {}::${}", self.class, name),
                ))?;
                Ok(Value::Null)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Disposition;
    use crate::error::Fault;

    #[test]
    fn test_ids_are_unique() {
        let a = Instance::new("Foo");
        let b = Instance::new("Foo");
        assert_ne!(a.object_id(), b.object_id());
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let object = Instance::new("Foo")
            .with_property("zeta", 1)
            .with_private("alpha", 2)
            .with_property("mid", 3);

        let names: Vec<String> = object.properties().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let object = Instance::new("Foo")
            .with_property("a", 1)
            .with_property("b", 2);
        object.set("a", 10);
        object.set("c", 3);

        let names: Vec<String> = object.properties().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(object.read_property("a"), Ok(Value::Int(10)));
    }

    #[test]
    fn test_getter_runs_on_every_read() {
        let object = Instance::new("Clock").with_getter("now", || Ok(Value::from(42)));
        assert_eq!(object.read_property("now"), Ok(Value::Int(42)));
    }

    #[test]
    fn test_undefined_property_raises_warning() {
        let object = Instance::new("Foo");
        match object.read_property("missing") {
            Err(Fault::Diagnostic(diagnostic)) => {
                assert_eq!(diagnostic.kind, DiagnosticKind::Warning);
                assert_eq!(diagnostic.message, "Undefined property: Foo::$missing");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let _scope = diagnostic::install(|_: &Diagnostic| Disposition::Handled);
        assert_eq!(object.read_property("missing"), Ok(Value::Null));
    }

    #[test]
    fn test_from_rc_shares_identity() {
        let node = Rc::new(Instance::new("Node"));
        let handle = ObjectRef::from_rc(node.clone());
        node.set("self", handle.clone());

        match node.read_property("self") {
            Ok(Value::Object(inner)) => assert!(inner.ptr_eq(&handle)),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
