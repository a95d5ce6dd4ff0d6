//! The `Injector` and its type-keyed registry.

use crate::error::{InjectError, Result};
use crate::key::{interface_of, TypeKey};
use once_cell::unsync::OnceCell;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// A type-erased binding as stored in the registry.
///
/// The concrete content is always an `Rc<T>` where `T` is the type the
/// binding was keyed under, so `binding.downcast_ref::<Rc<T>>()` recovers it.
pub type Binding = Rc<dyn Any>;

/// Stores and retrieves values by type identity.
pub trait TypeMapper {
  /// Binds `value` under its own concrete type. A previous binding for the
  /// same type is replaced.
  fn map<T: Any>(&self, value: T);

  /// Binds `value` under the abstract type `I`, usually a trait object.
  ///
  /// # Panics
  ///
  /// Panics if `I` is a sized type, see [`interface_of`].
  fn map_to<I: ?Sized + Any>(&self, value: Rc<I>);

  /// Looks up a binding, falling back to the parent chain on a local miss.
  fn get_key(&self, key: &TypeKey) -> Option<Binding>;

  /// Typed lookup. `None` means no binding exists anywhere in the chain.
  fn get<T: ?Sized + Any>(&self) -> Option<Rc<T>> {
    self
      .get_key(&TypeKey::of::<T>())
      .and_then(|binding| binding.downcast_ref::<Rc<T>>().cloned())
  }

  fn contains_key(&self, key: &TypeKey) -> bool {
    self.get_key(key).is_some()
  }

  fn contains<T: ?Sized + Any>(&self) -> bool {
    self.contains_key(&TypeKey::of::<T>())
  }
}

/// A single-threaded dependency injection container.
///
/// Values are held in `Rc` and the registry uses a `RefCell`, so an
/// `Injector` is neither `Send` nor `Sync`. All methods take `&self`, which
/// lets an injector be shared as the parent of several children while still
/// accepting new bindings.
///
/// A child holds only a weak reference to its parent. Once the parent is
/// dropped, the child resolves as if it had none.
#[derive(Default)]
pub struct Injector {
  bindings: RefCell<HashMap<TypeKey, Binding>>,
  parent: OnceCell<Weak<Injector>>,
}

impl Injector {
  /// Creates a new, empty `Injector` without a parent.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a new, empty `Injector` whose lookups fall back to `parent`.
  pub fn child_of(parent: &Rc<Injector>) -> Self {
    Self {
      bindings: RefCell::default(),
      parent: OnceCell::with_value(Rc::downgrade(parent)),
    }
  }

  /// Sets the parent consulted on lookup misses.
  ///
  /// The parent can be set only once. Setting an injector as its own parent is
  /// rejected since every miss would recurse forever.
  pub fn set_parent(&self, parent: &Rc<Injector>) -> Result<()> {
    if std::ptr::eq(self, Rc::as_ptr(parent)) {
      return Err(InjectError::SelfParent);
    }
    self
      .parent
      .set(Rc::downgrade(parent))
      .map_err(|_| InjectError::ParentAlreadySet)?;
    debug!(parent_bindings = parent.len(), "injector parent set");
    Ok(())
  }

  /// Returns the parent if one was set and it is still alive.
  pub fn parent(&self) -> Option<Rc<Injector>> {
    self.parent.get().and_then(Weak::upgrade)
  }

  /// Number of bindings held locally, not counting the parent chain.
  pub fn len(&self) -> usize {
    self.bindings.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.borrow().is_empty()
  }

  fn bind(&self, key: TypeKey, binding: Binding) {
    let replaced = self.bindings.borrow_mut().insert(key, binding).is_some();
    debug!(type_name = key.name(), replaced, "binding registered");
  }
}

impl TypeMapper for Injector {
  fn map<T: Any>(&self, value: T) {
    let binding: Binding = Rc::new(Rc::new(value));
    self.bind(TypeKey::of::<T>(), binding);
  }

  fn map_to<I: ?Sized + Any>(&self, value: Rc<I>) {
    let key = interface_of::<I>();
    let binding: Binding = Rc::new(value);
    self.bind(key, binding);
  }

  fn get_key(&self, key: &TypeKey) -> Option<Binding> {
    // The borrow ends here so a parent lookup never overlaps it.
    let local = self.bindings.borrow().get(key).cloned();
    if local.is_some() {
      trace!(type_name = key.name(), "resolved locally");
      return local;
    }

    let parent = self.parent()?;
    trace!(type_name = key.name(), "delegating lookup to parent");
    parent.get_key(key)
  }
}

impl fmt::Debug for Injector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let bindings = self.bindings.borrow();
    let mut names: Vec<&'static str> = bindings.keys().map(TypeKey::name).collect();
    names.sort_unstable();
    f.debug_struct("Injector")
      .field("bindings", &names)
      .field("has_parent", &self.parent().is_some())
      .finish()
  }
}
