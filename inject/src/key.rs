//! Runtime type identity used as the registry key.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::size_of;

/// The identity of a type as seen by the injector.
///
/// Equality and hashing only consider the `TypeId`. The type name is carried
/// along for error messages and logs.
#[derive(Clone, Copy)]
pub struct TypeKey {
  id: TypeId,
  name: &'static str,
}

impl TypeKey {
  /// Returns the key for `T`. Unsized types such as `dyn Trait` are allowed
  /// and have an identity distinct from every implementor.
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.id
  }

  /// The compiler-provided name of the type, e.g. `alloc::string::String`.
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// Returns the key of an abstract contract type, such as `dyn Greeter`.
///
/// This is the key `Injector::map_to` registers under, exposed so callers can
/// build it independently, e.g. for `Injector::get_key`.
///
/// # Panics
///
/// Panics if `I` is a sized type. Concrete types are registered with
/// `Injector::map`; passing one here is a programming error.
///
/// # Examples
///
/// ```
/// use fibre_inject::{interface_of, TypeKey};
///
/// trait Greeter {}
///
/// let key = interface_of::<dyn Greeter>();
/// assert_eq!(key, TypeKey::of::<dyn Greeter>());
/// ```
pub fn interface_of<I: ?Sized + Any>() -> TypeKey {
  // References to unsized types carry metadata and are wider than a thin pointer.
  if size_of::<&I>() == size_of::<&()>() {
    panic!(
      "Called interface_of with `{}`, which is not an abstract type. Use a trait object such as `dyn MyTrait`, or `map` for concrete types.",
      type_name::<I>()
    );
  }
  TypeKey::of::<I>()
}
