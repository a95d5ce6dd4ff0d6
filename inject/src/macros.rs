//! Public macros for ergonomic service resolution.

/// Resolves a service from an injector, panicking if it is missing.
///
/// The injector expression may be an `Injector`, a reference to one or an
/// `Rc<Injector>`. For a non-panicking version, use [`maybe_resolve!`] or
/// `TypeMapper::get` directly.
///
/// # Panics
///
/// Panics if no binding for the type exists in the injector or its parents.
///
/// # Examples
///
/// ```
/// use fibre_inject::{resolve, Injector, TypeMapper};
/// use std::rc::Rc;
///
/// trait Greeter { fn greet(&self) -> String; }
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter { fn greet(&self) -> String { "Hello!".to_string() } }
///
/// let injector = Injector::new();
/// injector.map(String::from("hello"));
/// injector.map_to::<dyn Greeter>(Rc::new(EnglishGreeter));
///
/// assert_eq!(*resolve!(injector, String), "hello");
/// assert_eq!(resolve!(injector, trait Greeter).greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  // Trait arms come first: `trait X` never parses as a type.
  ($injector:expr, trait $trait_ident:ident) => {
    $crate::maybe_resolve!($injector, trait $trait_ident).unwrap_or_else(|| {
      panic!(
        "Failed to resolve required trait service: {}",
        ::std::any::type_name::<dyn $trait_ident>()
      )
    })
  };

  ($injector:expr, $type:ty) => {
    $crate::maybe_resolve!($injector, $type).unwrap_or_else(|| {
      panic!(
        "Failed to resolve required service: {}",
        ::std::any::type_name::<$type>()
      )
    })
  };
}

/// Resolves a service from an injector, returning an `Option`.
///
/// ```
/// use fibre_inject::{maybe_resolve, Injector};
///
/// struct Unregistered;
///
/// let injector = Injector::new();
/// assert!(maybe_resolve!(injector, Unregistered).is_none());
/// ```
#[macro_export]
macro_rules! maybe_resolve {
  ($injector:expr, trait $trait_ident:ident) => {{
    use $crate::TypeMapper as _;
    ($injector).get::<dyn $trait_ident>()
  }};

  ($injector:expr, $type:ty) => {{
    use $crate::TypeMapper as _;
    ($injector).get::<$type>()
  }};
}
