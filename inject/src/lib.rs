//! # Fibre Inject
//!
//! A minimal, type-keyed dependency injection container for Rust.
//!
//! An [`Injector`] maps the identity of a type to a value. Once populated, it
//! can call functions whose parameters it resolves by type, fill in the marked
//! fields of a struct, and defer lookups it cannot satisfy to a parent
//! injector.
//!
//! ## Core Concepts
//!
//! - **TypeMapper**: `map` binds a value under its own type, `map_to` binds it
//!   under an abstract type such as `dyn Greeter`, and `get` looks it up.
//! - **Invoker**: `invoke` resolves every parameter of a function or closure
//!   and calls it. Nothing runs if a parameter is missing.
//! - **Applicator**: `apply` assigns each `#[inject]` field of a value.
//! - **Scopes**: a child created with [`Injector::child_of`] or given a parent
//!   through [`Injector::set_parent`] falls back to the parent on a local miss.
//!
//! Values are shared through `Rc`, so parameters and injected fields are
//! written as `Rc<T>` and resolve the binding for `T`.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_inject::{Invoker, Injector, TypeMapper};
//! use std::rc::Rc;
//!
//! trait Greeter {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self, name: &str) -> String {
//!         format!("Hello, {}!", name)
//!     }
//! }
//!
//! let root = Rc::new(Injector::new());
//! root.map_to::<dyn Greeter>(Rc::new(EnglishGreeter));
//!
//! let request = Injector::child_of(&root);
//! request.map(String::from("World"));
//!
//! let message = request
//!     .invoke(|greeter: Rc<dyn Greeter>, name: Rc<String>| greeter.greet(&name))
//!     .unwrap();
//! assert_eq!(message, "Hello, World!");
//! ```

mod applicator;
mod error;
mod injector;
mod invoker;
mod key;
mod macros;

pub use applicator::{Applicator, Apply};
pub use error::{InjectError, Result};
pub use injector::{Binding, Injector, TypeMapper};
pub use invoker::{FromInjector, Invocable, Invoker};
pub use key::{interface_of, TypeKey};

#[cfg(feature = "derive")]
pub use fibre_inject_derive::Apply;

/// Brings the facet traits into scope.
pub mod prelude {
  pub use crate::{Applicator, Invoker, TypeMapper};
}
