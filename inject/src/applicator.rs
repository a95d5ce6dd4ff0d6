//! Field injection into existing values.

use crate::error::Result;
use crate::injector::Injector;
use std::any::type_name;
use tracing::{debug, trace};

/// A value whose fields can be filled in from an [`Injector`].
///
/// Usually derived. `#[derive(Apply)]` assigns every field marked with a bare
/// `#[inject]` attribute, in declaration order, through
/// [`FromInjector`](crate::FromInjector). Unmarked fields are left alone. The
/// first field that cannot be resolved stops the walk; fields assigned before
/// it keep their new values.
///
/// Deriving on an enum or union produces an impl that does nothing, as do the
/// impls this crate provides for primitive types.
///
/// ```
/// use fibre_inject::{Apply, Applicator, Injector, TypeMapper};
/// use std::rc::Rc;
///
/// #[derive(Default, Apply)]
/// struct Handler {
///   #[inject]
///   prefix: Rc<String>,
///   hits: u32,
/// }
///
/// let injector = Injector::new();
/// injector.map(String::from("api"));
///
/// let mut handler = Handler::default();
/// injector.apply(&mut handler).unwrap();
/// assert_eq!(*handler.prefix, "api");
/// ```
pub trait Apply {
  fn apply_from(&mut self, injector: &Injector) -> Result<()>;
}

macro_rules! impl_apply_noop {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Apply for $ty {
        #[inline]
        fn apply_from(&mut self, _injector: &Injector) -> Result<()> {
          Ok(())
        }
      }
    )*
  };
}

impl_apply_noop!(
  (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
  String,
);

impl<T: Apply + ?Sized> Apply for Box<T> {
  fn apply_from(&mut self, injector: &Injector) -> Result<()> {
    (**self).apply_from(injector)
  }
}

/// Injects into the marked fields of existing values.
pub trait Applicator {
  fn apply<T: Apply + ?Sized>(&self, target: &mut T) -> Result<()>;
}

impl Applicator for Injector {
  fn apply<T: Apply + ?Sized>(&self, target: &mut T) -> Result<()> {
    trace!(value_type = type_name::<T>(), "applying");
    target.apply_from(self).map_err(|err| {
      debug!(value_type = type_name::<T>(), error = %err, "apply aborted");
      err
    })
  }
}
