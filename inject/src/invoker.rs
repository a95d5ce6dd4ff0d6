//! Calling functions with arguments resolved from an injector.

use crate::error::{InjectError, Result};
use crate::injector::{Injector, TypeMapper};
use crate::key::TypeKey;
use std::any::{type_name, Any};
use std::rc::Rc;
use tracing::{debug, trace};

/// A type that can be produced from the bindings of an [`Injector`].
///
/// This is what function parameters and injected fields resolve through.
/// `Rc<T>` resolves the binding for `T`, so `Rc<dyn Greeter>` resolves
/// whatever was registered with `map_to::<dyn Greeter>`. Tuples of
/// `FromInjector` types resolve each element in order.
pub trait FromInjector: Sized {
  fn from_injector(injector: &Injector) -> Result<Self>;
}

impl<T: ?Sized + Any> FromInjector for Rc<T> {
  fn from_injector(injector: &Injector) -> Result<Self> {
    injector
      .get::<T>()
      .ok_or_else(|| InjectError::not_found(&TypeKey::of::<T>()))
  }
}

/// A callable that takes its parameters as the tuple `Args`.
///
/// Implemented for every `FnOnce` with up to ten parameters.
pub trait Invocable<Args> {
  type Output;

  fn invoke_with(self, args: Args) -> Self::Output;
}

macro_rules! define_invocable ({ $($param:ident)* } => {
  impl<Func, Ret, $($param,)*> Invocable<($($param,)*)> for Func
  where
    Func: FnOnce($($param),*) -> Ret,
  {
    type Output = Ret;

    #[inline]
    #[allow(non_snake_case)]
    fn invoke_with(self, ($($param,)*): ($($param,)*)) -> Ret {
      (self)($($param,)*)
    }
  }

  impl<$($param: FromInjector,)*> FromInjector for ($($param,)*) {
    #[inline]
    #[allow(unused_variables)]
    fn from_injector(injector: &Injector) -> Result<Self> {
      Ok(($($param::from_injector(injector)?,)*))
    }
  }
});

define_invocable! {}
define_invocable! { T1 }
define_invocable! { T1 T2 }
define_invocable! { T1 T2 T3 }
define_invocable! { T1 T2 T3 T4 }
define_invocable! { T1 T2 T3 T4 T5 }
define_invocable! { T1 T2 T3 T4 T5 T6 }
define_invocable! { T1 T2 T3 T4 T5 T6 T7 }
define_invocable! { T1 T2 T3 T4 T5 T6 T7 T8 }
define_invocable! { T1 T2 T3 T4 T5 T6 T7 T8 T9 }
define_invocable! { T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 }

/// Calls functions after resolving their parameters by type.
pub trait Invoker {
  /// Resolves every parameter of `f`, then calls it.
  ///
  /// If any parameter cannot be resolved, `f` is not called and the error
  /// names the first missing type. The return value of `f` is handed back
  /// as-is, including any `Result` it produces.
  fn invoke<Args, F>(&self, f: F) -> Result<F::Output>
  where
    Args: FromInjector,
    F: Invocable<Args>;
}

impl Invoker for Injector {
  fn invoke<Args, F>(&self, f: F) -> Result<F::Output>
  where
    Args: FromInjector,
    F: Invocable<Args>,
  {
    let args = Args::from_injector(self).map_err(|err| {
      debug!(callable = type_name::<F>(), error = %err, "invocation aborted");
      err
    })?;
    trace!(callable = type_name::<F>(), "invoking");
    Ok(f.invoke_with(args))
  }
}
