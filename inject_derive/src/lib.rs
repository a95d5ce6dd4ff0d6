//! Procedural macros for `fibre_inject`.
//!
//! Use through the `fibre_inject` crate with its `derive` feature, which
//! re-exports [`Apply`](macro@Apply).

use proc_macro::TokenStream;

mod apply;

/// Derives `fibre_inject::Apply`.
///
/// Every field marked with a bare `#[inject]` is assigned from the injector,
/// in declaration order, through `fibre_inject::FromInjector`. Other fields
/// are untouched. On an enum or union the derived impl does nothing.
///
/// ```ignore
/// #[derive(Default, Apply)]
/// struct Report {
///   #[inject]
///   store: Rc<dyn Store>,
///   title: String,
/// }
/// ```
#[proc_macro_derive(Apply, attributes(inject))]
pub fn derive_apply(input: TokenStream) -> TokenStream {
  apply::derive_apply(input)
}
