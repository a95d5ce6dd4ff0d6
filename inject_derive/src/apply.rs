use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
  parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, Index, Member, Meta, Type,
};

const MARKER: &str = "inject";

pub fn derive_apply(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  expand(input)
    .unwrap_or_else(syn::Error::into_compile_error)
    .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
  let targets = match &input.data {
    Data::Struct(data) => marked_fields(&data.fields)?,
    Data::Enum(data) => {
      for variant in &data.variants {
        if let Some(field) = first_marked(&variant.fields)? {
          return Err(syn::Error::new_spanned(
            field,
            "#[inject] is only supported on struct fields",
          ));
        }
      }
      Vec::new()
    }
    Data::Union(_) => Vec::new(),
  };

  // Concrete field types need no bound, and naming a private type in one
  // would trip the private bounds lint.
  if input.generics.type_params().next().is_some() {
    let where_clause = input.generics.make_where_clause();
    for (_, ty) in &targets {
      where_clause
        .predicates
        .push(parse_quote!(#ty: ::fibre_inject::FromInjector));
    }
  }

  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
  let assignments = targets.iter().map(|(member, ty)| {
    quote! {
      self.#member = <#ty as ::fibre_inject::FromInjector>::from_injector(injector)?;
    }
  });

  Ok(quote! {
    #[automatically_derived]
    impl #impl_generics ::fibre_inject::Apply for #name #ty_generics #where_clause {
      #[allow(unused_variables)]
      fn apply_from(
        &mut self,
        injector: &::fibre_inject::Injector,
      ) -> ::core::result::Result<(), ::fibre_inject::InjectError> {
        #(#assignments)*
        ::core::result::Result::Ok(())
      }
    }
  })
}

fn marked_fields(fields: &Fields) -> syn::Result<Vec<(Member, Type)>> {
  let mut targets = Vec::new();
  for (index, field) in fields.iter().enumerate() {
    if !is_marked(&field.attrs)? {
      continue;
    }
    let member = match &field.ident {
      Some(ident) => Member::Named(ident.clone()),
      None => Member::Unnamed(Index::from(index)),
    };
    targets.push((member, field.ty.clone()));
  }
  Ok(targets)
}

fn first_marked(fields: &Fields) -> syn::Result<Option<&syn::Field>> {
  for field in fields {
    if is_marked(&field.attrs)? {
      return Ok(Some(field));
    }
  }
  Ok(None)
}

/// The marker must be exactly `#[inject]`.
fn is_marked(attrs: &[Attribute]) -> syn::Result<bool> {
  let mut marked = false;
  for attr in attrs.iter().filter(|attr| attr.path().is_ident(MARKER)) {
    match &attr.meta {
      Meta::Path(_) if !marked => marked = true,
      Meta::Path(_) => {
        return Err(syn::Error::new_spanned(attr, "duplicate #[inject] marker"));
      }
      Meta::List(_) | Meta::NameValue(_) => {
        return Err(syn::Error::new_spanned(
          attr,
          "the injection marker takes no arguments, write a bare #[inject]",
        ));
      }
    }
  }
  Ok(marked)
}
