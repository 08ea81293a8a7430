//! Test attribute used across the `rxcore` test suites.
//!
//! `#[rxcore_macro::test]` on a plain function expands to `#[test]`; on an
//! `async fn` it expands to `#[tokio::test]`. Async tests may pick a runtime
//! flavor: `local` (current thread) or `shared` (multi thread).

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Ident, ItemFn, LitStr};

const USAGE: &str = "rxcore_macro::test only accepts: #[rxcore_macro::test], \
                     #[rxcore_macro::test(local)], #[rxcore_macro::test(shared)], or string \
                     equivalents";

#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as ItemFn);
  let is_async = input.sig.asyncness.is_some();
  let raw_args = proc_macro2::TokenStream::from(attr);

  if !is_async {
    if !raw_args.is_empty() {
      return error(
        raw_args.span(),
        "runtime flavors are only supported for async tests; drop the argument or make the \
         function async",
      );
    }
    return TokenStream::from(quote! {
      #[test]
      #input
    });
  }

  let flavor = if raw_args.is_empty() {
    None
  } else if let Ok(ident) = syn::parse2::<Ident>(raw_args.clone()) {
    match runtime_flavor(&ident.to_string()) {
      Some(flavor) => Some(flavor),
      None => return error(ident.span(), USAGE),
    }
  } else if let Ok(lit) = syn::parse2::<LitStr>(raw_args.clone()) {
    match runtime_flavor(&lit.value()) {
      Some(flavor) => Some(flavor),
      None => return error(lit.span(), USAGE),
    }
  } else {
    return error(raw_args.span(), USAGE);
  };

  let expanded = match flavor {
    Some(flavor) => quote! {
      #[tokio::test(flavor = #flavor)]
      #input
    },
    None => quote! {
      #[tokio::test]
      #input
    },
  };
  TokenStream::from(expanded)
}

fn runtime_flavor(arg: &str) -> Option<&'static str> {
  match arg {
    "local" => Some("current_thread"),
    "shared" => Some("multi_thread"),
    _ => None,
  }
}

fn error(span: proc_macro2::Span, msg: &str) -> TokenStream {
  TokenStream::from(syn::Error::new(span, msg).to_compile_error())
}
