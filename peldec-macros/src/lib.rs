//! Procedural macros for the peldec framework.

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, LitStr, parse_macro_input};

/// Turn a free function into a registered SRC decoder.
///
/// The function must be synchronous with the shape
/// `fn(&SrcData<'_>) -> Result<String, BoxError>`. The attribute replaces
/// it with a unit struct of the same name implementing
/// `peldec::SrcDecoder` and submits an instance for link-time collection
/// under the given component id. Requires the `macros` feature of
/// `peldec` (which enables `inventory`); the registry side is
/// `peldec::collected_src_registry()`.
///
/// ```rust,ignore
/// use peldec::{BoxError, SrcData, src_decoder};
///
/// #[src_decoder("e5")]
/// fn hardware_diagnostics(src: &SrcData<'_>) -> Result<String, BoxError> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn src_decoder(attr: TokenStream, item: TokenStream) -> TokenStream {
    let id = parse_macro_input!(attr as LitStr);
    let input = parse_macro_input!(item as ItemFn);

    let value = id.value();
    if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return syn::Error::new(
            id.span(),
            "component id must be exactly 2 ASCII alphanumeric characters",
        )
        .to_compile_error()
        .into();
    }
    let id_lower = LitStr::new(&value.to_ascii_lowercase(), id.span());

    if input.sig.asyncness.is_some() {
        return syn::Error::new_spanned(&input.sig.fn_token, "SRC decoders are synchronous")
            .to_compile_error()
            .into();
    }

    let inputs = &input.sig.inputs;
    if inputs.len() != 1 {
        return syn::Error::new_spanned(
            inputs,
            "SRC decoder must take exactly one argument: fn(src: &SrcData<'_>)",
        )
        .to_compile_error()
        .into();
    }

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_block = &input.block;
    let output = &input.sig.output;

    let expanded = quote! {
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Default)]
        #[doc = concat!("Auto-generated SrcDecoder from `#[src_decoder]` on `", stringify!(#fn_name), "`")]
        #fn_vis struct #fn_name;

        impl ::peldec::SrcDecoder for #fn_name {
            fn decode(&self, #inputs) #output {
                #fn_block
            }
        }

        ::peldec::inventory::submit! {
            ::peldec::RegisteredSrcDecoder {
                id: #id_lower,
                decoder: &#fn_name,
            }
        }
    };

    TokenStream::from(expanded)
}
