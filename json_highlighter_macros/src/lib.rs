extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, ExprLit, Fields, Lit, Meta, parse_macro_input};

/// Builds an `impl Palette` whose `color` is an exhaustive match over the enum's variants.
///
/// Each unit variant may carry `#[color = "#RRGGBB"]`; variants without one map to `None`.
#[proc_macro_derive(Palette, attributes(color))]
pub fn derive_palette(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let schema = if let Data::Enum(data) = &input.data {
        data
    } else {
        return Error::new_spanned(&input, "Palette can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut arms = Vec::with_capacity(schema.variants.len());
    for variant in &schema.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Error::new_spanned(variant, "Palette can only be derived for unit variants")
                .to_compile_error()
                .into();
        }

        let mut color = None;
        for attr in variant.attrs.iter().filter(|a| a.path().is_ident("color")) {
            // Only `#[color = "..."]` is accepted
            let value = match &attr.meta {
                Meta::NameValue(nv) => match &nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }) => s.clone(),
                    other => {
                        return Error::new_spanned(other, "expected a string literal colour")
                            .to_compile_error()
                            .into();
                    }
                },
                _ => {
                    return Error::new_spanned(attr, "expected `#[color = \"#RRGGBB\"]`")
                        .to_compile_error()
                        .into();
                }
            };

            if color.replace(value).is_some() {
                return Error::new_spanned(attr, "duplicate `color` attribute")
                    .to_compile_error()
                    .into();
            }
        }

        let variant_name = &variant.ident;
        let arm = match color {
            Some(value) => quote! { Self::#variant_name => ::core::option::Option::Some(#value), },
            None => quote! { Self::#variant_name => ::core::option::Option::None, },
        };
        arms.push(arm);
    }

    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics Palette for #enum_name #ty_generics #where_clause {
            fn color(&self) -> ::core::option::Option<&'static str> {
                match *self {
                    #(#arms)*
                }
            }
        }
    };

    expanded.into()
}
