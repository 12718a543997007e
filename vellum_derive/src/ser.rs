use crate::{with_bound, WireField};
use quote::quote;
use syn::*;

pub fn wire_ser(name: &Ident, generics: &Generics, fields: &[WireField]) -> proc_macro2::TokenStream {
    let puts = fields.iter().filter(|f| !f.skip).map(|f| {
        let member = &f.member;
        let label = &f.label;
        quote! {
            ::vellum::structural::Ser::ser(&self.#member, __s).map_err(|e| e.at_field(#label))?;
        }
    });

    let generics = with_bound(generics, quote!(::vellum::structural::Ser));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::vellum::structural::Ser for #name #ty_generics #where_clause {
            fn ser<__S: ::vellum::sink::Serializer>(
                &self,
                __s: &mut __S,
            ) -> ::std::result::Result<(), ::vellum::errors::Error> {
                #(#puts)*
                ::std::result::Result::Ok(())
            }
        }
    }
}

pub fn wire_enum_ser(name: &Ident, repr: &Ident, variants: &[Ident]) -> proc_macro2::TokenStream {
    quote! {
        impl ::vellum::structural::Ser for #name {
            fn ser<__S: ::vellum::sink::Serializer>(
                &self,
                __s: &mut __S,
            ) -> ::std::result::Result<(), ::vellum::errors::Error> {
                let __disc: #repr = match *self {
                    #(#name::#variants => #name::#variants as #repr,)*
                };
                ::vellum::structural::Ser::ser(&__disc, __s)
            }
        }
    }
}
