use crate::{with_bound, WireField};
use quote::quote;
use syn::*;

pub fn wire_de(name: &Ident, generics: &Generics, fields: &[WireField]) -> proc_macro2::TokenStream {
    // struct expressions evaluate their fields in the order written, which is the
    // declaration order
    let inits = fields.iter().map(|f| {
        let member = &f.member;
        let label = &f.label;
        if f.skip {
            quote! { #member: ::std::default::Default::default() }
        } else {
            quote! {
                #member: ::vellum::structural::De::de(__d).map_err(|e| e.at_field(#label))?
            }
        }
    });

    let in_place = fields.iter().filter(|f| !f.skip).map(|f| {
        let member = &f.member;
        let label = &f.label;
        quote! {
            ::vellum::structural::De::de_in_place(&mut self.#member, __d)
                .map_err(|e| e.at_field(#label))?;
        }
    });

    let generics = with_bound(generics, quote!(::vellum::structural::De));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::vellum::structural::De for #name #ty_generics #where_clause {
            fn de<__D: ::vellum::source::Deserializer>(
                __d: &mut __D,
            ) -> ::std::result::Result<Self, ::vellum::errors::Error> {
                ::std::result::Result::Ok(#name { #(#inits,)* })
            }

            fn de_in_place<__D: ::vellum::source::Deserializer>(
                &mut self,
                __d: &mut __D,
            ) -> ::std::result::Result<(), ::vellum::errors::Error> {
                #(#in_place)*
                ::std::result::Result::Ok(())
            }
        }
    }
}

pub fn wire_enum_de(name: &Ident, repr: &Ident, variants: &[Ident]) -> proc_macro2::TokenStream {
    let name_str = name.to_string();
    quote! {
        impl ::vellum::structural::De for #name {
            fn de<__D: ::vellum::source::Deserializer>(
                __d: &mut __D,
            ) -> ::std::result::Result<Self, ::vellum::errors::Error> {
                let __disc = <#repr as ::vellum::structural::De>::de(__d)?;
                #(
                    if __disc == #name::#variants as #repr {
                        return ::std::result::Result::Ok(#name::#variants);
                    }
                )*
                ::std::result::Result::Err(::vellum::errors::Error::type_mismatch(::std::format!(
                    "no `{}` variant has discriminant {}",
                    #name_str,
                    __disc
                )))
            }
        }
    }
}
