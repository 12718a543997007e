//! `#[derive(Wire)]` for records and enumerations encoded by the `vellum` structural
//! codec.
//!
//! For structs, the generated code encodes and decodes the fields in declaration order
//! with no names or tags. A field marked `#[wire(skip)]` is left out on both sides: it
//! is never written, and decoding fills it with `Default::default()` (or leaves it
//! untouched when decoding in place).
//!
//! Fieldless enums with an integer `#[repr]` are encoded as their discriminant, exactly
//! like a value of the `repr` type. Decoding a discriminant no variant has fails.

extern crate proc_macro;
extern crate proc_macro2;

mod de;
mod ser;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::*;

/// A field of the record being derived.
pub(crate) struct WireField {
    /// `self.#member` accesses the field.
    pub(crate) member: Member,
    /// The name reported in error paths.
    pub(crate) label: String,
    pub(crate) skip: bool,
}

fn is_skipped(field: &Field) -> Result<bool> {
    let mut skip = false;
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("wire")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported `wire` attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn wire_fields(fields: &Fields) -> Result<Vec<WireField>> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let (member, label) = match &field.ident {
                Some(ident) => (Member::Named(ident.clone()), ident.to_string()),
                None => (Member::Unnamed(Index::from(i)), i.to_string()),
            };
            Ok(WireField {
                member,
                label,
                skip: is_skipped(field)?,
            })
        })
        .collect()
}

const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
];

/// The integer type named in the `#[repr(..)]` attributes, if any.
fn int_repr(attrs: &[Attribute]) -> Result<Option<Ident>> {
    let mut repr = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            match meta.path.get_ident() {
                Some(ident) if INT_REPRS.contains(&ident.to_string().as_str()) => {
                    repr = Some(ident.clone());
                }
                // `C`, `align(..)` and friends
                _ => {
                    if meta.input.peek(token::Paren) {
                        let content;
                        syn::parenthesized!(content in meta.input);
                        content.parse::<TokenStream2>()?;
                    }
                }
            }
            Ok(())
        })?;
    }
    Ok(repr)
}

/// Variants of a fieldless enum.
fn unit_variants(data: &DataEnum) -> Result<Vec<Ident>> {
    data.variants
        .iter()
        .map(|v| match v.fields {
            Fields::Unit => Ok(v.ident.clone()),
            _ => Err(Error::new_spanned(
                &v.ident,
                "`Wire` can only be derived for enums whose variants have no fields",
            )),
        })
        .collect()
}

/// Adds `bound` to every type parameter of `generics`.
pub(crate) fn with_bound(generics: &Generics, bound: TokenStream2) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in params {
        let pred: WherePredicate = parse_quote!(#ident: #bound);
        where_clause.predicates.push(pred);
    }
    generics
}

#[proc_macro_derive(Wire, attributes(wire))]
pub fn wire_derive(input: TokenStream) -> TokenStream {
    // Construct a representation of Rust code as a syntax tree
    // that we can manipulate
    let ast: DeriveInput = match syn::parse(input) {
        Ok(ast) => ast,
        Err(e) => return e.to_compile_error().into(),
    };

    // Build the trait implementations
    match impl_wire_macro(&ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn impl_wire_macro(ast: &DeriveInput) -> Result<TokenStream2> {
    let name = &ast.ident;

    match &ast.data {
        Data::Struct(sd) => {
            let fields = wire_fields(&sd.fields)?;
            let wser = ser::wire_ser(name, &ast.generics, &fields);
            let wde = de::wire_de(name, &ast.generics, &fields);
            Ok(quote! {
                #wser
                #wde
            })
        }
        Data::Enum(ed) => {
            if !ast.generics.params.is_empty() {
                return Err(Error::new_spanned(
                    &ast.generics,
                    "`Wire` cannot be derived for generic enums",
                ));
            }
            let repr = int_repr(&ast.attrs)?.ok_or_else(|| {
                Error::new_spanned(
                    ast.ident.to_token_stream(),
                    "`Wire` on an enum needs an integer `#[repr]`, e.g. `#[repr(u8)]`",
                )
            })?;
            let variants = unit_variants(ed)?;
            let wser = ser::wire_enum_ser(name, &repr, &variants);
            let wde = de::wire_enum_de(name, &repr, &variants);
            Ok(quote! {
                #wser
                #wde
            })
        }
        Data::Union(_) => Err(Error::new_spanned(
            ast.ident.to_token_stream(),
            "`Wire` cannot be derived for unions",
        )),
    }
}
