//! Derive inputs parsed by `darling`.

use darling::{FromDeriveInput, FromField, FromVariant};

#[derive(FromDeriveInput)]
#[darling(attributes(editable), supports(struct_named, enum_unit))]
pub struct TypeArgs {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub data: darling::ast::Data<VariantArgs, FieldArgs>,

    /// `#[editable(no_default)]`
    ///
    /// The type has no zero-argument construction path; absent values stay
    /// absent in the editor.
    #[darling(default)]
    pub no_default: bool,
}

#[derive(FromField, Clone)]
#[darling(attributes(editable))]
pub struct FieldArgs {
    pub ident: Option<syn::Ident>,
    pub vis: syn::Visibility,
    pub ty: syn::Type,

    /// `#[editable(skip)]`
    ///
    /// Leave the field out of the descriptor and the value.
    #[darling(default)]
    pub skip: bool,

    /// `#[editable(expose)]`
    ///
    /// Make a non-public field editable.
    #[darling(default)]
    pub expose: bool,
}

#[derive(FromVariant)]
#[darling(attributes(editable))]
pub struct VariantArgs {
    pub ident: syn::Ident,
}
