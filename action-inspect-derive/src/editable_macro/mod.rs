use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

mod args;
use args::{FieldArgs, TypeArgs, VariantArgs};

pub fn impl_editable_macro(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let type_args = match TypeArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(e) => return e.write_errors().into(),
    };

    let body = match &type_args.data {
        darling::ast::Data::Struct(fields) => generate_struct(&type_args, &fields.fields),
        darling::ast::Data::Enum(variants) => generate_enum(&type_args, variants),
    };
    body.into()
}

fn generate_struct(type_args: &TypeArgs, fields: &[FieldArgs]) -> TokenStream {
    let name = &type_args.ident;
    let (impl_generics, ty_generics, where_clause) = type_args.generics.split_for_impl();

    let mut field_descs = Vec::new();
    let mut to_vals = Vec::new();
    let mut from_fields = Vec::new();
    let mut index = 0usize;

    for f in fields {
        let ident = f.ident.as_ref().unwrap();
        let ty = &f.ty;

        if f.skip {
            from_fields.push(quote! { #ident: ::std::default::Default::default() });
            continue;
        }

        let exposed = f.expose || matches!(f.vis, syn::Visibility::Public(_));
        field_descs.push(quote! {
            ::action_inspect::FieldDesc {
                name: stringify!(#ident),
                ty: <#ty as ::action_inspect::Editable>::type_desc(),
                exposed: #exposed,
            }
        });
        to_vals.push(quote! { ::action_inspect::Editable::to_value(&self.#ident) });
        from_fields.push(quote! {
            #ident: <#ty as ::action_inspect::Editable>::from_value(fields.get(#index)?)?
        });
        index += 1;
    }

    let construct = if type_args.no_default {
        quote!(::std::option::Option::None)
    } else {
        quote! {
            ::std::option::Option::Some(|| ::action_inspect::Editable::to_value(
                &<#name #ty_generics as ::std::default::Default>::default(),
            ))
        }
    };

    quote! {
        impl #impl_generics ::action_inspect::Editable for #name #ty_generics #where_clause {
            fn type_desc() -> ::action_inspect::TypeDesc {
                ::action_inspect::TypeDesc::Composite(::std::sync::Arc::new(
                    ::action_inspect::CompositeDesc {
                        name: stringify!(#name),
                        fields: vec![#(#field_descs),*],
                        construct: #construct,
                    },
                ))
            }

            fn to_value(&self) -> ::action_inspect::Value {
                ::action_inspect::Value::Composite(vec![#(#to_vals),*])
            }

            fn from_value(v: &::action_inspect::Value) -> ::std::option::Option<Self> {
                let fields = match v {
                    ::action_inspect::Value::Composite(fields) => fields,
                    _ => return ::std::option::Option::None,
                };
                ::std::option::Option::Some(Self {
                    #(#from_fields),*
                })
            }
        }
    }
}

fn generate_enum(type_args: &TypeArgs, variants: &[VariantArgs]) -> TokenStream {
    let name = &type_args.ident;
    let (impl_generics, ty_generics, where_clause) = type_args.generics.split_for_impl();

    let variant_names = variants.iter().map(|v| {
        let ident = &v.ident;
        quote!(stringify!(#ident))
    });
    let to_arms = variants.iter().enumerate().map(|(i, v)| {
        let ident = &v.ident;
        quote!(#name::#ident => #i)
    });
    let from_arms = variants.iter().enumerate().map(|(i, v)| {
        let ident = &v.ident;
        quote!(#i => ::std::option::Option::Some(#name::#ident))
    });

    quote! {
        impl #impl_generics ::action_inspect::Editable for #name #ty_generics #where_clause {
            fn type_desc() -> ::action_inspect::TypeDesc {
                ::action_inspect::TypeDesc::Enum(::std::sync::Arc::new(
                    ::action_inspect::EnumDesc {
                        name: stringify!(#name),
                        variants: vec![#(#variant_names),*],
                        flags: false,
                    },
                ))
            }

            fn to_value(&self) -> ::action_inspect::Value {
                ::action_inspect::Value::Enum(match self { #(#to_arms),* })
            }

            fn from_value(v: &::action_inspect::Value) -> ::std::option::Option<Self> {
                match v {
                    ::action_inspect::Value::Enum(i) => match *i {
                        #(#from_arms,)*
                        _ => ::std::option::Option::None,
                    },
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}
