use darling::FromMeta;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{parse_macro_input, FnArg, ImplItem, ItemImpl, LitStr, Pat, ReturnType};

#[derive(Default, FromMeta)]
#[darling(default)]
struct ActionArgs {
    name: Option<String>,
}

fn parse_action_args(attr: &syn::Attribute) -> Result<ActionArgs, syn::Error> {
    match attr.parse_meta()? {
        syn::Meta::Path(_) => Ok(ActionArgs::default()),
        syn::Meta::List(list) => {
            let nested: Vec<syn::NestedMeta> = list.nested.into_iter().collect();
            ActionArgs::from_list(&nested)
                .map_err(|e| syn::Error::new_spanned(attr, e.to_string()))
        }
        other => Err(syn::Error::new_spanned(
            other,
            "expected #[action] or #[action(name = \"...\")]",
        )),
    }
}

pub fn impl_actions_macro(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let mut imp = parse_macro_input!(item as ItemImpl);
    let self_ty = imp.self_ty.clone();
    let type_name = LitStr::new(
        &quote!(#self_ty).to_string().replace(' ', ""),
        Span::call_site(),
    );

    let mut descs = Vec::new();
    let mut arms = Vec::new();
    let mut index = 0usize;

    for item in &mut imp.items {
        let method = match item {
            ImplItem::Method(m) => m,
            _ => continue,
        };
        let pos = match method.attrs.iter().position(|a| a.path.is_ident("action")) {
            Some(pos) => pos,
            None => continue,
        };
        let attr = method.attrs.remove(pos);
        let action_args = match parse_action_args(&attr) {
            Ok(args) => args,
            Err(e) => return e.to_compile_error().into(),
        };

        let ident = method.sig.ident.clone();
        let name_lit = LitStr::new(&ident.to_string(), ident.span());
        let display = match &action_args.name {
            Some(n) => {
                let lit = LitStr::new(n, Span::call_site());
                quote!(::std::option::Option::Some(#lit))
            }
            None => quote!(::std::option::Option::None),
        };

        let is_instance = matches!(method.sig.inputs.first(), Some(FnArg::Receiver(_)));
        let target = if is_instance {
            quote!(::action_inspect::TargetKind::Instance)
        } else {
            quote!(::action_inspect::TargetKind::Static)
        };

        let mut param_descs = Vec::new();
        let mut bindings = Vec::new();
        let mut call_args = Vec::new();
        let typed_args = method.sig.inputs.iter().filter_map(|a| match a {
            FnArg::Typed(t) => Some(t),
            FnArg::Receiver(_) => None,
        });
        for (ai, arg) in typed_args.enumerate() {
            let ty = (*arg.ty).clone();
            let pname = match &*arg.pat {
                Pat::Ident(p) => p.ident.to_string(),
                _ => format!("arg{}", ai),
            };
            let pname_lit = LitStr::new(&pname, Span::call_site());
            let ty_lit = LitStr::new(&quote!(#ty).to_string().replace(' ', ""), Span::call_site());
            let var = format_ident!("__arg{}", ai);

            param_descs.push(quote! {
                ::action_inspect::ParamDesc::new(
                    #pname_lit,
                    <#ty as ::action_inspect::Editable>::type_desc(),
                )
            });
            bindings.push(quote! {
                let #var = <#ty as ::action_inspect::Editable>::from_value(
                    args.get(#ai).unwrap_or(&::action_inspect::Value::Absent),
                )
                .ok_or(::action_inspect::InvokeError::BadArg {
                    name: #pname_lit,
                    expected: #ty_lit,
                })?;
            });
            call_args.push(quote!(#var));
        }

        let call = if is_instance {
            quote!(this.#ident(#(#call_args),*))
        } else {
            quote!(<#self_ty>::#ident(#(#call_args),*))
        };
        let finish = match &method.sig.output {
            ReturnType::Default => quote! { #call; ::std::result::Result::Ok(()) },
            ReturnType::Type(..) => quote! {
                #call.map_err(|e| ::action_inspect::InvokeError::Failed(e.to_string()))
            },
        };
        let receiver = if is_instance {
            quote! {
                let this = match this {
                    ::std::option::Option::Some(this) => this,
                    ::std::option::Option::None => {
                        return ::std::result::Result::Err(
                            ::action_inspect::InvokeError::NoReceiver(#name_lit),
                        )
                    }
                };
            }
        } else {
            quote!()
        };

        descs.push(quote! {
            ::action_inspect::MethodDesc {
                name: #name_lit,
                display: #display,
                target: #target,
                params: vec![#(#param_descs),*],
            }
        });
        arms.push(quote! {
            #index => { #receiver #(#bindings)* #finish }
        });
        index += 1;
    }

    let generated = quote! {
        impl ::action_inspect::ActionSource for #self_ty {
            fn type_name() -> &'static str {
                #type_name
            }

            fn actions() -> ::std::vec::Vec<::action_inspect::MethodDesc> {
                vec![#(#descs),*]
            }

            fn invoke_action(
                this: ::std::option::Option<&mut Self>,
                index: usize,
                args: &[::action_inspect::Value],
            ) -> ::std::result::Result<(), ::action_inspect::InvokeError> {
                let _ = &this;
                let _ = args;
                match index {
                    #(#arms)*
                    _ => ::std::result::Result::Err(
                        ::action_inspect::InvokeError::UnknownAction(index),
                    ),
                }
            }
        }
    };

    let out = quote! {
        #imp
        #generated
    };
    out.into()
}
