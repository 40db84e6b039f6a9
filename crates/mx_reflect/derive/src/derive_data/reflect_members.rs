use proc_macro2::Span;
use syn::{FnArg, Ident, ImplItem, ItemImpl, LitStr, ReturnType, Signature, Type};

use super::MemberAttribute;

/// A property declared with `#[reflect(get)]` and optionally `#[reflect(set)]`.
pub(crate) struct Property {
    pub name: String,
    pub span: Span,
    pub getter: Ident,
    pub ty: Type,
    /// The setter and its argument type.
    pub setter: Option<(Ident, Type)>,
}

/// How a reflected method borrows `self`.
#[derive(Clone, Copy)]
pub(crate) enum MethodReceiver {
    Ref,
    Mut,
}

/// A method declared with `#[reflect(method)]`.
pub(crate) struct Method {
    pub name: String,
    pub span: Span,
    pub ident: Ident,
    pub receiver: MethodReceiver,
    pub ret: Option<Type>,
}

/// The parsed data of a `#[reflect_members]` impl block.
pub(crate) struct ReflectMembers {
    pub properties: Vec<Property>,
    pub methods: Vec<Method>,
    pub mx_reflect_path: syn::Path,
}

struct Setter {
    name: String,
    span: Span,
    ident: Ident,
    ty: Type,
}

fn member_name(rename: Option<LitStr>, ident: &Ident) -> String {
    match rename {
        Some(lit) => lit.value(),
        None => ident.to_string(),
    }
}

/// Returns the receiver kind, or an error if the method does not borrow `self`.
fn receiver_of(sig: &Signature) -> syn::Result<MethodReceiver> {
    match sig.receiver() {
        Some(receiver) if receiver.reference.is_some() => {
            if receiver.mutability.is_some() {
                Ok(MethodReceiver::Mut)
            } else {
                Ok(MethodReceiver::Ref)
            }
        }
        _ => Err(syn::Error::new_spanned(
            sig,
            "reflected members must take `&self` or `&mut self`",
        )),
    }
}

fn check_plain(sig: &Signature) -> syn::Result<()> {
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "reflected members can not be generic",
        ));
    }
    if let Some(token) = &sig.asyncness {
        return Err(syn::Error::new_spanned(token, "reflected members can not be async"));
    }
    if let Some(token) = &sig.unsafety {
        return Err(syn::Error::new_spanned(token, "reflected members can not be unsafe"));
    }
    Ok(())
}

/// The typed arguments besides the receiver.
fn arguments(sig: &Signature) -> Vec<&Type> {
    sig.inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat) => Some(&*pat.ty),
            FnArg::Receiver(_) => None,
        })
        .collect()
}

fn return_type(sig: &Signature) -> Option<Type> {
    match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => Some((**ty).clone()),
    }
}

impl ReflectMembers {
    /// Parse the impl block and strip the `#[reflect(...)]` markers from its methods.
    pub(crate) fn from_impl(item: &mut ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(
                path,
                "`#[reflect_members]` can only be applied to inherent impl blocks",
            ));
        }
        if !item.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &item.generics,
                "`#[reflect_members]` does not support generic impl blocks",
            ));
        }

        let mut properties: Vec<Property> = Vec::new();
        let mut setters: Vec<Setter> = Vec::new();
        let mut methods: Vec<Method> = Vec::new();

        for impl_item in &mut item.items {
            let ImplItem::Fn(func) = impl_item else {
                continue;
            };
            let Some((attr, span)) = MemberAttribute::take_from(&mut func.attrs)? else {
                continue;
            };
            let sig = &func.sig;
            check_plain(sig)?;
            let receiver = receiver_of(sig)?;
            let args = arguments(sig);

            match attr {
                MemberAttribute::Get(rename) => {
                    if matches!(receiver, MethodReceiver::Mut) {
                        return Err(syn::Error::new_spanned(sig, "a getter must take `&self`"));
                    }
                    if !args.is_empty() {
                        return Err(syn::Error::new_spanned(
                            &sig.inputs,
                            "a getter can not take arguments",
                        ));
                    }
                    let Some(ty) = return_type(sig) else {
                        return Err(syn::Error::new_spanned(sig, "a getter must return a value"));
                    };
                    let name = member_name(rename, &sig.ident);
                    if properties.iter().any(|p| p.name == name) {
                        return Err(syn::Error::new(span, format!("duplicate property `{name}`")));
                    }
                    properties.push(Property {
                        name,
                        span,
                        getter: sig.ident.clone(),
                        ty,
                        setter: None,
                    });
                }
                MemberAttribute::Set(rename) => {
                    if matches!(receiver, MethodReceiver::Ref) {
                        return Err(syn::Error::new_spanned(sig, "a setter must take `&mut self`"));
                    }
                    let [ty] = args.as_slice() else {
                        return Err(syn::Error::new_spanned(
                            &sig.inputs,
                            "a setter must take exactly one argument",
                        ));
                    };
                    if return_type(sig).is_some() {
                        return Err(syn::Error::new_spanned(
                            &sig.output,
                            "a setter can not return a value",
                        ));
                    }
                    let name = match rename {
                        Some(lit) => lit.value(),
                        None => {
                            let ident = sig.ident.to_string();
                            match ident.strip_prefix("set_") {
                                Some(name) if !name.is_empty() => name.to_owned(),
                                _ => {
                                    return Err(syn::Error::new_spanned(
                                        &sig.ident,
                                        "setter name must start with `set_`, or use `#[reflect(set = \"name\")]`",
                                    ));
                                }
                            }
                        }
                    };
                    if setters.iter().any(|s| s.name == name) {
                        return Err(syn::Error::new(span, format!("duplicate setter of `{name}`")));
                    }
                    setters.push(Setter {
                        name,
                        span,
                        ident: sig.ident.clone(),
                        ty: (*ty).clone(),
                    });
                }
                MemberAttribute::Method(rename) => {
                    if !args.is_empty() {
                        return Err(syn::Error::new_spanned(
                            &sig.inputs,
                            "reflected methods can not take arguments",
                        ));
                    }
                    let name = member_name(rename, &sig.ident);
                    if methods.iter().any(|m| m.name == name) {
                        return Err(syn::Error::new(span, format!("duplicate method `{name}`")));
                    }
                    methods.push(Method {
                        name,
                        span,
                        ident: sig.ident.clone(),
                        receiver,
                        ret: return_type(sig),
                    });
                }
            }
        }

        for setter in setters {
            let Some(property) = properties.iter_mut().find(|p| p.name == setter.name) else {
                return Err(syn::Error::new(
                    setter.span,
                    format!("setter of `{}` has no getter", setter.name),
                ));
            };
            property.setter = Some((setter.ident, setter.ty));
        }

        Ok(Self {
            properties,
            methods,
            mx_reflect_path: crate::path::mx_reflect(),
        })
    }
}
