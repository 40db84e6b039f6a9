use proc_macro2::TokenStream;
use quote::quote;
use syn::{BinOp, Expr, Ident, Lit, Member, UnOp};

use mx_macro_utils::full_path::{CloneFP, ResultFP};

/// Get the correct access path to the `mx_access` crate.
pub(crate) fn mx_access() -> syn::Path {
    mx_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("mx_access"))
}

/// Turns a closure body into tokens evaluating to `Result<Expr, ExprError>`.
pub(crate) struct Lowering<'a> {
    param: &'a Ident,
    mx_access_path: &'a syn::Path,
}

fn binary_op(op: &BinOp) -> syn::Result<TokenStream> {
    let name = match op {
        BinOp::Add(_) => quote!(Add),
        BinOp::Sub(_) => quote!(Sub),
        BinOp::Mul(_) => quote!(Mul),
        BinOp::Div(_) => quote!(Div),
        BinOp::Rem(_) => quote!(Rem),
        BinOp::And(_) => quote!(And),
        BinOp::Or(_) => quote!(Or),
        BinOp::BitAnd(_) => quote!(BitAnd),
        BinOp::BitOr(_) => quote!(BitOr),
        BinOp::BitXor(_) => quote!(BitXor),
        BinOp::Shl(_) => quote!(Shl),
        BinOp::Shr(_) => quote!(Shr),
        BinOp::Eq(_) => quote!(Eq),
        BinOp::Ne(_) => quote!(Ne),
        BinOp::Lt(_) => quote!(Lt),
        BinOp::Le(_) => quote!(Le),
        BinOp::Gt(_) => quote!(Gt),
        BinOp::Ge(_) => quote!(Ge),
        _ => {
            return Err(syn::Error::new_spanned(
                op,
                "assignments are not supported in a lambda",
            ));
        }
    };
    Ok(name)
}

impl<'a> Lowering<'a> {
    pub(crate) fn new(param: &'a Ident, mx_access_path: &'a syn::Path) -> Self {
        Self {
            param,
            mx_access_path,
        }
    }

    pub(crate) fn lower(&self, expr: &Expr) -> syn::Result<TokenStream> {
        let mx_access = self.mx_access_path;
        let node = quote! { #mx_access::expr::Expr };

        let tokens = match expr {
            Expr::Paren(inner) => return self.lower(&inner.expr),
            Expr::Group(inner) => return self.lower(&inner.expr),
            Expr::Path(path) if path.qself.is_none() && path.path.is_ident(self.param) => {
                quote! { #ResultFP::Ok(#node::from(__param__)) }
            }
            Expr::Path(path) => {
                quote! { #ResultFP::Ok(#node::constant(<_ as #CloneFP>::clone(&#path))) }
            }
            Expr::Lit(lit) => match &lit.lit {
                Lit::Str(value) => quote! {
                    #ResultFP::Ok(#node::constant(#mx_access::__macro_exports::String::from(#value)))
                },
                Lit::Int(_) | Lit::Float(_) | Lit::Bool(_) | Lit::Char(_) => {
                    quote! { #ResultFP::Ok(#node::constant(#lit)) }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        lit,
                        "unsupported literal in a lambda",
                    ));
                }
            },
            Expr::Field(field) => {
                let Member::Named(name) = &field.member else {
                    return Err(syn::Error::new_spanned(
                        &field.member,
                        "tuple fields are not supported in a lambda",
                    ));
                };
                let target = self.lower(&field.base)?;
                let name = name.to_string();
                quote! {
                    (#target).and_then(|__target__| #node::member(__target__, #name))
                }
            }
            Expr::MethodCall(call) => {
                if !call.args.is_empty() {
                    return Err(syn::Error::new_spanned(
                        &call.args,
                        "methods in a lambda can not take arguments",
                    ));
                }
                if let Some(turbofish) = &call.turbofish {
                    return Err(syn::Error::new_spanned(
                        turbofish,
                        "methods in a lambda can not be generic",
                    ));
                }
                let target = self.lower(&call.receiver)?;
                let name = call.method.to_string();
                quote! {
                    (#target).and_then(|__target__| #node::call(__target__, #name))
                }
            }
            Expr::Cast(cast) => {
                let operand = self.lower(&cast.expr)?;
                let ty = &cast.ty;
                quote! {
                    (#operand).map(#node::convert::<#ty>)
                }
            }
            Expr::Unary(unary) => {
                let op = match unary.op {
                    UnOp::Neg(_) => quote!(Neg),
                    UnOp::Not(_) => quote!(Not),
                    _ => {
                        return Err(syn::Error::new_spanned(
                            unary,
                            "only `-` and `!` are supported in a lambda",
                        ));
                    }
                };
                let operand = self.lower(&unary.expr)?;
                quote! {
                    (#operand).map(|__operand__| {
                        #node::unary(#mx_access::expr::UnaryOp::#op, __operand__)
                    })
                }
            }
            Expr::Binary(binary) => {
                let op = binary_op(&binary.op)?;
                let lhs = self.lower(&binary.left)?;
                let rhs = self.lower(&binary.right)?;
                quote! {
                    (#lhs).and_then(|__lhs__| {
                        (#rhs).map(|__rhs__| {
                            #node::binary(#mx_access::expr::BinaryOp::#op, __lhs__, __rhs__)
                        })
                    })
                }
            }
            Expr::Index(index) => {
                let target = self.lower(&index.expr)?;
                let at = self.lower(&index.index)?;
                quote! {
                    (#target).and_then(|__target__| {
                        (#at).map(|__index__| #node::index(__target__, __index__))
                    })
                }
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    expr,
                    "unsupported expression in a lambda",
                ));
            }
        };

        Ok(tokens)
    }
}
