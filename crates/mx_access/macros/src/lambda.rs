use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, ExprClosure, Ident, Pat, ReturnType, Stmt, Type};

use mx_macro_utils::full_path::ResultFP;

use crate::lower::Lowering;

/// A parsed `|x: T| body` or `|x: T| -> R { body }`.
pub(crate) struct Lambda<'a> {
    param: &'a Ident,
    param_ty: &'a Type,
    ret: Option<&'a Type>,
    body: &'a Expr,
    mx_access_path: syn::Path,
}

/// `{ expr }` with a single expression.
fn single_expr(body: &Expr) -> syn::Result<&Expr> {
    let Expr::Block(block) = body else {
        return Ok(body);
    };
    match block.block.stmts.as_slice() {
        [Stmt::Expr(expr, None)] => Ok(expr),
        _ => Err(syn::Error::new_spanned(
            body,
            "the lambda body must be a single expression",
        )),
    }
}

impl<'a> Lambda<'a> {
    pub(crate) fn from_closure(closure: &'a ExprClosure) -> syn::Result<Self> {
        if let Some(token) = &closure.asyncness {
            return Err(syn::Error::new_spanned(token, "the lambda can not be async"));
        }
        if let Some(token) = &closure.capture {
            return Err(syn::Error::new_spanned(token, "the lambda can not be `move`"));
        }

        let mut inputs = closure.inputs.iter();
        let (Some(input), None) = (inputs.next(), inputs.next()) else {
            return Err(syn::Error::new_spanned(
                &closure.inputs,
                "the lambda must take exactly one parameter",
            ));
        };
        let Pat::Type(typed) = input else {
            return Err(syn::Error::new_spanned(
                input,
                "the parameter type must be written, e.g. `|x: Item|`",
            ));
        };
        let Pat::Ident(pat) = &*typed.pat else {
            return Err(syn::Error::new_spanned(
                &typed.pat,
                "the parameter must be a plain identifier",
            ));
        };
        if pat.by_ref.is_some() || pat.mutability.is_some() || pat.subpat.is_some() {
            return Err(syn::Error::new_spanned(
                pat,
                "the parameter must be a plain identifier",
            ));
        }

        let ret = match &closure.output {
            ReturnType::Default => None,
            ReturnType::Type(_, ty) => Some(&**ty),
        };

        Ok(Self {
            param: &pat.ident,
            param_ty: &typed.ty,
            ret,
            body: single_expr(&closure.body)?,
            mx_access_path: crate::lower::mx_access(),
        })
    }

    pub(crate) fn expand(&self) -> TokenStream {
        let mx_access = &self.mx_access_path;
        let param_ty = self.param_ty;
        let param_name = self.param.to_string();

        let lowering = Lowering::new(self.param, mx_access);
        let body = match lowering.lower(self.body) {
            Ok(body) => body,
            Err(err) => return err.into_compile_error(),
        };

        let ret = match self.ret {
            Some(ty) => quote! { #ty },
            None => quote! { _ },
        };

        quote! {
            {
                let __param__ = #mx_access::expr::Parameter::new::<#param_ty>(#param_name);
                let __body__: #ResultFP<#mx_access::expr::Expr, #mx_access::expr::ExprError> = #body;
                __body__.and_then(|__body__| {
                    #mx_access::expr::Expression::<#param_ty, #ret>::new(__param__, __body__)
                })
            }
        }
    }
}
