//! `sql!` macro implementation

use crate::template::{Piece, parse_template};
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Error, Expr, LitStr, Result, Token};

pub struct SqlInput {
    template: LitStr,
    args: Vec<Expr>,
}

impl Parse for SqlInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let template: LitStr = input.parse()?;
        let mut args = Vec::new();
        if !input.is_empty() {
            input.parse::<Token![,]>()?;
            let rest = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
            args.extend(rest);
        }
        Ok(Self { template, args })
    }
}

pub fn expand(input: SqlInput) -> Result<TokenStream> {
    let lit = &input.template;
    let pieces = parse_template(&lit.value()).map_err(|msg| Error::new(lit.span(), msg))?;

    let positional = pieces
        .iter()
        .filter(|p| matches!(p, Piece::Positional))
        .count();
    if positional != input.args.len() {
        return Err(Error::new(
            lit.span(),
            format!(
                "template has {positional} `{{}}` hole(s) but {} argument(s) were given",
                input.args.len()
            ),
        ));
    }

    let mut args = input.args.into_iter();
    let mut stmts = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let stmt = match piece {
            Piece::Code(code) => quote! { __nanoq_query.raw(#code); },
            Piece::Inline(src) => {
                let expr: Expr = syn::parse_str(&src).map_err(|e| {
                    Error::new(lit.span(), format!("invalid expression `{src}` in template: {e}"))
                })?;
                quote! { __nanoq_query.arg(#expr); }
            }
            Piece::Positional => {
                // Counted above, so there is always one left.
                let Some(expr) = args.next() else {
                    return Err(Error::new(lit.span(), "missing positional argument"));
                };
                quote! { __nanoq_query.arg(#expr); }
            }
        };
        stmts.push(stmt);
    }

    if stmts.is_empty() {
        return Ok(quote! { ::nanoq::Query::empty() });
    }

    Ok(quote! {
        {
            let mut __nanoq_query = ::nanoq::QueryBuilder::new();
            #(#stmts)*
            __nanoq_query.into_query()
        }
    })
}
