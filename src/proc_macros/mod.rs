//! Crate not intended for direct use.
//! Use https://docs.rs/thread-coro instead.
// Templated by `cargo-generate` using https://github.com/danielhenrymantilla/proc-macro-template
#![allow(nonstandard_style, unused_imports)]

use ::core::{
    mem,
    ops::Not as _,
};
use ::proc_macro::{
    TokenStream,
};
use ::proc_macro2::{
    Span,
    TokenStream as TokenStream2,
};
use ::quote::{
    quote,
    ToTokens,
};
use ::syn::{*,
    parse::{Parse, ParseStream},
    Result, // Explicitly shadow it
};

mod utils;

#[proc_macro_attribute] pub
fn coroutine_fn (
    attrs: TokenStream,
    input: TokenStream,
) -> TokenStream
{
    coroutine_impl(attrs.into(), input.into())
        .map(|ret| {
            #[cfg(feature = "verbose-expansions")] {
                utils::pretty_print_tokenstream(&ret);
            }
            ret
        })
        .unwrap_or_else(|err| {
            let mut errors =
                err .into_iter()
                    .map(|err| Error::new(
                        err.span(),
                        format_args!("`#[thread_coro::coroutine_fn]`: {}", err),
                    ))
            ;
            let mut err = errors.next().unwrap();
            errors.for_each(|cur| err.combine(cur));
            err.to_compile_error()
        })
        .into()
}

/// `yield(Yield) [, resume(ResumeArg) [as pat]]`, or just `Yield`.
struct Params {
    yield_type: Type,
    resume: Option<(Type, Pat)>,
}

impl Parse for Params {
    fn parse (input: ParseStream<'_>)
      -> Result<Self>
    {
        if input.peek(Token![yield]).not() {
            let yield_type = input.parse()?;
            let _: Option<Token![,]> = input.parse()?;
            return Ok(Params { yield_type, resume: None });
        }

        let _: Token![yield] = input.parse()?;
        let yield_type = {
            let contents;
            parenthesized!(contents in input);
            contents.parse()?
        };
        let mut resume = None;
        if input.parse::<Option<Token![,]>>()?.is_some()
        && input.is_empty().not()
        {
            let kw: Ident = input.parse()?;
            if kw != "resume" {
                return Err(Error::new(kw.span(), "expected `resume(…)`"));
            }
            let resume_type: Type = {
                let contents;
                parenthesized!(contents in input);
                contents.parse()?
            };
            let pat: Pat = if input.parse::<Option<Token![as]>>()?.is_some() {
                input.parse()?
            } else {
                parse_quote!( _ )
            };
            let _: Option<Token![,]> = input.parse()?;
            resume = Some((resume_type, pat));
        }
        if input.is_empty().not() {
            return Err(input.error("unexpected trailing tokens"));
        }
        Ok(Params { yield_type, resume })
    }
}

fn coroutine_impl (
    params: TokenStream2,
    input: TokenStream2,
) -> Result<TokenStream2>
{
    let Params { yield_type, resume } = parse2(params)?;
    let (resume_type, resume_pat) = resume.unwrap_or_else(|| (
        parse_quote!( () ),
        parse_quote!( _ ),
    ));

    let mut function: ItemFn = parse2(input)?;
    let ItemFn {
        ref mut block,
        ref mut sig,
        ..
    } = function;

    if let Some(asyncness) = sig.asyncness {
        return Err(Error::new_spanned(
            asyncness,
            "`async fn`s cannot be coroutines",
        ));
    }
    if let Some(receiver) =
        sig .inputs
            .iter()
            .find(|fn_arg| matches!(fn_arg, FnArg::Receiver(_)))
    {
        return Err(Error::new_spanned(
            receiver,
            "`self` receivers are not supported",
        ));
    }

    // Handle the signature
    let return_type: Type = match
        mem::replace(&mut sig.output, ReturnType::Default)
    {
        | ReturnType::Default => parse_quote!( () ),
        | ReturnType::Type(_, ty) => *ty,
    };
    sig.output = parse_quote!(
        -> ::thread_coro::Coroutine<#resume_type, #yield_type, #return_type>
    );

    // Move the body into the worker, along with a `yield_!` macro.
    {
        *block = parse_quote!({
            ::thread_coro::Coroutine::<
                #resume_type, #yield_type, #return_type,
            >::new(
                move |#resume_pat: #resume_type, __yielder__| -> #return_type {
                    #[allow(unused_macros)]
                    macro_rules! yield_ {(
                        $value:expr $(,)?
                    ) => (
                        __yielder__.yield_($value)
                    )}

                    #block
                }
            )
        });
    }

    Ok(function.into_token_stream())
}
