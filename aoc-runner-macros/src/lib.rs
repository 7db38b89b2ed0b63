//! Procedural macros for the aoc-runner library

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{DeriveInput, Lit, LitInt, LitStr, Token, parse_macro_input};

/// Derive macro registering a solution unit with the runner
///
/// Submits an `aoc_runner::UnitPlugin` through `inventory`, so the runner can
/// find the unit once the catalog on disk points at it.
///
/// # Attributes
///
/// - `year`: Required. Year identifier as in the `year_<Y>` directory name
/// - `day`: Required. Day identifier as in the `day_<D>` directory name, as
///   a string (`"01"`) or plain decimal digits (`01`, kept as written)
/// - `parts`: Required. Which of `PartSolver<1>` / `PartSolver<2>` the type
///   implements, e.g. `[1, 2]`. `[]` registers a unit with no entry points
/// - `tags`: Optional. Array of string literals, e.g. `["grid"]`
///
/// # Requirements
///
/// Every listed part must be implemented; a missing impl is a compile-time
/// error:
///
/// ```text
/// error[E0277]: the trait bound `Solution: PartSolver<2>` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_runner::{PartSolver, SolveError, SolutionUnit};
///
/// #[derive(SolutionUnit)]
/// #[unit(year = "2025", day = "01", parts = [1, 2], tags = ["dial"])]
/// pub struct Solution;
///
/// impl PartSolver<1> for Solution {
///     // ...
/// }
/// ```
#[proc_macro_derive(SolutionUnit, attributes(unit))]
pub fn derive_solution_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Parsed `#[unit(...)]` arguments
struct UnitArgs {
    year: String,
    day: String,
    parts: Vec<u8>,
    tags: Vec<String>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "SolutionUnit cannot be derived for generic types",
        ));
    }

    let UnitArgs {
        year,
        day,
        parts,
        tags,
    } = parse_args(input)?;

    let entry_points = [1u8, 2].map(|part| {
        if parts.contains(&part) {
            let part = Literal::u8_unsuffixed(part);
            quote! {
                ::core::option::Option::Some(
                    ::aoc_runner::entry_point::<#name, #part> as ::aoc_runner::EntryPoint
                )
            }
        } else {
            quote! { ::core::option::Option::None }
        }
    });
    let [part_1, part_2] = entry_points;

    Ok(quote! {
        ::aoc_runner::inventory::submit! {
            ::aoc_runner::UnitPlugin {
                year: #year,
                day: #day,
                unit: ::aoc_runner::UnitDescriptor::new([#part_1, #part_2], &[#(#tags),*]),
            }
        }
    })
}

fn parse_args(input: &DeriveInput) -> syn::Result<UnitArgs> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("unit"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "SolutionUnit derive macro requires #[unit(year = .., day = .., parts = [..])]",
            )
        })?;

    let mut year: Option<String> = None;
    let mut day: Option<String> = None;
    let mut parts: Option<Vec<u8>> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            year = Some(identifier(&meta)?);
        } else if meta.path.is_ident("day") {
            day = Some(identifier(&meta)?);
        } else if meta.path.is_ident("parts") {
            let _ = meta.value()?; // the '='
            let content;
            syn::bracketed!(content in meta.input);
            let mut seen = Vec::new();
            for lit in Punctuated::<LitInt, Token![,]>::parse_terminated(&content)? {
                let part: u8 = lit.base10_parse()?;
                if !(1..=2).contains(&part) {
                    return Err(syn::Error::new_spanned(&lit, "parts must be 1 or 2"));
                }
                if seen.contains(&part) {
                    return Err(syn::Error::new_spanned(&lit, "part listed twice"));
                }
                seen.push(part);
            }
            parts = Some(seen);
        } else if meta.path.is_ident("tags") {
            let _ = meta.value()?; // the '='
            let content;
            syn::bracketed!(content in meta.input);
            tags = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?
                .iter()
                .map(LitStr::value)
                .collect();
        } else {
            return Err(meta.error("unsupported unit attribute; expected year, day, parts or tags"));
        }
        Ok(())
    })?;

    let missing = |key: &str| syn::Error::new_spanned(attr, format!("missing required '{key}' in #[unit(...)]"));
    Ok(UnitArgs {
        year: year.ok_or_else(|| missing("year"))?,
        day: day.ok_or_else(|| missing("day"))?,
        parts: parts.ok_or_else(|| missing("parts"))?,
        tags,
    })
}

/// `key = "01"` or `key = 2025`; integer literals keep their written digits,
/// so `2_025`, `0x7E9` and suffixed literals are rejected
fn identifier(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: Lit = meta.value()?.parse()?;
    let value = match &lit {
        Lit::Str(lit_str) => lit_str.value(),
        Lit::Int(lit_int) => {
            let digits = lit_int.to_string();
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(syn::Error::new_spanned(
                    &lit,
                    "integer identifiers must be plain decimal digits; write a string instead",
                ));
            }
            digits
        }
        _ => return Err(syn::Error::new_spanned(&lit, "expected a string or integer literal")),
    };

    let usable = !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\']);
    if !usable {
        return Err(syn::Error::new_spanned(&lit, "not usable as a catalog directory name"));
    }
    Ok(value)
}
