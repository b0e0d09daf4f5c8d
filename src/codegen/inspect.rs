//! Reads generated sources back with `syn` so tests can assert on structure
//! instead of on formatting.

use quote::ToTokens;

pub fn parse(source: &str) -> syn::File {
    syn::parse_file(source).unwrap_or_else(|e| panic!("generated source does not parse: {e}\n{source}"))
}

/// Tokens with all whitespace and trailing commas removed, e.g.
/// `letparam1=injector.get_instance::<app::A>();`
pub fn compact(tokens: impl ToTokens) -> String {
    let text: String = tokens
        .to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    // The formatter decides about trailing commas depending on line width.
    text.replace(",}", "}").replace(",)", ")").replace(",>", ">")
}

pub fn impl_fn<'a>(file: &'a syn::File, name: &str) -> &'a syn::ImplItemFn {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(item_impl) => Some(item_impl),
            _ => None,
        })
        .flat_map(|item_impl| item_impl.items.iter())
        .find_map(|item| match item {
            syn::ImplItem::Fn(f) if f.sig.ident == name => Some(f),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no fn `{name}` in generated source"))
}

/// Compact statements of an impl fn body, in order.
pub fn body(source: &str, name: &str) -> Vec<String> {
    let file = parse(source);
    impl_fn(&file, name).block.stmts.iter().map(compact).collect()
}

/// Evaluates a body that is a single boolean literal.
pub fn literal_bool(source: &str, name: &str) -> bool {
    let file = parse(source);
    let stmts = &impl_fn(&file, name).block.stmts;
    match stmts.as_slice() {
        [syn::Stmt::Expr(syn::Expr::Lit(lit), None)] => match &lit.lit {
            syn::Lit::Bool(value) => value.value,
            other => panic!("`{name}` returns a non-bool literal: {}", compact(other)),
        },
        _ => panic!("`{name}` is not a single literal"),
    }
}

/// `(pattern, body)` of every arm of the match expression in `name`, compacted.
pub fn match_arms(source: &str, name: &str) -> Option<Vec<(String, String)>> {
    let file = parse(source);
    let f = impl_fn(&file, name);
    f.block.stmts.iter().find_map(|stmt| match stmt {
        syn::Stmt::Expr(syn::Expr::Match(m), _) => Some(
            m.arms
                .iter()
                .map(|arm| (compact(&arm.pat), compact(unblock(&arm.body))))
                .collect(),
        ),
        _ => None,
    })
}

/// The formatter wraps long arm bodies in a block; look through it.
fn unblock(expr: &syn::Expr) -> &syn::Expr {
    match expr {
        syn::Expr::Block(block) if block.label.is_none() => match block.block.stmts.as_slice() {
            [syn::Stmt::Expr(inner, None)] => unblock(inner),
            _ => expr,
        },
        _ => expr,
    }
}

/// Compact `Trait for Type` headers of every trait impl.
pub fn trait_impls(source: &str) -> Vec<String> {
    parse(source)
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(item_impl) => item_impl.trait_.as_ref().map(|(_, path, _)| {
                format!("{}for{}", compact(path), compact(&item_impl.self_ty))
            }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_arms_see_through_wrapped_bodies() {
        let source = r#"
            impl Registry for Registry {
                fn lookup(&self, type_name: &str) -> Option<Erased> {
                    match type_name {
                        "app::A" => {
                            Some(
                                erase::<
                                    app::A,
                                    _,
                                >(app::A__Factory),
                            )
                        }
                        _ => None,
                    }
                }
            }
        "#;

        assert_eq!(
            match_arms(source, "lookup").unwrap(),
            vec![
                ("\"app::A\"".to_string(), "Some(erase::<app::A,_>(app::A__Factory))".to_string()),
                ("_".to_string(), "None".to_string()),
            ]
        );
    }
}
