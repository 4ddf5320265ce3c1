//! Sort key extraction for members of the four sortable structures.

use swc_ecma_ast::{
    Expr, Lit, Prop, PropName, PropOrSpread, Str, TsEnumMember, TsEnumMemberId, TsTypeElement,
};

/// Comparable key of a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Key made only of ASCII decimal digits (`'11'`, `2`), compared by value.
    Numeric(String),
    /// Identifier-like or quoted key.
    Name(String),
    /// Key that is not statically known (`[expr]`, spreads, signatures).
    /// Carries the member's original index.
    Computed(usize),
}

impl SortKey {
    /// Classify a statically known key name.
    pub fn from_name(name: &str) -> Self {
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            SortKey::Numeric(name.to_string())
        } else {
            SortKey::Name(name.to_string())
        }
    }

    /// Ascending group rank: numeric keys, then names, then computed keys.
    pub fn rank(&self) -> u8 {
        match self {
            SortKey::Numeric(_) => 0,
            SortKey::Name(_) => 1,
            SortKey::Computed(_) => 2,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, SortKey::Computed(_))
    }
}

fn str_key(s: &Str, index: usize) -> SortKey {
    // Strings with lone surrogates have no `&str` form
    s.value
        .as_str()
        .map(SortKey::from_name)
        .unwrap_or(SortKey::Computed(index))
}

fn expr_key(expr: &Expr, index: usize) -> SortKey {
    match expr {
        Expr::Ident(ident) => SortKey::from_name(&ident.sym),
        Expr::Lit(Lit::Str(s)) => str_key(s, index),
        Expr::Lit(Lit::Num(n)) => match n.raw.as_deref() {
            Some(raw) => SortKey::from_name(raw),
            None => SortKey::from_name(&n.value.to_string()),
        },
        _ => SortKey::Computed(index),
    }
}

fn prop_name_key(name: &PropName, index: usize) -> SortKey {
    match name {
        PropName::Ident(ident) => SortKey::from_name(&ident.sym),
        PropName::Str(s) => str_key(s, index),
        PropName::Num(n) => match n.raw.as_deref() {
            Some(raw) => SortKey::from_name(raw),
            None => SortKey::from_name(&n.value.to_string()),
        },
        _ => SortKey::Computed(index),
    }
}

/// Key of an object literal property.
///
/// Spreads are never statically known and sort with the computed keys. Moving
/// a spread past a named key can change which value wins at runtime.
pub fn object_prop_key(prop: &PropOrSpread, index: usize) -> SortKey {
    let PropOrSpread::Prop(prop) = prop else {
        return SortKey::Computed(index);
    };
    match &**prop {
        Prop::Shorthand(ident) => SortKey::from_name(&ident.sym),
        Prop::KeyValue(kv) => prop_name_key(&kv.key, index),
        Prop::Getter(getter) => prop_name_key(&getter.key, index),
        Prop::Setter(setter) => prop_name_key(&setter.key, index),
        Prop::Method(method) => prop_name_key(&method.key, index),
        _ => SortKey::Computed(index),
    }
}

/// Key of a type literal or interface member.
///
/// Call, construct and index signatures have no name and sort as computed.
pub fn type_element_key(element: &TsTypeElement, index: usize) -> SortKey {
    let (key, computed) = match element {
        TsTypeElement::TsPropertySignature(p) => (&p.key, p.computed),
        TsTypeElement::TsMethodSignature(m) => (&m.key, m.computed),
        TsTypeElement::TsGetterSignature(g) => (&g.key, g.computed),
        TsTypeElement::TsSetterSignature(s) => (&s.key, s.computed),
        _ => return SortKey::Computed(index),
    };
    if computed {
        return SortKey::Computed(index);
    }
    expr_key(key, index)
}

/// Key of an enum member: its declared name, never its initializer.
pub fn enum_member_key(member: &TsEnumMember, index: usize) -> SortKey {
    match &member.id {
        TsEnumMemberId::Ident(ident) => SortKey::from_name(&ident.sym),
        TsEnumMemberId::Str(s) => str_key(s, index),
    }
}
