//! The four sortable structure kinds and how members are read from each.

use std::fmt;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{ObjectLit, TsEnumDecl, TsInterfaceDecl, TsTypeElement, TsTypeLit};

use crate::core::{
    data::TextRange,
    parsers::source::ParsedSource,
    sort::{
        Member,
        key::{enum_member_key, object_prop_key, type_element_key},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StructureKind {
    ObjectLiteral,
    TypeLiteral,
    Interface,
    Enum,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructureKind::ObjectLiteral => "object literal",
            StructureKind::TypeLiteral => "type literal",
            StructureKind::Interface => "interface",
            StructureKind::Enum => "enum",
        };
        write!(f, "{}", name)
    }
}

/// A node whose members can be sorted.
#[derive(Debug, Clone, Copy)]
pub enum Structure<'a> {
    ObjectLiteral(&'a ObjectLit),
    TypeLiteral(&'a TsTypeLit),
    Interface(&'a TsInterfaceDecl),
    Enum(&'a TsEnumDecl),
}

impl Structure<'_> {
    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::ObjectLiteral(_) => StructureKind::ObjectLiteral,
            Structure::TypeLiteral(_) => StructureKind::TypeLiteral,
            Structure::Interface(_) => StructureKind::Interface,
            Structure::Enum(_) => StructureKind::Enum,
        }
    }

    /// Span replaced by the fix; its first line anchors the directive lookup.
    ///
    /// Literals span their braces, declarations span from their first keyword.
    pub fn span(&self) -> Span {
        match self {
            Structure::ObjectLiteral(node) => node.span,
            Structure::TypeLiteral(node) => node.span,
            Structure::Interface(node) => node.span,
            Structure::Enum(node) => node.span,
        }
    }

    /// Members in source order.
    pub fn members(&self, parsed: &ParsedSource) -> Vec<Member> {
        match self {
            Structure::ObjectLiteral(node) => node
                .props
                .iter()
                .enumerate()
                .map(|(i, prop)| Member::new(object_prop_key(prop, i), parsed.range_of(prop.span()), i))
                .collect(),
            Structure::TypeLiteral(node) => type_element_members(&node.members, parsed),
            Structure::Interface(node) => type_element_members(&node.body.body, parsed),
            Structure::Enum(node) => node
                .members
                .iter()
                .enumerate()
                .map(|(i, member)| {
                    Member::new(enum_member_key(member, i), parsed.range_of(member.span), i)
                })
                .collect(),
        }
    }
}

fn type_element_members(elements: &[TsTypeElement], parsed: &ParsedSource) -> Vec<Member> {
    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let range = without_separator(parsed.range_of(element.span()), &parsed.text);
            Member::new(type_element_key(element, i), range, i)
        })
        .collect()
}

/// Type members may include their trailing `;` or `,`. The separator belongs
/// to the slot, not the member, so it must not move.
fn without_separator(range: TextRange, text: &str) -> TextRange {
    let member = range.slice(text).trim_end();
    let member = member.strip_suffix([',', ';']).unwrap_or(member).trim_end();
    TextRange::new(range.start, range.start + member.len())
}
