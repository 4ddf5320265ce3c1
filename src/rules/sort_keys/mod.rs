//! `sort-keys` rule.
//!
//! Walks a parsed module and, for every object literal, type literal,
//! interface and enum that sits right below a `@sort-keys` comment, checks
//! that its members are sorted. Unsorted structures produce one issue each,
//! carrying a fix that rewrites the whole structure with members reordered.
//!
//! ## Module Structure
//!
//! - `options`: Directive name and numeric ordering shared by all checks
//! - `structure`: The four sortable node kinds and their member extraction

mod options;
mod structure;

use std::sync::Arc;

use anyhow::Result;
use swc_common::SourceMap;
use swc_ecma_ast::{ObjectLit, TsEnumDecl, TsInterfaceDecl, TsTypeLit};
use swc_ecma_visit::{Visit, VisitWith};

pub use options::RuleOptions;
pub use structure::{Structure, StructureKind};

use crate::{
    core::{
        CheckContext,
        data::{Fix, SourceContext, SourceLocation},
        parsers::source::{ParsedSource, parse_source},
        sort::{Comparer, RangeDiff, build_patched_text, sort_members},
    },
    issues::{HAS_UNSORTED_KEYS, UnsortedKeysIssue},
};

pub fn check_unsorted_keys_issues(ctx: &CheckContext) -> Vec<UnsortedKeysIssue> {
    let mut issues: Vec<UnsortedKeysIssue> = ctx
        .unsorted_keys_issues()
        .values()
        .flatten()
        .cloned()
        .collect();

    // HashMap iteration order is random; sort for deterministic output
    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.kind.cmp(&b.kind))
    });
    issues
}

/// Parse `code` and check it.
///
/// Each call gets its own `SourceMap`, so files can be checked in parallel.
pub fn check_code(
    code: String,
    file_path: &str,
    options: &RuleOptions,
) -> Result<Vec<UnsortedKeysIssue>> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_source(code, file_path, source_map)?;
    Ok(check_source(&parsed, file_path, options))
}

/// Check one parsed file.
///
/// Issues are returned in document order; an enclosing structure comes
/// before the structures nested in it.
pub fn check_source(
    parsed: &ParsedSource,
    file_path: &str,
    options: &RuleOptions,
) -> Vec<UnsortedKeysIssue> {
    let mut visitor = SortKeysVisitor::new(parsed, file_path, options);
    parsed.module.visit_with(&mut visitor);
    visitor.issues
}

struct SortKeysVisitor<'a> {
    parsed: &'a ParsedSource,
    file_path: &'a str,
    options: &'a RuleOptions,
    issues: Vec<UnsortedKeysIssue>,
}

impl<'a> SortKeysVisitor<'a> {
    fn new(parsed: &'a ParsedSource, file_path: &'a str, options: &'a RuleOptions) -> Self {
        Self {
            parsed,
            file_path,
            options,
            issues: Vec::new(),
        }
    }

    fn check(&mut self, structure: Structure<'_>) {
        let span = structure.span();
        let start_line = self.parsed.line_of(span.lo);

        let Some(directive) = self
            .options
            .directive
            .find(&self.parsed.comments, start_line.saturating_sub(1))
        else {
            return;
        };

        let members = structure.members(self.parsed);
        let comparer = Comparer::new(directive.is_reversed, self.options.numeric_order);
        let outcome = sort_members(&members, &comparer);
        if !outcome.changed {
            return;
        }

        // Slot i keeps its position and receives the text of the i-th sorted member
        let diffs: Vec<RangeDiff> = members
            .iter()
            .zip(&outcome.sorted)
            .map(|(slot, moved)| RangeDiff::new(slot.range, moved.range))
            .collect();

        let text = &self.parsed.text;
        let enclosing = self.parsed.range_of(span);
        let replacement = build_patched_text(text, enclosing, &diffs);
        let expected_order = outcome.sorted.iter().map(|m| m.label(text)).collect();

        let loc = self.parsed.source_map.lookup_char_pos(span.lo);
        let source_line = loc
            .file
            .get_line(loc.line.saturating_sub(1))
            .map(|line| line.to_string())
            .unwrap_or_default();

        self.issues.push(UnsortedKeysIssue {
            context: SourceContext::new(
                SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
                source_line,
            ),
            kind: structure.kind(),
            message_id: HAS_UNSORTED_KEYS,
            expected_order,
            fix: Fix::new(enclosing, replacement),
        });
    }
}

impl Visit for SortKeysVisitor<'_> {
    fn visit_object_lit(&mut self, node: &ObjectLit) {
        self.check(Structure::ObjectLiteral(node));
        node.visit_children_with(self);
    }

    fn visit_ts_type_lit(&mut self, node: &TsTypeLit) {
        self.check(Structure::TypeLiteral(node));
        node.visit_children_with(self);
    }

    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        self.check(Structure::Interface(node));
        node.visit_children_with(self);
    }

    fn visit_ts_enum_decl(&mut self, node: &TsEnumDecl) {
        self.check(Structure::Enum(node));
        node.visit_children_with(self);
    }
}
