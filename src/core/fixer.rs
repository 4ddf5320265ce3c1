//! Applies replacement fixes to source text.
//!
//! Fixes for nested structures overlap (the outer fix replaces the inner
//! structure too), so a single pass can only apply the non-overlapping ones.
//! [`fix_source`] re-checks its own output until nothing is left to fix.

use anyhow::{Context, Result};

use crate::{
    core::data::Fix,
    rules::sort_keys::{RuleOptions, check_code},
};

/// Upper bound on re-check passes for one file.
pub const MAX_FIX_PASSES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFixes {
    pub output: String,
    pub applied: usize,
    /// Fixes left out because they overlapped an applied one or were out of bounds.
    pub skipped: usize,
}

/// Apply fixes in ascending range order.
///
/// A fix starting before the end of an already applied fix is skipped.
pub fn apply_fixes(code: &str, fixes: &[Fix]) -> AppliedFixes {
    let mut ordered: Vec<&Fix> = fixes.iter().collect();
    ordered.sort_by_key(|fix| (fix.range.start, fix.range.end));

    let mut output = String::with_capacity(code.len());
    let mut cursor = 0;
    let mut applied = 0;
    let mut skipped = 0;

    for fix in ordered {
        let gap = (fix.range.start >= cursor)
            .then(|| code.get(cursor..fix.range.start))
            .flatten();
        let (Some(gap), Some(_)) = (gap, code.get(fix.range.start..fix.range.end)) else {
            skipped += 1;
            continue;
        };

        output.push_str(gap);
        output.push_str(&fix.replacement);
        cursor = fix.range.end;
        applied += 1;
    }

    output.push_str(code.get(cursor..).unwrap_or_default());

    AppliedFixes {
        output,
        applied,
        skipped,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub output: String,
    /// Fixes applied across all passes.
    pub applied: usize,
    /// Passes that applied at least one fix.
    pub passes: usize,
    /// Issues still present after the last pass; non-zero only when the
    /// pass limit was reached.
    pub remaining: usize,
}

impl FixOutcome {
    pub fn is_changed(&self) -> bool {
        self.applied > 0
    }
}

/// Sort every annotated structure in `code`, nested ones included.
///
/// Fails if `code` does not parse, or if a pass produces unparsable output.
pub fn fix_source(code: &str, file_path: &str, options: &RuleOptions) -> Result<FixOutcome> {
    let mut output = code.to_string();
    let mut applied = 0;
    let mut passes = 0;

    loop {
        let issues = check_code(output.clone(), file_path, options).with_context(|| {
            if passes == 0 {
                format!("Failed to parse {}", file_path)
            } else {
                format!("Fix pass {} left {} unparsable", passes, file_path)
            }
        })?;

        if issues.is_empty() || passes == MAX_FIX_PASSES {
            return Ok(FixOutcome {
                output,
                applied,
                passes,
                remaining: issues.len(),
            });
        }

        let fixes: Vec<Fix> = issues.into_iter().map(|issue| issue.fix).collect();
        let result = apply_fixes(&output, &fixes);
        if result.applied == 0 {
            return Ok(FixOutcome {
                output,
                applied,
                passes,
                remaining: fixes.len(),
            });
        }

        output = result.output;
        applied += result.applied;
        passes += 1;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::data::TextRange;

    #[test]
    fn test_apply_non_overlapping_fixes_in_any_order() {
        let code = "aaa bbb ccc";
        let fixes = vec![
            Fix::new(TextRange::new(8, 11), "CC"),
            Fix::new(TextRange::new(0, 3), "A"),
        ];

        let result = apply_fixes(code, &fixes);
        assert_eq!(result.output, "A bbb CC");
        assert_eq!(result.applied, 2);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_apply_skips_overlapping_fix() {
        let code = "{ x: { b, a }, y }";
        let fixes = vec![
            Fix::new(TextRange::new(5, 13), "{ a, b }"),
            Fix::new(TextRange::new(0, code.len()), "{ y, x: { b, a } }"),
        ];

        let result = apply_fixes(code, &fixes);
        assert_eq!(result.output, "{ y, x: { b, a } }");
        assert_eq!(result.applied, 1);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_apply_skips_out_of_bounds_fix() {
        let result = apply_fixes("abc", &[Fix::new(TextRange::new(2, 10), "z")]);
        assert_eq!(result.output, "abc");
        assert_eq!(result.applied, 0);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_apply_no_fixes() {
        let result = apply_fixes("unchanged", &[]);
        assert_eq!(result.output, "unchanged");
        assert_eq!(result.applied, 0);
    }

    #[test]
    fn test_fix_source_sorts_in_one_pass() {
        let code = "// @sort-keys\nconst a = { b: 1, a: 2 };\n// @sort-keys\nenum E { B, A }\n";
        let outcome = fix_source(code, "test.ts", &RuleOptions::default()).unwrap();

        assert_eq!(
            outcome.output,
            "// @sort-keys\nconst a = { a: 2, b: 1 };\n// @sort-keys\nenum E { A, B }\n"
        );
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.passes, 1);
        assert_eq!(outcome.remaining, 0);
        assert!(outcome.is_changed());
    }

    #[test]
    fn test_fix_source_sorts_nested_structures_over_passes() {
        let code = "// @sort-keys\nconst o = {\n  // @sort-keys\n  a: { d: 1, c: 2 },\n  c: 1,\n  b: 2,\n};\n";
        let outcome = fix_source(code, "test.ts", &RuleOptions::default()).unwrap();

        assert_eq!(
            outcome.output,
            "// @sort-keys\nconst o = {\n  // @sort-keys\n  a: { c: 2, d: 1 },\n  b: 2,\n  c: 1,\n};\n"
        );
        assert_eq!(outcome.applied, 2);
        assert_eq!(outcome.passes, 2);
    }

    #[test]
    fn test_fix_source_without_issues_is_unchanged() {
        let code = "// @sort-keys\nconst a = { a: 1, b: 2 };\nconst b = { z: 1, y: 2 };\n";
        let outcome = fix_source(code, "test.ts", &RuleOptions::default()).unwrap();

        assert_eq!(outcome.output, code);
        assert_eq!(outcome.passes, 0);
        assert!(!outcome.is_changed());
    }

    #[test]
    fn test_fix_source_output_is_a_fixed_point() {
        let code = "// @sort-keys reversed\ninterface I {\n  a: string;\n  '10': number;\n  [k: string]: unknown;\n  b(): void;\n  '9': number;\n}\n";
        let first = fix_source(code, "test.ts", &RuleOptions::default()).unwrap();
        assert!(first.is_changed());

        let second = fix_source(&first.output, "test.ts", &RuleOptions::default()).unwrap();
        assert!(!second.is_changed());
        assert_eq!(second.output, first.output);
    }

    #[test]
    fn test_fix_source_parse_error() {
        let err = fix_source("const = {", "broken.ts", &RuleOptions::default()).unwrap_err();
        assert!(err.to_string().contains("broken.ts"));
    }
}
