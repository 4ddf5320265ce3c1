use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, Globals, SourceMap, Spanned, comments::SingleThreadedComments};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use crate::core::comments::CommentIndex;
use crate::core::data::TextRange;

/// A parsed source file together with everything the rule needs to map spans
/// back to text and lines.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Original source text.
    pub text: String,
    /// Position of the first byte of `text` inside `source_map`.
    pub start_pos: BytePos,
    pub comments: CommentIndex,
}

impl ParsedSource {
    pub fn range_of(&self, span: swc_common::Span) -> TextRange {
        TextRange::from_span(span, self.start_pos)
    }

    /// 1-based line of a position.
    pub fn line_of(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }
}

/// Whether a file needs the TSX grammar.
///
/// Plain `.ts` files must not enable it, otherwise `<T>value` casts and
/// generic arrow functions fail to parse.
fn needs_tsx(file_path: &str) -> bool {
    !matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("ts" | "mts" | "cts")
    )
}

/// Parse TS/TSX/JS/JSX source code into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let text = code.clone();
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: needs_tsx(file_path),
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let describe = |e: swc_ecma_parser::error::Error| {
            let line = source_map.lookup_char_pos(e.span().lo).line;
            anyhow!("line {}: {:?}", line, e.kind())
        };

        let module = parser.parse_module().map_err(describe)?;

        // Recovered errors still leave a module behind; treat them as failures too
        if let Some(error) = parser.take_errors().into_iter().next() {
            return Err(describe(error));
        }

        // Index comments immediately (before SingleThreadedComments drops)
        let comments = CommentIndex::from_swc(&comments, &source_map);

        Ok(ParsedSource {
            module,
            start_pos: source_file.start_pos,
            source_map,
            text,
            comments,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str, file_path: &str) -> Result<ParsedSource> {
        parse_source(code.to_string(), file_path, Arc::new(SourceMap::default()))
    }

    #[test]
    fn test_parse_typescript() {
        let parsed = parse("interface A { b: string }\nenum E { X }\n", "a.ts").unwrap();
        assert_eq!(parsed.module.body.len(), 2);
        assert_eq!(parsed.text, "interface A { b: string }\nenum E { X }\n");
    }

    #[test]
    fn test_ts_file_allows_angle_bracket_cast() {
        assert!(parse("const x = <number>y;", "a.ts").is_ok());
    }

    #[test]
    fn test_tsx_file_allows_jsx() {
        assert!(parse("const el = <div>{1}</div>;", "a.tsx").is_ok());
    }

    #[test]
    fn test_parse_error_mentions_line() {
        let err = parse("const a = 1;\nconst b = (;\n", "a.ts").err().unwrap();
        assert!(err.to_string().starts_with("line 2"));
    }

    #[test]
    fn test_range_of_is_file_relative() {
        let source_map = Arc::new(SourceMap::default());
        // A second file in the same map starts at a non-zero position
        parse_source("const first = 1;".to_string(), "a.ts", source_map.clone()).unwrap();
        let parsed = parse_source("const x = 1;".to_string(), "b.ts", source_map).unwrap();

        let span = parsed.module.span;
        let range = parsed.range_of(span);
        assert_eq!(range.slice(&parsed.text), "const x = 1;");
    }
}
