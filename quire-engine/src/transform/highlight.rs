//! Keyword-based syntax highlighting for verbatim blocks.
//!
//! The tokenizer does not build a parse tree: it splits each line into strings, comments,
//! numbers, identifiers, operators and whitespace, and classifies identifiers against fixed
//! keyword and builtin lists for common languages. Unknown languages are still tokenized, their
//! identifiers simply stay plain text. Highlighting never fails.

use super::stylesheet::{StyleSheet, TokenKind};
use super::ContentTransform;
use crate::element::{Element, Paragraph, TextRun};
use crate::style::Font;

/// Keyword tables for one language.
#[derive(Debug)]
pub struct LanguageDef {
    pub keywords: &'static [&'static str],
    pub builtins: &'static [&'static str],
    /// Line comment prefix; empty when the language has none.
    pub comment_prefix: &'static str,
}

/// Definition for `language`, matched case-insensitively on common tags and aliases.
pub fn language_def(language: &str) -> Option<LanguageDef> {
    match language.to_ascii_lowercase().as_str() {
        "rust" | "rs" => Some(LanguageDef {
            keywords: &[
                "as", "async", "await", "break", "const", "continue", "crate", "else", "enum",
                "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
                "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait",
                "true", "type", "unsafe", "use", "where", "while",
            ],
            builtins: &[
                "Self", "Option", "Result", "Vec", "String", "Box", "Rc", "Arc", "Some", "None",
                "Ok", "Err",
            ],
            comment_prefix: "//",
        }),
        "java" | "kotlin" | "scala" => Some(LanguageDef {
            keywords: &[
                "abstract", "break", "case", "catch", "class", "continue", "default", "do",
                "else", "enum", "extends", "false", "final", "finally", "for", "if",
                "implements", "import", "instanceof", "interface", "new", "null", "package",
                "private", "protected", "public", "return", "static", "super", "switch", "this",
                "throw", "throws", "true", "try", "void", "while",
            ],
            builtins: &[
                "String", "Object", "Integer", "List", "Map", "Set", "System", "boolean", "int",
                "long", "double", "float", "char",
            ],
            comment_prefix: "//",
        }),
        "python" | "py" => Some(LanguageDef {
            keywords: &[
                "and", "as", "async", "await", "break", "class", "continue", "def", "elif",
                "else", "except", "False", "finally", "for", "from", "if", "import", "in", "is",
                "lambda", "None", "not", "or", "pass", "raise", "return", "True", "try", "while",
                "with", "yield",
            ],
            builtins: &[
                "bool", "dict", "float", "int", "isinstance", "len", "list", "print", "range",
                "self", "set", "str", "tuple", "type",
            ],
            comment_prefix: "#",
        }),
        "javascript" | "js" | "typescript" | "ts" => Some(LanguageDef {
            keywords: &[
                "async", "await", "break", "case", "catch", "class", "const", "continue",
                "default", "else", "export", "false", "finally", "for", "from", "function", "if",
                "import", "instanceof", "let", "new", "null", "return", "switch", "this",
                "throw", "true", "try", "typeof", "undefined", "var", "while", "yield",
            ],
            builtins: &[
                "Array", "Boolean", "console", "Error", "JSON", "Map", "Math", "Number",
                "Object", "Promise", "Set", "String",
            ],
            comment_prefix: "//",
        }),
        "shell" | "sh" | "bash" | "zsh" => Some(LanguageDef {
            keywords: &[
                "case", "do", "done", "elif", "else", "esac", "exit", "export", "fi", "for",
                "function", "if", "in", "local", "return", "then", "until", "while",
            ],
            builtins: &[
                "cat", "cd", "cp", "curl", "echo", "grep", "ls", "mkdir", "mv", "rm", "sed",
            ],
            comment_prefix: "#",
        }),
        "json" => Some(LanguageDef {
            keywords: &["true", "false", "null"],
            builtins: &[],
            comment_prefix: "",
        }),
        "yaml" | "yml" | "toml" => Some(LanguageDef {
            keywords: &["true", "false", "null", "yes", "no"],
            builtins: &[],
            comment_prefix: "#",
        }),
        _ => None,
    }
}

/// A classified slice of a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~?:";

/// Splits one line into tokens. Concatenating the token texts gives back `line`.
pub fn tokenize_line<'a>(line: &'a str, def: Option<&LanguageDef>) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();
    let comment_prefix = def.map(|d| d.comment_prefix).unwrap_or_default();

    while let Some(&(start, ch)) = chars.peek() {
        if !comment_prefix.is_empty() && line[start..].starts_with(comment_prefix) {
            tokens.push(Token {
                kind: TokenKind::Comment,
                text: &line[start..],
            });
            break;
        }

        let kind = if ch == '"' || ch == '\'' {
            chars.next();
            let mut escaped = false;
            for (_, c) in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == ch {
                    break;
                }
            }
            TokenKind::String
        } else if ch.is_whitespace() {
            consume_while(&mut chars, char::is_whitespace);
            TokenKind::Whitespace
        } else if ch.is_ascii_digit() {
            consume_while(&mut chars, |c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
            TokenKind::Number
        } else if ch.is_alphabetic() || ch == '_' {
            consume_while(&mut chars, |c| c.is_alphanumeric() || c == '_');
            TokenKind::Text
        } else if OPERATOR_CHARS.contains(ch) {
            consume_while(&mut chars, |c| OPERATOR_CHARS.contains(c));
            TokenKind::Operator
        } else {
            chars.next();
            TokenKind::Punctuation
        };

        let end = chars.peek().map(|&(i, _)| i).unwrap_or(line.len());
        let text = &line[start..end];
        let kind = match (kind, def) {
            (TokenKind::Text, Some(def)) if def.keywords.contains(&text) => TokenKind::Keyword,
            (TokenKind::Text, Some(def)) if def.builtins.contains(&text) => TokenKind::Builtin,
            (kind, _) => kind,
        };
        tokens.push(Token { kind, text });
    }

    tokens
}

fn consume_while<I, P>(chars: &mut std::iter::Peekable<I>, predicate: P)
where
    I: Iterator<Item = (usize, char)>,
    P: Fn(char) -> bool,
{
    while chars.next_if(|&(_, c)| predicate(c)).is_some() {}
}

/// Highlighting transform. Paints every token with the verbatim font in the style sheet's
/// colors, on the style sheet's background.
#[derive(Debug, Clone)]
pub struct SyntaxHighlighter {
    font: Font,
    stylesheet: StyleSheet,
}

impl SyntaxHighlighter {
    pub fn new(font: Font, stylesheet: StyleSheet) -> Self {
        SyntaxHighlighter { font, stylesheet }
    }

    pub fn stylesheet(&self) -> &StyleSheet {
        &self.stylesheet
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    fn run(&self, kind: TokenKind, text: &str) -> Element {
        let token_style = self.stylesheet.style_of(kind);
        Element::Run(TextRun {
            text: text.to_string(),
            font: self
                .font
                .with_color(token_style.color)
                .with_style(token_style.style),
            background: None,
        })
    }
}

impl ContentTransform for SyntaxHighlighter {
    fn name(&self) -> &str {
        "highlight"
    }

    fn accepts(&self, language: &str) -> bool {
        language_def(language).is_some()
    }

    fn process(&self, language: &str, code: &str) -> Vec<Element> {
        let def = language_def(language);
        let code = code.strip_suffix('\n').unwrap_or(code);

        let mut runs = Vec::new();
        for (index, line) in code.split('\n').enumerate() {
            if index > 0 {
                runs.push(self.run(TokenKind::Text, "\n"));
            }
            let line = line.strip_suffix('\r').unwrap_or(line);
            for token in tokenize_line(line, def.as_ref()) {
                runs.push(self.run(token.kind, token.text));
            }
        }

        vec![Element::Paragraph(Paragraph {
            children: runs,
            background: Some(self.stylesheet.background_color()),
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, FontStyle, COURIER};

    fn kinds<'a>(line: &'a str, language: &str) -> Vec<(TokenKind, &'a str)> {
        let def = language_def(language);
        tokenize_line(line, def.as_ref())
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn classifies_rust_tokens() {
        assert_eq!(
            kinds("let x: Vec<u8> = \"a\\\"b\"; // done", "rust"),
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::Text, "x"),
                (TokenKind::Operator, ":"),
                (TokenKind::Builtin, "Vec"),
                (TokenKind::Operator, "<"),
                (TokenKind::Text, "u8"),
                (TokenKind::Operator, ">"),
                (TokenKind::Operator, "="),
                (TokenKind::String, "\"a\\\"b\""),
                (TokenKind::Punctuation, ";"),
                (TokenKind::Comment, "// done"),
            ]
        );
    }

    #[test]
    fn tokens_concatenate_to_the_line() {
        let line = "  for i in range(10): print(i) # loop";
        let def = language_def("py");
        let joined: String = tokenize_line(line, def.as_ref())
            .iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn unknown_language_has_no_keywords_or_comments() {
        assert_eq!(
            kinds("if x # y", "cobol"),
            vec![
                (TokenKind::Text, "if"),
                (TokenKind::Text, "x"),
                (TokenKind::Punctuation, "#"),
                (TokenKind::Text, "y"),
            ]
        );
    }

    #[test]
    fn process_emits_one_block_with_line_breaks() {
        let font = Font::new(COURIER, 10.0, FontStyle::NORMAL, Color::BLACK);
        let highlighter = SyntaxHighlighter::new(font, StyleSheet::friendly());
        let elements = highlighter.process("rust", "fn a() {}\nfn b() {}\n");

        assert_eq!(elements.len(), 1);
        let Element::Paragraph(block) = &elements[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(block.background, Some(Color::VERY2_LIGHT_GRAY));
        assert_eq!(elements[0].text(), "fn a() {}\nfn b() {}");

        let Element::Run(first) = &block.children[0] else {
            panic!("expected a run");
        };
        assert_eq!(first.text, "fn");
        assert!(first.font.style.contains(FontStyle::BOLD));
        assert_eq!(first.font.family, COURIER);
    }

    #[test]
    fn accepts_only_known_languages() {
        let highlighter = SyntaxHighlighter::new(Font::default(), StyleSheet::default());
        assert!(highlighter.accepts("Python"));
        assert!(!highlighter.accepts("ditaa"));
    }
}
