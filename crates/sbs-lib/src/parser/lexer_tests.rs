use super::cst::SyntaxKind;
use super::lexer::{lex, token_text};

fn dump(source: &str) -> String {
    lex(source)
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn keywords_and_identifiers() {
    insta::assert_snapshot!(dump("module M Records = Record"), @r#"
    KwModule "module"
    Id "M"
    Id "Records"
    Equals "="
    KwRecord "Record"
    "#);
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(dump("T(a, b) = M.X { x: y }"), @r#"
    Id "T"
    ParenOpen "("
    Id "a"
    Comma ","
    Id "b"
    ParenClose ")"
    Equals "="
    Id "M"
    Dot "."
    Id "X"
    BraceOpen "{"
    Id "x"
    Colon ":"
    Id "y"
    BraceClose "}"
    "#);
}

#[test]
fn comments_are_trivia() {
    let source = "T = Integer # trailing\n# full line\nU = String";
    let kinds: Vec<_> = lex(source).iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds.iter().filter(|k| **k == SyntaxKind::Comment).count(),
        2
    );
    insta::assert_snapshot!(dump(source), @r#"
    Id "T"
    Equals "="
    Id "Integer"
    Id "U"
    Equals "="
    Id "String"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(dump("T = $$$ Integer @"), @r#"
    Id "T"
    Equals "="
    Garbage "$$$"
    Id "Integer"
    Garbage "@"
    "#);
}

#[test]
fn crlf_is_single_newline() {
    let kinds: Vec<_> = lex("a\r\nb").iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [SyntaxKind::Id, SyntaxKind::Newline, SyntaxKind::Id]);
}
