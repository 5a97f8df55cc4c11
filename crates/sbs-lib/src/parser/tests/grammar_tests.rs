use indoc::indoc;

use super::expect_valid_cst;

#[test]
fn module_header_only() {
    let input = "module M\n";

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
    "#);
}

#[test]
fn simple_alias() {
    let input = indoc! {r#"
    module M
    T = Integer
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Decl
        Id "T"
        Equals "="
        Ref
          Id "Integer"
    "#);
}

#[test]
fn parametric_decl_and_application() {
    let input = indoc! {r#"
    module M
    T16(y) = T15(y)
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Decl
        Id "T16"
        Params
          ParenOpen "("
          Id "y"
          ParenClose ")"
        Equals "="
        Ref
          Id "T15"
          Args
            ParenOpen "("
            Ref
              Id "y"
            ParenClose ")"
    "#);
}

#[test]
fn record_with_nested_choice() {
    let input = indoc! {r#"
    module M
    T = Record {
        a: Integer
        b: Choice { x: M1.T, y: Array(String) }
    }
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Decl
        Id "T"
        Equals "="
        Record
          KwRecord "Record"
          BraceOpen "{"
          Entry
            Id "a"
            Colon ":"
            Ref
              Id "Integer"
          Entry
            Id "b"
            Colon ":"
            Choice
              KwChoice "Choice"
              BraceOpen "{"
              Entry
                Id "x"
                Colon ":"
                Ref
                  Id "M1"
                  Dot "."
                  Id "T"
              Comma ","
              Entry
                Id "y"
                Colon ":"
                Ref
                  Id "Array"
                  Args
                    ParenOpen "("
                    Ref
                      Id "String"
                    ParenClose ")"
              BraceClose "}"
          BraceClose "}"
    "#);
}

#[test]
fn multiple_params_and_args() {
    let input = indoc! {r#"
    module M
    Pair(a, b) = Record { first: a, second: b, }
    P = Pair(Integer, Optional(String))
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Decl
        Id "Pair"
        Params
          ParenOpen "("
          Id "a"
          Comma ","
          Id "b"
          ParenClose ")"
        Equals "="
        Record
          KwRecord "Record"
          BraceOpen "{"
          Entry
            Id "first"
            Colon ":"
            Ref
              Id "a"
          Comma ","
          Entry
            Id "second"
            Colon ":"
            Ref
              Id "b"
          Comma ","
          BraceClose "}"
      Decl
        Id "P"
        Equals "="
        Ref
          Id "Pair"
          Args
            ParenOpen "("
            Ref
              Id "Integer"
            Comma ","
            Ref
              Id "Optional"
              Args
                ParenOpen "("
                Ref
                  Id "String"
                ParenClose ")"
            ParenClose ")"
    "#);
}

#[test]
fn empty_record_parses() {
    let input = "module M\nT = Record {}\n";

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Decl
        Id "T"
        Equals "="
        Record
          KwRecord "Record"
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn comments_are_trivia() {
    let input = indoc! {r#"
    # leading
    module M # trailing
    T = Bytes # after type
    "#};

    insta::assert_snapshot!(expect_valid_cst(input), @r#"
    Root
      ModuleHeader
        KwModule "module"
        Id "M"
      Decl
        Id "T"
        Equals "="
        Ref
          Id "Bytes"
    "#);
}

#[test]
fn trivia_is_lossless() {
    let input = "# c\nmodule  M\n\tT = Record { a : Integer }\n";
    let (parse, _) = crate::parser::parse(input).expect("fuel");

    assert_eq!(parse.syntax().text().to_string(), input);
}
