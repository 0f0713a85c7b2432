use moa_notation_syntax::{Lexer, SyntaxKind};

fn reconstruct(input: &str) -> String {
    Lexer::new(input).map(|(_, text)| text).collect()
}

#[test]
fn test_tokens_cover_all_input() {
    let inputs = [
        r"\mathrm{id}(\op{#1})",
        r"[\;[\;#1\;#2\;]\;[\;#3\;#4\;]\;]",
        "{}^{\\boldsymbol{\\mbox{-}}\\!}",
        "# ## #9 #0 \\",
        "Émilie % trailing comment\n$x$",
        "}}}{{{",
    ];
    for input in inputs {
        assert_eq!(reconstruct(input), input, "lost bytes lexing {:?}", input);
    }
}

#[test]
fn test_unbalanced_input_does_not_panic() {
    let tokens: Vec<_> = Lexer::new(r"\vcc{a").collect();
    assert_eq!(tokens.last(), Some(&(SyntaxKind::Text, "a")));
}
