use logos::Logos;

fn unescape(quoted: &str) -> String {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and whitespace (skipped)
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Comment,

    #[token("=>")]
    Arrow,

    // Unicode literals; surrogates are rejected by the parser
    #[regex(r"[Uu][0-9a-fA-F]{4}", |lex| {
        u32::from_str_radix(&lex.slice()[1..], 16).ok()
    })]
    Unicode(u32),

    // String literals
    #[regex(r#""([^"\\]|\\.)*""#, |lex| unescape(lex.slice()))]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| unescape(lex.slice()))]
    String(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_rule_tokens() {
        let input = r#""ק" => U0065"#;
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::String("ק".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Arrow)));
        assert_eq!(lex.next(), Some(Ok(Token::Unicode(0x65))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_escapes() {
        let input = r#""\"" '\'' "\\" "\t""#;
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::String("\"".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::String("'".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::String("\\".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::String("\t".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_comments_skipped() {
        let input = "// header\n\"/\" /* slash */ => 'q'";
        let mut lex = Token::lexer(input);

        assert_eq!(lex.next(), Some(Ok(Token::String("/".to_string()))));
        assert_eq!(lex.next(), Some(Ok(Token::Arrow)));
        assert_eq!(lex.next(), Some(Ok(Token::String("q".to_string()))));
        assert_eq!(lex.next(), None);
    }
}
