//! CSS syntax parser using the `cssparser` crate.
//!
//! The parser extracts two things from a theme declaration file:
//! custom-property declarations (`--name: value`), which become token
//! definitions in source order, and selector rules, whose declaration
//! values may be `var(--name)` references. Selectors and `@media`
//! preludes are captured verbatim; interpreting them belongs to the
//! rendering engine.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput, Token};

use crate::rules::{DeclValue, Declaration, StyleRule};
use crate::tokens::{Literal, TokenValue};
use crate::types::{Color, Length};
use crate::{Error, Result};

/// A custom-property declaration extracted from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDefinition {
    /// Token name, without the `--` prefix.
    pub name: String,
    /// Declared value: a literal or a reference to an earlier token.
    pub value: TokenValue,
}

/// Raw parse output: token definitions and style rules, both in source
/// order. Token validation happens when the definitions are fed into a
/// table builder, not here.
#[derive(Debug, Clone, Default)]
pub struct ParsedTheme {
    pub definitions: Vec<TokenDefinition>,
    pub rules: Vec<StyleRule>,
}

/// Parse a theme stylesheet string.
///
/// # Error Recovery
///
/// A malformed rule or declaration does not fail the whole parse: the
/// offender is skipped with a `tracing::warn!` and parsing continues at
/// the next rule or declaration. Only structural errors surface from
/// the inner parse functions, and those are contained per rule.
pub fn parse_theme(css: &str) -> Result<ParsedTheme> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut doc = ParsedTheme::default();

    parse_rule_list(&mut parser, None, &mut doc);
    Ok(doc)
}

/// Parse rules until the input (or the enclosing block) is exhausted.
fn parse_rule_list(parser: &mut Parser<'_, '_>, media: Option<&str>, doc: &mut ParsedTheme) {
    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        if let Err(e) = parse_rule(parser, media, doc) {
            tracing::warn!("theme parse error: {}", e);
            skip_to_next_rule(parser);
        }
    }
}

/// Parse a single rule: `selector { declarations }` or an `@media` block.
fn parse_rule(parser: &mut Parser<'_, '_>, media: Option<&str>, doc: &mut ParsedTheme) -> Result<()> {
    let state = parser.state();
    let token = match parser.next() {
        Ok(t) => t.clone(),
        Err(_) => return Ok(()),
    };

    if let Token::AtKeyword(name) = &token {
        let name = name.to_string();
        if name.eq_ignore_ascii_case("media") {
            return parse_media_block(parser, doc);
        }
        // Other at-rules (@import, @font-face, ...) are outside this
        // crate's model; skip them without losing what follows.
        tracing::warn!("skipping unsupported at-rule '@{}'", name);
        skip_at_rule(parser);
        return Ok(());
    }
    parser.reset(&state);

    // The selector is carried verbatim; capture its source text.
    let start = parser.position();
    let _ = parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        while p.next().is_ok() {}
        Ok::<_, CssParseError<'_, ()>>(())
    });
    let selector = parser.slice_from(start).trim().to_string();

    if selector.is_empty() {
        let loc = parser.current_source_location();
        return Err(Error::parse("empty selector", loc.line, loc.column));
    }

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        let loc = parser.current_source_location();
        return Err(Error::parse(
            format!("expected '{{' after selector '{selector}'"),
            loc.line,
            loc.column,
        ));
    }

    let declarations = parser
        .parse_nested_block(|block| parse_declarations(block, doc))
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(format!("failed to parse declaration block: {e:?}"), 0, 0)
        })?;

    // A block that only defined tokens (a `:root` block, typically)
    // contributes no rule.
    if !declarations.is_empty() {
        let order = doc.rules.len() as u32;
        let mut rule = StyleRule::new(selector, declarations, order);
        rule.media = media.map(str::to_string);
        doc.rules.push(rule);
    }

    Ok(())
}

/// Parse `@media <condition> { rules }`, tagging contained rules with
/// the condition text verbatim.
fn parse_media_block(parser: &mut Parser<'_, '_>, doc: &mut ParsedTheme) -> Result<()> {
    let start = parser.position();
    let _ = parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        while p.next().is_ok() {}
        Ok::<_, CssParseError<'_, ()>>(())
    });
    let condition = parser.slice_from(start).trim().to_string();

    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        let loc = parser.current_source_location();
        return Err(Error::parse(
            "expected '{' after @media condition",
            loc.line,
            loc.column,
        ));
    }

    parser
        .parse_nested_block(|block| {
            parse_rule_list(block, Some(condition.as_str()), doc);
            Ok::<_, CssParseError<'_, ()>>(())
        })
        .map_err(|e: CssParseError<'_, ()>| {
            Error::parse(format!("failed to parse @media block: {e:?}"), 0, 0)
        })?;

    Ok(())
}

/// Parse the declarations of a rule block.
///
/// Custom-property declarations go to `doc` as token definitions; the
/// rest are returned as the rule's declarations.
fn parse_declarations<'i>(
    parser: &mut Parser<'i, '_>,
    doc: &mut ParsedTheme,
) -> std::result::Result<Vec<Declaration>, CssParseError<'i, ()>> {
    let mut declarations = vec![];

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let property = match parser.expect_ident() {
            Ok(name) => name.to_string(),
            Err(_) => break,
        };

        if parser.expect_colon().is_err() {
            skip_declaration(parser);
            continue;
        }

        // Bound the value at the semicolon so alternative value parses
        // can probe freely.
        match parser.parse_until_before(Delimiter::Semicolon, |p| parse_value(p)) {
            Ok(value) => {
                if let Some(token_name) = property.strip_prefix("--") {
                    doc.definitions.push(TokenDefinition {
                        name: token_name.to_string(),
                        value: match value {
                            ParsedValue::Var(target) => TokenValue::Reference(target),
                            ParsedValue::Literal(lit) => TokenValue::Literal(lit),
                        },
                    });
                } else {
                    declarations.push(Declaration {
                        property,
                        value: match value {
                            ParsedValue::Var(target) => DeclValue::Var(target),
                            ParsedValue::Literal(lit) => DeclValue::Literal(lit),
                        },
                    });
                }
            }
            Err(_) => {
                tracing::warn!("skipping unparseable value for property '{}'", property);
            }
        }

        let _ = parser.try_parse(|p| p.expect_semicolon());
    }

    Ok(declarations)
}

/// A declaration value before it is routed to the token table or a rule.
enum ParsedValue {
    Var(String),
    Literal(Literal),
}

/// Parse a declaration value: a whole-value `var()` reference, a typed
/// literal (color, length, number, keyword), or a raw passthrough.
fn parse_value<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<ParsedValue, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    let start = parser.position();
    let state = parser.state();

    let token = parser.next()?.clone();
    if let Token::Function(name) = &token
        && name.eq_ignore_ascii_case("var")
    {
        let target = parser.parse_nested_block(|block| {
            block.skip_whitespace();
            let ident = block.expect_ident()?.to_string();
            block.skip_whitespace();
            if !block.is_exhausted() {
                // Fallback arguments are not supported: every reference
                // must resolve against the table.
                return Err(block.new_custom_error(()));
            }
            Ok::<_, CssParseError<'i, ()>>(ident)
        })?;

        parser.skip_whitespace();
        if !parser.is_exhausted() {
            return Err(parser.new_custom_error(()));
        }
        let Some(target) = target.strip_prefix("--") else {
            return Err(parser.new_custom_error(()));
        };
        return Ok(ParsedValue::Var(target.to_string()));
    }
    parser.reset(&state);

    if let Ok(color) = parse_color(parser) {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            return Ok(ParsedValue::Literal(Literal::Color(color)));
        }
    }
    parser.reset(&state);

    if let Ok(length) = parse_length(parser) {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            return Ok(ParsedValue::Literal(Literal::Length(length)));
        }
    }
    parser.reset(&state);

    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => {
            parser.skip_whitespace();
            if parser.is_exhausted() {
                return Ok(ParsedValue::Literal(Literal::Number(value)));
            }
        }
        Token::Ident(name) => {
            let keyword = name.to_string();
            parser.skip_whitespace();
            if parser.is_exhausted() {
                return Ok(ParsedValue::Literal(Literal::Keyword(keyword)));
            }
        }
        _ => {}
    }
    parser.reset(&state);

    // Anything else is carried verbatim, unless it embeds a reference
    // this crate would then fail to substitute.
    while parser.next().is_ok() {}
    let raw = parser.slice_from(start).trim().to_string();
    if raw.is_empty() || raw.contains("var(") {
        return Err(parser.new_custom_error(()));
    }
    Ok(ParsedValue::Literal(Literal::Raw(raw)))
}

/// Parse a color value.
fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<Color, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?.clone();
    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            Color::from_hex(hash.as_ref()).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => match name.as_ref().to_lowercase().as_str() {
            "transparent" => Ok(Color::TRANSPARENT),
            "black" => Ok(Color::BLACK),
            "white" => Ok(Color::WHITE),
            "red" => Ok(Color::RED),
            "green" => Ok(Color::GREEN),
            "blue" => Ok(Color::BLUE),
            "yellow" => Ok(Color::YELLOW),
            "cyan" => Ok(Color::CYAN),
            "magenta" => Ok(Color::MAGENTA),
            "gray" | "grey" => Ok(Color::GRAY),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            // Parse rgb(r, g, b) or rgba(r, g, b, a). Channels are kept
            // as declared, even outside the 0-255 range.
            let (r, g, b, a) = parser.parse_nested_block(|p| {
                let r = parse_color_component(p)?;
                p.expect_comma()?;
                let g = parse_color_component(p)?;
                p.expect_comma()?;
                let b = parse_color_component(p)?;
                let a = if p.try_parse(|p| p.expect_comma()).is_ok() {
                    parse_alpha_component(p)?
                } else {
                    1.0
                };
                Ok::<_, CssParseError<'i, ()>>((r, g, b, a))
            })?;
            Ok(Color::new(r, g, b, a))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_color_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(*value / 255.0),
        Token::Percentage { unit_value, .. } => Ok(*unit_value),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha_component<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<f32, CssParseError<'i, ()>> {
    parser.skip_whitespace();
    match parser.next()? {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(*unit_value),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse a length value. Units this crate does not model fall through
/// to the raw passthrough.
fn parse_length<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<Length, CssParseError<'i, ()>> {
    parser.skip_whitespace();

    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } if value == 0.0 => Ok(Length::Zero),
        Token::Dimension { value, unit, .. } => match unit.as_ref() {
            u if u.eq_ignore_ascii_case("px") => Ok(Length::Px(value)),
            u if u.eq_ignore_ascii_case("em") => Ok(Length::Em(value)),
            u if u.eq_ignore_ascii_case("rem") => Ok(Length::Rem(value)),
            _ => Err(parser.new_custom_error(())),
        },
        Token::Percentage { unit_value, .. } => Ok(Length::Percent(unit_value * 100.0)),
        Token::Ident(s) if s.eq_ignore_ascii_case("auto") => Ok(Length::Auto),
        _ => Err(parser.new_custom_error(())),
    }
}

/// Skip to the next rule (error recovery).
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            Ok(Token::CloseCurlyBracket) | Err(_) => return,
            _ => {}
        }
    }
}

/// Skip an at-rule: everything up to a terminating semicolon, or one
/// whole block.
fn skip_at_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            Ok(Token::CurlyBracketBlock) => {
                let _ = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration (error recovery).
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Ok(Token::CloseCurlyBracket) | Err(_) => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    #[test]
    fn parse_token_definitions() {
        let css = r#"
            :root {
                --brand: #274C77;
                --gap: 16px;
                --banner-bg: var(--brand);
            }
        "#;
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.definitions.len(), 3);
        assert!(doc.rules.is_empty());

        assert_eq!(doc.definitions[0].name, "brand");
        assert_eq!(
            doc.definitions[0].value,
            TokenValue::Literal(Literal::Color(Color::from_hex("#274C77").unwrap()))
        );
        assert_eq!(
            doc.definitions[1].value,
            TokenValue::Literal(Literal::Length(Length::px(16.0)))
        );
        assert_eq!(
            doc.definitions[2].value,
            TokenValue::Reference("brand".to_string())
        );
    }

    #[test]
    fn parse_rule_with_references() {
        let css = ".banner { background-color: var(--brand); color: white; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.rules.len(), 1);
        let rule = &doc.rules[0];
        assert_eq!(rule.selector, ".banner");
        assert_eq!(rule.declarations.len(), 2);
        assert_eq!(rule.declarations[0].value, DeclValue::Var("brand".to_string()));
        assert_eq!(
            rule.declarations[1].value,
            DeclValue::Literal(Literal::Color(Color::WHITE))
        );
    }

    #[test]
    fn selector_text_is_verbatim() {
        let css = "header.banner > nav ul li { margin: 0; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.rules[0].selector, "header.banner > nav ul li");
    }

    #[test]
    fn media_condition_is_carried_verbatim() {
        let css = r#"
            .site-nav { display: flex; }

            @media (max-width: 600px) {
                .site-nav { display: none; }
                .menu-toggle { display: block; }
            }
        "#;
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.rules.len(), 3);
        assert_eq!(doc.rules[0].media, None);
        assert_eq!(doc.rules[1].media.as_deref(), Some("(max-width: 600px)"));
        assert_eq!(doc.rules[2].media.as_deref(), Some("(max-width: 600px)"));
    }

    #[test]
    fn out_of_range_rgb_channel_is_kept() {
        let css = ":root { --purple-check: rgb(265, 100, 51); }";
        let doc = parse_theme(css).unwrap();

        let Some(TokenDefinition { value, .. }) = doc.definitions.first() else {
            panic!("expected a definition");
        };
        let TokenValue::Literal(Literal::Color(color)) = value else {
            panic!("expected a color literal");
        };
        assert_eq!(color.to_css(), "rgb(265, 100, 51)");
    }

    #[test]
    fn font_stack_falls_through_to_raw() {
        let css = ":root { --font-body: 'Inter', 'Segoe UI', sans-serif; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(
            doc.definitions[0].value,
            TokenValue::Literal(Literal::Raw("'Inter', 'Segoe UI', sans-serif".to_string()))
        );
    }

    #[test]
    fn bad_rule_does_not_lose_following_rules() {
        init_tracing();

        let css = r#"
            .broken { color:: ; }
            .fine { color: black; }
        "#;
        let doc = parse_theme(css).unwrap();

        let selectors: Vec<&str> = doc.rules.iter().map(|r| r.selector.as_str()).collect();
        assert!(selectors.contains(&".fine"));
    }

    #[test]
    fn var_with_fallback_is_skipped() {
        init_tracing();

        // Fallback arguments are unsupported; the declaration is
        // dropped, the rest of the rule survives.
        let css = ".banner { color: var(--missing, red); padding: 4px; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.rules.len(), 1);
        assert_eq!(doc.rules[0].declarations.len(), 1);
        assert_eq!(doc.rules[0].declarations[0].property, "padding");
    }

    #[test]
    fn unknown_at_rule_is_skipped() {
        init_tracing();

        let css = r#"
            @import url("other.css");
            footer { color: gray; }
        "#;
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.rules.len(), 1);
        assert_eq!(doc.rules[0].selector, "footer");
    }

    #[test]
    fn shorthand_value_is_raw_passthrough() {
        let css = ".card { border: 1px solid black; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(
            doc.rules[0].declarations[0].value,
            DeclValue::Literal(Literal::Raw("1px solid black".to_string()))
        );
    }

    #[test]
    fn composite_value_with_embedded_var_is_skipped() {
        init_tracing();

        let css = ".card { border: 1px solid var(--border); color: black; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(doc.rules[0].declarations.len(), 1);
        assert_eq!(doc.rules[0].declarations[0].property, "color");
    }

    #[test]
    fn zero_and_percentage_lengths() {
        let css = ".footer { margin: 0; width: 100%; }";
        let doc = parse_theme(css).unwrap();

        assert_eq!(
            doc.rules[0].declarations[0].value,
            DeclValue::Literal(Literal::Length(Length::Zero))
        );
        assert_eq!(
            doc.rules[0].declarations[1].value,
            DeclValue::Literal(Literal::Length(Length::Percent(100.0)))
        );
    }
}
