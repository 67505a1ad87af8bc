//! Grammar productions.
//!
//! Only parser rules contribute to the result. Lexer rules, fragments, modes
//! and prelude sections are recognized just far enough to be skipped.

use super::core::Parser;
use super::lexer::TokenKind;
use crate::grammar::{RawOccurrence, Suffix};
use crate::{Error, RawGrammar, Result};

impl Parser<'_> {
    pub fn parse(mut self) -> Result<RawGrammar> {
        self.parse_header()?;

        while !self.eof() {
            self.parse_item()?;
        }

        if self.raw.start.is_none() {
            return Err(Error::NoRules {
                grammar: self.raw.display_name(),
            });
        }
        Ok(self.raw)
    }

    /// `grammar Name;`, `parser grammar Name;` or `lexer grammar Name;`.
    fn parse_header(&mut self) -> Result<()> {
        let lexer_only = self.at_keyword("lexer") && self.text_at(self.pos + 1) == "grammar";
        if lexer_only || (self.at_keyword("parser") && self.text_at(self.pos + 1) == "grammar") {
            self.bump();
        } else if !(self.at_keyword("grammar") && self.nth(1) == TokenKind::Ident) {
            return Ok(());
        }

        self.bump();
        let name = self.expect(TokenKind::Ident, "grammar name")?;
        self.raw.name = Some(name.to_string());
        self.expect(TokenKind::Semi, "`;`")?;

        if lexer_only {
            return Err(Error::NoRules {
                grammar: name.to_string(),
            });
        }
        Ok(())
    }

    fn parse_item(&mut self) -> Result<()> {
        if (self.at_keyword("options") || self.at_keyword("tokens") || self.at_keyword("channels"))
            && self.nth(1) == TokenKind::ActionBlock
        {
            self.pos += 2;
            return Ok(());
        }
        if self.at_keyword("import") || self.at_keyword("mode") || self.at_keyword("fragment") {
            self.skip_past_semi();
            return Ok(());
        }
        if self.at(TokenKind::At) {
            return self.parse_named_action();
        }

        for modifier in ["public", "private", "protected"] {
            if self.at_keyword(modifier) && self.nth(1) == TokenKind::Ident {
                self.bump();
            }
        }

        if !self.at(TokenKind::Ident) {
            return Err(self.error(format!("expected rule, found `{}`", self.current_text())));
        }
        if is_token_name(self.current_text()) {
            self.skip_past_semi();
            return Ok(());
        }
        self.parse_parser_rule()
    }

    /// `@name {...}` or `@scope::name {...}`.
    fn parse_named_action(&mut self) -> Result<()> {
        self.expect(TokenKind::At, "`@`")?;
        self.expect(TokenKind::Ident, "action name")?;
        if self.eat(TokenKind::ColonColon) {
            self.expect(TokenKind::Ident, "action name")?;
        }
        self.expect(TokenKind::ActionBlock, "action block")?;
        Ok(())
    }

    fn parse_parser_rule(&mut self) -> Result<()> {
        let name = self.bump().to_string();
        self.parse_rule_prequel()?;

        if self.raw.rules.contains_key(&name) {
            tracing::warn!(rule = %name, "duplicate rule definition ignored");
            self.skip_past_semi();
            return self.parse_exception_group();
        }

        self.expect(TokenKind::Colon, "`:`")?;
        self.raw.non_terminals.insert(name.clone());
        self.raw.rules.insert(name.clone(), Vec::new());
        if self.raw.start.is_none() {
            self.raw.start = Some(name.clone());
        }

        let alternatives = self.parse_alt_list(&name)?;
        self.raw.rules.insert(name, alternatives);
        self.expect(TokenKind::Semi, "`;`")?;
        self.parse_exception_group()
    }

    /// Arguments, `returns`, `throws`, `locals`, rule options and rule actions.
    fn parse_rule_prequel(&mut self) -> Result<()> {
        loop {
            if self.eat(TokenKind::BracketBlock) {
                continue;
            }
            if self.eat_keyword("returns") || self.eat_keyword("locals") {
                self.expect(TokenKind::BracketBlock, "`[...]`")?;
                continue;
            }
            if self.eat_keyword("throws") {
                self.expect(TokenKind::Ident, "exception name")?;
                while self.eat(TokenKind::Comma) {
                    self.expect(TokenKind::Ident, "exception name")?;
                }
                continue;
            }
            if self.at_keyword("options") && self.nth(1) == TokenKind::ActionBlock {
                self.pos += 2;
                continue;
            }
            if self.at(TokenKind::At) {
                self.parse_named_action()?;
                continue;
            }
            return Ok(());
        }
    }

    fn parse_exception_group(&mut self) -> Result<()> {
        loop {
            if self.eat_keyword("catch") {
                self.expect(TokenKind::BracketBlock, "`[...]`")?;
                self.expect(TokenKind::ActionBlock, "action block")?;
            } else if self.eat_keyword("finally") {
                self.expect(TokenKind::ActionBlock, "action block")?;
            } else {
                return Ok(());
            }
        }
    }

    fn parse_alt_list(&mut self, rule: &str) -> Result<Vec<Vec<RawOccurrence>>> {
        let mut alternatives = vec![self.parse_alternative(rule)?];
        while self.eat(TokenKind::Pipe) {
            alternatives.push(self.parse_alternative(rule)?);
        }
        Ok(alternatives)
    }

    fn parse_alternative(&mut self, rule: &str) -> Result<Vec<RawOccurrence>> {
        let mut alternative = Vec::new();
        self.skip_element_options()?;

        while !self.current().ends_alternative() {
            alternative.push(self.parse_element(rule)?);
        }

        // `# Label`
        if self.eat(TokenKind::Pound) {
            self.expect(TokenKind::Ident, "alternative label")?;
        }
        Ok(alternative)
    }

    fn parse_element(&mut self, rule: &str) -> Result<RawOccurrence> {
        if self.at(TokenKind::ActionBlock) {
            return Err(Error::ActionBlock {
                rule: rule.to_string(),
                text: self.current_text().to_string(),
            });
        }

        // `label=` / `label+=`
        if self.at(TokenKind::Ident)
            && matches!(self.nth(1), TokenKind::Assign | TokenKind::PlusAssign)
        {
            self.pos += 2;
        }

        let mut occurrence = self.parse_atom(rule)?;
        occurrence.suffix = self.parse_suffix();
        Ok(occurrence)
    }

    fn parse_atom(&mut self, rule: &str) -> Result<RawOccurrence> {
        let occurrence = match self.current() {
            TokenKind::StringLiteral => {
                let text = self.bump();
                if self.eat(TokenKind::Range) {
                    self.expect(TokenKind::StringLiteral, "range end")?;
                }
                self.terminal(text)
            }
            TokenKind::Ident => {
                let text = self.bump();
                if is_token_name(text) {
                    self.terminal(text)
                } else {
                    self.eat(TokenKind::BracketBlock);
                    self.non_terminal(text)
                }
            }
            TokenKind::Dot => {
                self.bump();
                self.terminal(".")
            }
            TokenKind::Tilde => {
                let start = self.pos;
                self.bump();
                match self.current() {
                    TokenKind::LParen => {
                        let close = self
                            .matching_paren(self.pos)
                            .ok_or_else(|| self.error("unclosed `(`".to_string()))?;
                        self.pos = close + 1;
                    }
                    TokenKind::StringLiteral | TokenKind::Ident | TokenKind::BracketBlock => {
                        self.bump();
                    }
                    _ => return Err(self.error("expected set after `~`".to_string())),
                }
                let text = self.joined_text(start, self.pos - 1);
                self.terminal(&text)
            }
            TokenKind::LParen => {
                let name = self.parse_block(rule)?;
                return Ok(RawOccurrence::non_terminal(name, Suffix::None));
            }
            _ => {
                return Err(self.error(format!(
                    "expected grammar element, found `{}`",
                    self.current_text()
                )));
            }
        };

        self.skip_element_options()?;
        Ok(occurrence)
    }

    /// Parse `( alt | ... )` into a synthesized rule, reusing identical blocks.
    fn parse_block(&mut self, rule: &str) -> Result<String> {
        let open = self.pos;
        let close = self
            .matching_paren(open)
            .ok_or_else(|| self.error("unclosed `(`".to_string()))?;

        let key = self.joined_text(open, close);
        if let Some(name) = self.blocks.get(&key) {
            let name = name.clone();
            self.pos = close + 1;
            return Ok(name);
        }

        self.block_count += 1;
        let name = format!("_new_rule_{}", self.block_count);
        self.blocks.insert(key, name.clone());
        self.raw.non_terminals.insert(name.clone());
        self.raw.rules.insert(name.clone(), Vec::new());

        self.expect(TokenKind::LParen, "`(`")?;
        if self.at_keyword("options") && self.nth(1) == TokenKind::ActionBlock {
            self.pos += 2;
            self.expect(TokenKind::Colon, "`:`")?;
        }
        let alternatives = self.parse_alt_list(rule)?;
        self.expect(TokenKind::RParen, "`)`")?;

        self.raw.rules.insert(name.clone(), alternatives);
        Ok(name)
    }

    /// `?`, `*`, `+`, each optionally non-greedy.
    fn parse_suffix(&mut self) -> Suffix {
        let suffix = match self.current() {
            TokenKind::Question => Suffix::Optional,
            TokenKind::Star => Suffix::Star,
            TokenKind::Plus => Suffix::Plus,
            _ => return Suffix::None,
        };
        self.bump();
        self.eat(TokenKind::Question);
        suffix
    }

    /// `<key=value, ...>`
    fn skip_element_options(&mut self) -> Result<()> {
        if !self.eat(TokenKind::Lt) {
            return Ok(());
        }
        while !self.eat(TokenKind::Gt) {
            if self.eof() {
                return Err(self.error("unclosed element options".to_string()));
            }
            self.bump();
        }
        Ok(())
    }

    fn terminal(&mut self, name: &str) -> RawOccurrence {
        self.raw.terminals.insert(name.to_string());
        RawOccurrence::terminal(name, Suffix::None)
    }

    fn non_terminal(&mut self, name: &str) -> RawOccurrence {
        self.raw.non_terminals.insert(name.to_string());
        RawOccurrence::non_terminal(name, Suffix::None)
    }
}

/// Token references start with an upper-case letter.
fn is_token_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
