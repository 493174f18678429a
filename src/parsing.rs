use crate::error_handling::*;
use crate::operators::*;
use crate::scanning::*;

pub enum StackNode {
    operator(Operator),
    paren,
}

pub struct Yard {
    expression: Vec<Token>,
    stack: Vec<StackNode>,
}

impl Yard {
    pub fn new() -> Self {
        Self{expression: Vec::new(), stack: Vec::new()}
    }

    fn add_number(&mut self, content: &str) {
        self.expression.push(Token::number(content.into()));
    }

    fn pop_higher_operator(&mut self, incoming: &Operator) -> Option<Operator> {
        let top = match self.stack.last() {
            Some(StackNode::operator(top)) if top.yields_to(incoming) => *top,
            _ => return None,
        };
        self.stack.pop();
        Some(top)
    }

    fn add_operator(&mut self, operator: Operator) {
        while let Some(higher) = self.pop_higher_operator(&operator) {
            self.expression.push(Token::operator(higher));
        }
        self.stack.push(StackNode::operator(operator));
    }

    fn add_left_paren(&mut self) {
        self.stack.push(StackNode::paren);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren => return Ok(()),
                StackNode::operator(operator) => self.expression.push(Token::operator(operator)),
            }
        }
        Err(CalcError::unbalanced_parentheses)
    }

    pub fn finish(mut self) -> Result<Vec<Token>> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren => return Err(CalcError::unbalanced_parentheses),
                StackNode::operator(operator) => self.expression.push(Token::operator(operator)),
            }
        }
        Ok(self.expression)
    }

    pub fn add(&mut self, token: &Token) -> Result<()> {
        match token {
            Token::number(content) => self.add_number(content),
            Token::operator(operator) => self.add_operator(*operator),
            Token::open_paren => self.add_left_paren(),
            Token::close_paren => self.add_right_paren()?,
        }
        Ok(())
    }
}

impl Default for Yard {
    fn default() -> Self {
        Self::new()
    }
}

/// Reorders infix tokens into postfix order with the shunting-yard algorithm.
/// Parentheses never reach the output.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut yard = Yard::new();
    for token in tokens {
        yard.add(token)?;
    }
    yard.finish()
}
