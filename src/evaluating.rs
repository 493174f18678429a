use crate::error_handling::*;
use crate::scanning::*;

fn parse_number(content: &str) -> Result<f64> {
    content
        .parse()
        .map_err(|_| CalcError::invalid_number_format(content.into()))
}

/// Runs a postfix token sequence on a value stack and returns the single
/// value left behind.
pub fn evaluate(expression: &[Token]) -> Result<f64> {
    let mut slots = Vec::<f64>::new();
    for node in expression {
        match node {
            Token::number(content) => slots.push(parse_number(content)?),

            Token::operator(operator) => {
                let right = slots.pop().ok_or(CalcError::insufficient_operands)?;
                let left = slots.pop().ok_or(CalcError::insufficient_operands)?;
                slots.push(operator.kind.call(left, right)?);
            },

            Token::open_paren | Token::close_paren => return Err(CalcError::unbalanced_parentheses),
        }
    }

    match slots.as_slice() {
        [] => Err(CalcError::insufficient_operands),
        [value] => Ok(*value),
        _ => Err(CalcError::excess_operands),
    }
}
