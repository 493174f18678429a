use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("the expression must not be empty")]
    empty_expression,

    #[error("invalid character, '{0}', encountered")]
    invalid_character(char),

    #[error("parentheses are not balanced")]
    unbalanced_parentheses,

    #[error("'{0}' is not a valid number")]
    invalid_number_format(String),

    #[error("two numbers follow each other without an operator between them")]
    consecutive_numbers,

    #[error("the '{0}' operator follows another operator")]
    consecutive_operators(char),

    #[error("the expression must not start with the '{0}' operator")]
    leading_operator(char),

    #[error("the expression must not end with the '{0}' operator")]
    trailing_operator(char),

    #[error("a number cannot be followed by '(' without an operator")]
    missing_operator_before_paren,

    #[error("')' cannot follow '(' or an operator")]
    empty_or_dangling_group,

    #[error("not enough operands for the operation")]
    insufficient_operands,

    #[error("operands are left over without operators")]
    excess_operands,

    #[error("the '{0}' operator requires integer operands")]
    non_integer_operand(char),

    #[error("division by zero")]
    division_by_zero,
}

pub type Result<T> = std::result::Result<T, CalcError>;
