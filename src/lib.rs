#![allow(nonstandard_style)]

//! Evaluates arithmetic expressions in three passes: scanning the text into
//! tokens, reordering them into postfix with the shunting-yard algorithm and
//! running the postfix sequence on a value stack.

pub mod error_handling;
pub mod evaluating;
pub mod operators;
pub mod parsing;
pub mod scanning;

pub use error_handling::*;
pub use evaluating::*;
pub use parsing::*;
pub use scanning::*;

pub const SUCCESS_MARKER: &str = "Operation completed successfully.";

pub fn calculate(expression: &str) -> Result<f64> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    evaluate(&postfix)
}

/// Success marker followed by the value, always with a fractional part.
pub fn report(value: f64) -> String {
    format!("{}\n{:?}", SUCCESS_MARKER, value)
}
