use crate::error_handling::*;

use phf::phf_map;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    floor_division,
    remainder,
    exponentiation,
}

fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}

// `%` on f64 truncates; both helpers shift the result onto the floor convention.
fn floor_divide(left: f64, right: f64) -> f64 {
    let remainder = left % right;
    let quotient = (left - remainder) / right;
    if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
        quotient - 1.0
    } else if quotient == 0.0 {
        0.0_f64.copysign(left / right)
    } else {
        quotient
    }
}

fn floor_remainder(left: f64, right: f64) -> f64 {
    let remainder = left % right;
    if remainder == 0.0 {
        0.0_f64.copysign(right)
    } else if (remainder < 0.0) != (right < 0.0) {
        remainder + right
    } else {
        remainder
    }
}

impl BinaryOperator {
    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
            floor_division => ':',
            remainder => '%',
            exponentiation => '^',
        }
    }

    pub fn call(&self, left: f64, right: f64) -> Result<f64> {
        use BinaryOperator::*;

        if matches!(self, floor_division | remainder) && !(is_integral(left) && is_integral(right)) {
            return Err(CalcError::non_integer_operand(self.symbol()));
        }

        match self {
            addition => Ok(left + right),
            subtraction => Ok(left - right),
            multiplication => Ok(left * right),
            division | floor_division | remainder if right == 0.0 => Err(CalcError::division_by_zero),
            division => Ok(left / right),
            floor_division => Ok(floor_divide(left, right)),
            remainder => Ok(floor_remainder(left, right)),
            exponentiation if left == 0.0 && right < 0.0 => Err(CalcError::division_by_zero),
            exponentiation => Ok(left.powf(right)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    left,
    right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    pub kind: BinaryOperator,
    pub precedence: u8,
    pub associativity: Associativity,
}

impl Operator {
    pub fn lookup(symbol: char) -> Option<Operator> {
        OPERATORS.get(&symbol).copied()
    }

    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    /// Whether `self`, sitting on the operator stack, has to be emitted before
    /// `incoming` is pushed.
    pub fn yields_to(&self, incoming: &Operator) -> bool {
        self.precedence > incoming.precedence
            || (self.precedence == incoming.precedence && incoming.associativity != Associativity::right)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub static OPERATORS: phf::Map<char, Operator> = phf_map! {
    '+' => Operator {
        kind: BinaryOperator::addition,
        precedence: 1,
        associativity: Associativity::left,
    },
    '-' => Operator {
        kind: BinaryOperator::subtraction,
        precedence: 1,
        associativity: Associativity::left,
    },
    '*' => Operator {
        kind: BinaryOperator::multiplication,
        precedence: 2,
        associativity: Associativity::left,
    },
    '/' => Operator {
        kind: BinaryOperator::division,
        precedence: 2,
        associativity: Associativity::left,
    },
    ':' => Operator {
        kind: BinaryOperator::floor_division,
        precedence: 2,
        associativity: Associativity::left,
    },
    '%' => Operator {
        kind: BinaryOperator::remainder,
        precedence: 2,
        associativity: Associativity::left,
    },
    '^' => Operator {
        kind: BinaryOperator::exponentiation,
        precedence: 3,
        associativity: Associativity::right,
    },
};
