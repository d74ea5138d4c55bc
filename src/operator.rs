use crate::EnumerableError;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A binary operator used to fold elements in `reduce_with`
///
/// The element being folded is the left operand and the accumulator the right,
/// so `Sub` computes `element - accumulator`.
pub trait Operator<T> {
    fn apply(&self, element: T, accumulator: T) -> T;
}

/// `element + accumulator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plus;

/// `element - accumulator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minus;

/// `element * accumulator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Times;

/// The smaller operand, keeping the accumulator on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

/// The larger operand, keeping the accumulator on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

/// String concatenation, `element` followed by `accumulator`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Concat;

impl<T: Add<Output = T>> Operator<T> for Plus {
    fn apply(&self, element: T, accumulator: T) -> T {
        element + accumulator
    }
}

impl<T: Sub<Output = T>> Operator<T> for Minus {
    fn apply(&self, element: T, accumulator: T) -> T {
        element - accumulator
    }
}

impl<T: Mul<Output = T>> Operator<T> for Times {
    fn apply(&self, element: T, accumulator: T) -> T {
        element * accumulator
    }
}

impl<T: PartialOrd> Operator<T> for Min {
    fn apply(&self, element: T, accumulator: T) -> T {
        if element < accumulator {
            element
        } else {
            accumulator
        }
    }
}

impl<T: PartialOrd> Operator<T> for Max {
    fn apply(&self, element: T, accumulator: T) -> T {
        if element > accumulator {
            element
        } else {
            accumulator
        }
    }
}

impl Operator<String> for Concat {
    fn apply(&self, element: String, accumulator: String) -> String {
        element + &accumulator
    }
}

/// The operators `reduce_with` accepts by name
///
/// Dispatching on a runtime name needs every operation at once, so this enum
/// only folds numeric elements. Non-numeric elements use the operator structs
/// directly, e.g. [`Max`] for any `PartialOrd` type or [`Concat`] for strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Min,
    Max,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Min => "min",
            BinaryOp::Max => "max",
        }
    }
}

impl<T> Operator<T> for BinaryOp
where
    T: Add<Output = T> + Sub<Output = T> + Mul<Output = T> + PartialOrd,
{
    fn apply(&self, element: T, accumulator: T) -> T {
        match self {
            BinaryOp::Add => Plus.apply(element, accumulator),
            BinaryOp::Sub => Minus.apply(element, accumulator),
            BinaryOp::Mul => Times.apply(element, accumulator),
            BinaryOp::Min => Min.apply(element, accumulator),
            BinaryOp::Max => Max.apply(element, accumulator),
        }
    }
}

impl FromStr for BinaryOp {
    type Err = EnumerableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "add" => Ok(BinaryOp::Add),
            "-" | "sub" => Ok(BinaryOp::Sub),
            "*" | "mul" => Ok(BinaryOp::Mul),
            "min" => Ok(BinaryOp::Min),
            "max" => Ok(BinaryOp::Max),
            other => Err(EnumerableError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
