use std::fmt::Display;

use phf::phf_map;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    // Comparison
    Eq,  // =
    Neq, // <>
    Gt,  // >
    Gte, // >=
    Lt,  // <
    Lte, // <=

    // Arithmetic
    Plus,  // +
    Minus, // -
    Mul,   // *
    Div,   // /
    Mod,   // %
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Neq => "<>",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Mod => "%",
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            Op::Eq | Op::Neq | Op::Gt | Op::Gte | Op::Lt | Op::Lte
        )
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator spellings. Lookups are exact: no case folding, no trimming.
pub const OPERATOR: phf::Map<&'static str, Op> = phf_map! {
    ">" => Op::Gt,
    ">=" => Op::Gte,
    "<" => Op::Lt,
    "<=" => Op::Lte,
    "<>" => Op::Neq,
    "=" => Op::Eq,
    "+" => Op::Plus,
    "-" => Op::Minus,
    "/" => Op::Div,
    "*" => Op::Mul,
    "%" => Op::Mod,
};

pub fn check_operator(text: &str) -> Option<Op> {
    OPERATOR.get(text).copied()
}
