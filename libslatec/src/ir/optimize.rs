// Copyright 2025-2026 Neil Henderson
//
//! The `optimize` module applies local optimization passes over the TAC until a fixed point.
//!
//! Four passes run in order inside the fixed-point loop: constant folding, strength reduction,
//! copy propagation, and dead-code elimination. The loop repeats while any pass reports a
//! change, capped at a practical safety limit. No pass removes or reorders labels, and no pass
//! moves an instruction across a label or branch.

use std::collections::{HashMap, HashSet};

use crate::parser::BinaryOp;

use super::{is_bool_literal, is_int_literal, is_quoted_string, is_temp, TacInstruction};

/// The fixed-point loop's iteration cap.
const MAX_ITERATIONS: usize = 10;

/// An optimization pass over the TAC.
pub trait Pass {
    /// Runs the pass, returning whether it changed the code.
    fn run(&self, code: &mut Vec<TacInstruction>) -> bool;

    /// The pass name.
    fn name(&self) -> &'static str;
}

/// Optimizes the TAC to a fixed point.
///
/// Calling `optimize` on its own output returns an equal list.
pub fn optimize(code: Vec<TacInstruction>) -> Vec<TacInstruction> {
    let passes: [&dyn Pass; 4] = [&ConstantFolding, &StrengthReduction, &CopyPropagation, &DeadCodeElimination];

    let mut code = code;
    let mut changed = true;
    let mut iterations = 0;

    while changed && iterations < MAX_ITERATIONS {
        changed = false;
        iterations += 1;
        for pass in passes {
            changed = pass.run(&mut code) || changed;
        }
    }

    code
}

/// Folds binary operations whose operands are both integer literals, or both boolean literals.
pub struct ConstantFolding;

impl Pass for ConstantFolding {
    fn run(&self, code: &mut Vec<TacInstruction>) -> bool {
        let mut changed = false;

        for instr in code.iter_mut() {
            let folded = match instr {
                TacInstruction::Binary { op, dest, lhs, rhs } => {
                    let value = if is_int_literal(lhs) && is_int_literal(rhs) {
                        fold_int(*op, lhs, rhs)
                    } else if is_bool_literal(lhs) && is_bool_literal(rhs) {
                        fold_bool(*op, lhs.as_str() == "true", rhs.as_str() == "true")
                    } else {
                        None
                    };
                    value.map(|value| (dest.clone(), value))
                }
                _ => None,
            };

            if let Some((dest, value)) = folded {
                *instr = TacInstruction::Assign { dest, src: value };
                changed = true;
            }
        }

        changed
    }

    fn name(&self) -> &'static str {
        "constant-folding"
    }
}

/// Folds an integer binary operation, or returns None when the fold is unsafe.
///
/// Arithmetic is evaluated in 64 bits; a fold is refused when the result falls outside the
/// 32-bit signed range the generated target declares, and when dividing by zero.
fn fold_int(op: BinaryOp, lhs: &str, rhs: &str) -> Option<String> {
    let a = lhs.parse::<i64>().ok()?;
    let b = rhs.parse::<i64>().ok()?;

    let arithmetic = |value: Option<i64>| {
        let value = value?;
        if i32::try_from(value).is_err() {
            return None;
        }
        Some(value.to_string())
    };

    match op {
        BinaryOp::Add => arithmetic(a.checked_add(b)),
        BinaryOp::Subtract => arithmetic(a.checked_sub(b)),
        BinaryOp::Multiply => arithmetic(a.checked_mul(b)),
        BinaryOp::Divide => {
            if b == 0 {
                return None;
            }
            arithmetic(a.checked_div(b))
        }
        BinaryOp::Remainder => {
            if b == 0 {
                return None;
            }
            arithmetic(a.checked_rem(b))
        }

        BinaryOp::LessThan => Some((a < b).to_string()),
        BinaryOp::GreaterThan => Some((a > b).to_string()),
        BinaryOp::LessThanOrEqualTo => Some((a <= b).to_string()),
        BinaryOp::GreaterThanOrEqualTo => Some((a >= b).to_string()),
        BinaryOp::EqualTo => Some((a == b).to_string()),
        BinaryOp::NotEqualTo => Some((a != b).to_string()),

        BinaryOp::LogicalAnd | BinaryOp::LogicalOr => None,
    }
}

fn fold_bool(op: BinaryOp, a: bool, b: bool) -> Option<String> {
    match op {
        BinaryOp::LogicalAnd => Some((a && b).to_string()),
        BinaryOp::LogicalOr => Some((a || b).to_string()),
        BinaryOp::EqualTo => Some((a == b).to_string()),
        BinaryOp::NotEqualTo => Some((a != b).to_string()),
        _ => None,
    }
}

/// Rewrites `x * 2` (in either operand position) to `x + x`.
pub struct StrengthReduction;

impl Pass for StrengthReduction {
    fn run(&self, code: &mut Vec<TacInstruction>) -> bool {
        let mut changed = false;

        for instr in code.iter_mut() {
            let TacInstruction::Binary { op, lhs, rhs, .. } = instr else {
                continue;
            };
            if *op != BinaryOp::Multiply {
                continue;
            }

            if lhs.as_str() == "2" {
                *op = BinaryOp::Add;
                *lhs = rhs.clone();
                changed = true;
            } else if rhs.as_str() == "2" {
                *op = BinaryOp::Add;
                *rhs = lhs.clone();
                changed = true;
            }
        }

        changed
    }

    fn name(&self) -> &'static str {
        "strength-reduction"
    }
}

/// Propagates copies of literals and temporaries through later operand positions.
///
/// A single left-to-right walk maintains a map from temporary to replacement. An
/// `assign t = k` where `t` is a temporary and `k` is a literal or another temporary records
/// the mapping; any other definition of a temporary (including a call result) invalidates its
/// entry.
pub struct CopyPropagation;

impl Pass for CopyPropagation {
    fn run(&self, code: &mut Vec<TacInstruction>) -> bool {
        let mut changed = false;
        let mut replacements: HashMap<String, String> = HashMap::new();

        let substitute = |operand: &mut String, replacements: &HashMap<String, String>, changed: &mut bool| {
            if let Some(replacement) = replacements.get(operand.as_str()) {
                *operand = replacement.clone();
                *changed = true;
            }
        };

        for instr in code.iter_mut() {
            match instr {
                TacInstruction::Assign { src, .. } => substitute(src, &replacements, &mut changed),
                TacInstruction::Binary { lhs, rhs, .. } => {
                    substitute(lhs, &replacements, &mut changed);
                    substitute(rhs, &replacements, &mut changed);
                }
                TacInstruction::Unary { operand, .. } => substitute(operand, &replacements, &mut changed),
                TacInstruction::Call { args, .. } => {
                    for arg in args.iter_mut() {
                        substitute(arg, &replacements, &mut changed);
                    }
                }
                TacInstruction::Return { value: Some(value) } => substitute(value, &replacements, &mut changed),
                TacInstruction::IfFalse { condition, .. } => substitute(condition, &replacements, &mut changed),
                TacInstruction::Print { value } => substitute(value, &replacements, &mut changed),
                _ => {}
            }

            match instr {
                TacInstruction::Assign { dest, src } if is_temp(dest) => {
                    if is_int_literal(src) || is_bool_literal(src) || is_quoted_string(src) || is_temp(src) {
                        replacements.insert(dest.clone(), src.clone());
                    } else {
                        replacements.remove(dest.as_str());
                    }
                }

                // Any other definition of a temp invalidates its mapping.
                TacInstruction::Binary { dest, .. } | TacInstruction::Unary { dest, .. } => {
                    replacements.remove(dest.as_str());
                }
                TacInstruction::Call { dest: Some(dest), .. } => {
                    replacements.remove(dest.as_str());
                }

                _ => {}
            }
        }

        changed
    }

    fn name(&self) -> &'static str {
        "copy-propagation"
    }
}

/// Removes pure instructions that define a temporary no later instruction reads.
///
/// Pure means assignment, arithmetic, comparison, or logical operations. Calls, I/O, returns,
/// jumps, and labels are never removed. Removal recomputes usage and repeats until a full pass
/// removes nothing.
pub struct DeadCodeElimination;

impl Pass for DeadCodeElimination {
    fn run(&self, code: &mut Vec<TacInstruction>) -> bool {
        let mut changed = false;

        loop {
            let used = used_temps(code);
            let len_before = code.len();

            code.retain(|instr| match instr {
                TacInstruction::Assign { dest, .. }
                | TacInstruction::Binary { dest, .. }
                | TacInstruction::Unary { dest, .. } => !is_temp(dest) || used.contains(dest.as_str()),
                _ => true,
            });

            if code.len() == len_before {
                break;
            }
            changed = true;
        }

        changed
    }

    fn name(&self) -> &'static str {
        "dead-code-elimination"
    }
}

/// The set of temporaries appearing in an operand position anywhere in the code.
fn used_temps(code: &[TacInstruction]) -> HashSet<String> {
    let mut used = HashSet::new();
    for instr in code {
        for operand in instr.operands() {
            if is_temp(operand) {
                used.insert(operand.to_string());
            }
        }
    }
    used
}
