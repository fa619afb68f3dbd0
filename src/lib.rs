//! # ysh
//!
//! ysh is the expression core of a small interactive shell.
//! It tokenizes shell lines, reorders infix expressions into postfix order
//! and evaluates them over a dynamically typed value model with lists,
//! tuples, first-class functions and error values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the two error channels of evaluation.
///
/// Fatal errors abort an evaluation and travel through `Result`; value-level
/// errors are ordinary `Value::Error` values that flow through further
/// operations as data.
///
/// # Responsibilities
/// - Defines [`FatalError`] for structurally invalid input.
/// - Builds the messages of grammar, arithmetic and operation errors.
pub mod error;
/// Orchestrates tokenizing, reordering and evaluation.
///
/// This module ties together the line tokenizer, the expression scanner, the
/// reorderer, the evaluator and the value model.
pub mod interpreter;
/// Runs scripts line by line.
///
/// Joins continued physical lines and evaluates the expression tokens of
/// each logical line against a shared environment.
pub mod shell;
/// Operator table.
///
/// Declares the infix operators with their symbols, precedence and
/// associativity, and the structured postfix items the reorderer emits.
pub mod syntax;
/// General utilities for safe numeric conversion.
///
/// These conversions are shared by the value model and the operators.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data
///   loss.
/// - Validate shift amounts and repetition counts.
pub mod util;

pub use error::FatalError;
pub use interpreter::{
    evaluator::{core::evaluate, environment::Environment},
    lexer::line::tokenize,
    parser::shunting_yard::reorder,
    value::core::Value,
};

/// Single-operator semantics for direct use.
///
/// Each function takes its operands by reference and returns a new value;
/// invalid combinations come back as error values.
pub mod operators {
    pub use crate::interpreter::evaluator::{
        binary::{
            arithmetic::{add, div, mul, rem, sub},
            comparison::{compare, relation},
            logic::{and, bit_and, bit_or, or, shl, shr},
            power::pow,
            structure::{apply, concat, cons, zip},
        },
        function::abstraction::abstraction,
        unary::not,
    };
}
