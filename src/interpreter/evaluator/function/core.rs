use crate::interpreter::{
    evaluator::{function::builtin, unary},
    value::{core::Value, func::Func},
};

/// Type alias for builtin function handlers.
type BuiltinFn = fn(&Value) -> Value;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ($($name:literal => $func:expr),* $(,)?) => {
        static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[
            $(($name, $func),)*
        ];
        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"      => builtin::abs,
    "assert"   => builtin::assert,
    "cos"      => builtin::cos,
    "error"    => builtin::error,
    "exp"      => builtin::exp,
    "head"     => builtin::head,
    "int"      => builtin::int,
    "is_error" => builtin::is_error,
    "len"      => builtin::len,
    "list"     => builtin::list,
    "ln"       => builtin::ln,
    "not"      => unary::not,
    "real"     => builtin::real,
    "sin"      => builtin::sin,
    "sqrt"     => builtin::sqrt,
    "str"      => builtin::str,
    "tail"     => builtin::tail,
    "tuple"    => builtin::tuple,
    "type"     => builtin::type_of,
}

/// Looks up a builtin by name and wraps it as a function value.
///
/// # Example
/// ```
/// use ysh::interpreter::{evaluator::function::core::lookup, value::core::Value};
///
/// let len = lookup("len").unwrap();
/// assert_eq!(len.call(&Value::from("abc")), Value::Int(3));
/// assert!(lookup("nope").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<Func> {
    BUILTIN_TABLE.iter()
                 .find(|(builtin, _)| *builtin == name)
                 .map(|&(builtin, function)| Func::new(builtin, function))
}
