use tracing::{debug, warn};

use crate::{
    error::{operation_error, standard_error, value_error::UNSUPPORTED},
    interpreter::{
        evaluator::{core::evaluate, environment::Environment},
        value::{core::Value, func::Func},
    },
    syntax::Operator,
};

/// `->`: builds a function from a parameter name and a body expression.
///
/// Both operands must be `Str`. The function captures a snapshot of `env`
/// taken now; later assignments in `env` are not visible inside it. Each
/// call evaluates the body against a fresh copy of the snapshot with the
/// parameter bound to the argument, so calls never leak bindings.
///
/// A fatal error while evaluating the body is logged and becomes an error
/// value of the call.
///
/// # Example
/// ```
/// use ysh::interpreter::{
///     evaluator::{environment::Environment, function::abstraction::abstraction},
///     value::core::Value,
/// };
///
/// let env = Environment::new();
/// let double = abstraction(&Value::from("x"), &Value::from("x * 2"), &env);
///
/// let Value::Func(f) = double else { panic!("not a function") };
/// assert_eq!(f.call(&Value::Int(21)), Value::Int(42));
/// ```
pub fn abstraction(parameter: &Value, body: &Value, env: &Environment) -> Value {
    let (Value::Str(parameter), Value::Str(body)) = (parameter, body) else {
        return operation_error(parameter.type_name(),
                               &[body.type_name()],
                               Operator::Abstract.symbol(),
                               UNSUPPORTED);
    };

    let captured = env.clone();
    let name = format!("{parameter} -> {body:?}");
    let (parameter, body) = (parameter.clone(), body.clone());

    Value::Func(Func::new(name, move |argument| {
                    debug!(%parameter, %argument, "function call");
                    let mut scope = captured.clone();
                    scope.assign(parameter.as_str(), argument.clone());
                    evaluate(&body, &mut scope).unwrap_or_else(|e| {
                                                   warn!(%body, error = %e, "function body failed");
                                                   standard_error(e.to_string())
                                               })
                }))
}
