//! Infix to postfix reordering tests.

use rstest::rstest;
use ysh::reorder;

fn postfix(infix: &str) -> String {
    let tokens = infix.split_whitespace().collect::<Vec<_>>();
    reorder(&tokens).unwrap_or_else(|e| panic!("reorder({infix:?}) failed: {e}"))
                    .join(" ")
}

#[rstest]
#[case::application_operand("1 + 2 * sin 3", "1 2 3 sin * +")]
#[case::application_head("magic 1 2 3 + 4 * 5", "1 2 3 magic 4 + 5 *")]
#[case::precedence("1 + 2 * 3", "1 2 3 * +")]
#[case::left_associative("1 - 2 - 3", "1 2 - 3 -")]
#[case::right_associative_cons("1 : 2 : xs", "1 2 xs : :")]
#[case::power_binds_tighter("2 * 3 ^ 2", "2 3 2 ^ *")]
#[case::parentheses("( 1 + 2 ) * 3", "1 2 + 3 *")]
#[case::nested_parentheses("( ( 1 ) )", "1")]
#[case::comparison_below_arithmetic("a + 1 = b", "a 1 + b =")]
#[case::zip_below_comparison("a , b = c", "a b c = ,")]
#[case::abstraction("f <- x -> body", "f x body -> <-")]
#[case::assignment_takes_the_rest("x <- x + 1", "x x 1 + <-")]
#[case::sequence_ends_assignment("x <- 1 ; x + 2", "x 1 <- x 2 + ;")]
#[case::apply_operator("f $ x + 1", "f x $ 1 +")]
fn operators(#[case] infix: &str, #[case] expected: &str) {
    assert_eq!(postfix(infix), expected);
}

#[rstest]
#[case::group_argument("f ( 1 + 2 ) 3", "1 2 + 3 f")]
#[case::argument_group_is_one_argument("g ( h 1 ) + 2", "1 h g 2 +")]
#[case::head_inside_group("2 * ( f 1 + 2 )", "2 1 f 2 + *")]
#[case::chain_inside_group("( f 1 + 2 * 3 )", "1 f 2 + 3 *")]
#[case::chain_restarts_after_sequence("f 1 + 2 ; 1 + 2 * 3", "1 f 2 + 1 2 3 * + ;")]
#[case::head_after_operator_is_operand("x + f 1 * 2", "x 1 f 2 * +")]
fn juxtaposition(#[case] infix: &str, #[case] expected: &str) {
    assert_eq!(postfix(infix), expected);
}

#[rstest]
#[case::missing_close("( 1 + 2")]
#[case::unmatched_close("1 + 2 )")]
#[case::empty_argument_group("f ( )")]
#[case::unclosed_argument_group("f ( 1")]
fn grammar_errors(#[case] infix: &str) {
    let tokens = infix.split_whitespace().collect::<Vec<_>>();
    assert!(reorder(&tokens).is_err(), "{infix:?} should not reorder");
}

#[test]
fn empty_input_reorders_to_nothing() {
    assert!(reorder::<&str>(&[]).unwrap().is_empty());
}
