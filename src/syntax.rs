use std::fmt;

/// Whether operators of equal precedence group to the left or to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a : b : c` is `a : (b : c)`.
    Right,
}

/// Every infix operator known to the reorderer and the evaluator.
///
/// The precedence table:
///
/// | symbol | precedence | associativity |
/// |---|---|---|
/// | `$` | 100 | right |
/// | `:` | 90 | right |
/// | `<-` | 85 | right |
/// | `^` | 80 | left |
/// | `* / %` | 70 | left |
/// | `+ - ++` | 60 | left |
/// | `< > = != <= >= <=>` | 50 | left |
/// | `& \| && \|\|` | 40 | left |
/// | `<< >>` | 30 | left |
/// | `,` | 20 | left |
/// | `->` | 10 | right |
/// | `;` | 0 | left |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `$`: function application.
    Apply,
    /// `:`: prepend onto a list.
    Cons,
    /// `<-`: assignment to a variable.
    Assign,
    /// `^`: power, always real.
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `++`: concatenation.
    Concat,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `<=>`: three-way comparison.
    Compare,
    /// `&`: bitwise and.
    BitAnd,
    /// `|`: bitwise or.
    BitOr,
    /// `&&`: logical and.
    And,
    /// `||`: logical or.
    Or,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `,`: zip into a tuple.
    Zip,
    /// `->`: function abstraction.
    Abstract,
    /// `;`: sequencing.
    Sequence,
}

impl Operator {
    /// All operators, in table order.
    pub const ALL: [Self; 26] = [Self::Apply,
                                 Self::Cons,
                                 Self::Assign,
                                 Self::Pow,
                                 Self::Mul,
                                 Self::Div,
                                 Self::Rem,
                                 Self::Add,
                                 Self::Sub,
                                 Self::Concat,
                                 Self::Less,
                                 Self::Greater,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::LessEqual,
                                 Self::GreaterEqual,
                                 Self::Compare,
                                 Self::BitAnd,
                                 Self::BitOr,
                                 Self::And,
                                 Self::Or,
                                 Self::Shl,
                                 Self::Shr,
                                 Self::Zip,
                                 Self::Abstract,
                                 Self::Sequence];

    /// The operator's source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Apply => "$",
            Self::Cons => ":",
            Self::Assign => "<-",
            Self::Pow => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Concat => "++",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Compare => "<=>",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::And => "&&",
            Self::Or => "||",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Zip => ",",
            Self::Abstract => "->",
            Self::Sequence => ";",
        }
    }

    /// Looks an operator up by its exact source text.
    ///
    /// # Example
    /// ```
    /// use ysh::syntax::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("<-"), Some(Operator::Assign));
    /// assert_eq!(Operator::from_symbol("sin"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Binding strength when the operator arrives at the reorderer.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Apply => 100,
            Self::Cons => 90,
            Self::Assign => 85,
            Self::Pow => 80,
            Self::Mul | Self::Div | Self::Rem => 70,
            Self::Add | Self::Sub | Self::Concat => 60,
            Self::Less
            | Self::Greater
            | Self::Equal
            | Self::NotEqual
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Compare => 50,
            Self::BitAnd | Self::BitOr | Self::And | Self::Or => 40,
            Self::Shl | Self::Shr => 30,
            Self::Zip => 20,
            Self::Abstract => 10,
            Self::Sequence => 0,
        }
    }

    /// Binding strength while the operator waits on the reorderer's stack.
    ///
    /// Equal to [`Operator::precedence`] except for assignment, whose right
    /// side runs to the end of the statement: only `;` pops a pending `<-`.
    #[must_use]
    pub const fn stack_precedence(self) -> u8 {
        match self {
            Self::Assign => 0,
            other => other.precedence(),
        }
    }

    /// How chains of equal precedence group.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Apply | Self::Cons | Self::Assign | Self::Abstract => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One item of a reordered, postfix expression.
///
/// `T` is the token type the reorderer was given: plain text for
/// [`reorder`](crate::interpreter::parser::shunting_yard::reorder), scanned
/// atoms for the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Postfix<T> {
    /// A value-producing token.
    Operand(T),
    /// An infix operator consuming the two operands below it.
    Operator(Operator),
    /// Juxtaposition: `function arg1 .. argN` with the `arity` arguments
    /// already on the stack.
    Apply {
        /// The leading token of the juxtaposition.
        function: T,
        /// How many arguments followed it.
        arity:    usize,
    },
}
