use crate::lexer::tokens::TokenKind;

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Identifier,
    PrefixUnary,
    PostfixUnary,
    Binary,
    Ternary,
}

/// Expression tree node.
///
/// Every node owns its children, so a parsed expression is a strict tree.
/// Nodes are built bottom-up by the parser and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Identifier, kept verbatim.
    Identifier(String),
    /// Prefix operation such as `-a` or `++a`.
    PrefixUnary {
        operator: TokenKind,
        operand: Box<Expr>,
    },
    /// Postfix operation such as `a++`.
    PostfixUnary {
        operator: TokenKind,
        operand: Box<Expr>,
    },
    /// Binary operation.
    ///
    /// Indexing is a binary node too: `a[i]` has operator `[`, base on the left
    /// and index on the right.
    Binary {
        operator: TokenKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Conditional `condition ? then_branch : else_branch`, operator `?`.
    Ternary {
        operator: TokenKind,
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Expr {
    pub fn prefix(operator: TokenKind, operand: Expr) -> Self {
        Expr::PrefixUnary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn postfix(operator: TokenKind, operand: Expr) -> Self {
        Expr::PostfixUnary {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: TokenKind, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ternary(operator: TokenKind, condition: Expr, then_branch: Expr, else_branch: Expr) -> Self {
        Expr::Ternary {
            operator,
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Identifier(_) => ExprType::Identifier,
            Expr::PrefixUnary { .. } => ExprType::PrefixUnary,
            Expr::PostfixUnary { .. } => ExprType::PostfixUnary,
            Expr::Binary { .. } => ExprType::Binary,
            Expr::Ternary { .. } => ExprType::Ternary,
        }
    }

    /// Operator of an interior node; `None` for leaves.
    pub fn operator(&self) -> Option<TokenKind> {
        match self {
            Expr::Number(_) | Expr::Identifier(_) => None,
            Expr::PrefixUnary { operator, .. }
            | Expr::PostfixUnary { operator, .. }
            | Expr::Binary { operator, .. }
            | Expr::Ternary { operator, .. } => Some(*operator),
        }
    }

    /// Direct children, in source order.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) | Expr::Identifier(_) => vec![],
            Expr::PrefixUnary { operand, .. } | Expr::PostfixUnary { operand, .. } => {
                vec![operand.as_ref()]
            }
            Expr::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
                ..
            } => vec![condition.as_ref(), then_branch.as_ref(), else_branch.as_ref()],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Number(_) | Expr::Identifier(_))
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Expr::node_count)
            .sum::<usize>()
    }
}
