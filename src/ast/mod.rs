/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The `Expr` node set and structural helpers
/// - render: Canonical textual rendering of a tree
pub mod ast;
pub mod render;
