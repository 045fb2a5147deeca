/// Syntax tree module
/// Contains all definitions related to the parsed tree structure
///
/// Submodules:
/// - ast: The node arena, node ids and the source-file root
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds
/// - types: Definitions for the type node kinds
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
