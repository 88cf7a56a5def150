//! # dbml-forge-dsl
//!
//! DBML front end for DbmlForge: lexer, parser, syntax tree, and binder.
//!
//! This crate provides:
//! - A trivia-preserving lexer: every comment, space, and line break is
//!   attached to a token, so the emitted token stream reconstructs the
//!   source text exactly
//! - A recursive descent parser with error recovery that always produces a
//!   complete syntax tree, collecting diagnostics instead of failing
//! - A binder that resolves the tree to the `dbml-forge-core` domain model
//!
//! # Example
//!
//! ```
//! use dbml_forge_dsl::{bind, SyntaxTree};
//!
//! let source = "
//! Table users {
//!     id int [pk, increment]
//!     email varchar(320) [not null, unique]
//! }
//! ";
//!
//! let tree = SyntaxTree::parse(source);
//! assert!(tree.diagnostics().is_empty());
//!
//! let (database, diagnostics) = bind(&tree);
//! assert!(diagnostics.is_empty());
//! let users = database.table("users").expect("users table");
//! assert_eq!(users.columns.len(), 2);
//! assert!(users.column("id").expect("id column").is_primary_key);
//! ```

pub mod ast;
pub mod binder;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod text;
pub mod token;

pub use ast::{SyntaxNode, SyntaxTree};
pub use binder::bind;
pub use diagnostics::{Diagnostic, DiagnosticBag, Severity};
pub use lexer::Lexer;
pub use parser::Parser;
pub use text::{SourceText, TextLocation, TextSpan};
pub use token::{SyntaxKind, SyntaxToken, SyntaxTrivia, TokenValue};
