pub mod binary;
pub mod expr;
pub mod literal;
pub mod paren;

pub use binary::Binary;
pub use expr::Expr;
pub use literal::{LitNum, LitSym, Literal};
pub use paren::Paren;
