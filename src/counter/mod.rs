mod effective;

pub use effective::{CommentSyntax, EffectiveLocCounter};
