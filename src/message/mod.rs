//! Message kinds implementing [`Composer`](crate::core::Composer)

pub mod fields;
pub mod lazy;
pub mod line;
pub mod string;

pub use fields::FieldsMessage;
pub use lazy::LazyMessage;
pub use line::LineMessage;
pub use string::StringMessage;
