//! Design System Components
//!
//! Small set of styled building blocks shared by the views.

mod button;
mod card;
mod input;
mod loading;
mod select;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardTitle};
pub use input::{Input, TextArea};
pub use loading::LoadingSpinner;
pub use select::Select;
