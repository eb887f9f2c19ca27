pub mod button;
pub mod form_builder;
pub mod icons;
pub mod input;
pub mod select;

pub use button::Button;
pub use form_builder::FormBuilder;
pub use input::Input;
pub use select::Select;
