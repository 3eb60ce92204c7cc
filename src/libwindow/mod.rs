pub mod buttons;
pub mod drawing;
