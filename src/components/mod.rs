//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod kitten_card;
mod kitten_list;
mod share_bar;
mod shared_banner;

pub use confirm_button::ConfirmButton;
pub use kitten_card::KittenCard;
pub use kitten_list::KittenList;
pub use share_bar::ShareBar;
pub use shared_banner::SharedBanner;
