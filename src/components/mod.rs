//! UI Components
//!
//! Reusable Leptos components.

mod budget_slider;
mod flash_banner;
mod frequency_picker;
mod nav_bar;
mod plan_card;
mod price_summary;

pub use budget_slider::BudgetSlider;
pub use flash_banner::FlashBanner;
pub use frequency_picker::{FrequencyPicker, FREQUENCIES};
pub use nav_bar::NavBar;
pub use plan_card::PlanCard;
pub use price_summary::PriceSummary;
