//! UI Components
//!
//! Carousel and card components.

mod card_slider;
mod card_item;
mod skeleton_card;

pub use card_slider::CardSlider;
pub use card_item::CardItem;
pub use skeleton_card::SkeletonCard;
