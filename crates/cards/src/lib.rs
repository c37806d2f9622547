mod card;
mod payload;
mod seed;

pub use card::{Animations, Card, CardRow, Layout, Palette, Spacing};
pub use payload::{CreateCard, ValidationError};
pub use seed::{seed_cards, seed_cards_if_empty};
