mod cards;
mod misc;

pub use cards::card_routes;
pub use misc::misc_routes;
