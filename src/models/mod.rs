pub mod ad;
pub mod game;

pub use ad::{Ad, AdListing, ContactResponse, NewAdRequest};
pub use game::{AdCount, Game, GameWithAdCount};
