//! sea-orm entity definitions for the PawHaven database.

pub mod pets;
pub mod users;
