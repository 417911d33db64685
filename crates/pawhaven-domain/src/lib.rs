//! Domain types shared across the PawHaven workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod address;
pub mod email;
pub mod species;
