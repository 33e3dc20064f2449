//! Resource hydration protocol
//!
//! Resources are built from partial JSON fragments ("stubs") and updated in
//! place as fuller payloads arrive. The merge rule throughout: a field is
//! overwritten only when the new payload contains its key, so a stub that
//! appears in several parent responses converges toward completeness
//! instead of regressing.

mod merge;
mod models;
mod types;


pub use models::{
    Character, CharacterExtendedInfo, Company, CompanyExtendedInfo, Franchise,
    FranchiseExtendedInfo, Game, GameExtendedInfo, Location, LocationExtendedInfo, Person,
    PersonExtendedInfo, ResourceCore,
};
pub use types::{ExtendedInfo, Image, Resource, ResourceKind};
