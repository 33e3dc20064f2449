//! Concrete resource models and their extended info types
//!
//! All models share [`ResourceCore`] for the fields every wiki entity
//! carries, and add their own type-specific fields on top. Every field is
//! optional: a stub built from a nested fragment has only whatever that
//! fragment contained.

use super::merge::{
    merge_date, merge_datetime, merge_image, merge_string, merge_stub, merge_stub_list, merge_u64,
};
use super::types::{ExtendedInfo, Image, Resource, ResourceKind};
use crate::types::JsonObject;
use chrono::{NaiveDate, NaiveDateTime};

// ============================================================================
// Shared core
// ============================================================================

/// Fields common to every resource type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceCore {
    /// Unique id; absent on some stubs
    pub id: Option<u64>,
    /// Human-readable name
    pub name: Option<String>,
    /// Short summary
    pub deck: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// When the wiki entry was created
    pub date_added: Option<NaiveDateTime>,
    /// When the wiki entry was last edited
    pub date_last_updated: Option<NaiveDateTime>,
    /// Image reference
    pub image: Option<Image>,
    /// API URL of the detail endpoint for this resource
    pub api_detail_url: Option<String>,
    /// Human-facing site URL
    pub site_detail_url: Option<String>,
}

impl ResourceCore {
    fn update(&mut self, json: &JsonObject) {
        merge_u64(&mut self.id, json, "id");
        merge_string(&mut self.name, json, "name");
        merge_string(&mut self.deck, json, "deck");
        merge_string(&mut self.description, json, "description");
        merge_datetime(&mut self.date_added, json, "date_added");
        merge_datetime(&mut self.date_last_updated, json, "date_last_updated");
        merge_image(&mut self.image, json, "image");
        merge_string(&mut self.api_detail_url, json, "api_detail_url");
        merge_string(&mut self.site_detail_url, json, "site_detail_url");
    }
}

/// Implements the boilerplate part of [`Resource`] for a model with a
/// `core` field and an `extended_info` field.
macro_rules! impl_resource {
    ($model:ty, $info:ty, $kind:expr) => {
        impl Resource for $model {
            type ExtendedInfo = $info;

            const KIND: ResourceKind = $kind;

            fn from_json(json: &JsonObject) -> Self {
                let mut resource = Self::default();
                resource.update(json);
                resource
            }

            fn update(&mut self, json: &JsonObject) {
                self.core.update(json);
                self.update_own_fields(json);
            }

            fn id(&self) -> Option<u64> {
                self.core.id
            }

            fn extended_info_mut(&mut self) -> &mut Option<Self::ExtendedInfo> {
                &mut self.extended_info
            }
        }
    };
}

/// Same boilerplate for extended-info side-cars.
macro_rules! impl_extended_info {
    ($info:ty) => {
        impl ExtendedInfo for $info {
            fn from_json(json: &JsonObject) -> Self {
                let mut info = Self::default();
                info.update(json);
                info
            }

            fn update(&mut self, json: &JsonObject) {
                self.update_own_fields(json);
            }
        }
    };
}

// ============================================================================
// Character
// ============================================================================

/// A character from the wiki
#[derive(Debug, Clone, Default)]
pub struct Character {
    /// Fields shared by every resource type
    pub core: ResourceCore,
    /// Known aliases, newline-separated as the server sends them
    pub aliases: Option<String>,
    /// Real name, when different from the wiki name
    pub real_name: Option<String>,
    /// Birthday
    pub birthday: Option<NaiveDate>,
    /// Gender code as reported by the server
    pub gender: Option<u64>,
    /// Stub of the game this character first appeared in
    pub first_appeared_in_game: Option<Box<Game>>,
    /// Relationship data, populated by hydration
    pub extended_info: Option<CharacterExtendedInfo>,
}

impl Character {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_string(&mut self.aliases, json, "aliases");
        merge_string(&mut self.real_name, json, "real_name");
        merge_date(&mut self.birthday, json, "birthday");
        merge_u64(&mut self.gender, json, "gender");
        merge_stub(&mut self.first_appeared_in_game, json, "first_appeared_in_game");
    }
}

/// Relationships of a [`Character`]
#[derive(Debug, Clone, Default)]
pub struct CharacterExtendedInfo {
    pub friends: Vec<Character>,
    pub enemies: Vec<Character>,
    pub games: Vec<Game>,
    pub franchises: Vec<Franchise>,
    pub locations: Vec<Location>,
}

impl CharacterExtendedInfo {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_stub_list(&mut self.friends, json, "friends");
        merge_stub_list(&mut self.enemies, json, "enemies");
        merge_stub_list(&mut self.games, json, "games");
        merge_stub_list(&mut self.franchises, json, "franchises");
        merge_stub_list(&mut self.locations, json, "locations");
    }
}

impl_resource!(Character, CharacterExtendedInfo, ResourceKind::Character);
impl_extended_info!(CharacterExtendedInfo);

// ============================================================================
// Game
// ============================================================================

/// A game from the wiki
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// Fields shared by every resource type
    pub core: ResourceCore,
    /// Known aliases, newline-separated
    pub aliases: Option<String>,
    /// Original release date
    pub original_release_date: Option<NaiveDateTime>,
    /// Relationship data, populated by hydration
    pub extended_info: Option<GameExtendedInfo>,
}

impl Game {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_string(&mut self.aliases, json, "aliases");
        merge_datetime(&mut self.original_release_date, json, "original_release_date");
    }
}

/// Relationships of a [`Game`]
#[derive(Debug, Clone, Default)]
pub struct GameExtendedInfo {
    pub characters: Vec<Character>,
    pub developers: Vec<Company>,
    pub publishers: Vec<Company>,
    pub franchises: Vec<Franchise>,
    pub locations: Vec<Location>,
    pub people: Vec<Person>,
}

impl GameExtendedInfo {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_stub_list(&mut self.characters, json, "characters");
        merge_stub_list(&mut self.developers, json, "developers");
        merge_stub_list(&mut self.publishers, json, "publishers");
        merge_stub_list(&mut self.franchises, json, "franchises");
        merge_stub_list(&mut self.locations, json, "locations");
        merge_stub_list(&mut self.people, json, "people");
    }
}

impl_resource!(Game, GameExtendedInfo, ResourceKind::Game);
impl_extended_info!(GameExtendedInfo);

// ============================================================================
// Company
// ============================================================================

/// A development or publishing company
#[derive(Debug, Clone, Default)]
pub struct Company {
    /// Fields shared by every resource type
    pub core: ResourceCore,
    /// Abbreviated name
    pub abbreviation: Option<String>,
    /// Founding date
    pub date_founded: Option<NaiveDateTime>,
    /// Relationship data, populated by hydration
    pub extended_info: Option<CompanyExtendedInfo>,
}

impl Company {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_string(&mut self.abbreviation, json, "abbreviation");
        merge_datetime(&mut self.date_founded, json, "date_founded");
    }
}

/// Relationships of a [`Company`]
#[derive(Debug, Clone, Default)]
pub struct CompanyExtendedInfo {
    pub developed_games: Vec<Game>,
    pub published_games: Vec<Game>,
    pub characters: Vec<Character>,
    pub locations: Vec<Location>,
    pub people: Vec<Person>,
}

impl CompanyExtendedInfo {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_stub_list(&mut self.developed_games, json, "developed_games");
        merge_stub_list(&mut self.published_games, json, "published_games");
        merge_stub_list(&mut self.characters, json, "characters");
        merge_stub_list(&mut self.locations, json, "locations");
        merge_stub_list(&mut self.people, json, "people");
    }
}

impl_resource!(Company, CompanyExtendedInfo, ResourceKind::Company);
impl_extended_info!(CompanyExtendedInfo);

// ============================================================================
// Franchise
// ============================================================================

/// A game franchise
#[derive(Debug, Clone, Default)]
pub struct Franchise {
    /// Fields shared by every resource type
    pub core: ResourceCore,
    /// Known aliases, newline-separated
    pub aliases: Option<String>,
    /// Relationship data, populated by hydration
    pub extended_info: Option<FranchiseExtendedInfo>,
}

impl Franchise {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_string(&mut self.aliases, json, "aliases");
    }
}

/// Relationships of a [`Franchise`]
#[derive(Debug, Clone, Default)]
pub struct FranchiseExtendedInfo {
    pub characters: Vec<Character>,
    pub games: Vec<Game>,
    pub locations: Vec<Location>,
    pub people: Vec<Person>,
}

impl FranchiseExtendedInfo {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_stub_list(&mut self.characters, json, "characters");
        merge_stub_list(&mut self.games, json, "games");
        merge_stub_list(&mut self.locations, json, "locations");
        merge_stub_list(&mut self.people, json, "people");
    }
}

impl_resource!(Franchise, FranchiseExtendedInfo, ResourceKind::Franchise);
impl_extended_info!(FranchiseExtendedInfo);

// ============================================================================
// Location
// ============================================================================

/// An in-game location
#[derive(Debug, Clone, Default)]
pub struct Location {
    /// Fields shared by every resource type
    pub core: ResourceCore,
    /// Known aliases, newline-separated
    pub aliases: Option<String>,
    /// Relationship data, populated by hydration
    pub extended_info: Option<LocationExtendedInfo>,
}

impl Location {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_string(&mut self.aliases, json, "aliases");
    }
}

/// Relationships of a [`Location`]
#[derive(Debug, Clone, Default)]
pub struct LocationExtendedInfo {
    pub games: Vec<Game>,
    pub franchises: Vec<Franchise>,
}

impl LocationExtendedInfo {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_stub_list(&mut self.games, json, "games");
        merge_stub_list(&mut self.franchises, json, "franchises");
    }
}

impl_resource!(Location, LocationExtendedInfo, ResourceKind::Location);
impl_extended_info!(LocationExtendedInfo);

// ============================================================================
// Person
// ============================================================================

/// A person involved in making games
#[derive(Debug, Clone, Default)]
pub struct Person {
    /// Fields shared by every resource type
    pub core: ResourceCore,
    /// Known aliases, newline-separated
    pub aliases: Option<String>,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Hometown
    pub hometown: Option<String>,
    /// Relationship data, populated by hydration
    pub extended_info: Option<PersonExtendedInfo>,
}

impl Person {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_string(&mut self.aliases, json, "aliases");
        merge_date(&mut self.birth_date, json, "birth_date");
        merge_string(&mut self.hometown, json, "hometown");
    }
}

/// Relationships of a [`Person`]
#[derive(Debug, Clone, Default)]
pub struct PersonExtendedInfo {
    pub games: Vec<Game>,
    pub characters: Vec<Character>,
    pub franchises: Vec<Franchise>,
}

impl PersonExtendedInfo {
    fn update_own_fields(&mut self, json: &JsonObject) {
        merge_stub_list(&mut self.games, json, "games");
        merge_stub_list(&mut self.characters, json, "characters");
        merge_stub_list(&mut self.franchises, json, "franchises");
    }
}

impl_resource!(Person, PersonExtendedInfo, ResourceKind::Person);
impl_extended_info!(PersonExtendedInfo);
