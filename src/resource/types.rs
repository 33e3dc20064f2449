//! Resource traits, kind tags, and the shared image reference

use super::merge::merge_string;
use crate::types::JsonObject;

/// Discriminates resource types at runtime.
///
/// The detail prefix is the numeric namespace the API uses in detail paths,
/// e.g. `character/3005-42`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Character,
    Company,
    Franchise,
    Game,
    Location,
    Person,
}

impl ResourceKind {
    /// Path of the paginated collection endpoint
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Character => "characters",
            Self::Company => "companies",
            Self::Franchise => "franchises",
            Self::Game => "games",
            Self::Location => "locations",
            Self::Person => "people",
        }
    }

    /// Path segment of the single-resource detail endpoint
    pub fn detail_path(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Company => "company",
            Self::Franchise => "franchise",
            Self::Game => "game",
            Self::Location => "location",
            Self::Person => "person",
        }
    }

    /// Numeric namespace used in detail paths
    pub fn detail_prefix(self) -> u32 {
        match self {
            Self::Character => 3005,
            Self::Company => 3010,
            Self::Franchise => 3025,
            Self::Game => 3030,
            Self::Location => 3035,
            Self::Person => 3040,
        }
    }

    /// Parse the `resource_type` tag carried in payloads
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "character" => Some(Self::Character),
            "company" => Some(Self::Company),
            "franchise" => Some(Self::Franchise),
            "game" => Some(Self::Game),
            "location" => Some(Self::Location),
            "person" => Some(Self::Person),
            _ => None,
        }
    }

    /// Detail path for a concrete resource id, e.g. `character/3005-42`
    pub fn detail_path_for(self, id: u64) -> String {
        format!("{}/{}-{}", self.detail_path(), self.detail_prefix(), id)
    }
}

/// A typed wiki entity that can be built from partial JSON and enriched in
/// place by later payloads.
pub trait Resource: Send + Sized {
    /// Relationship side-car populated by hydration
    type ExtendedInfo: ExtendedInfo;

    /// The kind tag for this resource type
    const KIND: ResourceKind;

    /// Construct from a payload; a nested fragment yields a stub carrying
    /// only the fields that fragment had
    fn from_json(json: &JsonObject) -> Self;

    /// Merge a payload into this resource. Keys absent from `json` keep
    /// their current values.
    fn update(&mut self, json: &JsonObject);

    /// Unique id, absent on some stubs
    fn id(&self) -> Option<u64>;

    /// Mutable access to the lazily-populated extended info
    fn extended_info_mut(&mut self) -> &mut Option<Self::ExtendedInfo>;
}

/// Relationship data fetched alongside a resource's detail payload.
///
/// Follows the same merge rule as [`Resource::update`].
pub trait ExtendedInfo: Send + Sized {
    /// Construct from a detail payload
    fn from_json(json: &JsonObject) -> Self;

    /// Merge a detail payload into this value
    fn update(&mut self, json: &JsonObject);
}

/// Image reference attached to most resources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub icon_url: Option<String>,
    pub small_url: Option<String>,
    pub medium_url: Option<String>,
    pub screen_url: Option<String>,
    pub super_url: Option<String>,
    pub thumb_url: Option<String>,
    pub tiny_url: Option<String>,
}

impl Image {
    /// Build an image from a payload fragment
    pub fn from_json(json: &JsonObject) -> Self {
        let mut image = Self::default();
        image.update(json);
        image
    }

    /// Merge a payload fragment into this image
    pub fn update(&mut self, json: &JsonObject) {
        merge_string(&mut self.icon_url, json, "icon_url");
        merge_string(&mut self.small_url, json, "small_url");
        merge_string(&mut self.medium_url, json, "medium_url");
        merge_string(&mut self.screen_url, json, "screen_url");
        merge_string(&mut self.super_url, json, "super_url");
        merge_string(&mut self.thumb_url, json, "thumb_url");
        merge_string(&mut self.tiny_url, json, "tiny_url");
    }
}
