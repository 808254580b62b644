//! Domain DTOs for the hero API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any schema drift between the two crates. The
//! backend owns id assignment, so the add payload (`NewHero`) carries no id.

use serde::{Deserialize, Serialize};

/// A single hero returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

/// Request payload for adding a hero. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

/// A hero designated either by bare id or by the full record.
///
/// Delete accepts both forms; the id is resolved at the call boundary so
/// both forms build the same request.
#[derive(Debug, Clone)]
pub enum HeroRef {
    Id(u64),
    Entity(Hero),
}

impl HeroRef {
    pub fn id(&self) -> u64 {
        match self {
            HeroRef::Id(id) => *id,
            HeroRef::Entity(hero) => hero.id,
        }
    }
}

impl From<u64> for HeroRef {
    fn from(id: u64) -> Self {
        HeroRef::Id(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        HeroRef::Entity(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        HeroRef::Entity(hero.clone())
    }
}
