use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

/// Query filter for `GET /heroes/`. Name matching is a case-insensitive
/// substring test.
#[derive(Deserialize, Default)]
pub struct HeroFilter {
    pub id: Option<u64>,
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<HashMap<u64, Hero>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// The roster the standalone server starts with.
pub fn default_heroes() -> Vec<Hero> {
    [
        (11, "Mr. Nice"),
        (12, "Narco"),
        (13, "Bombasto"),
        (14, "Celeritas"),
        (15, "Magneta"),
        (16, "RubberMan"),
        (17, "Dynama"),
        (18, "Dr. IQ"),
        (19, "Magma"),
        (20, "Tornado"),
    ]
    .into_iter()
    .map(|(id, name)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Build the router over a pre-seeded store.
pub fn app_with(initial: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        initial.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route("/heroes", get(list_heroes).post(add_hero).put(update_hero))
        .route("/heroes/", get(filter_heroes))
        .route("/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// One past the highest assigned id; an empty store starts at 11.
fn next_id(heroes: &HashMap<u64, Hero>) -> u64 {
    heroes.keys().max().map_or(11, |max| max + 1)
}

fn by_id(heroes: impl Iterator<Item = Hero>) -> Vec<Hero> {
    let mut heroes: Vec<Hero> = heroes.collect();
    heroes.sort_by_key(|hero| hero.id);
    heroes
}

async fn list_heroes(State(db): State<Db>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    Json(by_id(heroes.values().cloned()))
}

async fn filter_heroes(
    State(db): State<Db>,
    Query(filter): Query<HeroFilter>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let term = filter.name.as_deref().map(str::to_lowercase);
    let matches = heroes
        .values()
        .filter(|hero| filter.id.map_or(true, |id| hero.id == id))
        .filter(|hero| {
            term.as_deref()
                .map_or(true, |term| hero.name.to_lowercase().contains(term))
        })
        .cloned();
    Json(by_id(matches))
}

async fn add_hero(State(db): State<Db>, Json(input): Json<NewHero>) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let hero = Hero {
        id: next_id(&heroes),
        name: input.name,
    };
    heroes.insert(hero.id, hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let hero = heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    Ok(Json(hero.clone()))
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, StatusCode> {
    let mut heroes = db.write().await;
    heroes
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
