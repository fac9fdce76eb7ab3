//! PokéAPI fixtures.

use serde_json::{json, Value};

/// Path of the species record for `name`.
pub fn pokemon_path(name: &str) -> String {
    format!("/pokemon/{}", name)
}

/// Creates a species record as returned by `GET /pokemon/{name}`.
pub fn pokemon(name: &str, height: u64, weight: u64) -> Value {
    json!({
        "id": 25,
        "name": name,
        "base_experience": 112,
        "height": height,
        "weight": weight,
        "is_default": true,
        "order": 35,
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "sprites": { "front_default": null }
    })
}
