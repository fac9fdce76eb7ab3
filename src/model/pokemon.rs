use serde::Deserialize;

/// Species record returned by the PokéAPI `pokemon` endpoint.
///
/// Only the fields the bot renders are decoded; a response missing any of them
/// is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Species {
    pub name: String,
    /// Height in decimetres.
    pub height: u64,
    /// Weight in hectograms.
    pub weight: u64,
}

impl Species {
    /// Name with the first letter upper-cased and the rest lower-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}
