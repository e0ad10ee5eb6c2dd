use crate::model::{Player, PlayerId};

/// Display name for an id, falling back to the id itself.
#[must_use]
pub fn player_name<'a>(players: &'a [Player], id: &'a PlayerId) -> &'a str {
    players
        .iter()
        .find(|p| &p.id == id)
        .map_or(id.as_str(), |p| p.name.as_str())
}

#[must_use]
pub fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

#[must_use]
pub fn block_label(block: u8) -> String {
    let last = block * 3;
    format!("{}-{}", last - 2, last)
}
