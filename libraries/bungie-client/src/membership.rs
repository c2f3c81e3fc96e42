//! Platform membership types.

/// Label used for any membership type outside the known table.
pub const UNKNOWN_MEMBERSHIP_LABEL: &str = "Unknown";

/// Human-readable label for a `BungieMembershipType` code.
pub fn membership_type_label(membership_type: i32) -> &'static str {
    match membership_type {
        1 => "Xbox",
        2 => "PSN",
        3 => "Steam",
        4 => "Blizzard",
        5 => "Stadia",
        6 => "Epic Games",
        254 => "Bungie",
        _ => UNKNOWN_MEMBERSHIP_LABEL,
    }
}
