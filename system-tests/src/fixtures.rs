// system-tests/src/fixtures.rs
// ============================================================================
// Module: Reqres Fixtures
// Description: Reference dataset served by the reqres demo service.
// Purpose: Let the offline stub answer with the same shapes and values.
// Dependencies: reqres-checks
// ============================================================================

//! ## Overview
//! The demo service serves a fixed catalogue of twelve colors and a fixed set
//! of users; only those users can register. These tables mirror that data.

use reqres_checks::models::ColorResource;

/// Page size of the color listing.
pub const COLORS_PER_PAGE: usize = 6;

/// Token issued to every successful registration.
pub const REGISTRATION_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// `(id, name, year, color, pantone_value)` for each catalogue color.
const COLOR_TABLE: [(i64, &str, i64, &str, &str); 12] = [
    (1, "cerulean", 2000, "#98B2D1", "15-4020"),
    (2, "fuchsia rose", 2001, "#C74375", "17-2031"),
    (3, "true red", 2002, "#BF1932", "19-1664"),
    (4, "aqua sky", 2003, "#7BC4C4", "14-4811"),
    (5, "tigerlily", 2004, "#E2583E", "17-1456"),
    (6, "blue turquoise", 2005, "#53B0AE", "15-5217"),
    (7, "sand dollar", 2006, "#DECDBE", "13-1106"),
    (8, "chili pepper", 2007, "#9B1B30", "19-1557"),
    (9, "blue iris", 2008, "#5A5B9F", "18-3943"),
    (10, "mimosa", 2009, "#F0C05A", "14-0848"),
    (11, "turquoise", 2010, "#45B5AA", "15-5519"),
    (12, "honeysuckle", 2011, "#D94F70", "18-2120"),
];

/// `(id, email)` for each user allowed to register.
const USER_TABLE: [(i64, &str); 6] = [
    (1, "george.bluth@reqres.in"),
    (2, "janet.weaver@reqres.in"),
    (3, "emma.wong@reqres.in"),
    (4, "eve.holt@reqres.in"),
    (5, "charles.morris@reqres.in"),
    (6, "tracey.ramos@reqres.in"),
];

/// Returns the full color catalogue in id order.
#[must_use]
pub fn colors() -> Vec<ColorResource> {
    COLOR_TABLE
        .iter()
        .map(|&(id, name, year, color, pantone_value)| ColorResource {
            id,
            name: name.to_string(),
            year,
            color: color.to_string(),
            pantone_value: pantone_value.to_string(),
        })
        .collect()
}

/// Returns one catalogue color by id.
#[must_use]
pub fn color(id: i64) -> Option<ColorResource> {
    colors().into_iter().find(|color| color.id == id)
}

/// Returns the user id registered under `email`, if the user is defined.
#[must_use]
pub fn registered_user_id(email: &str) -> Option<i64> {
    USER_TABLE.iter().find(|(_, known)| *known == email).map(|(id, _)| *id)
}
