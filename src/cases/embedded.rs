//! Embedded case tables

use super::{CandyCase, CookieCase};

/// Candy distribution battery
pub const CANDY_CASES: &[CandyCase] = &[
    CandyCase {
        description: "Dip in the middle",
        ratings: &[1, 0, 2],
        expected: 5,
    },
    CandyCase {
        description: "Equal ratings at the end",
        ratings: &[1, 2, 2],
        expected: 4,
    },
    CandyCase {
        description: "Empty list",
        ratings: &[],
        expected: 0,
    },
    CandyCase {
        description: "Single child",
        ratings: &[1],
        expected: 1,
    },
    CandyCase {
        description: "Strictly increasing",
        ratings: &[1, 2, 3, 4, 5],
        expected: 15,
    },
    CandyCase {
        description: "Strictly decreasing",
        ratings: &[5, 4, 3, 2, 1],
        expected: 15,
    },
    CandyCase {
        description: "Climb then drop",
        ratings: &[1, 3, 4, 5, 2],
        expected: 11,
    },
    CandyCase {
        description: "Plateaus and valleys",
        ratings: &[1, 3, 2, 2, 1],
        expected: 7,
    },
    CandyCase {
        description: "Two children, decreasing",
        ratings: &[2, 1],
        expected: 3,
    },
    CandyCase {
        description: "Two children, increasing",
        ratings: &[1, 2],
        expected: 3,
    },
    CandyCase {
        description: "All equal ratings",
        ratings: &[1, 1, 1],
        expected: 3,
    },
    CandyCase {
        description: "Peak with plateau",
        ratings: &[1, 2, 87, 87, 87, 2, 1],
        expected: 13,
    },
    CandyCase {
        description: "Mountain shape",
        ratings: &[1, 2, 3, 1, 0],
        expected: 9,
    },
];

/// Cookie assignment battery
pub const COOKIE_CASES: &[CookieCase] = &[
    CookieCase {
        description: "Too few cookies",
        greed: &[1, 2, 3],
        supply: &[1, 1],
        expected: 1,
    },
    CookieCase {
        description: "Every child fed",
        greed: &[1, 2],
        supply: &[1, 2, 3],
        expected: 2,
    },
    CookieCase {
        description: "Empty cookies",
        greed: &[1, 2, 3],
        supply: &[],
        expected: 0,
    },
    CookieCase {
        description: "Empty children",
        greed: &[],
        supply: &[1, 2, 3],
        expected: 0,
    },
    CookieCase {
        description: "No matches",
        greed: &[10, 20, 30],
        supply: &[1, 2, 3],
        expected: 0,
    },
    CookieCase {
        description: "Exact matches",
        greed: &[1, 2, 3],
        supply: &[1, 2, 3],
        expected: 3,
    },
    CookieCase {
        description: "More cookies than children",
        greed: &[1, 2],
        supply: &[1, 2, 3, 4, 5],
        expected: 2,
    },
    CookieCase {
        description: "Reverse order input",
        greed: &[3, 2, 1],
        supply: &[3, 2, 1],
        expected: 3,
    },
];
