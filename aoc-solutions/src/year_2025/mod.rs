//! Advent of Code 2025

pub mod day_01 {
    pub mod solution;
}

pub mod day_03 {
    pub mod solution;
}

pub mod day_04 {
    pub mod solution;
}

pub mod day_05 {
    pub mod solution;
}
