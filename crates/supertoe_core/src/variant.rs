//! Board variants and their winning-path tables.
//!
//! Path tables are built once on first use and shared by every state of
//! that variant.

use crate::{Address, VictoryPath};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Side length of the classic board.
pub const CLASSIC_SIZE: usize = 3;

/// Side length of the super board.
pub const SUPER_SIZE: usize = 4;

static CLASSIC_PATHS: LazyLock<Vec<VictoryPath>> = LazyLock::new(|| {
    let mut paths = rows(CLASSIC_SIZE);
    paths.extend(columns(CLASSIC_SIZE));
    paths.extend(diagonals(CLASSIC_SIZE));
    paths
});

static SUPER_PATHS: LazyLock<Vec<VictoryPath>> = LazyLock::new(|| {
    let mut paths = vec![corners(SUPER_SIZE)];
    paths.extend(blocks(SUPER_SIZE));
    paths.extend(rows(SUPER_SIZE));
    paths.extend(columns(SUPER_SIZE));
    paths.extend(diagonals(SUPER_SIZE));
    paths
});

/// The two supported games.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// 3x3 board: rows, columns and diagonals.
    #[default]
    Classic,
    /// 4x4 board: adds the four corners and every 2x2 block.
    Super,
}

impl Variant {
    /// Board side length.
    pub fn size(self) -> usize {
        match self {
            Variant::Classic => CLASSIC_SIZE,
            Variant::Super => SUPER_SIZE,
        }
    }

    /// Every winning path for this variant.
    pub fn victory_paths(self) -> &'static [VictoryPath] {
        match self {
            Variant::Classic => &CLASSIC_PATHS,
            Variant::Super => &SUPER_PATHS,
        }
    }

    /// Human-readable game name.
    pub fn title(self) -> &'static str {
        match self {
            Variant::Classic => "Classic Tic-Tac-Toe",
            Variant::Super => "Super Tic-Tac-Toe",
        }
    }
}

fn rows(size: usize) -> Vec<VictoryPath> {
    (0..size)
        .map(|row| VictoryPath::new((0..size).map(|col| Address::new(row, col))))
        .collect()
}

fn columns(size: usize) -> Vec<VictoryPath> {
    (0..size)
        .map(|col| VictoryPath::new((0..size).map(|row| Address::new(row, col))))
        .collect()
}

fn diagonals(size: usize) -> Vec<VictoryPath> {
    vec![
        VictoryPath::new((0..size).map(|i| Address::new(i, i))),
        VictoryPath::new((0..size).map(|i| Address::new(i, size - 1 - i))),
    ]
}

fn corners(size: usize) -> VictoryPath {
    let last = size - 1;
    VictoryPath::new([
        Address::new(0, 0),
        Address::new(0, last),
        Address::new(last, 0),
        Address::new(last, last),
    ])
}

/// Every contiguous 2x2 block.
fn blocks(size: usize) -> Vec<VictoryPath> {
    (0..size - 1)
        .flat_map(|row| (0..size - 1).map(move |col| (row, col)))
        .map(|(row, col)| {
            VictoryPath::new([
                Address::new(row, col),
                Address::new(row + 1, col),
                Address::new(row, col + 1),
                Address::new(row + 1, col + 1),
            ])
        })
        .collect()
}
