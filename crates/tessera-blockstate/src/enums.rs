// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The constant sets block state properties draw their values from.
//!
//! Every set is declared through [`tessera_codec::tessera_enum!`], so each
//! one serializes by its wire name via `enum_of`.

use tessera_codec::tessera_enum;

tessera_enum! {
    /// A face of the block cube.
    pub enum Direction {
        North => "NORTH",
        South => "SOUTH",
        East => "EAST",
        West => "WEST",
        Up => "UP",
        Down => "DOWN",
    }
}

impl Direction {
    /// The four horizontal faces, the usual domain for placed furniture.
    pub const HORIZONTAL: &'static [Direction] = &[
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

tessera_enum! {
    /// A rotation axis.
    pub enum Axis {
        X => "X",
        Y => "Y",
        Z => "Z",
    }
}

tessera_enum! {
    /// Which vertical half of a two-block-tall structure a state is.
    pub enum Half {
        Top => "TOP",
        Bottom => "BOTTOM",
    }
}

tessera_enum! {
    /// The surface a face-mounted block is attached to.
    pub enum AttachFace {
        Floor => "FLOOR",
        Wall => "WALL",
        Ceiling => "CEILING",
    }
}

tessera_enum! {
    /// The track shape of a rail.
    pub enum RailShape {
        NorthSouth => "NORTH_SOUTH",
        EastWest => "EAST_WEST",
        AscendingNorth => "ASCENDING_NORTH",
        AscendingSouth => "ASCENDING_SOUTH",
        AscendingEast => "ASCENDING_EAST",
        AscendingWest => "ASCENDING_WEST",
        NorthEast => "NORTH_EAST",
        NorthWest => "NORTH_WEST",
        SouthEast => "SOUTH_EAST",
        SouthWest => "SOUTH_WEST",
    }
}

impl RailShape {
    /// The shapes a straight-only rail (powered, detector) may take.
    pub const STRAIGHT: &'static [RailShape] = &[
        RailShape::NorthSouth,
        RailShape::EastWest,
        RailShape::AscendingNorth,
        RailShape::AscendingSouth,
        RailShape::AscendingEast,
        RailShape::AscendingWest,
    ];
}

tessera_enum! {
    /// The occupancy of a slab within its block space.
    pub enum SlabKind {
        Top => "TOP",
        Bottom => "BOTTOM",
        Double => "DOUBLE",
    }
}

tessera_enum! {
    /// The corner shape of a stair.
    pub enum StairShape {
        Straight => "STRAIGHT",
        InnerLeft => "INNER_LEFT",
        InnerRight => "INNER_RIGHT",
        OuterLeft => "OUTER_LEFT",
        OuterRight => "OUTER_RIGHT",
    }
}

tessera_enum! {
    /// Which side a door's hinge is on.
    pub enum Hinge {
        Left => "LEFT",
        Right => "RIGHT",
    }
}

tessera_enum! {
    /// Which end of a bed a state is.
    pub enum BedHalf {
        Head => "HEAD",
        Foot => "FOOT",
    }
}

tessera_enum! {
    /// How a chest joins with a neighbor.
    pub enum ChestSide {
        Single => "SINGLE",
        Left => "LEFT",
        Right => "RIGHT",
    }
}

tessera_enum! {
    /// The operating mode of a comparator.
    pub enum ComparatorMode {
        Compare => "COMPARE",
        Subtract => "SUBTRACT",
    }
}
