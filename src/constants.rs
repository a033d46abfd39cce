pub mod deck {

    pub const MIN_INDEX: i32 = 1;

    pub const MAX_INDEX: i32 = 18;

    pub const SLOT_COUNT: usize = 9;
}

pub mod love {

    /// Slot visit order for love distribution: center slot first, then the
    /// remaining slots left to right.
    pub const CALC_ORDER: [usize; 9] = [4, 0, 1, 2, 3, 5, 6, 7, 8];

    /// Per-pass love cap for the slot at the same position in `CALC_ORDER`.
    pub const CALC_WEIGHT: [i64; 9] = [5, 1, 1, 1, 1, 1, 1, 1, 1];
}

pub mod removable_skill {

    /// Effect types that grant a stat bonus (smile/pure/cool).
    pub const EFFECT_SMILE: i32 = 1;
    pub const EFFECT_PURE: i32 = 2;
    pub const EFFECT_COOL: i32 = 3;
}
