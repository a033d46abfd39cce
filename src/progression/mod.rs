//! Pure progression arithmetic: level/stat derivation from experience
//! curves, skill levels, and removable-skill stat bonuses.
//!
//! Everything here operates on plain step sequences so the same code serves
//! both the regular level-up pattern and the level-limit override pattern.

pub mod love;

use crate::constants::removable_skill;

/// One step of a level-up (or level-limit) curve, ascending by level.
/// The terminal step carries `next_exp = 0` as a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStep {
    pub level: i32,
    pub next_exp: i64,
    pub smile_diff: i32,
    pub pure_diff: i32,
    pub cool_diff: i32,
    pub hp_diff: i32,
}

/// A template's stat maxima at its terminal level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub smile: i32,
    pub pure: i32,
    pub cool: i32,
    pub hp: i32,
}

/// Derived level state for a given accumulated experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStats {
    pub level: i32,
    pub smile: i32,
    pub pure: i32,
    pub cool: i32,
    pub hp: i32,
    pub next_exp: i64,
}

/// One step of a skill experience curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillStep {
    pub skill_level: i32,
    pub next_exp: i64,
}

/// Scans `steps` for the first entry whose threshold exceeds `exp`; that
/// step's level wins and stats are the base maxima minus the step's deltas.
/// Past the last threshold the unit sits at the terminal step: terminal
/// level, unmodified maxima, and no further exp requirement.
///
/// `steps` must be non-empty and sorted ascending by level.
#[must_use]
pub fn derive_level_stats(steps: &[LevelStep], base: BaseStats, exp: i64) -> LevelStats {
    let last = steps[steps.len() - 1];
    let mut result = LevelStats {
        level: last.level,
        smile: base.smile,
        pure: base.pure,
        cool: base.cool,
        hp: base.hp,
        next_exp: 0,
    };

    for step in steps {
        if step.next_exp > exp {
            result.level = step.level;
            result.smile = base.smile - step.smile_diff;
            result.pure = base.pure - step.pure_diff;
            result.cool = base.cool - step.cool_diff;
            result.hp = base.hp - step.hp_diff;
            result.next_exp = step.next_exp;
            break;
        }
    }

    result
}

/// Skill level and next threshold for accumulated skill exp. Units without
/// a skill report level 1 with nothing left to earn.
#[must_use]
pub fn derive_skill_stats(steps: Option<&[SkillStep]>, exp: i64) -> (i32, i64) {
    let Some(steps) = steps else {
        return (1, 0);
    };
    if steps.is_empty() {
        return (1, 0);
    }

    for step in steps {
        if step.next_exp > exp {
            return (step.skill_level, step.next_exp);
        }
    }

    let last = steps[steps.len() - 1];
    (last.skill_level, 0)
}

/// Stat bonus granted by an equipped removable skill. Only effect types
/// 1..=3 (smile/pure/cool) contribute; a fixed-value skill adds the raw
/// value, a percentage skill adds `ceil(stat * value / 100)`.
#[must_use]
pub fn derive_removable_skill_bonus(
    effect_type: i32,
    effect_value: f64,
    fixed_value: bool,
    stats: (i32, i32, i32),
) -> (i32, i32, i32) {
    let mut result = [0i32, 0, 0];

    if (removable_skill::EFFECT_SMILE..=removable_skill::EFFECT_COOL).contains(&effect_type) {
        let i = (effect_type - 1) as usize;
        let stat = [stats.0, stats.1, stats.2][i];
        result[i] = if fixed_value {
            effect_value.ceil() as i32
        } else {
            (f64::from(stat) * effect_value / 100.0).ceil() as i32
        };
    }

    (result[0], result[1], result[2])
}
