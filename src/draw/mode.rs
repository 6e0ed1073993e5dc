//! Game modes and labeled draws.

use rand::Rng;
use serde::Serialize;

use crate::roster::General;

use super::selector::{draw_partitioned, DrawError};

/// Generals dealt to each player in normal mode.
pub const GENERALS_PER_PLAYER: usize = 5;

/// Landlord mode always deals 5 + 3 + 3.
pub const LANDLORD_SIZES: [usize; 3] = [5, 3, 3];

/// How a draw is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Five generals per player.
    Normal { players: u8 },
    /// 斗地主: one landlord hand of five, two farmer hands of three.
    Landlord,
}

impl GameMode {
    pub fn group_sizes(&self) -> Vec<usize> {
        match self {
            GameMode::Normal { players } => vec![GENERALS_PER_PLAYER; *players as usize],
            GameMode::Landlord => LANDLORD_SIZES.to_vec(),
        }
    }

    pub fn group_labels(&self) -> Vec<String> {
        match self {
            GameMode::Normal { players } => {
                (1..=*players).map(|i| format!("玩家{}", i)).collect()
            }
            GameMode::Landlord => vec![
                "地主".to_string(),
                "农民A".to_string(),
                "农民B".to_string(),
            ],
        }
    }

    /// Total generals the mode needs.
    pub fn required(&self) -> usize {
        self.group_sizes().iter().sum()
    }

    /// User-facing mode summary.
    pub fn description(&self) -> String {
        match self {
            GameMode::Normal { players } => format!(
                "普通模式：抽取 5×{} = {} 名武将",
                players,
                GENERALS_PER_PLAYER * *players as usize
            ),
            GameMode::Landlord => {
                "斗地主模式：固定抽取 5（地主）+ 3（农民A）+ 3（农民B）= 11 名武将".to_string()
            }
        }
    }
}

/// One labeled slice of a draw.
#[derive(Debug, Clone, Serialize)]
pub struct DrawGroup {
    pub label: String,
    pub generals: Vec<General>,
}

/// Draws and labels groups for a mode in one step.
pub fn draw_for_mode(
    pool: &[General],
    mode: &GameMode,
    rng: &mut impl Rng,
) -> Result<Vec<DrawGroup>, DrawError> {
    let groups = draw_partitioned(pool, &mode.group_sizes(), rng)?;
    Ok(mode
        .group_labels()
        .into_iter()
        .zip(groups)
        .map(|(label, generals)| DrawGroup { label, generals })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Faction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dummy_pool(n: usize) -> Vec<General> {
        (0..n)
            .map(|i| General::new(&format!("将{}", i), Faction::Qun, 3, ""))
            .collect()
    }

    #[test]
    fn normal_mode_sizes_and_labels() {
        let mode = GameMode::Normal { players: 4 };
        assert_eq!(mode.group_sizes(), vec![5, 5, 5, 5]);
        assert_eq!(mode.required(), 20);
        assert_eq!(
            mode.group_labels(),
            vec!["玩家1", "玩家2", "玩家3", "玩家4"]
        );
    }

    #[test]
    fn landlord_mode_is_fixed() {
        let mode = GameMode::Landlord;
        assert_eq!(mode.group_sizes(), vec![5, 3, 3]);
        assert_eq!(mode.required(), 11);
        assert_eq!(mode.group_labels(), vec!["地主", "农民A", "农民B"]);
    }

    #[test]
    fn mode_descriptions() {
        assert_eq!(
            GameMode::Normal { players: 4 }.description(),
            "普通模式：抽取 5×4 = 20 名武将"
        );
        assert_eq!(
            GameMode::Landlord.description(),
            "斗地主模式：固定抽取 5（地主）+ 3（农民A）+ 3（农民B）= 11 名武将"
        );
    }

    #[test]
    fn draw_for_mode_pairs_labels_with_groups() {
        let pool = dummy_pool(11);
        let mut rng = StdRng::seed_from_u64(5);
        let groups = draw_for_mode(&pool, &GameMode::Landlord, &mut rng).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "地主");
        assert_eq!(groups[0].generals.len(), 5);
        assert_eq!(groups[1].label, "农民A");
        assert_eq!(groups[2].label, "农民B");
        assert_eq!(groups[2].generals.len(), 3);
    }

    #[test]
    fn draw_for_mode_propagates_pool_errors() {
        let pool = dummy_pool(10);
        let mut rng = StdRng::seed_from_u64(5);
        let err = draw_for_mode(&pool, &GameMode::Landlord, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::InsufficientPool {
                required: 11,
                available: 10,
            }
        );
    }
}
