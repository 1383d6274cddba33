use super::*;
use ndarray::Array2;
use rand::prelude::*;

/// Purely random placement, reproducible from a single `u64` seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Picks a fresh seed from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_layout(config, &mut rng)
    }
}

/// Places `config.mines` mines by drawing uniformly random cells and retrying
/// on duplicates, then derives adjacency counts.
///
/// Every combination of mine cells is equally likely. The number of draws has
/// no fixed upper bound as the board fills up, which is accepted: even the
/// fullest valid board finishes after a handful of draws per cell on average.
pub fn generate_layout<R: Rng>(config: GameConfig, rng: &mut R) -> Result<MineLayout> {
    config.validate()?;

    let total_cells = config.total_cells();
    let cols = CellCount::from(config.cols());
    let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
    let mut mines_placed: CellCount = 0;
    let mut draws: u64 = 0;

    while mines_placed < config.mines {
        let index = rng.random_range(0..total_cells);
        draws += 1;

        let coords = ((index / cols) as Coord, (index % cols) as Coord);
        let cell = &mut mine_mask[coords.to_nd_index()];
        if !*cell {
            *cell = true;
            mines_placed += 1;
        }
    }

    log::debug!(
        "Placed {} mines on a {}x{} board after {} draws",
        mines_placed,
        config.rows(),
        config.cols(),
        draws
    );
    MineLayout::from_mine_mask(mine_mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn places_exactly_the_requested_mines() {
        for seed in 0..32 {
            let layout = RandomLayoutGenerator::new(seed)
                .generate(GameConfig::REFERENCE)
                .unwrap();

            assert_eq!(layout.size(), (8, 8));
            assert_eq!(layout.mine_count(), 10);
            assert_eq!(layout.iter_mines().count(), 10);
        }
    }

    #[test]
    fn counts_match_neighboring_mines() {
        let layout = RandomLayoutGenerator::new(7)
            .generate(GameConfig::REFERENCE)
            .unwrap();

        for row in 0..8 {
            for col in 0..8 {
                let coords = (row, col);
                if layout.contains_mine(coords) {
                    continue;
                }
                let expected = layout
                    .iter_neighbors(coords)
                    .filter(|&pos| layout.contains_mine(pos))
                    .count();
                assert_eq!(usize::from(layout.adjacent_mine_count(coords)), expected);
            }
        }
    }

    #[test]
    fn zero_cells_never_touch_a_mine() {
        for seed in 0..16 {
            let layout = RandomLayoutGenerator::new(seed)
                .generate(GameConfig::REFERENCE)
                .unwrap();

            for row in 0..8 {
                for col in 0..8 {
                    if layout.value_at((row, col)) == CellValue::Count(0) {
                        assert!(
                            layout
                                .iter_neighbors((row, col))
                                .all(|pos| !layout.contains_mine(pos))
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = RandomLayoutGenerator::new(42).generate(GameConfig::REFERENCE);
        let b = RandomLayoutGenerator::new(42).generate(GameConfig::REFERENCE);

        assert_eq!(a, b);
    }

    #[test]
    fn injected_rng_drives_placement() {
        let config = GameConfig::new((3, 5), 4).unwrap();
        let mut first = SmallRng::seed_from_u64(3);
        let mut second = SmallRng::seed_from_u64(3);

        let a: Vec<_> = generate_layout(config, &mut first).unwrap().iter_mines().collect();
        let b: Vec<_> = generate_layout(config, &mut second).unwrap().iter_mines().collect();

        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn fills_all_but_one_cell() {
        let config = GameConfig::new((3, 3), 8).unwrap();
        let layout = generate_layout(config, &mut SmallRng::seed_from_u64(1)).unwrap();

        assert_eq!(layout.mine_count(), 8);
        assert_eq!(layout.safe_cell_count(), 1);
    }

    #[test]
    fn rejects_invalid_config() {
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(
            generate_layout(GameConfig::new_unchecked((4, 4), 16), &mut rng),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            generate_layout(GameConfig::new_unchecked((0, 4), 1), &mut rng),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn zero_mines_is_allowed() {
        let config = GameConfig::new((2, 3), 0).unwrap();
        let layout = generate_layout(config, &mut SmallRng::seed_from_u64(9)).unwrap();

        assert_eq!(layout.mine_count(), 0);
        assert_eq!(layout.value_at((1, 1)), CellValue::Count(0));
    }
}
