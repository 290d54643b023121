#[cfg(test)]
mod tests {
    use super::super::{next_state, step, Grid, GridBuffer, Ticker};
    use crate::{SeedRegion, Seeding};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const SEED: u64 = 42;

    /// Every cell, border included, filled at random.
    fn random_grid(side: usize, seed: u64, fill_rate: f64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::blank(side);
        for y in 0..side {
            for x in 0..side {
                grid.set(x, y, rng.gen_bool(fill_rate));
            }
        }
        grid
    }

    /// 3x3 grid whose centre has exactly `k` live neighbours.
    fn neighbourhood(centre: bool, k: usize) -> Grid {
        let mut grid = Grid::blank(3);
        let ring = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
        for &(x, y) in &ring[..k] {
            grid.set(x, y, true);
        }
        grid.set(1, 1, centre);
        grid
    }

    #[test]
    fn test_rule_table() {
        for k in 0..=8 {
            for alive in [false, true] {
                let expected = match k {
                    2 => alive,
                    3 => true,
                    _ => false,
                };
                assert_eq!(next_state(alive, k), expected, "alive={alive}, k={k}");

                let mut buffer = GridBuffer::from_grid(neighbourhood(alive, k));
                assert_eq!(buffer.front().live_neighbours(1, 1), k);
                step(&mut buffer);
                assert_eq!(buffer.front().get(1, 1), expected, "alive={alive}, k={k}");
            }
        }
    }

    #[test]
    fn test_swap_involution() {
        let mut buffer = GridBuffer::from_grid(random_grid(16, SEED, 0.5));
        let front = buffer.front().clone();
        let back = buffer.back().clone();
        assert!(!std::ptr::eq(buffer.front(), buffer.back()));

        buffer.swap();
        assert_eq!(buffer.front(), &back);
        assert_eq!(buffer.back(), &front);
        assert!(!std::ptr::eq(buffer.front(), buffer.back()));

        buffer.swap();
        assert_eq!(buffer.front(), &front);
        assert_eq!(buffer.back(), &back);
    }

    #[test]
    fn test_front_and_back_follow_roles() {
        let mut buffer = GridBuffer::blank(5);
        buffer.back_mut().set(2, 2, true);
        {
            let (front, back) = buffer.front_and_back_mut();
            assert!(!front.get(2, 2));
            assert!(back.get(2, 2));
        }
        buffer.swap();
        let (front, back) = buffer.front_and_back_mut();
        assert!(front.get(2, 2));
        assert!(!back.get(2, 2));
    }

    #[test]
    fn test_determinism() {
        let grid = random_grid(64, SEED, 0.4);
        let mut results = (0..3).map(|_| {
            let mut buffer = GridBuffer::from_grid(grid.clone());
            step(&mut buffer);
            buffer.front().clone()
        });
        let first = results.next().unwrap();
        assert!(results.all(|g| g == first));
    }

    #[test]
    fn test_border_never_written() {
        for seed in 0..8 {
            let mut buffer = GridBuffer::from_grid(random_grid(32, seed, 0.5));
            let scratch = random_grid(32, seed + 100, 0.5);
            *buffer.back_mut() = scratch.clone();

            step(&mut buffer);
            for (x, y) in scratch.border() {
                assert_eq!(buffer.front().get(x, y), scratch.get(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_step_reads_only_front() {
        // whatever sits in the back grid must not leak into the result
        let grid = random_grid(24, SEED, 0.3);

        let mut clean = GridBuffer::from_grid(grid.clone());
        step(&mut clean);

        let mut dirty = GridBuffer::from_grid(grid);
        *dirty.back_mut() = random_grid(24, SEED + 1, 0.7);
        step(&mut dirty);

        for y in 1..23 {
            for x in 1..23 {
                assert_eq!(clean.front().get(x, y), dirty.front().get(x, y));
            }
        }
    }

    #[test]
    fn test_step_swaps_once() {
        let mut buffer = GridBuffer::from_grid(Grid::from_rows(&[
            ".....", //
            ".....",
            ".###.",
            ".....",
            ".....",
        ]));
        let before = buffer.front().clone();
        step(&mut buffer);
        assert_eq!(buffer.back(), &before);
    }

    #[test]
    fn test_ticker_period_three() {
        let mut ticker = Ticker::new(3);
        let fired = (0..6).map(|_| ticker.tick()).collect::<Vec<_>>();
        assert_eq!(fired, [false, false, true, false, false, true]);
        assert_eq!(ticker.ticks(), 6);
        assert_eq!(ticker.period(), 3);
    }

    #[test]
    fn test_ticker_periodicity() {
        for period in 1..=7 {
            let mut ticker = Ticker::new(period);
            for call in 1..=50 {
                assert_eq!(ticker.tick(), call % period == 0, "period={period}, call={call}");
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_ticker_zero_period() {
        Ticker::new(0);
    }

    #[test]
    fn test_seed_interior() {
        let seeding = Seeding {
            fill_ratio: 0.25,
            region: SeedRegion::Interior,
            seed: None,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let buffer = GridBuffer::random(40, &seeding, &mut rng);

        let population = buffer.front().population();
        assert!(population > 0);
        assert!(population <= seeding.target_count(40));
        assert!(buffer.front().border().all(|(x, y)| !buffer.front().get(x, y)));
        assert_eq!(buffer.back().population(), 0);
    }

    #[test]
    fn test_seed_top_left_skips_bottom_and_right() {
        let seeding = Seeding {
            fill_ratio: 0.5,
            region: SeedRegion::TopLeft,
            seed: None,
        };
        for seed in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let buffer = GridBuffer::random(10, &seeding, &mut rng);
            let front = buffer.front();

            assert!(front.population() <= 50);
            assert!((0..10).all(|i| !front.get(i, 9) && !front.get(9, i)));
            assert!((0..10).any(|i| front.get(i, 0) || front.get(0, i)));
        }
    }

    #[test]
    fn test_seeded_border_in_both_grids() {
        let seeding = Seeding {
            fill_ratio: 0.5,
            region: SeedRegion::TopLeft,
            seed: None,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(SEED);
        let mut buffer = GridBuffer::random(12, &seeding, &mut rng);
        let initial = buffer.front().clone();

        for _ in 0..5 {
            step(&mut buffer);
            for (x, y) in initial.border() {
                assert_eq!(buffer.front().get(x, y), initial.get(x, y), "({x}, {y})");
                assert_eq!(buffer.back().get(x, y), initial.get(x, y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_from_grid_copies_border_only() {
        let grid = random_grid(16, SEED, 0.5);
        let buffer = GridBuffer::from_grid(grid.clone());
        for y in 0..16 {
            for x in 0..16 {
                let on_border = x == 0 || y == 0 || x == 15 || y == 15;
                let expected = on_border && grid.get(x, y);
                assert_eq!(buffer.back().get(x, y), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible_and_clears() {
        let seeding = Seeding {
            fill_ratio: 0.5,
            region: SeedRegion::Interior,
            seed: None,
        };
        let a = GridBuffer::random(20, &seeding, &mut ChaCha8Rng::seed_from_u64(SEED));
        let mut b = GridBuffer::random(20, &seeding, &mut ChaCha8Rng::seed_from_u64(SEED));
        assert_eq!(a.front(), b.front());

        step(&mut b);
        b.seed(&seeding, &mut ChaCha8Rng::seed_from_u64(SEED));
        assert_eq!(b.back().population(), 0);
        assert_eq!(b.front(), a.front());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&["#..", ".#.", "..#"]);
        assert_eq!(grid.to_string(), "#..\n.#.\n..#\n");
        assert_eq!(grid.population(), 3);
    }
}
