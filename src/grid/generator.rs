use crate::error::Error;
use crate::grid::{Alphabet, Grid};
use rand::Rng;

/// Fills grids with characters sampled independently and uniformly from an
/// alphabet. Each cell is drawn on its own; nothing guarantees any
/// particular word ends up in the result.
#[derive(Debug, Clone, Default)]
pub struct GridGenerator {
    alphabet: Alphabet,
}

impl GridGenerator {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Generate a `rows` x `columns` grid using the thread-local RNG.
    pub fn generate(&self, rows: usize, columns: usize) -> Result<Grid, Error> {
        self.generate_with(&mut rand::thread_rng(), rows, columns)
    }

    /// Generate with a caller-supplied RNG, e.g. a seeded `StdRng` for
    /// reproducible grids.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rows: usize,
        columns: usize,
    ) -> Result<Grid, Error> {
        if rows < 1 || columns < 1 {
            return Err(Error::InvalidDimension { rows, columns });
        }

        let cells = (0..rows * columns)
            .map(|_| self.alphabet.pick(rng))
            .collect();

        Ok(Grid::new(rows, columns, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_dimensions() {
        let generator = GridGenerator::new(Alphabet::default());
        let grid = generator.generate(4, 7).unwrap();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 7);
        assert_eq!(grid.iter_rows().count(), 4);
        assert!(grid.iter_rows().all(|row| row.len() == 7));
    }

    #[test]
    fn test_cells_drawn_from_alphabet() {
        let alphabet: Alphabet = "QW".parse().unwrap();
        let generator = GridGenerator::new(alphabet.clone());
        let grid = generator.generate(5, 5).unwrap();

        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                assert!(alphabet.contains(grid.get(row, col).unwrap()));
            }
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        let generator = GridGenerator::new(Alphabet::default());
        assert_eq!(
            generator.generate(0, 5).unwrap_err(),
            Error::InvalidDimension { rows: 0, columns: 5 }
        );
        assert_eq!(
            generator.generate(3, 0).unwrap_err(),
            Error::InvalidDimension { rows: 3, columns: 0 }
        );
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = GridGenerator::new(Alphabet::default());

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = generator.generate_with(&mut first_rng, 6, 6).unwrap();
        let second = generator.generate_with(&mut second_rng, 6, 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_letter_alphabet_fills_grid() {
        let generator = GridGenerator::new("A".parse().unwrap());
        let grid = generator.generate(3, 3).unwrap();
        assert!(grid.iter_rows().flatten().all(|&c| c == 'A'));
    }
}
