//! File I/O operations for Game of Life patterns

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern from a text file
/// Format: Each line represents a row, with '1' for alive cells and '0' for dead cells
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern_from_string(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a pattern from a string representation
pub fn parse_pattern_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Save a pattern to a text file
pub fn save_pattern_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = pattern_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a pattern to string representation
pub fn pattern_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height * (grid.width + 1));

    for y in 0..grid.height {
        for x in 0..grid.width {
            result.push(if grid.is_alive(x, y) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Create example pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Glider pattern
    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Blinker pattern
    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block pattern (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    // Beacon pattern (oscillator)
    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern_from_string() {
        let content = "010\n101\n010\n";
        let grid = parse_pattern_from_string(content).unwrap();

        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 3);

        assert_eq!(grid.living_count(), 4);
        assert!(grid.is_alive(1, 0));
        assert!(grid.is_alive(0, 1));
        assert!(grid.is_alive(2, 1));
        assert!(grid.is_alive(1, 2));
    }

    #[test]
    fn test_pattern_to_string() {
        let rows = vec![
            vec![false, true, false],
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        let string_repr = pattern_to_string(&grid);

        assert_eq!(string_repr, "010\n101\n010\n");
    }

    #[test]
    fn test_round_trip() {
        let original_content = "010\n101\n010\n";
        let grid = parse_pattern_from_string(original_content).unwrap();
        let regenerated_content = pattern_to_string(&grid);

        assert_eq!(original_content, regenerated_content);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test_pattern.txt");

        let rows = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let original_grid = Grid::from_rows(rows).unwrap();

        save_pattern_to_file(&original_grid, &file_path).unwrap();
        let loaded_grid = load_pattern_from_file(&file_path).unwrap();

        assert_eq!(original_grid, loaded_grid);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        let invalid_content = "010\n1X1\n010\n";
        assert!(parse_pattern_from_string(invalid_content).is_err());

        // Inconsistent row lengths
        let inconsistent_content = "010\n11\n010\n";
        assert!(parse_pattern_from_string(inconsistent_content).is_err());

        // Empty content
        let empty_content = "";
        assert!(parse_pattern_from_string(empty_content).is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("glider.txt").exists());
        assert!(temp_dir.path().join("blinker.txt").exists());
        assert!(temp_dir.path().join("block.txt").exists());
        assert!(temp_dir.path().join("beacon.txt").exists());

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.width, 5);
        assert_eq!(glider.height, 5);
        assert_eq!(glider.living_count(), 5);
    }
}
