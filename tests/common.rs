//! Test utilities for the denoise layer suite.

#![allow(dead_code)]

use costmap_denoise::{Costmap, DenoiseConfig, DenoiseLayer, Window, FREE_SPACE, LETHAL_OBSTACLE};

/// Build a costmap from ASCII rows: '#' = lethal obstacle, '.' = free,
/// any digit d = raw cost d * 28 (for non-sentinel values).
pub fn costmap_from_rows(rows: &[&str]) -> Costmap {
    let height = rows.len();
    let width = if height > 0 { rows[0].len() } else { 0 };
    let mut cells = Vec::with_capacity(width * height);
    for row in rows {
        assert_eq!(row.len(), width, "ragged costmap rows");
        for ch in row.chars() {
            cells.push(match ch {
                '#' => LETHAL_OBSTACLE,
                '.' => FREE_SPACE,
                d => d.to_digit(10).expect("unknown cell char") as u8 * 28,
            });
        }
    }
    Costmap::from_cells(cells, width, height)
}

/// Layer with the given threshold and connectivity, enabled.
pub fn layer(minimal_group_size: i64, group_connectivity_type: i64) -> DenoiseLayer {
    DenoiseLayer::new(&DenoiseConfig {
        enabled: true,
        minimal_group_size,
        group_connectivity_type,
    })
}

/// Count lethal obstacle cells in the whole grid.
pub fn obstacle_count(grid: &Costmap) -> usize {
    grid.count_in_window(Window::full(grid.width(), grid.height()), LETHAL_OBSTACLE)
}
