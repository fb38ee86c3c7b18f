use sgr_github::bucket::Palette;

/// Layout and animation settings for the rendered graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Side of one day square in px
    pub square_size: u32,
    /// Gap between squares in px
    pub padding: u32,
    pub cols: u32,
    pub rows: u32,
    /// Upper bound on the number of days the submarine visits
    pub max_waypoints: usize,
    /// Seconds for one pass of the submarine along its path
    pub path_duration_secs: f64,
    /// Seconds for one bubble to rise and fade
    pub bubble_duration_secs: f64,
    pub bubble_count: usize,
    /// Fill colors for the day buckets
    pub palette: Palette,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            square_size: 12,
            padding: 2,
            cols: 52,
            rows: 7,
            max_waypoints: 10,
            path_duration_secs: 23.0,
            bubble_duration_secs: 1.5,
            bubble_count: 3,
            palette: Palette::default(),
        }
    }
}

impl GridConfig {
    /// Distance between the origins of adjacent cells.
    pub fn pitch(&self) -> u32 {
        self.square_size + self.padding
    }

    pub fn width(&self) -> u32 {
        self.cols * self.pitch()
    }

    pub fn height(&self) -> u32 {
        self.rows * self.pitch()
    }
}
