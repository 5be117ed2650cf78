/// Minimum grid cell count (rows*cols) to use row-level Rayon parallelism.
pub const PARALLEL_CELL_THRESHOLD: usize = 16_384;

/// Heatmap grid samples per axis.
pub const DEFAULT_GRID_RESOLUTION: usize = 200;

/// Gaussian smoothing sigma, in grid cells.
pub const DEFAULT_SMOOTHING_SIGMA: f64 = 3.0;

/// Gaussian kernel radius as a multiple of sigma.
pub const DEFAULT_SMOOTHING_TRUNCATE: f64 = 4.0;

/// Fewest observations a heatmap can be built from.
pub const MIN_INTERPOLATION_SAMPLES: usize = 3;

/// Lower end of the shared display range (dBm).
pub const DEFAULT_RSSI_MIN: f64 = -90.0;

/// Upper end of the shared display range (dBm).
pub const DEFAULT_RSSI_MAX: f64 = -30.0;

/// Overlay opacity so the floor plan stays visible underneath.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.5;

/// Entries in a colormap lookup table.
pub const COLORMAP_LUT_SIZE: usize = 256;

/// Period between passive scans.
pub const DEFAULT_SCAN_INTERVAL_MS: u64 = 3000;

/// How long to wait for a killed scanner process to exit.
pub const DEFAULT_SCAN_KILL_TIMEOUT_MS: u64 = 1000;

/// Scanner executable invoked for each passive scan.
pub const DEFAULT_SCANNER_PROGRAM: &str = "lswifi";

/// Placeholder in scanner arguments replaced by the JSON output path.
pub const SCANNER_OUTPUT_PLACEHOLDER: &str = "{output}";

/// File the scanner writes its JSON report to.
pub const DEFAULT_SCANNER_OUTPUT: &str = "temp.json";

/// Display name used for networks that do not broadcast an SSID.
pub const HIDDEN_NETWORK_NAME: &str = "hidden";

/// Legend bar width in pixels when appended to an exported composite.
pub const LEGEND_BAR_WIDTH: u32 = 24;

/// Margin around the legend bar in exported composites.
pub const LEGEND_MARGIN: u32 = 12;

/// Spacing between legend tick labels (dBm).
pub const LEGEND_TICK_STEP: f64 = 10.0;

/// Status shown when an interaction lands outside the floor plan.
pub const OUT_OF_BOUNDS_STATUS: &str = "Clicked position is outside the image bounds.";
