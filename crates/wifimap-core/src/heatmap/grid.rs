/// Evenly spaced sample coordinates over a physical extent.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapGrid {
    /// Column coordinates in meters.
    pub xs: Vec<f64>,
    /// Row coordinates in meters.
    pub ys: Vec<f64>,
}

impl HeatmapGrid {
    /// `resolution` samples per axis spanning `[0, width_m] x [0, height_m]`,
    /// both ends included.
    pub fn new(width_m: f64, height_m: f64, resolution: usize) -> Self {
        Self {
            xs: linspace(0.0, width_m, resolution),
            ys: linspace(0.0, height_m, resolution),
        }
    }

    pub fn rows(&self) -> usize {
        self.ys.len()
    }

    pub fn cols(&self) -> usize {
        self.xs.len()
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 10.0, 5);
        assert_eq!(v, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }
}
