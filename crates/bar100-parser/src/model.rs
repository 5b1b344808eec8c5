/// One record from a raw Bar100 depth log: timestamp (milliseconds since the
/// logger booted, though any monotone integer unit works), water temperature,
/// and uncorrected absolute pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub temperature_c: f64,
    pub pressure_mbar: f64,
}

/// A full parsed log. Row order matches the input file; index i across the
/// column accessors always refers to the same physical sample.
#[derive(Debug, Clone, Default)]
pub struct DepthLog {
    pub samples: Vec<Sample>,
}

impl DepthLog {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.samples.iter().map(|s| s.timestamp)
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.temperature_c).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.pressure_mbar).collect()
    }
}
