/// Fixed-size histogram of bin counts over the fixed domain [0,1].
pub struct Histogram {
    counts: Vec<u64>,
    total: u64
}

impl Histogram {
    /// Bins `values` into `bin_count` equal-width bins over [0,1].
    ///
    /// Every value is counted: out-of-domain values (a diverging map can
    /// leave [0,1]) are clamped into the edge bins rather than dropped,
    /// which biases the histogram toward the edges. This is a known
    /// approximation kept for parity with the analysis this replaces.
    /// A value of exactly 1.0 lands in the last bin.
    pub fn from_values(values: &[f64], bin_count: usize) -> Histogram {
        let mut counts = vec![0u64; bin_count];
        if bin_count > 0 {
            for &value in values {
                counts[Self::bin_index(bin_count, value)] += 1;
            }
        }
        Histogram { counts, total: values.len() as u64 }
    }

    /// floor(value*bin_count) clamped to [0, bin_count-1]. NaN values map
    /// to bin 0 (part of the clamping approximation above).
    fn bin_index(bin_count: usize, value: f64) -> usize {
        let raw = (value * bin_count as f64).floor();
        if raw.is_nan() {
            0
        } else {
            (raw as i64).clamp(0, bin_count as i64 - 1) as usize
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Shannon entropy -sum(p_i * log2(p_i)) in bits over the empirical bin
    /// probabilities. Empty bins contribute nothing, which keeps log(0) out
    /// of the sum. Returns 0.0 when the histogram holds no values.
    pub fn shannon_entropy_bits(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}
