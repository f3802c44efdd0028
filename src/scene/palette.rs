//! Particle color palette
//!
//! Four theme buckets assigned round-robin by particle index. Each draw adds
//! small per-channel jitter so neighbors in the same bucket don't render as
//! clones. The base values and jitter spans are visual tuning constants
//! carried over from the page theme; treat them as data, not as something to
//! derive.

use rand::Rng;

/// One of the four theme color families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteBucket {
    Violet,
    Teal,
    Magenta,
    Glow,
}

/// (base, jitter span) per channel
type ChannelSpec = (f32, f32);

impl PaletteBucket {
    /// Bucket for a particle index (`i mod 4`).
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => PaletteBucket::Violet,
            1 => PaletteBucket::Teal,
            2 => PaletteBucket::Magenta,
            _ => PaletteBucket::Glow,
        }
    }

    fn channels(self) -> [ChannelSpec; 3] {
        match self {
            PaletteBucket::Violet => [(0.6, 0.3), (0.3, 0.2), (0.9, 0.1)],
            PaletteBucket::Teal => [(0.2, 0.1), (0.6, 0.3), (0.8, 0.2)],
            PaletteBucket::Magenta => [(0.8, 0.2), (0.2, 0.1), (0.6, 0.3)],
            PaletteBucket::Glow => [(0.9, 0.1), (0.9, 0.1), (0.9, 0.1)],
        }
    }

    /// Draw a jittered RGB triple from this bucket.
    pub fn sample<R: Rng>(self, rng: &mut R) -> [f32; 3] {
        self.channels()
            .map(|(base, span)| base + rng.random::<f32>() * span)
    }

    /// Inclusive-exclusive bounds per channel, for validation.
    pub fn channel_bounds(self) -> [(f32, f32); 3] {
        self.channels().map(|(base, span)| (base, base + span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_bucket_cycle() {
        assert_eq!(PaletteBucket::for_index(0), PaletteBucket::Violet);
        assert_eq!(PaletteBucket::for_index(1), PaletteBucket::Teal);
        assert_eq!(PaletteBucket::for_index(2), PaletteBucket::Magenta);
        assert_eq!(PaletteBucket::for_index(3), PaletteBucket::Glow);
        assert_eq!(PaletteBucket::for_index(4), PaletteBucket::Violet);
        assert_eq!(PaletteBucket::for_index(1003), PaletteBucket::Glow);
    }

    #[test]
    fn test_samples_stay_in_bucket_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        for index in 0..64 {
            let bucket = PaletteBucket::for_index(index);
            let color = bucket.sample(&mut rng);
            for (channel, (lo, hi)) in color.iter().zip(bucket.channel_bounds()) {
                assert!(*channel >= lo && *channel < hi, "channel {channel} outside [{lo}, {hi})");
            }
        }
    }
}
