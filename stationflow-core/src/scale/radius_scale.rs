use super::RadiusRange;

/// square-root scale from total traffic to a circle radius, so that circle
/// area grows linearly with traffic.
///
/// the domain is `[0, domain_max]`. inputs above `domain_max` extrapolate past
/// the range and are not clamped. a degenerate domain (`domain_max == 0`) maps
/// every input to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    domain_max: u64,
    range: RadiusRange,
}

impl RadiusScale {
    pub fn new(domain_max: u64, range: RadiusRange) -> RadiusScale {
        RadiusScale { domain_max, range }
    }

    /// same domain with a different output range
    pub fn with_range(&self, range: RadiusRange) -> RadiusScale {
        RadiusScale {
            domain_max: self.domain_max,
            range,
        }
    }

    pub fn domain_max(&self) -> u64 {
        self.domain_max
    }

    pub fn range(&self) -> RadiusRange {
        self.range
    }

    pub fn radius(&self, total_traffic: u64) -> f64 {
        if self.domain_max == 0 {
            return self.range.interpolate(0.5);
        }
        let t = (total_traffic as f64).sqrt() / (self.domain_max as f64).sqrt();
        self.range.interpolate(t)
    }
}
