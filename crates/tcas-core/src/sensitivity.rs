//! Altitude-dependent sensitivity levels and detection thresholds.

use serde::{Deserialize, Serialize};

// Per-level threshold tables, index 0 = SL2 .. index 6 = SL8.
// Times in seconds, ranges and vertical separations in feet.
const TAU_TA_S: [f64; 7] = [20.0, 25.0, 30.0, 40.0, 45.0, 48.0, 48.0];
const RANGE_TA_FT: [f64; 7] = [560.0, 615.0, 890.0, 1390.0, 1855.0, 2410.0, 2410.0];
const VERT_TA_FT: [f64; 7] = [260.0, 260.0, 260.0, 260.0, 260.0, 260.0, 365.0];
const TAU_RA_S: [f64; 7] = [0.0, 15.0, 20.0, 25.0, 30.0, 35.0, 35.0];
const RANGE_RA_FT: [f64; 7] = [0.0, 375.0, 650.0, 1020.0, 1485.0, 2040.0, 2040.0];
const VERT_RA_FT: [f64; 7] = [0.0, 185.0, 185.0, 185.0, 185.0, 215.0, 250.0];

/// Sensitivity level selecting how aggressive detection thresholds are.
///
/// A pure function of own-ship altitude, monotonic non-decreasing with
/// height.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    Sl2 = 2,
    Sl3 = 3,
    Sl4 = 4,
    Sl5 = 5,
    Sl6 = 6,
    Sl7 = 7,
    Sl8 = 8,
}

impl SensitivityLevel {
    /// Select the sensitivity level for an own-ship altitude in feet.
    ///
    /// Negative or otherwise out-of-domain altitudes clamp to the lowest
    /// band instead of failing.
    pub fn from_altitude(altitude_ft: f64) -> Self {
        if !altitude_ft.is_finite() {
            return Self::Sl2;
        }
        if altitude_ft < 3_280.0 {
            Self::Sl2
        } else if altitude_ft < 7_710.0 {
            Self::Sl3
        } else if altitude_ft < 16_400.0 {
            Self::Sl4
        } else if altitude_ft < 32_800.0 {
            Self::Sl5
        } else if altitude_ft < 65_600.0 {
            Self::Sl6
        } else if altitude_ft < 137_760.0 {
            Self::Sl7
        } else {
            Self::Sl8
        }
    }

    /// Ordinal value 2..=8.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    fn index(self) -> usize {
        self as usize - 2
    }

    /// Detection thresholds for this level.
    pub fn thresholds(self) -> ThresholdSet {
        let i = self.index();
        ThresholdSet {
            tau_ta_s: TAU_TA_S[i],
            range_ta_ft: RANGE_TA_FT[i],
            vert_ta_ft: VERT_TA_FT[i],
            tau_ra_s: TAU_RA_S[i],
            range_ra_ft: RANGE_RA_FT[i],
            vert_ra_ft: VERT_RA_FT[i],
        }
    }

    /// All levels, lowest first. Handy for table-property tests and
    /// threshold dumps.
    pub fn all() -> [SensitivityLevel; 7] {
        [
            Self::Sl2,
            Self::Sl3,
            Self::Sl4,
            Self::Sl5,
            Self::Sl6,
            Self::Sl7,
            Self::Sl8,
        ]
    }
}

/// The six detection thresholds selected by a sensitivity level.
///
/// At SL2 every RA threshold is zero, which structurally suppresses
/// resolution advisories in the lowest altitude band. Range and vertical
/// thresholds are in feet while the advisory velocity limits are in m/s;
/// the mismatch is inherited from the source data and left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub tau_ta_s: f64,
    pub range_ta_ft: f64,
    pub vert_ta_ft: f64,
    pub tau_ra_s: f64,
    pub range_ra_ft: f64,
    pub vert_ra_ft: f64,
}

/// Look up the thresholds for an own-ship altitude in feet.
///
/// Pure function; no shared table state.
pub fn calculate_thresholds(altitude_ft: f64) -> ThresholdSet {
    SensitivityLevel::from_altitude(altitude_ft).thresholds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_exact() {
        assert_eq!(SensitivityLevel::from_altitude(3_279.999), SensitivityLevel::Sl2);
        assert_eq!(SensitivityLevel::from_altitude(3_280.0), SensitivityLevel::Sl3);
        assert_eq!(SensitivityLevel::from_altitude(16_399.999), SensitivityLevel::Sl4);
        assert_eq!(SensitivityLevel::from_altitude(137_760.0), SensitivityLevel::Sl8);

        let sl2 = SensitivityLevel::Sl2.thresholds();
        assert_eq!(
            (sl2.tau_ta_s, sl2.range_ta_ft, sl2.vert_ta_ft),
            (20.0, 560.0, 260.0)
        );
        assert_eq!((sl2.tau_ra_s, sl2.range_ra_ft, sl2.vert_ra_ft), (0.0, 0.0, 0.0));

        let sl3 = SensitivityLevel::Sl3.thresholds();
        assert_eq!(
            (sl3.tau_ta_s, sl3.range_ta_ft, sl3.vert_ta_ft),
            (25.0, 615.0, 260.0)
        );
        assert_eq!(
            (sl3.tau_ra_s, sl3.range_ra_ft, sl3.vert_ra_ft),
            (15.0, 375.0, 185.0)
        );
    }

    #[test]
    fn out_of_domain_altitude_clamps_to_lowest_band() {
        assert_eq!(SensitivityLevel::from_altitude(-500.0), SensitivityLevel::Sl2);
        assert_eq!(SensitivityLevel::from_altitude(f64::NAN), SensitivityLevel::Sl2);
        assert_eq!(
            SensitivityLevel::from_altitude(f64::NEG_INFINITY),
            SensitivityLevel::Sl2
        );
    }

    #[test]
    fn level_is_monotonic_in_altitude() {
        let altitudes = [
            -100.0, 0.0, 3_279.0, 3_280.0, 7_710.0, 16_400.0, 32_800.0, 65_600.0, 137_760.0,
            200_000.0,
        ];
        for pair in altitudes.windows(2) {
            assert!(
                SensitivityLevel::from_altitude(pair[0])
                    <= SensitivityLevel::from_altitude(pair[1]),
                "level decreased between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn thresholds_are_monotonic_across_levels() {
        for pair in SensitivityLevel::all().windows(2) {
            let (lo, hi) = (pair[0].thresholds(), pair[1].thresholds());
            assert!(lo.tau_ta_s <= hi.tau_ta_s);
            assert!(lo.range_ta_ft <= hi.range_ta_ft);
            assert!(lo.tau_ra_s <= hi.tau_ra_s);
            assert!(lo.range_ra_ft <= hi.range_ra_ft);
        }
    }

    #[test]
    fn ra_thresholds_never_exceed_ta_thresholds() {
        // The table guarantees that an RA implies a TA; the classifier
        // does not enforce it, so pin it down here.
        for level in SensitivityLevel::all() {
            let t = level.thresholds();
            assert!(t.tau_ra_s <= t.tau_ta_s, "{level:?}");
            assert!(t.range_ra_ft <= t.range_ta_ft, "{level:?}");
            assert!(t.vert_ra_ft <= t.vert_ta_ft, "{level:?}");
        }
    }
}
