// ABOUTME: Physiological and statistical constants for the athletics analytics engine
// ABOUTME: MET values, trend thresholds, rule windows, diet targets, and dataset label factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Tartan Athletics

//! Domain constants organized by concern. Engine components read these
//! through their config structs; the values here are the defaults.

/// Energy expenditure constants
pub mod energy {
    /// Body weight assumed when the athlete's profile has none (kg)
    pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Kilocalories per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_G_FATS: f64 = 9.0;
}

/// Trend classification constants
pub mod trend {
    /// Slope magnitude below which a trend is considered stable
    /// (metric units per day)
    pub const STABILITY_THRESHOLD: f64 = 0.001;
    /// Minimum valid metric points required to fit a trend
    pub const MIN_TREND_POINTS: usize = 2;
}

/// Window sizes for the comparative rules
pub mod rule_windows {
    /// Sessions inspected by the runner fueling rule
    pub const FUELING_WINDOW: usize = 6;
    /// Sessions inspected by the jumper plateau rule
    pub const PLATEAU_WINDOW: usize = 5;
    /// Sessions inspected by the thrower load-impact rule
    pub const LOAD_IMPACT_WINDOW: usize = 4;
}

/// Runner fueling rule thresholds
pub mod fueling {
    /// Ratio of recent to previous mean time that flags a decline
    pub const DECLINE_MARGIN: f64 = 1.02;
    /// Average training-day carbohydrate floor in grams
    pub const CARB_FLOOR_G: f64 = 250.0;
    /// Minimum distinct training days of carb data required
    pub const MIN_CARB_DAYS: usize = 2;
}

/// Diet plan advice thresholds
pub mod diet_targets {
    /// Daily hydration target in liters
    pub const HYDRATION_TARGET_L: f64 = 3.0;
    /// Daily carbohydrate target in grams
    pub const CARB_TARGET_G: f64 = 250.0;
    /// Daily protein target in grams
    pub const PROTEIN_TARGET_G: f64 = 110.0;
}

/// Mifflin-St Jeor BMR coefficients
pub mod bmr {
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_FACTOR: f64 = 10.0;
    /// Height coefficient (kcal per cm)
    pub const HEIGHT_FACTOR: f64 = 6.25;
    /// Age coefficient (kcal per year)
    pub const AGE_FACTOR: f64 = 5.0;
    /// Constant term for male athletes
    pub const MALE_OFFSET: f64 = 5.0;
    /// Constant term for female athletes
    pub const FEMALE_OFFSET: f64 = -161.0;
}

/// Offline dataset label model factors
pub mod dataset {
    /// MET adjustment for throwing events (short explosive bursts)
    pub const THROWS_MET_FACTOR: f64 = 0.85;
    /// MET adjustment for jumping events
    pub const JUMPS_MET_FACTOR: f64 = 0.90;
    /// MET adjustment for track events (baseline)
    pub const TRACK_MET_FACTOR: f64 = 1.0;
    /// Multiplicative label noise fraction
    pub const NOISE_FRACTION: f64 = 0.03;
    /// Lower clamp for synthesized calorie labels (kcal)
    pub const LABEL_MIN_KCAL: f64 = 1200.0;
    /// Upper clamp for synthesized calorie labels (kcal)
    pub const LABEL_MAX_KCAL: f64 = 6000.0;

    /// Plausibility ranges applied before labeling
    pub mod plausibility {
        /// Athlete height range in cm
        pub const HEIGHT_CM: (f64, f64) = (140.0, 220.0);
        /// Athlete weight range in kg
        pub const WEIGHT_KG: (f64, f64) = (35.0, 130.0);
        /// Athlete age range in years
        pub const AGE_YEARS: (u32, u32) = (14, 50);
        /// Session duration range in minutes
        pub const DURATION_MINUTES: (u32, u32) = (5, 300);
    }

    /// Defaults substituted for missing profile or session values
    pub mod defaults {
        /// Default athlete age
        pub const AGE_YEARS: u32 = 25;
        /// Default athlete height in cm
        pub const HEIGHT_CM: f64 = 175.0;
        /// Default athlete weight in kg
        pub const WEIGHT_KG: f64 = 70.0;
        /// Default session duration in minutes
        pub const DURATION_MINUTES: u32 = 60;
        /// Default effort count per session
        pub const EFFORT_COUNT: u32 = 5;
    }
}
