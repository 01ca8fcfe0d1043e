//! Dataset building configuration format.

use crate::common::*;

/// The main configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The COCO subset name, such as `val2017` or `train2017`.
    pub subset: String,
    pub filter: FilterConfig,
    /// The tie policy when rounding bounding boxes to integer pixels.
    pub rounding: Rounding,
    pub output: OutputConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(path)?;
        let config: Self = json5::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the settings given on the command line.
    pub fn with_overrides(
        mut self,
        subset: Option<String>,
        min_area: Option<u64>,
        min_keypoints: Option<u32>,
    ) -> Self {
        if let Some(subset) = subset {
            self.subset = subset;
        }
        if let Some(min_area) = min_area {
            self.filter.min_area = r64(min_area as f64);
        }
        if let Some(min_keypoints) = min_keypoints {
            self.filter.min_keypoints = min_keypoints;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.filter.min_area >= 0.0,
            "min_area must be non-negative, but get {}",
            self.filter.min_area
        );
        ensure!(
            (1..=100).contains(&self.output.jpeg_quality),
            "jpeg_quality must be in range 1..=100, but get {}",
            self.output.jpeg_quality
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subset: "val2017".into(),
            filter: FilterConfig::default(),
            rounding: Rounding::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Primary person eligibility thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// The category id of people.
    pub person_category_id: u64,
    /// The minimum annotated area.
    pub min_area: R64,
    /// The minimum number of labeled keypoints.
    pub min_keypoints: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            person_category_id: 1,
            min_area: r64(128.0 * 128.0),
            min_keypoints: 10,
        }
    }
}

/// Output image options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub jpeg_quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { jpeg_quality: 75 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() -> Result<()> {
        let config: Config = json5::from_str("{}")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.subset, "val2017");
        assert_eq!(config.filter.min_area, 16384.0);
        assert_eq!(config.filter.min_keypoints, 10);
        assert_eq!(config.rounding, Rounding::TiesEven);
        config.validate()?;
        Ok(())
    }

    #[test]
    fn config_json5() -> Result<()> {
        let text = r#"{
            // training split with looser thresholds
            subset: "train2017",
            filter: { min_area: 4096, min_keypoints: 5 },
            rounding: "ties_away_from_zero",
            output: { jpeg_quality: 95 },
        }"#;
        let config: Config = json5::from_str(text)?;
        assert_eq!(config.subset, "train2017");
        assert_eq!(config.filter.person_category_id, 1);
        assert_eq!(config.filter.min_area, 4096.0);
        assert_eq!(config.filter.min_keypoints, 5);
        assert_eq!(config.rounding, Rounding::TiesAwayFromZero);
        assert_eq!(config.output.jpeg_quality, 95);
        Ok(())
    }

    #[test]
    fn config_invalid() {
        let mut config = Config::default();
        config.output.jpeg_quality = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.filter.min_area = r64(-1.0);
        assert!(config.validate().is_err());

        assert!(json5::from_str::<Config>(r#"{ rounding: "up" }"#).is_err());
    }

    #[test]
    fn config_accepts_any_subset() -> Result<()> {
        for subset in ["", "my-split", "../val2017"] {
            let config = Config {
                subset: subset.into(),
                ..Config::default()
            };
            config.validate()?;
        }
        Ok(())
    }

    #[test]
    fn command_line_overrides() -> Result<()> {
        let text = r#"{
            subset: "train2017",
            filter: { min_area: 4096, min_keypoints: 5 },
            output: { jpeg_quality: 90 },
        }"#;
        let file: Config = json5::from_str(text)?;

        // absent options keep the file values
        let config = file.clone().with_overrides(None, None, None);
        assert_eq!(config, file);

        let config = file
            .clone()
            .with_overrides(Some("val2014".into()), Some(100), None);
        assert_eq!(config.subset, "val2014");
        assert_eq!(config.filter.min_area, 100.0);
        assert_eq!(config.filter.min_keypoints, 5);
        assert_eq!(config.output.jpeg_quality, 90);

        let config = file.with_overrides(None, Some(0), Some(17));
        assert_eq!(config.subset, "train2017");
        assert_eq!(config.filter.min_area, 0.0);
        assert_eq!(config.filter.min_keypoints, 17);
        config.validate()?;
        Ok(())
    }
}
