//! Chart identification: area series, color mode, file format and forecast horizon.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Chart series published by JMA.
///
/// The series determines the publication cadence: the Asia-wide analysis
/// (`ASAS`) is issued every 6 hours, the surface analysis around Japan
/// (`SPAS`) every 3 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Area {
    /// Asia surface analysis, `ASAS`.
    PrimarySurface,
    /// Surface analysis around Japan, `SPAS`.
    #[default]
    SecondarySurface,
}

impl Area {
    pub const ALL: [Area; 2] = [Area::PrimarySurface, Area::SecondarySurface];

    pub fn code(&self) -> &'static str {
        match self {
            Area::PrimarySurface => "ASAS",
            Area::SecondarySurface => "SPAS",
        }
    }

    /// Publication interval in hours.
    pub fn cadence_hours(&self) -> u32 {
        match self {
            Area::PrimarySurface => 6,
            Area::SecondarySurface => 3,
        }
    }

    /// Snap a UTC hour down to the publication slot for this series.
    ///
    /// `SPAS` has no 15:00 chart; the 12:00 chart covers that slot.
    pub fn slot_hour(&self, hour: u32) -> u32 {
        let floored = hour - hour % self.cadence_hours();
        match self {
            Area::SecondarySurface if floored == 15 => 12,
            _ => floored,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Area {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASAS" => Ok(Area::PrimarySurface),
            "SPAS" => Ok(Area::SecondarySurface),
            _ => Err(ChartError::invalid_input(r#"Area must be "ASAS" or "SPAS""#)),
        }
    }
}

/// Color variant of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    #[default]
    Color,
    Monochrome,
}

impl ColorMode {
    /// Token used in archived chart filenames.
    pub fn token(&self) -> &'static str {
        match self {
            ColorMode::Color => "COLOR",
            ColorMode::Monochrome => "MONO",
        }
    }
}

impl FromStr for ColorMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" => Ok(ColorMode::Color),
            "mono" | "monochrome" => Ok(ColorMode::Monochrome),
            _ => Err(ChartError::invalid_input(r#"Color must be "color" or "mono""#)),
        }
    }
}

/// Requested file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Png,
    Svg,
    Svgz,
    Pdf,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Png => "png",
            Extension::Svg => "svg",
            Extension::Svgz => "svgz",
            Extension::Pdf => "pdf",
        }
    }

    /// Extension used on the archive host. Plain SVG is only published gzipped.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Extension::Svg | Extension::Svgz => "svgz",
            Extension::Png => "png",
            Extension::Pdf => "pdf",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Extension {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Extension::Png),
            "svg" => Ok(Extension::Svg),
            "svgz" => Ok(Extension::Svgz),
            "pdf" => Ok(Extension::Pdf),
            _ => Err(ChartError::invalid_input(
                r#"Available extension are "png", "svg", "svgz" and "pdf""#,
            )),
        }
    }
}

/// Forecast chart horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    Hours24,
    Hours48,
}

impl Horizon {
    pub fn hours(&self) -> u32 {
        match self {
            Horizon::Hours24 => 24,
            Horizon::Hours48 => 48,
        }
    }
}

impl FromStr for Horizon {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24" => Ok(Horizon::Hours24),
            "48" => Ok(Horizon::Hours48),
            _ => Err(ChartError::invalid_input(r#"Available filename are ["24", "48"]"#)),
        }
    }
}

/// A fully specified chart variant, minus the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartSpec {
    pub area: Area,
    pub extension: Extension,
    pub color: ColorMode,
}

impl ChartSpec {
    pub fn new(area: Area, extension: Extension, color: ColorMode) -> Self {
        Self {
            area,
            extension,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_area() {
        assert_eq!("ASAS".parse::<Area>().unwrap(), Area::PrimarySurface);
        assert_eq!("SPAS".parse::<Area>().unwrap(), Area::SecondarySurface);

        let err = "XYZZY".parse::<Area>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ASAS"));
        assert!(message.contains("SPAS"));
    }

    #[test]
    fn test_area_is_case_sensitive() {
        assert!("spas".parse::<Area>().is_err());
    }

    #[test]
    fn test_slot_hour_secondary() {
        let slots: Vec<u32> = (0..24)
            .map(|h| Area::SecondarySurface.slot_hour(h))
            .collect();
        assert_eq!(slots[14], 12);
        assert_eq!(slots[15], 12);
        assert_eq!(slots[17], 12);
        assert_eq!(slots[18], 18);
        assert_eq!(slots[23], 21);
        assert!(!slots.contains(&15));
    }

    #[test]
    fn test_slot_hour_primary() {
        assert_eq!(Area::PrimarySurface.slot_hour(5), 0);
        assert_eq!(Area::PrimarySurface.slot_hour(15), 12);
        assert_eq!(Area::PrimarySurface.slot_hour(23), 18);
    }

    #[test]
    fn test_extension_normalization() {
        assert_eq!(Extension::Svg.file_extension(), "svgz");
        assert_eq!(Extension::Svgz.file_extension(), "svgz");
        assert_eq!(Extension::Png.file_extension(), "png");
        assert_eq!(Extension::Pdf.file_extension(), "pdf");
    }

    #[test]
    fn test_parse_color_mode() {
        assert_eq!("mono".parse::<ColorMode>().unwrap(), ColorMode::Monochrome);
        assert_eq!("Monochrome".parse::<ColorMode>().unwrap(), ColorMode::Monochrome);
        assert_eq!("COLOR".parse::<ColorMode>().unwrap(), ColorMode::Color);
        assert!("sepia".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_parse_horizon() {
        assert_eq!("24".parse::<Horizon>().unwrap().hours(), 24);
        assert_eq!("48".parse::<Horizon>().unwrap().hours(), 48);
        assert!("36".parse::<Horizon>().is_err());
    }
}
