//! Resize configuration types

use std::str::FromStr;

use image::imageops::FilterType;

/// Sampling filter used when resizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(val: ResizeFilter) -> Self {
        match val {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl FromStr for ResizeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "triangle" => Ok(Self::Triangle),
            "catmull-rom" | "catmullrom" => Ok(Self::CatmullRom),
            "gaussian" => Ok(Self::Gaussian),
            "lanczos3" => Ok(Self::Lanczos3),
            other => Err(format!("unknown resize filter: {other}")),
        }
    }
}

/// How the target dimensions are honored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Largest size fitting within the target box, aspect ratio preserved.
    #[default]
    Fit,
    /// Exactly the target size, aspect ratio ignored.
    Exact,
    /// Fills the target box and crops the overflow, aspect ratio preserved.
    Fill,
}

impl FromStr for ResizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fit" => Ok(Self::Fit),
            "exact" => Ok(Self::Exact),
            "fill" => Ok(Self::Fill),
            other => Err(format!("unknown resize mode: {other}")),
        }
    }
}

/// A complete resize request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSpec {
    pub width: u32,
    pub height: u32,
    pub mode: ResizeMode,
    pub filter: ResizeFilter,
}
