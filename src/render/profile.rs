use crate::render::LabelSize;
use crate::utils::error::{LabelError, Result};

/// Decorative caption printed at the bottom of detail pages.
#[derive(Debug, Clone)]
pub struct Caption {
    pub text: String,
    /// Horizontal center of the caption, inches from the left edge.
    pub center_x_in: f32,
    /// Baseline, inches from the top edge.
    pub y_in: f32,
    pub size_pt: f32,
}

/// Canvas profile for the paged document renderer. Lengths are inches and
/// text positions are baselines measured from the top-left corner, matching
/// the coordinate intent of the physical label layouts.
#[derive(Debug, Clone)]
pub struct PageProfile {
    pub width_in: f32,
    pub height_in: f32,
    pub qr_side_in: f32,
    pub qr_left_in: f32,
    pub qr_top_in: f32,
    /// Left edge of the text column.
    pub column_x_in: f32,
    /// Baselines of the model / GTIN / date / serial lines, top to bottom.
    pub line_ys_in: [f32; 4],
    pub body_pt: f32,
    /// Oversized font for the serial emphasis suffix.
    pub suffix_pt: f32,
    /// Gap between the measured serial prefix and the suffix.
    pub suffix_gap_in: f32,
    pub summary_pt: f32,
    pub summary_anchor_in: (f32, f32),
    pub caption: Option<Caption>,
}

impl PageProfile {
    /// The 2x1-inch landscape label stock.
    pub fn landscape_2x1() -> Self {
        Self::scaled(1.0)
    }

    /// The 4x2-inch landscape label stock; same layout at double scale.
    pub fn landscape_4x2() -> Self {
        Self::scaled(2.0)
    }

    pub fn for_size(size: LabelSize) -> Self {
        match size {
            LabelSize::TwoByOne => Self::landscape_2x1(),
            LabelSize::FourByTwo => Self::landscape_4x2(),
        }
    }

    fn scaled(k: f32) -> Self {
        // QR printed 3% larger than its nominal 0.7in side, centered on the
        // left half of the label.
        let qr_side = 0.7 * 1.03 * k;
        Self {
            width_in: 2.0 * k,
            height_in: 1.0 * k,
            qr_side_in: qr_side,
            qr_left_in: 0.5 * k - qr_side / 2.0,
            qr_top_in: 0.15 * k,
            column_x_in: 0.9 * k,
            line_ys_in: [0.3 * k, 0.45 * k, 0.6 * k, 0.75 * k],
            body_pt: 7.0 * k,
            suffix_pt: 10.0 * k,
            suffix_gap_in: 0.02 * k,
            summary_pt: 11.0 * k,
            summary_anchor_in: (0.5 * k, 0.5 * k),
            caption: Some(Caption {
                text: "GARANTÍA ANULADA SI SE REMUEVE".to_string(),
                center_x_in: 1.0 * k,
                y_in: 0.95 * k,
                size_pt: 5.0 * k,
            }),
        }
    }

    /// Fails fast on degenerate geometry before any page is emitted.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("width_in", self.width_in),
            ("height_in", self.height_in),
            ("qr_side_in", self.qr_side_in),
            ("body_pt", self.body_pt),
            ("suffix_pt", self.suffix_pt),
            ("summary_pt", self.summary_pt),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LabelError::MalformedProfile {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Canvas profile for the printer-markup renderer, expressed through print
/// density: physical size in inches plus the printer's dots per inch.
#[derive(Debug, Clone)]
pub struct DotProfile {
    pub dpi: u32,
    pub width_in: f32,
    pub height_in: f32,
}

impl DotProfile {
    /// ZD220-class desktop printer with 2x1-inch stock.
    pub fn zd220_2x1() -> Self {
        Self {
            dpi: 203,
            width_in: 2.0,
            height_in: 1.0,
        }
    }

    pub fn zd220_4x2() -> Self {
        Self {
            dpi: 203,
            width_in: 4.0,
            height_in: 2.0,
        }
    }

    pub fn for_size(size: LabelSize) -> Self {
        match size {
            LabelSize::TwoByOne => Self::zd220_2x1(),
            LabelSize::FourByTwo => Self::zd220_4x2(),
        }
    }

    pub fn width_dots(&self) -> u32 {
        (self.width_in * self.dpi as f32).round() as u32
    }

    pub fn height_dots(&self) -> u32 {
        (self.height_in * self.dpi as f32).round() as u32
    }

    /// Fails fast on degenerate dimensions; a zero-dpi profile would emit
    /// zero-sized blocks the printer silently swallows.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(LabelError::MalformedProfile {
                field: "dpi",
                value: self.dpi.to_string(),
            });
        }
        for (field, value) in [("width_in", self.width_in), ("height_in", self.height_in)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LabelError::MalformedProfile {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_profiles_validate() {
        assert!(PageProfile::landscape_2x1().validate().is_ok());
        assert!(PageProfile::landscape_4x2().validate().is_ok());
    }

    #[test]
    fn test_page_profile_rejects_degenerate_width() {
        let mut profile = PageProfile::landscape_2x1();
        profile.width_in = 0.0;
        assert!(matches!(
            profile.validate(),
            Err(LabelError::MalformedProfile { field: "width_in", .. })
        ));
    }

    #[test]
    fn test_dot_profile_dimensions() {
        let profile = DotProfile::zd220_2x1();
        assert_eq!(profile.width_dots(), 406);
        assert_eq!(profile.height_dots(), 203);
    }

    #[test]
    fn test_dot_profile_rejects_zero_dpi() {
        let mut profile = DotProfile::zd220_2x1();
        profile.dpi = 0;
        assert!(profile.validate().is_err());
    }
}
