//! Printer-markup renderer: turns label plans into a ZPL command stream.
//! Each label is a self-contained `^XA`..`^XZ` block, so the stream can be
//! sent to a thermal printer as-is or saved as a `.zpl` file.

use crate::domain::model::LabelPlan;
use crate::render::profile::DotProfile;
use crate::utils::error::Result;

/// Estimated advance per character, in dots. The printer surface exposes no
/// text measurement, so suffix placement uses this approximation instead of
/// the document renderer's exact metrics.
const ESTIMATED_DOTS_PER_CHAR: f32 = 10.0;
/// Gap between the serial prefix and the emphasis suffix, in dots.
const SUFFIX_GAP_DOTS: f32 = 30.0;

/// QR symbol origin in dots.
const QR_X: u32 = 20;
const QR_Y: u32 = 30;
/// QR directive: model 2, magnification 6.
const QR_PARAMS: &str = "2,6";

/// Text column and line baselines as fractions of one inch of dots.
const COLUMN_X: f32 = 0.9;
const LINE_YS: [f32; 4] = [0.3, 0.45, 0.6, 0.75];

pub fn render(plans: &[LabelPlan], profile: &DotProfile) -> Result<String> {
    profile.validate()?;

    let mut out = String::new();
    for plan in plans {
        match plan {
            LabelPlan::Summary {
                model_name,
                item_count,
            } => emit_summary(&mut out, profile, model_name, *item_count),
            LabelPlan::Detail {
                model_name,
                gtin,
                production_date,
                serial,
                payload,
            } => emit_detail(
                &mut out,
                profile,
                model_name,
                gtin,
                production_date,
                &serial.prefix,
                &serial.suffix,
                payload,
            ),
        }
    }

    Ok(out)
}

fn emit_header(out: &mut String, profile: &DotProfile) {
    out.push_str(&format!(
        "^XA\n^PW{}\n^LL{}\n^LH0,0\n",
        profile.width_dots(),
        profile.height_dots()
    ));
}

fn emit_summary(out: &mut String, profile: &DotProfile, model: &str, count: usize) {
    let anchor = (profile.dpi as f32 / 4.0).round() as u32;
    emit_header(out, profile);
    out.push_str(&format!(
        "^FO{anchor},{anchor}^A0N,24,24^FD{model} - Total: {count}^FS"
    ));
    out.push_str("^XZ");
}

#[allow(clippy::too_many_arguments)]
fn emit_detail(
    out: &mut String,
    profile: &DotProfile,
    model: &str,
    gtin: &str,
    date: &str,
    prefix: &str,
    suffix: &str,
    payload: &str,
) {
    let dpi = profile.dpi as f32;
    let x = dot(dpi * COLUMN_X);

    emit_header(out, profile);
    out.push_str(&format!("^FO{QR_X},{QR_Y}^BQN,{QR_PARAMS}^FDQA,{payload}^FS"));
    out.push_str(&format!(
        "^FO{x},{}^A0N,20,20^FDModel: {model}^FS",
        dot(dpi * LINE_YS[0])
    ));
    out.push_str(&format!(
        "^FO{x},{}^A0N,18,18^FDGTIN: {gtin}^FS",
        dot(dpi * LINE_YS[1])
    ));
    out.push_str(&format!(
        "^FO{x},{}^A0N,18,18^FDDate: {date}^FS",
        dot(dpi * LINE_YS[2])
    ));
    out.push_str(&format!(
        "^FO{x},{}^A0N,18,18^FDS/N: {prefix}^FS",
        dot(dpi * LINE_YS[3])
    ));

    // Suffix lands right after the estimated width of the prefix, rendered
    // in a larger font for the emphasis the splitter exists for.
    let prefix_width = prefix.chars().count() as f32 * ESTIMATED_DOTS_PER_CHAR;
    let suffix_x = dot(dpi * COLUMN_X + prefix_width + SUFFIX_GAP_DOTS);
    out.push_str(&format!(
        "^FO{suffix_x},{}^A0N,22,22^FD{suffix}^FS",
        dot(dpi * LINE_YS[3])
    ));
    out.push_str("^XZ");
}

fn dot(value: f32) -> u32 {
    value.round() as u32
}
