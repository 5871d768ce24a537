//! Paged document renderer: one PDF page per label plan. Summary pages carry
//! the model/count line; detail pages embed the QR symbol on the left and a
//! right-hand text column whose serial suffix is positioned from the exact
//! measured width of the prefix.

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};
use qrcode::{Color, QrCode};
use tokio::task::JoinHandle;

use crate::domain::model::LabelPlan;
use crate::render::metrics;
use crate::render::profile::PageProfile;
use crate::utils::error::{LabelError, Result};

const POINTS_PER_INCH: f32 = 72.0;

/// Pixels per QR module in the embedded bitmap.
const QR_SCALE: usize = 4;
/// Quiet-zone border, in modules, required around the symbol.
const QR_QUIET_MODULES: usize = 4;

/// Grayscale QR bitmap ready for embedding as an image XObject.
#[derive(Debug)]
struct QrAsset {
    pixels: Vec<u8>,
    side_px: usize,
}

fn encode_qr(payload: &str) -> Result<QrAsset> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| LabelError::AssetGenerationFailure {
        payload: payload.to_string(),
        reason: e.to_string(),
    })?;

    let modules = code.width();
    let colors = code.to_colors();
    let bordered = modules + 2 * QR_QUIET_MODULES;
    let side_px = bordered * QR_SCALE;

    let mut pixels = vec![0xFFu8; side_px * side_px];
    for y in 0..modules {
        for x in 0..modules {
            if colors[y * modules + x] != Color::Dark {
                continue;
            }
            let px = (x + QR_QUIET_MODULES) * QR_SCALE;
            let py = (y + QR_QUIET_MODULES) * QR_SCALE;
            for dy in 0..QR_SCALE {
                let row = (py + dy) * side_px + px;
                pixels[row..row + QR_SCALE].fill(0x00);
            }
        }
    }

    Ok(QrAsset { pixels, side_px })
}

/// Renders the plan sequence into PDF bytes. QR assets are encoded on
/// blocking tasks issued concurrently, one per detail plan, then joined in
/// plan order so concurrency can never reorder pages.
pub async fn render(plans: Vec<LabelPlan>, profile: &PageProfile) -> Result<Vec<u8>> {
    profile.validate()?;

    let mut handles: Vec<Option<JoinHandle<Result<QrAsset>>>> = Vec::with_capacity(plans.len());
    for plan in &plans {
        match plan {
            LabelPlan::Detail { payload, .. } => {
                let payload = payload.clone();
                handles.push(Some(tokio::task::spawn_blocking(move || {
                    encode_qr(&payload)
                })));
            }
            LabelPlan::Summary { .. } => handles.push(None),
        }
    }

    let mut assets: Vec<Option<QrAsset>> = Vec::with_capacity(plans.len());
    for handle in handles {
        match handle {
            Some(handle) => {
                let asset = handle.await.map_err(|e| LabelError::ProcessingError {
                    message: format!("QR encode task failed: {e}"),
                })??;
                assets.push(Some(asset));
            }
            None => assets.push(None),
        }
    }

    Ok(assemble(&plans, &assets, profile))
}

fn assemble(plans: &[LabelPlan], assets: &[Option<QrAsset>], profile: &PageProfile) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = move || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let font_id = alloc();

    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

    let page_ids: Vec<Ref> = plans.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = plans.iter().map(|_| alloc()).collect();

    // One image XObject per detail page, named per page.
    let mut xobjects: Vec<Option<(String, Ref)>> = Vec::with_capacity(plans.len());
    for (i, asset) in assets.iter().enumerate() {
        match asset {
            Some(asset) => {
                let xobj_id = alloc();
                let name = format!("Im{}", i + 1);
                let compressed =
                    miniz_oxide::deflate::compress_to_vec_zlib(&asset.pixels, 6);
                let mut xobj = pdf.image_xobject(xobj_id, &compressed);
                xobj.filter(Filter::FlateDecode);
                xobj.width(asset.side_px as i32);
                xobj.height(asset.side_px as i32);
                xobj.color_space().device_gray();
                xobj.bits_per_component(8);
                xobjects.push(Some((name, xobj_id)));
            }
            None => xobjects.push(None),
        }
    }

    let page_w = profile.width_in * POINTS_PER_INCH;
    let page_h = profile.height_in * POINTS_PER_INCH;

    for (i, plan) in plans.iter().enumerate() {
        let content = match plan {
            LabelPlan::Summary {
                model_name,
                item_count,
            } => summary_page(profile, page_h, model_name, *item_count),
            LabelPlan::Detail {
                model_name,
                gtin,
                production_date,
                serial,
                ..
            } => detail_page(
                profile,
                page_h,
                model_name,
                gtin,
                production_date,
                &serial.prefix,
                &serial.suffix,
                xobjects[i].as_ref().map(|(name, _)| name.as_str()),
            ),
        };

        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
        pdf.stream(content_ids[i], &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(plans.len() as i32);

    for i in 0..plans.len() {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, page_w, page_h))
            .parent(pages_id)
            .contents(content_ids[i]);

        let mut resources = page.resources();
        resources.fonts().pair(Name(b"F1"), font_id);
        if let Some((name, xobj_id)) = &xobjects[i] {
            resources.x_objects().pair(Name(name.as_bytes()), *xobj_id);
        }
    }

    pdf.finish()
}

fn summary_page(profile: &PageProfile, page_h: f32, model: &str, count: usize) -> Content {
    let (x_in, y_in) = profile.summary_anchor_in;
    let text = format!("{} - TOTAL: {}", model.to_uppercase(), count);

    let mut content = Content::new();
    show_text(
        &mut content,
        &text,
        profile.summary_pt,
        x_in * POINTS_PER_INCH,
        baseline(page_h, y_in),
    );
    content
}

#[allow(clippy::too_many_arguments)]
fn detail_page(
    profile: &PageProfile,
    page_h: f32,
    model: &str,
    gtin: &str,
    date: &str,
    prefix: &str,
    suffix: &str,
    qr_name: Option<&str>,
) -> Content {
    let mut content = Content::new();

    if let Some(name) = qr_name {
        let side = profile.qr_side_in * POINTS_PER_INCH;
        let x = profile.qr_left_in * POINTS_PER_INCH;
        let y = page_h - (profile.qr_top_in + profile.qr_side_in) * POINTS_PER_INCH;
        content.save_state();
        content.transform([side, 0.0, 0.0, side, x, y]);
        content.x_object(Name(name.as_bytes()));
        content.restore_state();
    }

    let column_x = profile.column_x_in * POINTS_PER_INCH;
    let lines = [
        format!("MODEL: {}", model.to_uppercase()),
        format!("GTIN: {}", gtin),
        format!("DATE: {}", date),
    ];
    for (text, y_in) in lines.iter().zip(profile.line_ys_in) {
        show_text(
            &mut content,
            text,
            profile.body_pt,
            column_x,
            baseline(page_h, y_in),
        );
    }

    // The suffix starts where the measured prefix ends plus a small gap, so
    // its alignment holds for any prefix length.
    let serial_y = baseline(page_h, profile.line_ys_in[3]);
    let prefix_text = format!("S/N: {}", prefix).to_uppercase();
    show_text(&mut content, &prefix_text, profile.body_pt, column_x, serial_y);

    let suffix_x = column_x
        + metrics::text_width(&prefix_text, profile.body_pt)
        + profile.suffix_gap_in * POINTS_PER_INCH;
    show_text(&mut content, suffix, profile.suffix_pt, suffix_x, serial_y);

    if let Some(caption) = &profile.caption {
        let width = metrics::text_width(&caption.text, caption.size_pt);
        show_text(
            &mut content,
            &caption.text,
            caption.size_pt,
            caption.center_x_in * POINTS_PER_INCH - width / 2.0,
            baseline(page_h, caption.y_in),
        );
    }

    content
}

fn show_text(content: &mut Content, text: &str, size_pt: f32, x: f32, y: f32) {
    content
        .begin_text()
        .set_font(Name(b"F1"), size_pt)
        .next_line(x, y)
        .show(Str(&winansi(text)))
        .end_text();
}

/// Positions are specified from the top edge; PDF user space grows upward.
fn baseline(page_h: f32, y_from_top_in: f32) -> f32 {
    page_h - y_from_top_in * POINTS_PER_INCH
}

/// Latin-1 subset of WinAnsi, which covers the label text and the Spanish
/// caption. Anything outside maps to '?' rather than corrupting the stream.
fn winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF {
                code as u8
            } else {
                b'?'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SplitSerial;

    fn detail_plan(payload: &str) -> LabelPlan {
        LabelPlan::Detail {
            model_name: "X".to_string(),
            gtin: "111".to_string(),
            production_date: "2024-01".to_string(),
            serial: SplitSerial {
                prefix: "123".to_string(),
                suffix: "45".to_string(),
            },
            payload: payload.to_string(),
        }
    }

    fn page_count(bytes: &[u8]) -> usize {
        // Every page object carries /Type /Page; the page tree root carries
        // /Type /Pages, which the needle also matches once.
        let needle = b"/Type /Page";
        let total = bytes
            .windows(needle.len())
            .filter(|w| *w == needle)
            .count();
        total - 1
    }

    #[test]
    fn test_qr_asset_has_quiet_zone() {
        let asset = encode_qr("https://x/01/111/11/2024-01/21/12345").unwrap();
        assert_eq!(asset.pixels.len(), asset.side_px * asset.side_px);
        // First scaled row belongs to the quiet zone and must be white.
        assert!(asset.pixels[..asset.side_px].iter().all(|&p| p == 0xFF));
        // The symbol itself contains dark modules.
        assert!(asset.pixels.iter().any(|&p| p == 0x00));
    }

    #[test]
    fn test_oversized_payload_is_asset_failure() {
        let payload = "x".repeat(8000);
        match encode_qr(&payload) {
            Err(LabelError::AssetGenerationFailure { .. }) => {}
            other => panic!("expected asset generation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_one_page_per_plan() {
        let plans = vec![
            LabelPlan::Summary {
                model_name: "X".to_string(),
                item_count: 2,
            },
            detail_plan("https://x/01/111/11/2024-01/21/12345"),
            detail_plan("https://x/01/222/11/2024-02/21/99"),
        ];

        let bytes = render(plans, &PageProfile::landscape_2x1()).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 3);
    }

    #[tokio::test]
    async fn test_empty_plans_render_empty_document() {
        let bytes = render(Vec::new(), &PageProfile::landscape_2x1())
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(page_count(&bytes), 0);
    }

    #[tokio::test]
    async fn test_malformed_profile_fails_before_rendering() {
        let mut profile = PageProfile::landscape_2x1();
        profile.height_in = -1.0;
        let result = render(vec![detail_plan("https://x")], &profile).await;
        assert!(matches!(result, Err(LabelError::MalformedProfile { .. })));
    }

    #[test]
    fn test_winansi_keeps_latin1_and_replaces_rest() {
        assert_eq!(winansi("GARANTÍA"), b"GARANT\xcdA".to_vec());
        assert_eq!(winansi("日"), b"?".to_vec());
    }
}
