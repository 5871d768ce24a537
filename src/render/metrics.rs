//! Advance widths for Helvetica, the base-14 font the document renderer
//! sets its text in. Values are the Adobe AFM advances in 1/1000 em units,
//! which makes text measurement exact rather than estimated.

const UNITS_PER_EM: f32 = 1000.0;

/// Advances for ASCII 0x20..=0x7E.
#[rustfmt::skip]
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Average lowercase advance, used for glyphs outside the table.
const FALLBACK_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    match c {
        ' '..='~' => ASCII_WIDTHS[c as usize - 0x20],
        // Accents do not change the advance in Helvetica; map the Spanish
        // caption letters to their base glyphs.
        'Á' | 'À' | 'Ä' => 667,
        'É' | 'È' | 'Ë' => 667,
        'Í' | 'Ì' | 'Ï' => 278,
        'Ó' | 'Ò' | 'Ö' => 778,
        'Ú' | 'Ù' | 'Ü' => 722,
        'Ñ' => 722,
        'á' | 'à' | 'ä' => 556,
        'é' | 'è' | 'ë' => 556,
        'í' | 'ì' | 'ï' => 222,
        'ó' | 'ò' | 'ö' => 556,
        'ú' | 'ù' | 'ü' => 556,
        'ñ' => 556,
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` set at `size_pt`, in points.
pub fn text_width(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * size_pt / UNITS_PER_EM
}
