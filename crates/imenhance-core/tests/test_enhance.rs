use imenhance_core::color::ycbcr::rgb_to_ycbcr;
use imenhance_core::enhance::{enhance, enhance_luma, enhance_power_law, EnhanceMode, LumaOutput};
use imenhance_core::frame::{PixelBuffer, ALPHA};
use imenhance_core::gamma::GammaCurves;

mod common;
use common::{gradient, gray, solid};

// ---------------------------------------------------------------------------
// enhance_power_law
// ---------------------------------------------------------------------------

#[test]
fn test_power_law_low_curve_on_mid_gray() {
    // round(255 * (128/255)^0.45) = 187
    let out = enhance_power_law(&gray(4, 4, 128), &GammaCurves::standard().low);
    for px in out.pixels() {
        assert_eq!(px.to_vec(), vec![187, 187, 187, 255]);
    }
}

#[test]
fn test_power_law_high_curve_darkens() {
    // round(255 * (200/255)^2.2) = 149
    let out = enhance_power_law(&gray(2, 2, 200), &GammaCurves::standard().high);
    assert_eq!(out.pixel(1, 1), [149, 149, 149, 255]);
}

#[test]
fn test_power_law_channels_independent() {
    let table = &GammaCurves::standard().low;
    let out = enhance_power_law(&solid(1, 1, 0, 128, 255), table);
    assert_eq!(out.pixel(0, 0), [0, 187, 255, 255]);
}

#[test]
fn test_power_law_does_not_touch_input() {
    let src = gradient(20, 5);
    let before = src.clone();
    let _ = enhance_power_law(&src, &GammaCurves::standard().low);
    assert_eq!(src, before);
}

// ---------------------------------------------------------------------------
// enhance_luma
// ---------------------------------------------------------------------------

#[test]
fn test_luma_preview_on_gray() {
    // Y=64 -> round(255 * (64/255)^0.45) = 137; chroma neutral.
    let out = enhance_luma(
        &gray(3, 3, 64),
        &GammaCurves::standard().low,
        LumaOutput::ChromaPreview,
    );
    assert_eq!(out.pixel(2, 2), [137, 128, 128, 255]);
}

#[test]
fn test_luma_rgb_output_on_gray() {
    let out = enhance_luma(&gray(3, 3, 64), &GammaCurves::standard().low, LumaOutput::Rgb);
    assert_eq!(out.pixel(0, 0), [137, 137, 137, 255]);
}

#[test]
fn test_luma_preview_passes_chroma_through() {
    let table = &GammaCurves::standard().high;
    let src = gradient(16, 2);
    let out = enhance_luma(&src, table, LumaOutput::ChromaPreview);
    for (s, o) in src.pixels().zip(out.pixels()) {
        let ycc = rgb_to_ycbcr(s[0], s[1], s[2]);
        assert_eq!(o[0], table.lookup(ycc.y));
        assert_eq!(o[1], ycc.cb);
        assert_eq!(o[2], ycc.cr);
    }
}

#[test]
fn test_luma_keeps_alpha() {
    let src = gradient(10, 10);
    for output in [LumaOutput::ChromaPreview, LumaOutput::Rgb] {
        let out = enhance_luma(&src, &GammaCurves::standard().low, output);
        for (s, o) in src.pixels().zip(out.pixels()) {
            assert_eq!(s[ALPHA], o[ALPHA]);
        }
    }
}

// ---------------------------------------------------------------------------
// enhance (dispatch)
// ---------------------------------------------------------------------------

#[test]
fn test_dispatch_preserves_dimensions() {
    let src = gradient(7, 3);
    for mode in EnhanceMode::ALL {
        let out = enhance(&src, mode, &GammaCurves::standard().low, LumaOutput::default());
        assert_eq!((out.width(), out.height()), (7, 3));
    }
}

#[test]
fn test_large_image_parallel_path() {
    let src = PixelBuffer::filled(400, 300, [128, 64, 200, 9]);
    let table = &GammaCurves::standard().low;
    let out = enhance(&src, EnhanceMode::FullRgb, table, LumaOutput::default());
    let expected = [table.lookup(128), table.lookup(64), table.lookup(200), 9];
    for (x, y) in [(0, 0), (399, 299), (123, 250)] {
        assert_eq!(out.pixel(x, y), expected);
    }
}

#[test]
fn test_mode_display() {
    assert_eq!(EnhanceMode::LumaOnly.to_string(), "Luminance (Y)");
    assert_eq!(EnhanceMode::FullRgb.to_string(), "Power Law (RGB)");
}
