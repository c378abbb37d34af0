//! Image loading and JPEG compression.
use crate::Error;
use ::image::{
    codecs::jpeg::JpegEncoder, DynamicImage, ExtendedColorType, GrayImage, ImageReader, Luma, Rgb,
};
use log::debug;
use std::path::Path;

/// Value of `CompressedImage.format` for JPEG payloads.
pub const JPEG_FORMAT: &str = "jpeg";

/// Read the image at `path` and convert it to 8 bit grayscale.
///
/// The container format is guessed from the content, not the extension.
/// Color is reduced with Rec.601 weights, see [`luma_601`].
pub fn load_grayscale(path: &Path) -> Result<GrayImage, Error> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    debug!(
        "Loaded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(luma_601(&image))
}

/// Grayscale with the BT.601 weights OpenCV's `IMREAD_GRAYSCALE` uses, in the
/// same 14 bit fixed point. `DynamicImage::to_luma8` weighs with Rec.709 and
/// gives different bytes for color input. Alpha is dropped.
pub fn luma_601(image: &DynamicImage) -> GrayImage {
    if !image.color().has_color() {
        return image.to_luma8();
    }
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        let luma =
            (u32::from(r) * 4899 + u32::from(g) * 9617 + u32::from(b) * 1868 + (1 << 13)) >> 14;
        Luma([luma as u8])
    })
}

/// Compress a grayscale image as baseline JPEG.
pub fn encode_jpeg(image: &GrayImage, quality: u8) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality).encode(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::L8,
    )?;
    Ok(buf)
}

/// Load `path` in grayscale and return its JPEG bytes.
pub fn compress(path: &Path, quality: u8) -> Result<Vec<u8>, Error> {
    let image = load_grayscale(path)?;
    encode_jpeg(&image, quality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::image::{RgbImage, Rgba, RgbaImage};

    #[test]
    fn color_input_becomes_single_channel_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.png");
        RgbImage::from_pixel(16, 8, Rgb([200, 10, 10]))
            .save(&path)
            .unwrap();

        let gray = load_grayscale(&path).unwrap();
        assert_eq!(gray.dimensions(), (16, 8));

        let jpeg = encode_jpeg(&gray, 95).unwrap();
        assert_eq!(&jpeg[..2], &[0xff, 0xd8]);

        let decoded = ::image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.color(), ::image::ColorType::L8);
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn color_weights_match_bt601() {
        let mut rgb = RgbImage::new(4, 1);
        rgb.put_pixel(0, 0, Rgb([200, 10, 10]));
        rgb.put_pixel(1, 0, Rgb([0, 255, 0]));
        rgb.put_pixel(2, 0, Rgb([0, 0, 255]));
        rgb.put_pixel(3, 0, Rgb([255, 255, 255]));

        let gray = luma_601(&DynamicImage::ImageRgb8(rgb));
        assert_eq!(gray.as_raw(), &[67, 150, 29, 255]);
    }

    #[test]
    fn alpha_is_ignored_and_gray_passes_through() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([0, 255, 0, 0]));
        assert_eq!(luma_601(&DynamicImage::ImageRgba8(rgba)).as_raw(), &[150]);

        let gray = GrayImage::from_pixel(2, 2, Luma([77]));
        assert_eq!(luma_601(&DynamicImage::ImageLuma8(gray.clone())), gray);
    }

    #[test]
    fn format_is_guessed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("frame.png");
        GrayImage::new(4, 4).save(&png).unwrap();
        let misnamed = dir.path().join("frame.jpg.bak");
        std::fs::rename(&png, &misnamed).unwrap();

        assert!(compress(&misnamed, 90).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = compress(Path::new("/nonexistent/frame.jpg"), 95).unwrap_err();
        assert!(matches!(err, Error::IOError(_)));
    }

    #[test]
    fn garbage_is_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = compress(&path, 95).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
