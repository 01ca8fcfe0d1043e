//! Image cropping and JPEG output.

use crate::{
    common::*,
    error::{DatasetError, ImageOp},
};
use image::codecs::jpeg::JpegEncoder;

pub fn load_image(path: &Path) -> Result<DynamicImage, DatasetError> {
    image::open(path).map_err(|source| DatasetError::ImageIo {
        op: ImageOp::Read,
        path: path.to_owned(),
        source,
    })
}

pub fn save_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), DatasetError> {
    let to_error = |source| DatasetError::ImageIo {
        op: ImageOp::Write,
        path: path.to_owned(),
        source,
    };

    let file = File::create(path).map_err(|err| to_error(ImageError::IoError(err)))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    image.write_with_encoder(encoder).map_err(to_error)?;
    writer
        .flush()
        .map_err(|err| to_error(ImageError::IoError(err)))?;
    Ok(())
}

/// Cut out `rect` from the image.
///
/// The output is always `rect.w() x rect.h()` pixels. Parts of the rectangle
/// outside the image are black. Grayscale images stay grayscale and the others
/// become 8-bit RGB.
pub fn crop_padded(image: &DynamicImage, rect: &TLBR<f64>) -> Result<DynamicImage> {
    let [left, top, _, _] = rect
        .clone()
        .try_cast::<i64>()
        .ok_or_else(|| format_err!("crop rectangle {:?} is out of pixel range", rect))?
        .ltrb();
    let size: HW<u32> = rect
        .size()
        .try_cast()
        .ok_or_else(|| format_err!("crop rectangle {:?} is out of pixel range", rect))?;
    let (width, height) = size.wh();

    let cropped = match image {
        DynamicImage::ImageLuma8(buffer) => {
            DynamicImage::ImageLuma8(crop_buffer(buffer, left, top, width, height))
        }
        DynamicImage::ImageRgb8(buffer) => {
            DynamicImage::ImageRgb8(crop_buffer(buffer, left, top, width, height))
        }
        other => DynamicImage::ImageRgb8(crop_buffer(
            &other.to_rgb8(),
            left,
            top,
            width,
            height,
        )),
    };

    Ok(cropped)
}

fn crop_buffer<P>(
    buffer: &ImageBuffer<P, Vec<P::Subpixel>>,
    left: i64,
    top: i64,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let mut canvas = ImageBuffer::new(width, height);
    imageops::replace(&mut canvas, buffer, -left, -top);
    canvas
}

/// Crop the source image to `rect` and save it as JPEG.
///
/// Returns the size of the written image.
pub fn crop_image(
    src_path: &Path,
    dst_path: &Path,
    rect: &TLBR<f64>,
    quality: u8,
) -> Result<HW<u32>> {
    let image = load_image(src_path)?;

    let bounds = TLBR::from_tlhw([0.0, 0.0, image.height() as f64, image.width() as f64]);
    if !rect.is_within(&bounds) {
        let covered = rect.intersection_area_with(&bounds) / rect.area().max(1.0);
        debug!(
            "crop {:?} exceeds the border of '{}', {:.1}% covered, padding with black",
            rect.ltrb(),
            src_path.display(),
            covered * 100.0
        );
    }

    let cropped = crop_padded(&image, rect)?;
    save_jpeg(&cropped, dst_path, quality)?;
    Ok(HW::from_hw([cropped.height(), cropped.width()]))
}
