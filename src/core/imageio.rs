//! Reading and writing of the images light probes, lookup tables and
//! renders are stored in. Colour images follow the usual conventions:
//! Radiance `.hdr` files carry linear radiance, every other format is
//! taken to be 8-bit sRGB. Data images such as the DFG table are
//! neither; they are read without any transfer curve and written as
//! 32-bit float OpenEXR so every channel keeps its own precision.

// std
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
// others
use image::codecs::hdr::{HdrDecoder, HdrEncoder};
use image::io::Reader;
use image::{ImageFormat, Rgb, Rgb32FImage};
use log::debug;
// lighting
use crate::core::error::{LightingError, Result};
use crate::core::geometry::Point2i;
use crate::core::pbrt::{clamp_t, gamma_correct, Float, Spectrum};

fn image_error(path: &Path, source: image::ImageError) -> LightingError {
    LightingError::Image {
        path: path.to_path_buf(),
        source,
    }
}

fn is_hdr(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("hdr"))
        .unwrap_or(false)
}

fn check_size(resolution: &Point2i, texels: &[Spectrum]) -> Result<()> {
    if resolution.x <= 0
        || resolution.y <= 0
        || texels.len() != (resolution.x * resolution.y) as usize
    {
        return Err(LightingError::InvalidImage(format!(
            "{} texels for a {}x{} image",
            texels.len(),
            resolution.x,
            resolution.y
        )));
    }
    Ok(())
}

/// Read an image as linear RGB texels in row-major order.
pub fn read_image(path: &Path) -> Result<(Point2i, Vec<Spectrum>)> {
    if is_hdr(path) {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let hdr = HdrDecoder::with_strictness(reader, false).map_err(|e| image_error(path, e))?;
        let meta = hdr.metadata();
        let resolution: Point2i = Point2i {
            x: meta.width as i32,
            y: meta.height as i32,
        };
        let mut texels: Vec<Spectrum> =
            vec![Spectrum::default(); (resolution.x * resolution.y) as usize];
        hdr.read_image_transform(
            |p| {
                let rgb = p.to_hdr();
                Spectrum::rgb(rgb[0], rgb[1], rgb[2])
            },
            &mut texels,
        )
        .map_err(|e| image_error(path, e))?;
        debug!("Read {:?} ({}x{} HDR)", path, resolution.x, resolution.y);
        Ok((resolution, texels))
    } else {
        let img = image::open(path)
            .map_err(|e| image_error(path, e))?
            .to_rgb8();
        let resolution: Point2i = Point2i {
            x: img.width() as i32,
            y: img.height() as i32,
        };
        let texels: Vec<Spectrum> = img
            .pixels()
            .map(|p| Spectrum::from_srgb(&[p[0], p[1], p[2]]))
            .collect();
        debug!("Read {:?} ({}x{} sRGB)", path, resolution.x, resolution.y);
        Ok((resolution, texels))
    }
}

/// Read an image holding data rather than colour. Texel values are
/// taken as stored, 8 and 16-bit integer formats normalized to [0, 1].
/// The format is detected from the file contents.
pub fn read_image_linear(path: &Path) -> Result<(Point2i, Vec<Spectrum>)> {
    let img = Reader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| image_error(path, e))?
        .to_rgb32f();
    let resolution: Point2i = Point2i {
        x: img.width() as i32,
        y: img.height() as i32,
    };
    let texels: Vec<Spectrum> = img
        .pixels()
        .map(|p| Spectrum::from_rgb(&[p[0], p[1], p[2]]))
        .collect();
    debug!("Read {:?} ({}x{} linear)", path, resolution.x, resolution.y);
    Ok((resolution, texels))
}

/// Write texels unchanged as a 32-bit float OpenEXR file, whatever the
/// extension of `path`.
pub fn write_exr(path: &Path, resolution: &Point2i, texels: &[Spectrum]) -> Result<()> {
    check_size(resolution, texels)?;
    let data: Vec<f32> = texels.iter().flat_map(|s| s.c.iter().copied()).collect();
    let img: Rgb32FImage = Rgb32FImage::from_raw(resolution.x as u32, resolution.y as u32, data)
        .ok_or_else(|| {
            LightingError::InvalidImage(format!(
                "float buffer does not fit a {}x{} image",
                resolution.x, resolution.y
            ))
        })?;
    img.save_with_format(path, ImageFormat::OpenExr)
        .map_err(|e| image_error(path, e))
}

/// Write linear texels to a Radiance `.hdr` file.
pub fn write_hdr(path: &Path, resolution: &Point2i, texels: &[Spectrum]) -> Result<()> {
    check_size(resolution, texels)?;
    let data: Vec<Rgb<f32>> = texels.iter().map(|s| Rgb(s.to_rgb())).collect();
    let writer = BufWriter::new(File::create(path)?);
    HdrEncoder::new(writer)
        .encode(&data[..], resolution.x as usize, resolution.y as usize)
        .map_err(|e| image_error(path, e))
}

/// Gamma correct linear texels and write them as an 8-bit image, the
/// format follows from the file extension.
pub fn write_image(path: &Path, resolution: &Point2i, texels: &[Spectrum]) -> Result<()> {
    check_size(resolution, texels)?;
    let mut buffer: Vec<u8> = Vec::with_capacity(texels.len() * 3);
    for s in texels {
        for c in s.c.iter() {
            // 8-bit format; apply gamma
            buffer.push(clamp_t(
                255.0 as Float * gamma_correct(*c) + 0.5,
                0.0 as Float,
                255.0 as Float,
            ) as u8);
        }
    }
    image::save_buffer(
        path,
        &buffer,
        resolution.x as u32,
        resolution.y as u32,
        image::ColorType::Rgb8,
    )
    .map_err(|e| image_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pbrt::inverse_gamma_correct;

    fn gradient() -> (Point2i, Vec<Spectrum>) {
        let res = Point2i { x: 4, y: 2 };
        let texels = (0..8)
            .map(|i| Spectrum::rgb(i as Float / 8.0, 0.5, 1.0 - i as Float / 8.0))
            .collect();
        (res, texels)
    }

    #[test]
    fn png_round_trip_is_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.png");
        let (res, texels) = gradient();
        write_image(&path, &res, &texels).unwrap();
        let (read_res, read) = read_image(&path).unwrap();
        assert_eq!(read_res, res);
        for (a, b) in texels.iter().zip(read.iter()) {
            for c in 0..3 {
                assert!((a.c[c] - b.c[c]).abs() < 0.01, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn hdr_round_trip_keeps_large_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bright.hdr");
        let res = Point2i { x: 2, y: 2 };
        let texels = vec![
            Spectrum::rgb(10.0, 0.5, 0.25),
            Spectrum::new(100.0),
            Spectrum::new(0.0),
            Spectrum::rgb(1.0, 2.0, 3.0),
        ];
        write_hdr(&path, &res, &texels).unwrap();
        let (read_res, read) = read_image(&path).unwrap();
        assert_eq!(read_res, res);
        for (a, b) in texels.iter().zip(read.iter()) {
            for c in 0..3 {
                // shared exponent, so precision follows the largest channel
                let tolerance = 0.02 * a.max_component_value() + 1e-6;
                assert!((a.c[c] - b.c[c]).abs() <= tolerance, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn linear_read_keeps_stored_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.png");
        image::save_buffer(&path, &[128, 64, 200], 1, 1, image::ColorType::Rgb8).unwrap();
        let (res, linear) = read_image_linear(&path).unwrap();
        assert_eq!(res, Point2i { x: 1, y: 1 });
        assert!((linear[0][0] - 128.0 / 255.0).abs() < 1e-6);
        assert!((linear[0][1] - 64.0 / 255.0).abs() < 1e-6);
        assert!((linear[0][2] - 200.0 / 255.0).abs() < 1e-6);
        // the colour path decodes sRGB
        let (_, colour) = read_image(&path).unwrap();
        assert!((colour[0][0] - inverse_gamma_correct(128.0 / 255.0)).abs() < 1e-6);
    }

    #[test]
    fn exr_keeps_small_channels_next_to_large_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.exr");
        let res = Point2i { x: 2, y: 1 };
        let texels = vec![Spectrum::rgb(0.95, 0.012, 1.0), Spectrum::rgb(0.5, 0.0003, 1.2)];
        write_exr(&path, &res, &texels).unwrap();
        let (read_res, read) = read_image_linear(&path).unwrap();
        assert_eq!(read_res, res);
        for (a, b) in texels.iter().zip(read.iter()) {
            for c in 0..3 {
                assert!((a[c] - b[c]).abs() < 1e-6, "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_image(&dir.path().join("nothing.png")).is_err());
        assert!(read_image(&dir.path().join("nothing.hdr")).is_err());
        assert!(read_image_linear(&dir.path().join("nothing.exr")).is_err());
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let res = Point2i { x: 3, y: 3 };
        let r = write_image(&dir.path().join("x.png"), &res, &[Spectrum::new(1.0)]);
        assert!(r.is_err());
    }
}
