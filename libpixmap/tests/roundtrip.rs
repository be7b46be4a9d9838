mod common;

use anyhow::Result;
use common::gradient;
use libpixmap::{bmp, jpeg, ppm};
use mktemp::Temp;

#[test]
fn bmp_roundtrip_preserves_pixels() -> Result<()> {
    for (width, height) in [(1, 1), (4, 7), (33, 1), (64, 64)] {
        let original = gradient(width, height);
        let tmp = Temp::new_file()?;
        bmp::save(&tmp, &original)?;
        assert_eq!(bmp::load(&tmp)?, original, "{width}x{height}");
    }
    Ok(())
}

#[test]
fn ppm_roundtrip_preserves_pixels() -> Result<()> {
    for (width, height) in [(1, 1), (4, 7), (33, 1), (64, 64)] {
        let original = gradient(width, height);
        let tmp = Temp::new_file()?;
        ppm::save(&tmp, &original)?;
        assert_eq!(ppm::load(&tmp)?, original, "{width}x{height}");
    }
    Ok(())
}

#[test]
fn bmp_roundtrip_survives_unaligned_width() -> Result<()> {
    // 5 pixels are 15 row bytes, padded to a 16-byte stride
    let original = gradient(5, 3);
    let tmp = Temp::new_file()?;
    bmp::save(&tmp, &original)?;

    let raw = std::fs::read(&tmp)?;
    assert_eq!(raw.len(), 54 + 16 * 3);
    assert_eq!(bmp::load(&tmp)?, original);
    Ok(())
}

#[test]
fn bmp_save_load_save_is_byte_identical() -> Result<()> {
    let first = Temp::new_file()?;
    let second = Temp::new_file()?;
    bmp::save(&first, &gradient(17, 9))?;
    bmp::save(&second, &bmp::load(&first)?)?;

    let hash_1 = sha256::try_digest(&first).unwrap();
    let hash_2 = sha256::try_digest(&second).unwrap();
    assert_eq!(hash_1, hash_2);
    Ok(())
}

#[test]
fn jpeg_delegate_roundtrip_preserves_dimensions() -> Result<()> {
    // JPEG is lossy, so only the dimensions survive exactly
    let original = gradient(32, 24);
    let tmp = Temp::new_file()?;
    jpeg::save(&tmp, &original)?;

    let reloaded = jpeg::load(&tmp)?;
    assert_eq!(reloaded.width(), 32);
    assert_eq!(reloaded.height(), 24);
    Ok(())
}
