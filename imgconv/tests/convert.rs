use anyhow::Result;
use imgconv::{convert, ConvertError};
use libpixmap::{ppm, Color, Pixmap};
use mktemp::Temp;
use std::path::Path;

#[test]
fn ppm_to_bmp_and_back_preserves_pixels() -> Result<()> {
    let dir = Temp::new_dir()?;
    let original_ppm = dir.join("original.ppm");
    let intermediate_bmp = dir.join("intermediate.bmp");
    let final_ppm = dir.join("final.ppm");

    let white = Pixmap::filled(2, 2, Color::new(0xff, 0xff, 0xff));
    ppm::save(&original_ppm, &white)?;

    convert(&original_ppm, &intermediate_bmp)?;
    convert(&intermediate_bmp, &final_ppm)?;

    assert_eq!(ppm::load(&final_ppm)?, white);
    Ok(())
}

#[test]
fn unknown_input_extension_maps_to_exit_code_2() {
    let err = convert(Path::new("document.txt"), Path::new("out.bmp")).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownInputFormat(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn unknown_output_extension_maps_to_exit_code_3() {
    // output resolution fails before the input is ever opened
    let err = convert(Path::new("missing.ppm"), Path::new("out.txt")).unwrap_err();
    assert!(matches!(err, ConvertError::UnknownOutputFormat(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn unreadable_input_maps_to_exit_code_4() -> Result<()> {
    let dir = Temp::new_dir()?;
    let err = convert(&dir.join("missing.ppm"), &dir.join("out.bmp")).unwrap_err();
    assert!(matches!(err, ConvertError::Load(_)));
    assert_eq!(err.exit_code(), 4);
    Ok(())
}

#[test]
fn unwritable_output_maps_to_exit_code_5() -> Result<()> {
    let dir = Temp::new_dir()?;
    let input = dir.join("input.ppm");
    ppm::save(&input, &Pixmap::filled(1, 1, Color::BLACK))?;

    let err = convert(&input, &dir.join("no_such_dir").join("out.bmp")).unwrap_err();
    assert!(matches!(err, ConvertError::Save(_)));
    assert_eq!(err.exit_code(), 5);
    Ok(())
}
