/// Demonstrates a conversion using the codec modules directly, without
/// going through the [`libpixmap::Format`] dispatcher
use libpixmap::{bmp, ppm};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: ppm_to_bmp <input.ppm> <output.bmp>");
    };

    let pixmap = ppm::load(&input)?;
    println!("loaded {}x{} pixels from {input}", pixmap.width(), pixmap.height());
    bmp::save(&output, &pixmap)?;
    Ok(())
}
