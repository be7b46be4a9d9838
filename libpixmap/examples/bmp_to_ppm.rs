/// Demonstrates a conversion driven entirely by file extensions, the way
/// the `imgconv` binary does it
use libpixmap::Format;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next().map(PathBuf::from), args.next().map(PathBuf::from))
    else {
        anyhow::bail!("usage: bmp_to_ppm <input.bmp> <output.ppm>");
    };

    let pixmap = Format::from_path(&input)?.load(&input)?;
    Format::from_path(&output)?.save(&output, &pixmap)?;
    Ok(())
}
