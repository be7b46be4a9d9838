use libpixmap::{Color, Pixmap};

/// Builds a deterministic pattern that puts different values in all three
/// channels of every pixel
pub fn gradient(width: u16, height: u16) -> Pixmap {
    let mut pixmap = Pixmap::filled(width, height, Color::BLACK);
    for y in 0..height {
        if let Some(row) = pixmap.row_mut(y) {
            for (x, pixel) in row.iter_mut().enumerate() {
                let x = (x % 256) as u8;
                let y = (y % 256) as u8;
                *pixel = Color::new(x, y.wrapping_mul(3), x.wrapping_add(y));
            }
        }
    }
    pixmap
}
