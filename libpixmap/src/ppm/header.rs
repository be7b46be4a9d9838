use super::{MAGIC, MAX_VALUE};
use crate::error::Error;
use nom::{
    bytes::complete::tag,
    character::complete::{digit1, multispace1},
    combinator::map_res,
    sequence::{pair, tuple},
    IResult,
};

/// Parsed PPM header values, with the max color value already validated
#[derive(Debug, Eq, PartialEq)]
pub(super) struct PpmHeader {
    pub width: u16,
    pub height: u16,
}

fn number(input: &[u8]) -> IResult<&[u8], u16> {
    map_res(map_res(digit1, std::str::from_utf8), str::parse)(input)
}

fn magic(input: &[u8]) -> IResult<&[u8], (&[u8], &[u8])> {
    // the magic must be the exact token "P6", so it has to be followed by
    // at least one whitespace byte
    pair(tag(MAGIC), multispace1)(input)
}

fn dimensions(input: &[u8]) -> IResult<&[u8], (u16, u16, u16)> {
    let (rest, (width, _, height, _, max_value, _)) = tuple((
        number,
        multispace1,
        number,
        multispace1,
        number,
        // exactly one newline separates the header from the pixel data
        tag("\n"),
    ))(input)?;
    Ok((rest, (width, height, max_value)))
}

/// Parses the ASCII header off the front of `input`, returning the
/// remaining pixel data and the header values
pub(super) fn parse(input: &[u8]) -> Result<(&[u8], PpmHeader), Error> {
    let (rest, _) = magic(input).map_err(|_| Error::PpmMagic)?;
    let (rest, (width, height, max_value)) = dimensions(rest).map_err(|_| Error::PpmHeader)?;
    if max_value != MAX_VALUE {
        return Err(Error::PpmMaxValue(max_value));
    }
    Ok((rest, PpmHeader { width, height }))
}
