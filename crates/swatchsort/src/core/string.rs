use crate::error::ColorFormatError;

/// Sanitize a raw color token into canonical hexadecimal form. If successful,
/// this function returns the lowercase six-digit form. It transparently
/// handles single-digit channels.
///
/// Sanitizing removes all white space, including interior white space, and
/// one leading number sign. A three-digit token expands by duplicating each
/// digit, so `#abc` becomes `aabbcc`. Anything that does not end up as
/// exactly six hexadecimal digits is an error.
pub(crate) fn normalize(token: &str) -> Result<String, ColorFormatError> {
    let stripped: String = token.chars().filter(|c| !c.is_whitespace()).collect();
    let stripped = stripped.strip_prefix('#').unwrap_or(&stripped);

    if stripped.len() != 3 && stripped.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let mut hex = String::with_capacity(6);
    if stripped.len() == 3 {
        for c in stripped.chars() {
            let c = c.to_ascii_lowercase();
            hex.push(c);
            hex.push(c);
        }
    } else {
        hex.extend(stripped.chars().map(|c| c.to_ascii_lowercase()));
    }

    Ok(hex)
}

/// Parse a canonical six-digit hexadecimal string. If successful, this
/// function returns the three coordinates as unsigned bytes.
pub(crate) fn parse_hex(hex: &str) -> Result<[u8; 3], ColorFormatError> {
    if hex.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(hex: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = hex
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_channel(hex, 0)?;
    let c2 = parse_channel(hex, 1)?;
    let c3 = parse_channel(hex, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit channels in canonical hexadecimal form, i.e., six
/// lowercase digits without a number sign.
pub(crate) fn format_hex(channels: &[u8; 3]) -> String {
    let [r, g, b] = *channels;
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod test {
    use super::{format_hex, normalize, parse_hex};
    use crate::error::ColorFormatError;

    #[test]
    fn test_normalize() -> Result<(), ColorFormatError> {
        assert_eq!(normalize("#aabbcc")?, "aabbcc");
        assert_eq!(normalize("AABBCC")?, "aabbcc");
        assert_eq!(normalize(" #AbC ")?, "aabbcc");
        assert_eq!(normalize("#abc")?, normalize("#aabbcc")?);
        assert_eq!(normalize("f00")?, "ff0000");
        assert_eq!(normalize(" 12 34 56 ")?, "123456");
        // Words spelled in hexadecimal digits are colors too.
        assert_eq!(normalize("bad")?, "bbaadd");

        assert_eq!(normalize(""), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(normalize("#"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(
            normalize("#ab"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            normalize("#aabbccdd"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(normalize("#xyz"), Err(ColorFormatError::MalformedHex));
        assert_eq!(normalize("#efghij"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_parse_and_format() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("ff0000")?, [255, 0, 0]);
        assert_eq!(parse_hex("00ff00")?, [0, 255, 0]);
        assert_eq!(parse_hex("336699")?, [0x33, 0x66, 0x99]);
        assert_eq!(format_hex(&[0x33, 0x66, 0x99]), "336699");

        // Round-trip through parse and format.
        for hex in ["000000", "c0c0c0", "808080", "ffffff", "123abc"] {
            assert_eq!(format_hex(&parse_hex(hex)?), hex);
        }
        Ok(())
    }
}
