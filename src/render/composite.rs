use crate::foundation::{
    error::{SeaglassError, SeaglassResult},
    math::{mul_div255_u8, mul_div255_u16},
};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Which mask channel scales the coverage of masked content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskChannel {
    /// Premultiplied red: white keeps, black or transparent removes.
    #[default]
    Red,
    /// Alpha: any opaque mask pixel keeps.
    Alpha,
}

impl MaskChannel {
    /// Coverage in `0..=255` for a premultiplied mask pixel.
    pub fn coverage(self, mask: PremulRgba8) -> u8 {
        match self {
            Self::Red => mask[0],
            Self::Alpha => mask[3],
        }
    }
}

/// Source-over for premultiplied pixels, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    let op = (opacity * 255.0).round() as u16;
    let sa = mul_div255_u16(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255 - sa;
    let mut out = [0u8; 4];
    for (i, o) in out.iter_mut().enumerate() {
        let s = mul_div255_u16(u16::from(src[i]), op);
        let d = mul_div255_u16(u16::from(dst[i]), inv);
        *o = (s + d).min(255) as u8;
    }
    out
}

/// Scale every channel of a premultiplied pixel by `coverage / 255`.
pub fn scale(px: PremulRgba8, coverage: u8) -> PremulRgba8 {
    match coverage {
        0 => [0; 4],
        255 => px,
        c => px.map(|v| mul_div255_u8(u16::from(v), u16::from(c))),
    }
}

/// Undo premultiplication for encoders that expect straight alpha.
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    match a {
        0 => [0; 4],
        255 => px,
        _ => {
            let a16 = u16::from(a);
            let un = |c: u8| ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8;
            [un(px[0]), un(px[1]), un(px[2]), a]
        }
    }
}

fn check_lengths(op: &str, a: &[u8], b: &[u8]) -> SeaglassResult<()> {
    if a.len() != b.len() || !a.len().is_multiple_of(4) {
        return Err(SeaglassError::render(format!(
            "{op} expects equal-length rgba8 buffers ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

/// Composite `src` over `dst` pixel by pixel.
pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> SeaglassResult<()> {
    check_lengths("over_in_place", dst, src)?;
    if opacity <= 0.0 {
        return Ok(());
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Multiply `content` by the chosen channel of an aligned `mask` buffer.
pub fn mask_in_place(content: &mut [u8], mask: &[u8], channel: MaskChannel) -> SeaglassResult<()> {
    check_lengths("mask_in_place", content, mask)?;
    for (c, m) in content.chunks_exact_mut(4).zip(mask.chunks_exact(4)) {
        let coverage = channel.coverage([m[0], m[1], m[2], m[3]]);
        let out = scale([c[0], c[1], c[2], c[3]], coverage);
        c.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
