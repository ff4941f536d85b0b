pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Source-over for one premultiplied RGBA8 pixel.
pub(crate) fn premul_over_px(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let inv = 255u16 - u16::from(src[3]);
    std::array::from_fn(|i| {
        let v = u16::from(src[i]) + mul_div255_u16(u16::from(dst[i]), inv);
        v.min(255) as u8
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
