use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn over_with_opaque_src_replaces_dst() {
    assert_eq!(
        premul_over_px([10, 20, 30, 255], [1, 2, 3, 255]),
        [1, 2, 3, 255]
    );
}

#[test]
fn over_with_transparent_src_keeps_dst() {
    assert_eq!(
        premul_over_px([10, 20, 30, 255], [0, 0, 0, 0]),
        [10, 20, 30, 255]
    );
}
