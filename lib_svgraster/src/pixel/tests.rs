use crate::{
    error::Error,
    pixel::{pack, pack_buffer, unpack},
};

#[test]
fn rgb_samples_pack_opaque() {
    let pixels = pack_buffer(&[255, 0, 0, 0, 255, 0], 3).unwrap();
    assert_eq!(pixels, [0xffff0000, 0xff00ff00]);
}

#[test]
fn rgba_samples_keep_their_alpha() {
    assert_eq!(pack_buffer(&[0x1a, 0x2b, 0x3c, 0x4d], 4).unwrap(), [
        0x4d1a2b3c
    ]);

    // Bit-for-bit, including fully transparent samples.
    assert_eq!(pack_buffer(&[1, 2, 3, 0], 4).unwrap(), [0x00010203]);
}

#[test]
fn pack_unpack_roundtrip() {
    for sample in [
        [0, 0, 0, 0],
        [255, 255, 255, 255],
        [0x12, 0x34, 0x56, 0x78],
        [1, 0, 0, 255],
    ] {
        let [red, green, blue, alpha] = sample;
        assert_eq!(unpack(pack(red, green, blue, alpha)), sample);
    }
}

#[test]
fn one_word_per_pixel() {
    let data = vec![0x80; 7 * 5 * 3];
    assert_eq!(pack_buffer(&data, 3).unwrap().len(), 7 * 5);

    let data = vec![0x80; 7 * 5 * 4];
    assert_eq!(pack_buffer(&data, 4).unwrap().len(), 7 * 5);
}

#[test]
fn empty_buffer_packs_to_nothing() {
    assert!(pack_buffer(&[], 4).unwrap().is_empty());
}

#[test]
fn unsupported_channel_counts_are_rejected() {
    for channels in [0, 1, 2, 5] {
        assert!(matches!(
            pack_buffer(&[0; 20], channels),
            Err(Error::UnsupportedChannelCount { .. })
        ));
    }
}

#[test]
fn truncated_buffers_are_rejected() {
    assert!(matches!(
        pack_buffer(&[0; 7], 3),
        Err(Error::TruncatedSampleBuffer { .. })
    ));
    assert!(matches!(
        pack_buffer(&[0; 6], 4),
        Err(Error::TruncatedSampleBuffer { .. })
    ));
}
