//! HMAC-SHA256 test vectors from RFC 4231, plus streaming behavior.

use hex_literal::hex;
use hmac_prng::{hmac_sha256, Error, HmacSha256};

/// Compute a tag with the message absorbed in the given pieces.
fn streaming_tag(key: &[u8], pieces: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new();
    mac.set_key(key).expect("set_key");
    mac.init();
    for piece in pieces {
        mac.update(piece);
    }

    let mut tag = [0u8; 32];
    mac.finalize_into(&mut tag);
    tag
}

#[test]
fn rfc4231_case_1() {
    let tag = hmac_sha256(&[0x0b; 20], b"Hi There").expect("hmac");
    assert_eq!(
        tag,
        hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
    );
}

#[test]
fn rfc4231_case_2() {
    let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?").expect("hmac");
    assert_eq!(
        tag,
        hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
}

#[test]
fn rfc4231_case_3() {
    let tag = hmac_sha256(&[0xaa; 20], &[0xdd; 50]).expect("hmac");
    assert_eq!(
        tag,
        hex!("773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe")
    );
}

#[test]
fn rfc4231_case_4() {
    let key = hex!("0102030405060708090a0b0c0d0e0f10111213141516171819");
    let tag = hmac_sha256(&key, &[0xcd; 50]).expect("hmac");
    assert_eq!(
        tag,
        hex!("82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b")
    );
}

#[test]
fn rfc4231_case_5_truncated() {
    let tag = hmac_sha256(&[0x0c; 20], b"Test With Truncation").expect("hmac");
    assert_eq!(tag[..16], hex!("a3b6167473100ee06e0c796c2955552b"));
}

#[test]
fn rfc4231_case_6_oversize_key() {
    let tag = hmac_sha256(
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
    )
    .expect("hmac");
    assert_eq!(
        tag,
        hex!("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
    );
}

#[test]
fn rfc4231_case_7_oversize_key_and_data() {
    let tag = hmac_sha256(
        &[0xaa; 131],
        &b"This is a test using a larger than block-size key and a larger \
           than block-size data. The key needs to be hashed before being \
           used by the HMAC algorithm."[..],
    )
    .expect("hmac");
    assert_eq!(
        tag,
        hex!("9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2")
    );
}

#[test]
fn tag_is_independent_of_update_splits() {
    let key = b"Jefe";
    let msg = b"what do ya want for nothing?";

    let whole = streaming_tag(key, &[msg]);
    let split = streaming_tag(key, &[&msg[..3], &[], &msg[3..17], &msg[17..]]);
    let byte_at_a_time = {
        let mut mac = HmacSha256::new();
        mac.set_key(key).expect("set_key");
        mac.init();
        for byte in msg {
            mac.update(core::slice::from_ref(byte));
        }
        let mut tag = [0u8; 32];
        mac.finalize_into(&mut tag);
        tag
    };

    assert_eq!(whole, split);
    assert_eq!(whole, byte_at_a_time);
    assert_eq!(
        whole,
        hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
}

#[test]
fn empty_message() {
    let key = [0x0b; 32];

    let no_update = streaming_tag(&key, &[]);
    let empty_update = streaming_tag(&key, &[&[]]);
    assert_eq!(no_update, empty_update);
}

#[test]
fn empty_key_rejected() {
    assert_eq!(hmac_sha256(&[], b"data"), Err(Error::InvalidInput));
}

#[test]
fn oversize_key_equals_keying_with_its_digest() {
    use sha2::{Digest, Sha256};

    let long_key = [0xaa; 131];
    let folded = Sha256::digest(long_key);

    assert_eq!(
        hmac_sha256(&long_key, b"message").expect("hmac"),
        hmac_sha256(folded.as_slice(), b"message").expect("hmac"),
    );
}

#[test]
fn key_schedule_pads_short_keys_with_zeros() {
    // A key and its zero-extension to the block size must produce the
    // same schedule, hence the same tag.
    let mut padded = [0x42u8; 64];
    padded[63] = 0;

    assert_eq!(
        hmac_sha256(&padded[..63], b"msg").expect("hmac"),
        hmac_sha256(&padded, b"msg").expect("hmac"),
    );
}
