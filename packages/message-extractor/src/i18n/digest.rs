//! Digest Module
//!
//! Message fingerprints used to deduplicate extracted messages.

use super::message::Message;

/// Fingerprint of a message: the SHA-1 of its content and meaning. The
/// description does not take part.
pub fn message_id(message: &Message) -> String {
    compute_msg_id(&message.content, &message.meaning)
}

/// The meaning is length-prefixed so that no two `(content, meaning)` pairs
/// share an input.
pub fn compute_msg_id(content: &str, meaning: &str) -> String {
    sha1(&format!("{}:{}{}", meaning.len(), meaning, content))
}

/// Compute the SHA1 of the given string
///
/// WARNING: this function has not been designed nor tested with security in mind.
/// DO NOT USE IT IN A SECURITY SENSITIVE CONTEXT.
pub fn sha1(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    let bit_len = (bytes.len() as u64).wrapping_mul(8);
    bytes.push(0x80);
    while bytes.len() % 64 != 56 {
        bytes.push(0);
    }
    bytes.extend_from_slice(&bit_len.to_be_bytes());

    let mut h: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];
    let mut w = [0u32; 80];

    for block in bytes.chunks_exact(64) {
        for (j, word) in block.chunks_exact(4).enumerate() {
            w[j] = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
        }
        for j in 16..80 {
            w[j] = (w[j - 3] ^ w[j - 8] ^ w[j - 14] ^ w[j - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = h;
        for (j, word) in w.iter().enumerate() {
            let (f, k) = fk(j, b, c, d);
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (acc, value) in h.iter_mut().zip([a, b, c, d, e]) {
            *acc = acc.wrapping_add(value);
        }
    }

    h.iter().map(|word| format!("{:08x}", word)).collect()
}

fn fk(index: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    if index < 20 {
        ((b & c) | (!b & d), 0x5a827999)
    } else if index < 40 {
        (b ^ c ^ d, 0x6ed9eba1)
    } else if index < 60 {
        ((b & c) | (b & d) | (c & d), 0x8f1bbcdc)
    } else {
        (b ^ c ^ d, 0xca62c1d6)
    }
}
