//! Short Weierstrass curve parameters `y² = x³ + a·x + b`

/// Size in bytes of every encoded parameter below
pub const PARAM_SIZE: usize = 32;

/// Parameters of a short Weierstrass curve over a prime field.
///
/// All values are big-endian, left-padded to [`PARAM_SIZE`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeierstrassParams {
    /// Human readable curve name
    pub name: &'static str,
    /// Field prime p
    pub p: [u8; PARAM_SIZE],
    /// Coefficient a, already reduced mod p
    pub a: [u8; PARAM_SIZE],
    /// Coefficient b
    pub b: [u8; PARAM_SIZE],
    /// Order n of the base point
    pub n: [u8; PARAM_SIZE],
    /// Cofactor h
    pub h: u32,
    /// Base point x-coordinate
    pub g_x: [u8; PARAM_SIZE],
    /// Base point y-coordinate
    pub g_y: [u8; PARAM_SIZE],
}

/// NIST P-256 (secp256r1), FIPS 186-5 / SP 800-186
pub const NIST_P256: WeierstrassParams = WeierstrassParams {
    name: "P-256",
    // p = 2^256 - 2^224 + 2^192 + 2^96 - 1
    p: [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff,
    ],
    // a = -3 mod p
    a: [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xfc,
    ],
    b: [
        0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86,
        0xbc, 0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2,
        0x60, 0x4b,
    ],
    n: [
        0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xbc, 0xe6, 0xfa, 0xad, 0xa7, 0x17, 0x9e, 0x84, 0xf3, 0xb9, 0xca, 0xc2, 0xfc, 0x63,
        0x25, 0x51,
    ],
    h: 1,
    g_x: [
        0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40,
        0xf2, 0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98,
        0xc2, 0x96,
    ],
    g_y: [
        0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f, 0x9e,
        0x16, 0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf,
        0x51, 0xf5,
    ],
};
