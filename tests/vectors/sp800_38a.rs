#![cfg(feature = "test-vectors")]

// NIST SP 800-38A appendix F vectors, driven through the public mode stage.
// https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf

use aespipe::{BlockCipher, Iv, Mode, Result};
use hex_literal::hex;

const PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

const IV: Iv = hex!("000102030405060708090a0b0c0d0e0f");

const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const KEY_256: [u8; 32] = hex!(
    "603deb1015ca71be2b73aef0857d7781"
    "1f352c073b6108d72d9810a30914dff4"
);

struct TestVector {
    name: &'static str,
    mode: Mode,
    key: &'static [u8],
    ciphertext: [u8; 64],
}

const VECTORS: &[TestVector] = &[
    TestVector {
        name: "F.1.1 ECB-AES128",
        mode: Mode::Ecb,
        key: &KEY_128,
        ciphertext: hex!(
            "3ad77bb40d7a3660a89ecaf32466ef97"
            "f5d3d58503b9699de785895a96fdbaaf"
            "43b1cd7f598ece23881b00e3ed030688"
            "7b0c785e27e8ad3f8223207104725dd4"
        ),
    },
    TestVector {
        name: "F.1.5 ECB-AES256",
        mode: Mode::Ecb,
        key: &KEY_256,
        ciphertext: hex!(
            "f3eed1bdb5d2a03c064b5a7e3db181f8"
            "591ccb10d410ed26dc5ba74a31362870"
            "b6ed21b99ca6f4f9f153e7b1beafed1d"
            "23304b7a39f9f3ff067d8d8f9e24ecc7"
        ),
    },
    TestVector {
        name: "F.2.1 CBC-AES128",
        mode: Mode::Cbc,
        key: &KEY_128,
        ciphertext: hex!(
            "7649abac8119b246cee98e9b12e9197d"
            "5086cb9b507219ee95db113a917678b2"
            "73bed6b8e3c1743b7116e69e22229516"
            "3ff1caa1681fac09120eca307586e1a7"
        ),
    },
    TestVector {
        name: "F.2.5 CBC-AES256",
        mode: Mode::Cbc,
        key: &KEY_256,
        ciphertext: hex!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6"
            "9cfc4e967edb808d679f777bc6702c7d"
            "39f23369a9d9bacfa530e26304231461"
            "b2eb05e2c39be9fcda6c19078c6a9d1b"
        ),
    },
    TestVector {
        name: "F.3.13 CFB128-AES128",
        mode: Mode::Cfb,
        key: &KEY_128,
        ciphertext: hex!(
            "3b3fd92eb72dad20333449f8e83cfb4a"
            "c8a64537a0b3a93fcde3cdad9f1ce58b"
            "26751f67a3cbb140b1808cf187a4f4df"
            "c04b05357c5d1c0eeac4c66f9ff7f2e6"
        ),
    },
    TestVector {
        name: "F.3.17 CFB128-AES256",
        mode: Mode::Cfb,
        key: &KEY_256,
        ciphertext: hex!(
            "dc7e84bfda79164b7ecd8486985d3860"
            "39ffed143b28b1c832113c6331e5407b"
            "df10132415e54b92a13ed0a8267ae2f9"
            "75a385741ab9cef82031623d55b1e471"
        ),
    },
    TestVector {
        name: "F.4.1 OFB-AES128",
        mode: Mode::Ofb,
        key: &KEY_128,
        ciphertext: hex!(
            "3b3fd92eb72dad20333449f8e83cfb4a"
            "7789508d16918f03f53c52dac54ed825"
            "9740051e9c5fecf64344f7a82260edcc"
            "304c6528f659c77866a510d9c1d6ae5e"
        ),
    },
    TestVector {
        name: "F.4.5 OFB-AES256",
        mode: Mode::Ofb,
        key: &KEY_256,
        ciphertext: hex!(
            "dc7e84bfda79164b7ecd8486985d3860"
            "4febdc6740d20b3ac88f6ad82a4fb08d"
            "71ab47a086e86eedf39d1c5bba97c408"
            "0126141d67f37be8538f5a8be740e484"
        ),
    },
];

#[test]
fn nist_vectors_encrypt() -> Result<()> {
    for vector in VECTORS {
        let cipher = BlockCipher::try_from_slice(vector.key)?;
        let ct = vector.mode.encrypt_blocks(&PLAINTEXT, &cipher, &IV)?;
        assert_eq!(ct, vector.ciphertext, "{}", vector.name);
    }
    Ok(())
}

#[test]
fn nist_vectors_decrypt() -> Result<()> {
    for vector in VECTORS {
        let cipher = BlockCipher::try_from_slice(vector.key)?;
        let pt = vector.mode.decrypt_blocks(&vector.ciphertext, &cipher, &IV)?;
        assert_eq!(pt, PLAINTEXT, "{}", vector.name);
    }
    Ok(())
}
