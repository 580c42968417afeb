//! Address scrambling for `@p` names.
//!
//! Planet-sized addresses (and the low half of moon-sized ones) are passed
//! through a four-round Feistel cipher before being rendered, so that
//! numerically adjacent planets get unrelated names. `fein` scrambles and
//! `fynd` reverses it; every other value passes through untouched.

use std::io::Cursor;

/// Round keys, one murmur3 seed per Feistel round.
const RAKU: [u32; 4] = [0xb76d_5eed, 0xee28_1300, 0x85bc_ae01, 0x4b38_7af7];

const ROUNDS: u32 = 4;
const A: u64 = 0xffff;
const B: u64 = 0x1_0000;
const K: u64 = 0xffff_ffff;

const PLANET_FLOOR: u128 = 0x1_0000;
const PLANET_CEIL: u128 = 0xffff_ffff;
const MOON_FLOOR: u128 = 0x1_0000_0000;
const MOON_CEIL: u128 = 0xffff_ffff_ffff_ffff;
const HIGH_HALF: u128 = 0xffff_ffff_0000_0000;

/// Scramble an address.
pub fn fein(value: u128) -> u128 {
    match value {
        PLANET_FLOOR..=PLANET_CEIL => PLANET_FLOOR + u128::from(feis((value - PLANET_FLOOR) as u64)),
        MOON_FLOOR..=MOON_CEIL => (value & HIGH_HALF) | fein(value & PLANET_CEIL),
        _ => value,
    }
}

/// Unscramble an address; the inverse of [`fein`].
pub fn fynd(value: u128) -> u128 {
    match value {
        PLANET_FLOOR..=PLANET_CEIL => PLANET_FLOOR + u128::from(tail((value - PLANET_FLOOR) as u64)),
        MOON_FLOOR..=MOON_CEIL => (value & HIGH_HALF) | fynd(value & PLANET_CEIL),
        _ => value,
    }
}

/// Round function: murmur3 over the low two bytes, little-endian.
fn round_key(round: u32, arg: u64) -> u64 {
    let bytes = [(arg & 0xff) as u8, ((arg >> 8) & 0xff) as u8];
    let hash = murmur3::murmur3_32(&mut Cursor::new(bytes), RAKU[round as usize])
        .expect("hashing an in-memory buffer cannot fail");
    u64::from(hash)
}

fn feis(arg: u64) -> u64 {
    let scrambled = fe(arg);
    if scrambled < K { scrambled } else { fe(scrambled) }
}

fn tail(arg: u64) -> u64 {
    let restored = fen(arg);
    if restored < K { restored } else { fen(restored) }
}

fn fe(m: u64) -> u64 {
    let mut ell = m % A;
    let mut arr = m / A;
    for j in 1..=ROUNDS {
        let eff = round_key(j - 1, arr);
        let next = if j % 2 != 0 { (ell + eff) % A } else { (ell + eff) % B };
        ell = arr;
        arr = next;
    }

    if ROUNDS % 2 != 0 || arr == A {
        A * arr + ell
    } else {
        A * ell + arr
    }
}

fn fen(m: u64) -> u64 {
    let (ahh, ale) = if ROUNDS % 2 != 0 { (m / A, m % A) } else { (m % A, m / A) };
    let (mut ell, mut arr) = if ale == A { (ahh, ale) } else { (ale, ahh) };

    for j in (1..=ROUNDS).rev() {
        let eff = round_key(j - 1, ell);
        let next = if j % 2 != 0 {
            (arr + A - (eff % A)) % A
        } else {
            (arr + B - (eff % B)) % B
        };
        arr = ell;
        ell = next;
    }

    A * arr + ell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_key_matches_murmur3_x86_32() {
        assert_eq!(round_key(0, 0), 0xbe04_23ff);
        assert_eq!(round_key(3, 0x1234), 0x4fe6_b307);
    }

    #[test]
    fn test_galaxies_and_stars_pass_through() {
        for value in [0u128, 1, 255, 256, 0xffff] {
            assert_eq!(fein(value), value);
            assert_eq!(fynd(value), value);
        }
    }

    #[test]
    fn test_known_planet_scrambles() {
        assert_eq!(fein(0x1_0000), 0x423e_60bf);
        assert_eq!(fein(1_624_961_343), 0x046f_7f4f);
        assert_eq!(fein(0xffff_ffff), 0xbba4_dcce);
    }

    #[test]
    fn test_moon_keeps_high_half() {
        let moon = (3u128 << 32) | 0x1_0000;
        assert_eq!(fein(moon), 0x3_423e_60bf);
        assert_eq!(fynd(0x3_423e_60bf), moon);
    }

    #[test]
    fn test_comets_pass_through() {
        let comet = u128::MAX - 7;
        assert_eq!(fein(comet), comet);
        assert_eq!(fynd(comet), comet);
    }

    #[test]
    fn test_fynd_inverts_fein() {
        let samples = [
            0x1_0000u128,
            0x1_0001,
            0x1234_5678,
            0x8000_0000,
            0xfffe_ffff,
            0xffff_ffff,
            0xdead_beef_0000_ffff,
            0x0123_4567_89ab_cdef,
        ];
        for value in samples {
            assert_eq!(fynd(fein(value)), value, "round trip failed for {value:#x}");
        }
    }
}
