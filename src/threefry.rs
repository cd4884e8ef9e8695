//! Threefry-2x32 hash core
//!
//! 20-round, 2-word/32-bit variant of the Threefish-based cipher from
//! Salmon et al. "Parallel Random Numbers: As Easy as 1, 2, 3" (2011)

/// Rotation constants, alternating between the two groups every 4 rounds
const ROTATIONS: [[u32; 4]; 2] = [[13, 15, 26, 6], [17, 29, 16, 24]];

const PARITY: u32 = 0x1BD11BDA;

/// Threefry mix primitive: add, rotate, xor
#[inline(always)]
fn mix(x0: &mut u32, x1: &mut u32, r: u32) {
    *x0 = x0.wrapping_add(*x1);
    *x1 = x1.rotate_left(r) ^ *x0;
}

/// Threefry-2x32-20: hash one counter pair under a two-word key.
///
/// All arithmetic is modulo 2^32, so the result is bit-exact on every
/// platform. The round/injection schedule is fixed; changing it would break
/// stream compatibility with previously generated data.
#[inline(always)]
pub fn threefry2x32_pair(key: [u32; 2], ctr: [u32; 2]) -> [u32; 2] {
    let ks = [key[0], key[1], key[0] ^ key[1] ^ PARITY];
    let [mut x0, mut x1] = ctr;

    x0 = x0.wrapping_add(ks[0]);
    x1 = x1.wrapping_add(ks[1]);

    for group in 0..5u32 {
        for &r in &ROTATIONS[(group % 2) as usize] {
            mix(&mut x0, &mut x1, r);
        }
        // round-robin key injection, with the 1-based group index folded
        // into the second word
        let inject = (group as usize) + 1;
        x0 = x0.wrapping_add(ks[inject % 3]);
        x1 = x1.wrapping_add(ks[(inject + 1) % 3]).wrapping_add(group + 1);
    }

    [x0, x1]
}

/// Apply the Threefry-2x32 hash to a counter array of arbitrary length.
///
/// The counter is split into two equal halves which feed the cipher's two
/// lanes; an odd-length counter is padded with one zero word whose output is
/// dropped again. Output word `i` comes from the first cipher lane for the
/// first half of positions and from the second lane for the rest, so the
/// result has exactly the counter's length.
pub fn threefry_2x32(key: [u32; 2], counter: &[u32]) -> Vec<u32> {
    let odd = counter.len() % 2 == 1;
    let half = counter.len() / 2 + usize::from(odd);

    let mut out = vec![0u32; 2 * half];
    for i in 0..half {
        let c0 = counter[i];
        let c1 = if half + i < counter.len() {
            counter[half + i]
        } else {
            0
        };
        let [y0, y1] = threefry2x32_pair(key, [c0, c1]);
        out[i] = y0;
        out[half + i] = y1;
    }

    if odd {
        out.pop();
    }
    out
}
