// RSA Big Integer Operations
// Number theory on top of num-bigint: gcd, Bezout coefficients, inverses, powers

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor (iterative Euclid), gcd(a, 0) = a
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean Algorithm
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut a, mut b) = (a.clone(), b.clone());
    let (mut x0, mut x1) = (BigInt::zero(), BigInt::one());
    let (mut y0, mut y1) = (BigInt::one(), BigInt::zero());

    while !a.is_zero() {
        let (q, r) = b.div_rem(&a);
        b = std::mem::replace(&mut a, r);

        let y_next = &y0 - &q * &y1;
        y0 = std::mem::replace(&mut y1, y_next);
        let x_next = &x0 - &q * &x1;
        x0 = std::mem::replace(&mut x1, x_next);
    }

    (b, x0, y0)
}

/// Compute modular inverse: a^(-1) mod m
///
/// The caller must ensure gcd(a, m) = 1. Otherwise the value is meaningless,
/// but no error is raised. A zero modulus yields zero.
pub fn modular_inverse(a: &RsaBigInt, m: &RsaBigInt) -> RsaBigInt {
    if m.is_zero() {
        return RsaBigInt::zero();
    }

    let m_int = BigInt::from(m.clone());
    let (_, x, _) = extended_gcd(&BigInt::from(a.clone()), &m_int);

    // mod_floor with a positive modulus always lands in [0, m)
    x.mod_floor(&m_int).magnitude().clone()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime<R: Rng + ?Sized>(n: &RsaBigInt, iterations: u32, rng: &mut R) -> bool {
    if n < &RsaBigInt::from(2u8) {
        return false;
    }
    if n == &RsaBigInt::from(2u8) || n == &RsaBigInt::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let two = RsaBigInt::from(2u8);
    let n_minus_two = n - 2u8;

    'witness: for _ in 0..iterations {
        // Pick random witness a in [2, n-2)
        let a = rng.gen_biguint_range(&two, &n_minus_two);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    true
}
