use crate::primitives::KeyInt;

/// Returns `true` iff `value` is prime.
///
/// Trial division by 2 and then by odd divisors up to `sqrt(value)`.
/// `0` and `1` are not prime.
pub fn is_prime<T: KeyInt>(value: T) -> bool {
    let two = T::two();

    if value < two {
        return false;
    }

    if value == two {
        return true;
    }

    if (value % two).is_zero() {
        return false;
    }

    let mut divisor = two + T::one();

    // divisor <= value / divisor is divisor² <= value without the overflow
    while divisor <= value / divisor {
        if (value % divisor).is_zero() {
            return false;
        }

        divisor = divisor + two;
    }

    true
}
